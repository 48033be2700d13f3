use shared_kernel::errors::Result;
use crate::domain::entities::Requester;
use crate::domain::repositories::SubscriptionRepository;

/// Statut premium du demandeur, rattaché tel quel à chaque candidat de la page.
///
/// Sans abonnement enregistré, on retombe sur le drapeau porté par la requête.
pub(crate) async fn resolve_requester_premium(
    subscriptions: &dyn SubscriptionRepository,
    requester: &Requester,
) -> Result<bool> {
    let status = subscriptions.fetch_status(requester.id()).await?;

    Ok(status.map_or_else(|| requester.is_premium_subscriber(), |s| s.is_premium()))
}
