// backend/services/search/search-cli/src/main.rs

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

// Application
use search::application::search_users::{SearchUsersQuery, SearchUsersUseCase};
use search::config::SearchConfig;
use search::domain::entities::Requester;

// Infrastructure
use search::domain::repositories::SearchRepositories;
use search::infrastructure::postgres::utils::run_search_migrations;

// Shared Kernel
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::infrastructure::postgres::{create_postgres_pool, DbConfig};

/// Recherche d'utilisateurs en ligne de commande (sortie JSON sur stdout)
#[derive(Debug, Parser)]
#[command(name = "search-cli", version, about)]
struct Args {
    /// Terme brut, tel que saisi par l'utilisateur
    term: String,

    /// Identifiant du demandeur
    #[arg(long, env = "SEARCH_REQUESTER_ID")]
    requester: Uuid,

    /// Statut premium annoncé par le client (repli si aucun abonnement enregistré)
    #[arg(long)]
    premium: bool,

    /// Répertoire contenant rules.json et les tables de poids
    #[arg(long, env = "SEARCH_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Applique le schéma avant la recherche
    #[arg(long)]
    migrate: bool,

    /// Sortie JSON indentée
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs sur stderr : stdout reste réservé au JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // --- 1. CONFIGURATION ---
    let config = match &args.config_dir {
        Some(dir) => SearchConfig::load_from_dir(dir)?,
        None => SearchConfig::from_env()?,
    };

    // --- 2. INFRASTRUCTURE ---
    let mut db_config = DbConfig::from_env()?;
    db_config.max_connections = db_config.max_connections.min(10);
    let pool = create_postgres_pool(&db_config).await?;

    if args.migrate {
        run_search_migrations(&pool).await?;
    }
    tracing::info!(max_connections = db_config.max_connections, "🐘 Postgres pool ready");

    // --- 3. USE CASE ---
    let use_case = SearchUsersUseCase::new(SearchRepositories::postgres(pool), Arc::new(config));
    let requester = Requester::new(AccountId::try_new(args.requester.to_string())?, args.premium);

    let outcome = use_case
        .execute(SearchUsersQuery {
            search_term: args.term,
            requester,
        })
        .await?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    println!("{output}");

    Ok(())
}
