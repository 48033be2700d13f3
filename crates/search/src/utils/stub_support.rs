use shared_kernel::errors::{DomainError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Un stub ne doit pas paniquer parce qu'un autre test a paniqué en tenant le verrou
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Comportement commun des stubs : erreur injectée, latence simulée, compteurs d'appels
#[derive(Default)]
pub struct StubBehavior {
    pub error_to_return: Mutex<Option<DomainError>>,
    pub delay: Mutex<Option<Duration>>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl StubBehavior {
    pub fn fail_with(&self, error: DomainError) {
        *lock(&self.error_to_return) = Some(error);
    }

    pub fn delay_by(&self, delay: Duration) {
        *lock(&self.delay) = Some(delay);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Nombre maximal d'appels simultanés observés
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    /// Enveloppe un appel : compte, simule la latence, puis renvoie l'erreur injectée s'il y en a une
    pub(crate) async fn around<T>(&self, answer: impl FnOnce() -> T) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = *lock(&self.delay);
        match delay {
            Some(delay) => tokio::time::sleep(delay).await,
            None => tokio::task::yield_now().await,
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if let Some(err) = lock(&self.error_to_return).clone() {
            return Err(err);
        }
        Ok(answer())
    }
}
