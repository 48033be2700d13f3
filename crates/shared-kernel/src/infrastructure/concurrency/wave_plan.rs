// crates/shared-kernel/src/infrastructure/concurrency/wave_plan.rs

//! # WavePlan - Fan-out borné par vagues
//!
//! Découpe une liste en lots contigus de `batch_size` éléments, puis exécute ces lots par
//! vagues d'au plus `max_concurrent_batches` lots simultanés. Une vague est entièrement
//! drainée avant que la suivante démarre.
//!
//! Deux niveaux de bornes :
//! - `batch_size` borne le nombre de requêtes émises par un lot,
//! - `max_concurrent_batches` borne le nombre de lots en vol.
//!
//! Le résultat conserve l'ordre d'entrée (lot par lot), jamais l'ordre de complétion.
//! Aucune coordination entre requêtes : chaque appelant applique sa propre borne.

use std::future::Future;
use std::ops::Range;
use futures::future::try_join_all;
use tokio_util::sync::CancellationToken;
use crate::errors::{DomainError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavePlan {
    batch_size: usize,
    max_concurrent_batches: usize,
}

impl WavePlan {
    /// Les valeurs nulles sont ramenées à 1 (un lot de 0 élément ne progresserait jamais)
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            max_concurrent_batches: max_concurrent_batches.max(1),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn max_concurrent_batches(&self) -> usize {
        self.max_concurrent_batches
    }

    /// Lots contigus, le dernier peut être plus court
    pub fn batches(&self, len: usize) -> Vec<Range<usize>> {
        (0..len)
            .step_by(self.batch_size)
            .map(|start| start..(start + self.batch_size).min(len))
            .collect()
    }

    pub fn waves(&self, len: usize) -> Vec<Vec<Range<usize>>> {
        self.batches(len)
            .chunks(self.max_concurrent_batches)
            .map(<[Range<usize>]>::to_vec)
            .collect()
    }

    /// Exécute `process_batch` sur chaque lot, vague par vague.
    ///
    /// La première erreur d'un lot fait échouer la vague et l'appel entier (pas de retry).
    /// Le jeton d'annulation est consulté avant chaque vague : les requêtes déjà en vol
    /// terminent, mais aucune nouvelle vague n'est lancée.
    pub async fn run<'a, T, R, F, Fut>(
        &self,
        operation: &'static str,
        items: &'a [T],
        cancel: &CancellationToken,
        process_batch: F,
    ) -> Result<Vec<R>>
    where
        F: Fn(&'a [T]) -> Fut,
        Fut: Future<Output = Result<Vec<R>>>,
    {
        let waves = self.waves(items.len());
        let total_waves = waves.len();
        let mut results = Vec::with_capacity(items.len());

        for (index, wave) in waves.into_iter().enumerate() {
            if cancel.is_cancelled() {
                tracing::debug!(operation, wave = index + 1, total_waves, "🛑 Wave skipped, operation cancelled");
                return Err(DomainError::Cancelled { operation });
            }

            tracing::debug!(
                operation,
                wave = index + 1,
                total_waves,
                batches = wave.len(),
                "🔄 Processing wave"
            );

            let outputs = try_join_all(
                wave.into_iter().map(|range| process_batch(&items[range])),
            )
            .await?;

            for batch in outputs {
                results.extend(batch);
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[test]
    fn test_layout_25_items_by_10_with_2_lanes() {
        let plan = WavePlan::new(10, 2);

        assert_eq!(plan.batches(25), vec![0..10, 10..20, 20..25]);
        assert_eq!(
            plan.waves(25),
            vec![vec![0..10, 10..20], vec![20..25]]
        );
    }

    #[test]
    fn test_layout_empty_and_degenerate_sizes() {
        assert!(WavePlan::new(10, 2).waves(0).is_empty());

        let plan = WavePlan::new(0, 0);
        assert_eq!(plan.batch_size(), 1);
        assert_eq!(plan.max_concurrent_batches(), 1);
        assert_eq!(plan.waves(2), vec![vec![0..1], vec![1..2]]);
    }

    #[tokio::test]
    async fn test_run_preserves_input_order_and_bounds_concurrency() {
        let plan = WavePlan::new(3, 2);
        let items: Vec<u64> = (0..10).collect();
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let results = plan
            .run("test", &items, &CancellationToken::new(), |batch| {
                let in_flight = in_flight.clone();
                let peak = peak.clone();
                async move {
                    let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    // Le premier élément du lot dort plus longtemps : inverse l'ordre de complétion
                    tokio::time::sleep(Duration::from_millis(20 - batch[0])).await;
                    in_flight.fetch_sub(1, Ordering::SeqCst);
                    Ok(batch.iter().map(|v| v * 10).collect::<Vec<_>>())
                }
            })
            .await
            .unwrap();

        assert_eq!(results, (0..10).map(|v| v * 10).collect::<Vec<_>>());
        assert!(peak.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn test_next_wave_starts_after_previous_is_drained() {
        let plan = WavePlan::new(1, 2);
        let items = vec![0u64, 1, 2];
        let events = Arc::new(Mutex::new(Vec::new()));

        plan.run("test", &items, &CancellationToken::new(), |batch| {
            let events = events.clone();
            let id = batch[0];
            async move {
                events.lock().unwrap().push(format!("start-{id}"));
                tokio::time::sleep(Duration::from_millis(5 * (id + 1))).await;
                events.lock().unwrap().push(format!("end-{id}"));
                Ok(vec![id])
            }
        })
        .await
        .unwrap();

        let events = events.lock().unwrap();
        let start_2 = events.iter().position(|e| e == "start-2").unwrap();
        let end_0 = events.iter().position(|e| e == "end-0").unwrap();
        let end_1 = events.iter().position(|e| e == "end-1").unwrap();
        assert!(start_2 > end_0 && start_2 > end_1);
    }

    #[tokio::test]
    async fn test_batch_error_aborts_the_run() {
        let plan = WavePlan::new(2, 2);
        let items = vec![1u64, 2, 3, 4, 5];
        let calls = AtomicUsize::new(0);

        let result: Result<Vec<u64>> = plan
            .run("test", &items, &CancellationToken::new(), |batch| {
                calls.fetch_add(1, Ordering::SeqCst);
                let fail = batch.contains(&3);
                async move {
                    if fail {
                        Err(DomainError::Infrastructure("db down".into()))
                    } else {
                        Ok(batch.to_vec())
                    }
                }
            })
            .await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
        // La seconde vague n'est jamais lancée
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_cancelled_token_stops_before_next_wave() {
        let plan = WavePlan::new(1, 1);
        let items = vec![1u64, 2];
        let cancel = CancellationToken::new();

        let result: Result<Vec<u64>> = plan
            .run("test", &items, &cancel, |batch| {
                // Annulation pendant la première vague
                cancel.cancel();
                let out = batch.to_vec();
                async move { Ok(out) }
            })
            .await;

        assert_eq!(result, Err(DomainError::Cancelled { operation: "test" }));
    }
}
