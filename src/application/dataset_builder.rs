// Dataset collection loop - sampling with rejection under provider pacing
use crate::application::dataset_store::DatasetStore;
use crate::application::route_fetcher::RouteFetcher;
use crate::application::routing_provider::FetchError;
use crate::application::sampler::GeoSampler;
use crate::domain::route::SampleRow;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy)]
pub struct BuilderSettings {
    pub target_samples: usize,
    pub max_attempts: usize,
    /// Delay after every provider attempt.
    pub pacing: Duration,
    /// Longer delay applied every `cooldown_every` attempts.
    pub cooldown: Duration,
    pub cooldown_every: usize,
}

#[derive(Debug, Error)]
pub enum BuildError {
    /// Every attempt was rejected or failed; nothing to persist. Terminal
    /// for the run, not a process fault.
    #[error("no valid samples collected after {attempts} attempts")]
    NoSamples { attempts: usize },
    #[error("failed to persist dataset: {0}")]
    Persist(#[source] anyhow::Error),
}

#[derive(Debug, Clone, Copy)]
pub struct BuildReport {
    pub rows: usize,
    pub attempts: usize,
}

/// Drives sampler + fetcher until enough rows are collected or the attempt
/// limit is reached. Transient provider failures never abort the run; a
/// partial dataset is a valid outcome.
pub struct DatasetBuilder<R: Rng> {
    sampler: GeoSampler<R>,
    fetcher: RouteFetcher,
    store: Arc<dyn DatasetStore>,
    settings: BuilderSettings,
}

impl<R: Rng> DatasetBuilder<R> {
    pub fn new(
        sampler: GeoSampler<R>,
        fetcher: RouteFetcher,
        store: Arc<dyn DatasetStore>,
        settings: BuilderSettings,
    ) -> Self {
        Self {
            sampler,
            fetcher,
            store,
            settings,
        }
    }

    pub async fn build(&mut self) -> Result<BuildReport, BuildError> {
        let mut rows: Vec<SampleRow> = Vec::new();
        let mut attempts = 0usize;

        while rows.len() < self.settings.target_samples && attempts < self.settings.max_attempts {
            attempts += 1;

            let pair = self.sampler.sample();
            if pair.is_degenerate() {
                tracing::debug!(attempt = attempts, "degenerate pair sampled, skipping");
                continue;
            }

            let outcome = match self.fetcher.fetch(&pair).await {
                Ok(routes) => routes.summaries(),
                Err(err) => Err(err),
            };

            match outcome {
                Ok(summaries) => {
                    rows.push(SampleRow::new(&pair, summaries.shortest, summaries.ev_route));
                    tracing::info!(
                        row = rows.len(),
                        attempt = attempts,
                        "sample added"
                    );
                }
                Err(FetchError::IncompleteData) => {
                    tracing::warn!(attempt = attempts, "incomplete route data, skipping");
                }
                Err(err) => {
                    tracing::warn!(attempt = attempts, error = %err, "route fetch failed");
                }
            }

            tokio::time::sleep(self.settings.pacing).await;

            if self.settings.cooldown_every > 0 && attempts % self.settings.cooldown_every == 0 {
                tracing::info!(
                    attempt = attempts,
                    "cooling down to avoid provider rate limits"
                );
                tokio::time::sleep(self.settings.cooldown).await;
            }
        }

        if rows.is_empty() {
            return Err(BuildError::NoSamples { attempts });
        }

        self.store.save(&rows).await.map_err(BuildError::Persist)?;
        let report = BuildReport {
            rows: rows.len(),
            attempts,
        };
        tracing::info!(rows = report.rows, attempts = report.attempts, "dataset persisted");
        Ok(report)
    }
}
