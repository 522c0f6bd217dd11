// Dataset collection entry point
use std::sync::Arc;

use ev_route_predictor::application::dataset_builder::{BuildError, DatasetBuilder};
use ev_route_predictor::application::route_fetcher::RouteFetcher;
use ev_route_predictor::application::sampler::GeoSampler;
use ev_route_predictor::application::waypoints::DirectPlanner;
use ev_route_predictor::infrastructure::config::load_config;
use ev_route_predictor::infrastructure::csv_store::CsvDatasetStore;
use ev_route_predictor::infrastructure::ors_client::OrsClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = load_config()?;

    let provider = Arc::new(OrsClient::new(
        config.provider.base_url.clone(),
        config.provider.api_key.clone(),
        config.provider.timeout(),
    )?);
    let fetcher = RouteFetcher::new(provider, Arc::new(DirectPlanner));
    let sampler = GeoSampler::new(config.sampling.bounds());
    let store = Arc::new(CsvDatasetStore::new(&config.dataset.path));

    let mut builder =
        DatasetBuilder::new(sampler, fetcher, store, config.sampling.builder_settings());

    match builder.build().await {
        Ok(report) => {
            println!(
                "Collected {} rows in {} attempts, saved to {}",
                report.rows, report.attempts, config.dataset.path
            );
            Ok(())
        }
        // An empty run is a reportable outcome, not a crash.
        Err(BuildError::NoSamples { attempts }) => {
            eprintln!("No valid samples collected after {} attempts", attempts);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
