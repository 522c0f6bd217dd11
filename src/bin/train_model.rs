// Model training entry point
use std::sync::Arc;

use ev_route_predictor::application::dataset_store::DatasetStore;
use ev_route_predictor::application::trainer;
use ev_route_predictor::infrastructure::config::load_config;
use ev_route_predictor::infrastructure::csv_store::CsvDatasetStore;
use ev_route_predictor::infrastructure::model_store::save_model;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = load_config()?;

    let store: Arc<dyn DatasetStore> = Arc::new(CsvDatasetStore::new(&config.dataset.path));
    let rows = store.load().await?;
    println!("Loaded {} rows from {}", rows.len(), config.dataset.path);

    let trained = trainer::fit(&rows)?;
    for report in &trained.validation {
        println!("{}: held-out MAE {:.3}", report.name, report.held_out_mae);
    }

    save_model(&config.model.path, &trained.model)?;
    println!("Model saved to {}", config.model.path);

    Ok(())
}
