// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod csv_store;
pub mod model_store;
pub mod ors_client;
