// Application layer - use cases and abstraction seams
pub mod dataset_builder;
pub mod dataset_store;
pub mod prediction_service;
pub mod route_fetcher;
pub mod routing_provider;
pub mod sampler;
pub mod trainer;
pub mod waypoints;
