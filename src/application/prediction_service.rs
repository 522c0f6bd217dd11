// Prediction use case - model estimate plus live provider routes
use crate::application::route_fetcher::RouteFetcher;
use crate::application::routing_provider::{FetchError, RouteCollection};
use crate::domain::geo::RoutePair;
use crate::domain::model::{MlPrediction, RouteModel};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    /// The response contract includes both live routes, so a fetch failure
    /// fails the whole request instead of degrading to model-only output.
    #[error("live route fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("start and end are the same point")]
    DegeneratePair,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub ml_prediction: MlPrediction,
    pub shortest_route: RouteCollection,
    pub ev_station_route: RouteCollection,
}

#[derive(Clone)]
pub struct PredictionService {
    model: Arc<RouteModel>,
    fetcher: RouteFetcher,
}

impl PredictionService {
    pub fn new(model: RouteModel, fetcher: RouteFetcher) -> Self {
        Self {
            model: Arc::new(model),
            fetcher,
        }
    }

    pub async fn predict(&self, pair: &RoutePair) -> Result<PredictionResponse, PredictError> {
        if pair.is_degenerate() {
            return Err(PredictError::DegeneratePair);
        }

        let ml_prediction = self.model.predict(pair.features());
        let routes = self.fetcher.fetch(pair).await?;

        Ok(PredictionResponse {
            ml_prediction,
            shortest_route: routes.shortest,
            ev_station_route: routes.ev_route,
        })
    }
}
