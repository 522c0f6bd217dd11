// HTTP request handlers
use crate::application::prediction_service::PredictError;
use crate::domain::geo::RoutePair;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full prediction: model estimate plus both live provider routes
pub async fn ev_prediction_full(
    State(state): State<Arc<AppState>>,
    Json(pair): Json<RoutePair>,
) -> Response {
    match state.prediction_service.predict(&pair).await {
        Ok(prediction) => Json(prediction).into_response(),
        Err(err @ PredictError::DegeneratePair) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
        Err(PredictError::Fetch(err)) => {
            tracing::error!(error = %err, "live route fetch failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "routing provider unavailable" })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::route_fetcher::RouteFetcher;
    use crate::application::routing_provider::{FetchError, RouteCollection, RoutingProvider};
    use crate::application::waypoints::DirectPlanner;
    use crate::application::prediction_service::PredictionService;
    use crate::domain::geo::Coordinate;
    use crate::domain::model::{RouteModel, TargetFit};
    use async_trait::async_trait;

    struct StaticProvider {
        fail: bool,
    }

    #[async_trait]
    impl RoutingProvider for StaticProvider {
        async fn route(&self, _waypoints: &[Coordinate]) -> Result<RouteCollection, FetchError> {
            if self.fail {
                return Err(FetchError::Transport("connection refused".to_string()));
            }
            Ok(serde_json::from_value(serde_json::json!({
                "features": [{ "properties": { "summary": { "distance": 5000.0, "duration": 600.0 } } }]
            }))
            .unwrap())
        }
    }

    fn state(fail: bool) -> Arc<AppState> {
        let fit = |name: &str| TargetFit {
            name: name.to_string(),
            coefficients: vec![0.0, 0.0, 0.0, 0.0],
            intercept: 10.0,
        };
        let model = RouteModel {
            shortest_eta_min: fit("shortest_eta_min"),
            ev_route_eta_min: fit("ev_route_eta_min"),
            ev_route_distance_km: fit("ev_route_distance_km"),
        };
        let fetcher = RouteFetcher::new(
            Arc::new(StaticProvider { fail }),
            Arc::new(DirectPlanner),
        );
        Arc::new(AppState {
            prediction_service: PredictionService::new(model, fetcher),
        })
    }

    fn pair() -> RoutePair {
        RoutePair::new(Coordinate::new(13.03, 80.24), Coordinate::new(13.05, 80.26))
    }

    #[tokio::test]
    async fn test_prediction_returns_ok() {
        let response = ev_prediction_full(State(state(false)), Json(pair())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_degenerate_pair_maps_to_unprocessable_entity() {
        let point = Coordinate::new(13.03, 80.24);
        let response =
            ev_prediction_full(State(state(false)), Json(RoutePair::new(point, point))).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_fetch_failure_maps_to_bad_gateway() {
        let response = ev_prediction_full(State(state(true)), Json(pair())).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
