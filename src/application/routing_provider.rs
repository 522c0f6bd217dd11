// Routing provider seam and GeoJSON wire types
use crate::domain::geo::Coordinate;
use crate::domain::route::RouteSummary;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Network failure or non-2xx provider response.
    #[error("provider transport failure: {0}")]
    Transport(String),
    /// Well-formed response missing the expected route/feature/summary data.
    /// Common under sparse road coverage, so callers treat it as recoverable.
    #[error("provider returned incomplete route data")]
    IncompleteData,
}

/// GeoJSON feature collection as returned by the directions endpoint.
///
/// Only the fields the pipeline reads are typed; everything else is kept in
/// flattened maps so the raw provider object survives a round trip and can
/// be returned verbatim by the prediction endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteCollection {
    #[serde(default)]
    pub features: Vec<RouteFeature>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteFeature {
    #[serde(default)]
    pub properties: Option<RouteProperties>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteProperties {
    #[serde(default)]
    pub summary: Option<ProviderSummary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw provider units: metres and seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProviderSummary {
    pub distance: f64,
    pub duration: f64,
}

impl RouteCollection {
    /// Navigate features[0].properties.summary. Absence at any level is
    /// `IncompleteData`, not a panic.
    pub fn summary(&self) -> Result<RouteSummary, FetchError> {
        let summary = self
            .features
            .first()
            .and_then(|feature| feature.properties.as_ref())
            .and_then(|properties| properties.summary.as_ref())
            .ok_or(FetchError::IncompleteData)?;

        Ok(RouteSummary::from_provider_units(
            summary.distance,
            summary.duration,
        ))
    }
}

#[async_trait]
pub trait RoutingProvider: Send + Sync {
    /// Fetch one route through the given waypoints, in visiting order.
    async fn route(&self, waypoints: &[Coordinate]) -> Result<RouteCollection, FetchError>;
}
