// OpenRouteService directions client
use crate::application::routing_provider::{FetchError, RouteCollection, RoutingProvider};
use crate::domain::geo::Coordinate;
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct OrsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OrsClient {
    /// The timeout bounds every provider call; a hung request fails as
    /// Transport instead of wedging the caller.
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }
}

#[async_trait]
impl RoutingProvider for OrsClient {
    async fn route(&self, waypoints: &[Coordinate]) -> Result<RouteCollection, FetchError> {
        let coordinates: Vec<[f64; 2]> = waypoints.iter().map(Coordinate::to_lng_lat).collect();
        let body = json!({ "coordinates": coordinates });

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| FetchError::Transport(format!("request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Transport(format!(
                "provider returned {status}: {body}"
            )));
        }

        response
            .json::<RouteCollection>()
            .await
            .map_err(|err| FetchError::Transport(format!("invalid response body: {err}")))
    }
}
