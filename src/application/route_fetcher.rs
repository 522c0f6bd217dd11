// Fetches both route variants for one origin/destination pair
use crate::application::routing_provider::{FetchError, RouteCollection, RoutingProvider};
use crate::application::waypoints::WaypointPlanner;
use crate::domain::geo::RoutePair;
use crate::domain::route::RouteSummary;
use std::sync::Arc;

/// Raw provider routes for one pair.
#[derive(Debug, Clone)]
pub struct RoutePairRoutes {
    pub shortest: RouteCollection,
    pub ev_route: RouteCollection,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutePairSummaries {
    pub shortest: RouteSummary,
    pub ev_route: RouteSummary,
}

impl RoutePairRoutes {
    pub fn summaries(&self) -> Result<RoutePairSummaries, FetchError> {
        Ok(RoutePairSummaries {
            shortest: self.shortest.summary()?,
            ev_route: self.ev_route.summary()?,
        })
    }
}

#[derive(Clone)]
pub struct RouteFetcher {
    provider: Arc<dyn RoutingProvider>,
    planner: Arc<dyn WaypointPlanner>,
}

impl RouteFetcher {
    pub fn new(provider: Arc<dyn RoutingProvider>, planner: Arc<dyn WaypointPlanner>) -> Self {
        Self { provider, planner }
    }

    /// Two provider calls: the direct route, then the EV-aware route through
    /// whatever stops the planner selects.
    pub async fn fetch(&self, pair: &RoutePair) -> Result<RoutePairRoutes, FetchError> {
        let shortest = self.provider.route(&[pair.start, pair.end]).await?;

        let mut ev_waypoints = vec![pair.start];
        ev_waypoints.extend(self.planner.plan_stops(pair));
        ev_waypoints.push(pair.end);
        let ev_route = self.provider.route(&ev_waypoints).await?;

        Ok(RoutePairRoutes { shortest, ev_route })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::waypoints::DirectPlanner;
    use crate::domain::geo::Coordinate;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingProvider {
        calls: Mutex<Vec<Vec<Coordinate>>>,
    }

    #[async_trait]
    impl RoutingProvider for RecordingProvider {
        async fn route(&self, waypoints: &[Coordinate]) -> Result<RouteCollection, FetchError> {
            self.calls.lock().unwrap().push(waypoints.to_vec());
            Ok(serde_json::from_value(serde_json::json!({
                "features": [{ "properties": { "summary": { "distance": 5000.0, "duration": 600.0 } } }]
            }))
            .unwrap())
        }
    }

    #[tokio::test]
    async fn test_fetch_issues_shortest_then_ev_call() {
        let provider = Arc::new(RecordingProvider {
            calls: Mutex::new(Vec::new()),
        });
        let fetcher = RouteFetcher::new(provider.clone(), Arc::new(DirectPlanner));
        let pair = RoutePair::new(Coordinate::new(13.03, 80.24), Coordinate::new(13.05, 80.26));

        let routes = fetcher.fetch(&pair).await.unwrap();
        let summaries = routes.summaries().unwrap();
        assert_eq!(summaries.shortest.distance_km, 5.0);
        assert_eq!(summaries.ev_route.eta_min, 10.0);

        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        // DirectPlanner adds no stops, so both calls carry the same waypoints.
        assert_eq!(calls[0], calls[1]);
        assert_eq!(calls[0], vec![pair.start, pair.end]);
    }
}
