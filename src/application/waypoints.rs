// EV waypoint planning seam
use crate::domain::geo::{Coordinate, RoutePair};

/// Chooses the intermediate stops inserted into the EV-aware route request.
///
/// Charging-station selection is not implemented yet. Implementations return
/// the stops to visit between start and end; the route fetcher splices them
/// into the waypoint list it sends to the provider.
pub trait WaypointPlanner: Send + Sync {
    fn plan_stops(&self, pair: &RoutePair) -> Vec<Coordinate>;
}

/// No intermediate stops: the EV-aware route is the shortest route.
///
/// This is the extension point for charging-station insertion. Replace with
/// a planner that picks stations along the corridor once station data is
/// wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectPlanner;

impl WaypointPlanner for DirectPlanner {
    fn plan_stops(&self, _pair: &RoutePair) -> Vec<Coordinate> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_planner_adds_no_stops() {
        let pair = RoutePair::new(Coordinate::new(13.03, 80.24), Coordinate::new(13.05, 80.26));
        assert!(DirectPlanner.plan_stops(&pair).is_empty());
    }
}
