// Route summaries and training samples
use crate::domain::geo::RoutePair;
use serde::{Deserialize, Serialize};

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Normalized route metrics in kilometres and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance_km: f64,
    pub eta_min: f64,
}

impl RouteSummary {
    /// Convert provider units (metres, seconds) to km/minutes, rounded to
    /// 2 decimal places.
    pub fn from_provider_units(distance_m: f64, duration_s: f64) -> Self {
        Self {
            distance_km: round2(distance_m / 1000.0),
            eta_min: round2(duration_s / 60.0),
        }
    }
}

/// One labeled training example. Field order is the dataset column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRow {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub shortest_distance_km: f64,
    pub shortest_eta_min: f64,
    pub ev_route_distance_km: f64,
    pub ev_route_eta_min: f64,
}

impl SampleRow {
    pub fn new(pair: &RoutePair, shortest: RouteSummary, ev_route: RouteSummary) -> Self {
        Self {
            start_lat: pair.start.lat,
            start_lng: pair.start.lng,
            end_lat: pair.end.lat,
            end_lng: pair.end.lng,
            shortest_distance_km: shortest.distance_km,
            shortest_eta_min: shortest.eta_min,
            ev_route_distance_km: ev_route.distance_km,
            ev_route_eta_min: ev_route.eta_min,
        }
    }

    pub fn features(&self) -> [f64; 4] {
        [self.start_lat, self.start_lng, self.end_lat, self.end_lng]
    }

    /// Regression targets: shortest ETA, EV ETA, EV distance.
    pub fn targets(&self) -> [f64; 3] {
        [
            self.shortest_eta_min,
            self.ev_route_eta_min,
            self.ev_route_distance_km,
        ]
    }
}
