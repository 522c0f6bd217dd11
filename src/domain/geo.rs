// Geographic primitives
use serde::{Deserialize, Serialize};

/// Round a coordinate component to 6 decimal places (~10cm of precision).
pub fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// The routing provider expects [lng, lat] order on the wire.
    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    pub fn rounded(&self) -> Self {
        Self {
            lat: round6(self.lat),
            lng: round6(self.lng),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePair {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl RoutePair {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// True when start and end collapse to the same point after rounding
    /// to 6 decimal places.
    pub fn is_degenerate(&self) -> bool {
        self.start.rounded() == self.end.rounded()
    }

    /// Model input order: start_lat, start_lng, end_lat, end_lng.
    pub fn features(&self) -> [f64; 4] {
        [self.start.lat, self.start.lng, self.end.lat, self.end.lng]
    }
}
