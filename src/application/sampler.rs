// Random origin/destination sampling
use crate::domain::geo::{round6, Coordinate, RoutePair};
use rand::rngs::ThreadRng;
use rand::Rng;

#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

/// Draws uniformly random route pairs inside a bounding box.
pub struct GeoSampler<R: Rng> {
    bounds: BoundingBox,
    rng: R,
}

impl GeoSampler<ThreadRng> {
    pub fn new(bounds: BoundingBox) -> Self {
        Self {
            bounds,
            rng: rand::rng(),
        }
    }
}

impl<R: Rng> GeoSampler<R> {
    pub fn with_rng(bounds: BoundingBox, rng: R) -> Self {
        Self { bounds, rng }
    }

    fn point(&mut self) -> Coordinate {
        Coordinate::new(
            round6(self.rng.random_range(self.bounds.lat_min..=self.bounds.lat_max)),
            round6(self.rng.random_range(self.bounds.lng_min..=self.bounds.lng_max)),
        )
    }

    /// Degenerate pairs (start == end after rounding) are not filtered here;
    /// rejection and re-sampling is the caller's responsibility.
    pub fn sample(&mut self) -> RoutePair {
        RoutePair::new(self.point(), self.point())
    }
}
