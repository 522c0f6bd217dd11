// Regression model artifact
use crate::domain::route::round2;
use serde::{Deserialize, Serialize};

/// One fitted least-squares target: coefficients . features + intercept.
///
/// Storing plain weights keeps the artifact independent of the training
/// library; inference is a dot product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetFit {
    pub name: String,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl TargetFit {
    pub fn predict(&self, features: &[f64; 4]) -> f64 {
        self.coefficients
            .iter()
            .zip(features)
            .map(|(c, x)| c * x)
            .sum::<f64>()
            + self.intercept
    }
}

/// Maps the 4 input coordinates to the 3 regression targets. Loaded once at
/// service startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteModel {
    pub shortest_eta_min: TargetFit,
    pub ev_route_eta_min: TargetFit,
    pub ev_route_distance_km: TargetFit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MlPrediction {
    pub predicted_shortest_eta_min: f64,
    pub predicted_ev_route_eta_min: f64,
    pub predicted_ev_route_distance_km: f64,
}

impl RouteModel {
    pub fn predict(&self, features: [f64; 4]) -> MlPrediction {
        MlPrediction {
            predicted_shortest_eta_min: round2(self.shortest_eta_min.predict(&features)),
            predicted_ev_route_eta_min: round2(self.ev_route_eta_min.predict(&features)),
            predicted_ev_route_distance_km: round2(self.ev_route_distance_km.predict(&features)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(name: &str, coefficients: Vec<f64>, intercept: f64) -> TargetFit {
        TargetFit {
            name: name.to_string(),
            coefficients,
            intercept,
        }
    }

    #[test]
    fn test_target_fit_is_a_dot_product() {
        let target = fit("shortest_eta_min", vec![1.0, 2.0, 3.0, 4.0], 0.5);
        let prediction = target.predict(&[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(prediction, 10.5);
    }

    #[test]
    fn test_model_prediction_is_rounded_to_2_decimals() {
        let model = RouteModel {
            shortest_eta_min: fit("shortest_eta_min", vec![0.0, 0.0, 0.0, 0.0], 10.123456),
            ev_route_eta_min: fit("ev_route_eta_min", vec![0.0, 0.0, 0.0, 0.0], 12.005),
            ev_route_distance_km: fit("ev_route_distance_km", vec![0.0, 0.0, 0.0, 0.0], 5.0),
        };

        let prediction = model.predict([13.03, 80.24, 13.05, 80.26]);
        assert_eq!(prediction.predicted_shortest_eta_min, 10.12);
        assert_eq!(prediction.predicted_ev_route_eta_min, 12.01);
        assert_eq!(prediction.predicted_ev_route_distance_km, 5.0);
    }

    #[test]
    fn test_artifact_round_trips_through_json() {
        let model = RouteModel {
            shortest_eta_min: fit("shortest_eta_min", vec![1.0, -2.0, 3.0, -4.0], 0.25),
            ev_route_eta_min: fit("ev_route_eta_min", vec![0.5, 0.5, 0.5, 0.5], 1.0),
            ev_route_distance_km: fit("ev_route_distance_km", vec![2.0, 2.0, 2.0, 2.0], -1.0),
        };

        let json = serde_json::to_string(&model).unwrap();
        let loaded: RouteModel = serde_json::from_str(&json).unwrap();
        assert_eq!(
            loaded.predict([1.0, 2.0, 3.0, 4.0]),
            model.predict([1.0, 2.0, 3.0, 4.0])
        );
    }
}
