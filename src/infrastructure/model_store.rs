// JSON model artifact persistence
use crate::domain::model::RouteModel;
use anyhow::Context;
use std::path::Path;

pub fn save_model(path: impl AsRef<Path>, model: &RouteModel) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if parent != Path::new("") {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let contents = serde_json::to_string_pretty(model)
        .context("failed to serialize model artifact")?;
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write model artifact {}", path.display()))?;
    Ok(())
}

pub fn load_model(path: impl AsRef<Path>) -> anyhow::Result<RouteModel> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read model artifact {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("corrupt model artifact {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TargetFit;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}_{}.json", name, std::process::id()))
    }

    fn model() -> RouteModel {
        let fit = |name: &str| TargetFit {
            name: name.to_string(),
            coefficients: vec![1.0, -2.0, 0.5, 3.0],
            intercept: 4.2,
        };
        RouteModel {
            shortest_eta_min: fit("shortest_eta_min"),
            ev_route_eta_min: fit("ev_route_eta_min"),
            ev_route_distance_km: fit("ev_route_distance_km"),
        }
    }

    #[test]
    fn test_save_then_load_round_trips_model() {
        let path = temp_path("ev_route_model_round_trip");
        save_model(&path, &model()).unwrap();

        let loaded = load_model(&path).unwrap();
        assert_eq!(loaded.shortest_eta_min.coefficients, vec![1.0, -2.0, 0.5, 3.0]);
        assert_eq!(loaded.ev_route_distance_km.intercept, 4.2);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_artifact_fails() {
        assert!(load_model(temp_path("ev_route_model_missing")).is_err());
    }

    #[test]
    fn test_load_corrupt_artifact_fails() {
        let path = temp_path("ev_route_model_corrupt");
        std::fs::write(&path, "not json at all").unwrap();
        assert!(load_model(&path).is_err());
        std::fs::remove_file(&path).unwrap();
    }
}
