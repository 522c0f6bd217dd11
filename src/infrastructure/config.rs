use crate::application::dataset_builder::BuilderSettings;
use crate::application::sampler::BoundingBox;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub sampling: SamplingConfig,
    pub dataset: DatasetConfig,
    pub model: ModelConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    /// Supplied through the environment (EVR__PROVIDER__API_KEY), never the
    /// config file.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SamplingConfig {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
    pub target_samples: usize,
    pub max_attempts: usize,
    pub pacing_secs: f64,
    pub cooldown_secs: f64,
    pub cooldown_every: usize,
}

impl SamplingConfig {
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox {
            lat_min: self.lat_min,
            lat_max: self.lat_max,
            lng_min: self.lng_min,
            lng_max: self.lng_max,
        }
    }

    pub fn builder_settings(&self) -> BuilderSettings {
        BuilderSettings {
            target_samples: self.target_samples,
            max_attempts: self.max_attempts,
            pacing: Duration::from_secs_f64(self.pacing_secs),
            cooldown: Duration::from_secs_f64(self.cooldown_secs),
            cooldown_every: self.cooldown_every,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind: String,
}

pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/service"))
        .add_source(
            config::Environment::with_prefix("EVR")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampling() -> SamplingConfig {
        SamplingConfig {
            lat_min: 13.02,
            lat_max: 13.06,
            lng_min: 80.23,
            lng_max: 80.27,
            target_samples: 100,
            max_attempts: 200,
            pacing_secs: 1.5,
            cooldown_secs: 10.0,
            cooldown_every: 25,
        }
    }

    #[test]
    fn test_builder_settings_conversion() {
        let settings = sampling().builder_settings();
        assert_eq!(settings.target_samples, 100);
        assert_eq!(settings.max_attempts, 200);
        assert_eq!(settings.pacing, Duration::from_millis(1500));
        assert_eq!(settings.cooldown, Duration::from_secs(10));
        assert_eq!(settings.cooldown_every, 25);
    }

    #[test]
    fn test_bounds_conversion() {
        let bounds = sampling().bounds();
        assert_eq!(bounds.lat_min, 13.02);
        assert_eq!(bounds.lat_max, 13.06);
        assert_eq!(bounds.lng_min, 80.23);
        assert_eq!(bounds.lng_max, 80.27);
    }
}
