use anyhow::{Context, Result};

use crate::ranking::scoring::Perturbation;

/// Application configuration loaded from environment variables.
/// Everything has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Whether the presentation-variety score perturbation is applied.
    pub perturbation_enabled: bool,
    /// Optional fixed seed, for reproducible rankings across calls.
    pub perturbation_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            perturbation_enabled: std::env::var("SCORE_PERTURBATION")
                .map(|v| !matches!(v.to_lowercase().as_str(), "off" | "false" | "0"))
                .unwrap_or(true),
            perturbation_seed: std::env::var("SCORE_PERTURBATION_SEED")
                .ok()
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("SCORE_PERTURBATION_SEED must be an unsigned integer")?,
        })
    }

    /// Perturbation mode derived from the env settings. A seed only takes
    /// effect while perturbation is enabled.
    pub fn perturbation(&self) -> Perturbation {
        if !self.perturbation_enabled {
            Perturbation::Disabled
        } else if let Some(seed) = self.perturbation_seed {
            Perturbation::Seeded(seed)
        } else {
            Perturbation::FromEntropy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(enabled: bool, seed: Option<u64>) -> Config {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            perturbation_enabled: enabled,
            perturbation_seed: seed,
        }
    }

    #[test]
    fn test_perturbation_mode_selection() {
        assert!(matches!(
            make_config(false, None).perturbation(),
            Perturbation::Disabled
        ));
        assert!(matches!(
            make_config(false, Some(4)).perturbation(),
            Perturbation::Disabled
        ));
        assert!(matches!(
            make_config(true, Some(4)).perturbation(),
            Perturbation::Seeded(4)
        ));
        assert!(matches!(
            make_config(true, None).perturbation(),
            Perturbation::FromEntropy
        ));
    }
}
