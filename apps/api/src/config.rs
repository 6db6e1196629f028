use anyhow::{Context, Result};

use crate::models::disease::DEFAULT_RISK_FACTORS;
use crate::models::RiskProfile;

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// File path or http(s) URL of the symptom taxonomy.
    pub symptoms_source: String,
    /// File path or http(s) URL of the disease catalog.
    pub diseases_source: String,
    /// Profile used when a check request carries no risk factors.
    pub default_risk_profile: RiskProfile,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            symptoms_source: env_or("SYMPTOMS_SOURCE", "data/symptoms.json"),
            diseases_source: env_or("DISEASES_SOURCE", "data/diseases.json"),
            default_risk_profile: std::env::var("DEFAULT_RISK_FACTORS")
                .map(|raw| parse_risk_factors(&raw))
                .unwrap_or_else(|_| RiskProfile::from_active(DEFAULT_RISK_FACTORS.iter().copied())),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Comma-separated factor names, each marked active. Blank entries are skipped.
fn parse_risk_factors(raw: &str) -> RiskProfile {
    RiskProfile::from_active(raw.split(',').map(str::trim).filter(|f| !f.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_risk_factors_trims_and_skips_blanks() {
        let profile = parse_risk_factors(" is_smoker, ,age_over_40,");
        let active: Vec<&str> = profile.active().collect();
        assert_eq!(active, vec!["age_over_40", "is_smoker"]);
    }

    #[test]
    fn test_empty_factor_list_is_empty_profile() {
        assert_eq!(parse_risk_factors(""), RiskProfile::default());
    }
}
