use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Risk factors the page used when no profile was collected from the user.
pub const DEFAULT_RISK_FACTORS: &[&str] = &["age_over_40", "is_smoker", "family_history_hypertension"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Disease {
    #[serde(rename = "disease")]
    pub name: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptom_weights: Option<HashMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_factors: Option<HashMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Suggestions>,
}

impl Disease {
    pub fn declares(&self, symptom_key: &str) -> bool {
        self.symptoms.iter().any(|k| k == symptom_key)
    }
}

/// Human-readable guidance shown on a result card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestions {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub remedies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medication_guidance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_otc: Option<Vec<String>>,
    #[serde(default, rename = "foodToAvoid", skip_serializing_if = "Option::is_none")]
    pub foods_to_avoid: Option<String>,
    #[serde(default, rename = "whenToSeeDoctor")]
    pub when_to_see_doctor: String,
}

/// Caller-supplied risk-factor flags. Ordered so that weight sums are deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RiskProfile(pub BTreeMap<String, bool>);

impl RiskProfile {
    pub fn from_active<I, S>(factors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(factors.into_iter().map(|f| (f.into(), true)).collect())
    }

    /// Names of factors set to true.
    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, on)| **on)
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_without_optional_fields() {
        let raw = json!({
            "disease": "Common Cold",
            "symptoms": ["cough", "sneezing"],
            "suggestions": {
                "description": "A viral infection.",
                "remedies": ["Rest"],
                "whenToSeeDoctor": "If symptoms last over 10 days."
            }
        });
        let disease: Disease = serde_json::from_value(raw).unwrap();
        assert_eq!(disease.name, "Common Cold");
        assert!(disease.symptom_weights.is_none());
        assert!(disease.risk_factors.is_none());
        let s = disease.suggestions.unwrap();
        assert!(s.medication_guidance.is_none());
        assert!(s.common_otc.is_none());
        assert!(s.foods_to_avoid.is_none());
    }

    #[test]
    fn test_declares_checks_symptom_list() {
        let disease: Disease = serde_json::from_value(json!({
            "disease": "Flu",
            "symptoms": ["fever"]
        }))
        .unwrap();
        assert!(disease.declares("fever"));
        assert!(!disease.declares("rash"));
    }

    #[test]
    fn test_risk_profile_active_skips_false_flags() {
        let profile: RiskProfile =
            serde_json::from_value(json!({ "is_smoker": true, "age_over_40": false })).unwrap();
        let active: Vec<&str> = profile.active().collect();
        assert_eq!(active, vec!["is_smoker"]);
    }

    #[test]
    fn test_default_factor_list_matches_profile_builder() {
        let profile = RiskProfile::from_active(DEFAULT_RISK_FACTORS.iter().copied());
        assert_eq!(profile.active().count(), 3);
    }
}
