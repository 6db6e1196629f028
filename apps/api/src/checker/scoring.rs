//! Disease scoring: a pluggable, trait-based scorer mapping a symptom selection
//! and risk profile to a 0–100 match score per disease.
//!
//! Default: `WeightedScorer` (linear weighted sum, deterministic).
//! `AppState` holds an `Arc<dyn DiseaseScorer>`.

use serde::Serialize;

use crate::models::{Disease, RiskProfile};

/// Points added per unit of matched risk-factor weight.
pub const RISK_POINTS_PER_WEIGHT: f64 = 5.0;
/// Ceiling on the risk-factor contribution, in percentage points.
pub const MAX_RISK_BOOST: f64 = 20.0;
pub const MAX_SCORE: f64 = 100.0;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Intermediate sums behind a score, kept for transparency and tests.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct ScoreBreakdown {
    pub total_possible_weight: f64,
    pub symptom_weight: f64,
    pub base_score: f64,
    pub risk_factor_weight: f64,
    pub risk_boost: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiseaseScore {
    pub disease: String,
    /// Unrounded, in [0, 100].
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching handlers.
pub trait DiseaseScorer: Send + Sync {
    fn score(&self, selected: &[String], profile: &RiskProfile, disease: &Disease) -> DiseaseScore;

    /// Scores every disease, preserving catalog order.
    fn score_all(
        &self,
        selected: &[String],
        profile: &RiskProfile,
        diseases: &[Disease],
    ) -> Vec<DiseaseScore> {
        diseases
            .iter()
            .map(|d| self.score(selected, profile, d))
            .collect()
    }

    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedScorer
// ────────────────────────────────────────────────────────────────────────────

/// Algorithm, per disease:
/// 1. total = Σ weights of the disease's declared symptoms that carry a weight
/// 2. matched = Σ weights of selected keys present in the weight map
/// 3. base = matched / total × 100 (0 when total is 0)
/// 4. boost = min(Σ weights of active, listed risk factors × 5, 20)
/// 5. score = min(base + boost, 100)
pub struct WeightedScorer;

impl DiseaseScorer for WeightedScorer {
    fn score(&self, selected: &[String], profile: &RiskProfile, disease: &Disease) -> DiseaseScore {
        let breakdown = compute_breakdown(selected, profile, disease);
        DiseaseScore {
            disease: disease.name.clone(),
            score: final_score(&breakdown),
            breakdown,
        }
    }

    fn backend(&self) -> &'static str {
        "weighted"
    }
}

fn compute_breakdown(selected: &[String], profile: &RiskProfile, disease: &Disease) -> ScoreBreakdown {
    let mut total_possible_weight = 0.0;
    let mut symptom_weight = 0.0;

    if let Some(weights) = &disease.symptom_weights {
        total_possible_weight = disease
            .symptoms
            .iter()
            .filter_map(|key| weights.get(key))
            .sum();
        symptom_weight = selected.iter().filter_map(|key| weights.get(key)).sum();
    }

    let risk_factor_weight: f64 = match &disease.risk_factors {
        Some(factors) => profile.active().filter_map(|f| factors.get(f)).sum(),
        None => 0.0,
    };

    ScoreBreakdown {
        total_possible_weight,
        symptom_weight,
        base_score: base_score(symptom_weight, total_possible_weight),
        risk_factor_weight,
        risk_boost: risk_boost(risk_factor_weight),
    }
}

/// Percentage of the disease's declared weight covered by the selection.
pub fn base_score(symptom_weight: f64, total_possible_weight: f64) -> f64 {
    if total_possible_weight > 0.0 {
        symptom_weight / total_possible_weight * 100.0
    } else {
        0.0
    }
}

pub fn risk_boost(risk_factor_weight: f64) -> f64 {
    (risk_factor_weight * RISK_POINTS_PER_WEIGHT).min(MAX_RISK_BOOST)
}

fn final_score(breakdown: &ScoreBreakdown) -> f64 {
    (breakdown.base_score + breakdown.risk_boost).clamp(0.0, MAX_SCORE)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
