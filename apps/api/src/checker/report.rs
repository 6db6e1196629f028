//! Turns a selection into the outcome the page rendered: a seek-care notice,
//! a no-match notice, or a short list of result cards.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::checker::attribution::{matched_symptoms, selected_details, SelectedSymptom};
use crate::checker::ranking::{present, rank, Framing, Presentation};
use crate::checker::red_flag::evaluate_red_flag;
use crate::checker::scoring::{DiseaseScore, DiseaseScorer};
use crate::checker::selection::SelectionState;
use crate::errors::AppError;
use crate::models::{Disease, RiskProfile};

pub const NO_SELECTION_MESSAGE: &str = "Please select at least one symptom.";

const RED_FLAG_TITLE: &str = "Immediate Action Recommended";
const NO_MATCH_TITLE: &str = "No Potential Matches Found";
const NO_MATCH_MESSAGE: &str = "Based on the selected symptoms, no potential conditions in our database are a strong match. This does not rule out a medical condition. Please consult a healthcare professional.";
const RESULTS_TITLE: &str = "Potential Matches";
const STRONG_MATCH_SUBTITLE: &str = "Based on your symptoms, here is a strong potential match to research further and discuss with a healthcare professional:";
const TOP_CANDIDATES_SUBTITLE: &str = "Here are the top potential matches for you to research further and discuss with a healthcare professional:";
const SCORE_NOTE: &str =
    "This score is based on the relevance of your matched symptoms and risk factors.";
const MEDICATION_DISCLAIMER: &str = "This is not a prescription. Always consult a doctor or pharmacist before taking any medication.";
const MEDICATION_FALLBACK: &str = "Please consult a professional.";
const FOODS_FALLBACK: &str = "No specific recommendations.";

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckOutcome {
    RedFlag {
        symptom_key: String,
        label: String,
        title: String,
        message: String,
    },
    NoMatch {
        title: String,
        message: String,
    },
    Matches {
        framing: Framing,
        title: String,
        subtitle: String,
        results: Vec<ResultCard>,
    },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResultCard {
    pub disease: String,
    /// Whole-percent score for display.
    pub score: u32,
    pub score_exact: f64,
    pub score_note: String,
    pub matched_symptoms: Vec<SelectedSymptom>,
    pub description: String,
    pub self_care: Vec<String>,
    pub medication_disclaimer: String,
    pub medication_guidance: String,
    pub common_otc: Vec<String>,
    pub foods_to_avoid: String,
    pub when_to_see_doctor: String,
}

/// Full pipeline for one submission. Rejects an empty selection before any scoring.
pub fn run_check(
    selection: &SelectionState,
    profile: &RiskProfile,
    catalog: &Catalog,
    scorer: &dyn DiseaseScorer,
) -> Result<CheckOutcome, AppError> {
    if selection.is_empty() {
        return Err(AppError::Validation(NO_SELECTION_MESSAGE.to_string()));
    }

    if let Some(flag) = evaluate_red_flag(selection.keys(), catalog) {
        info!(
            "Red flag '{}' (criticality {}) selected; scoring skipped",
            flag.key, flag.criticality
        );
        return Ok(CheckOutcome::RedFlag {
            message: red_flag_message(&flag.label),
            symptom_key: flag.key,
            label: flag.label,
            title: RED_FLAG_TITLE.to_string(),
        });
    }

    let scores = scorer.score_all(selection.keys(), profile, catalog.diseases());
    let ranked = rank(scores);
    debug!("{} of {} diseases above threshold", ranked.len(), catalog.diseases().len());

    let outcome = match present(ranked) {
        Presentation::NoMatch => CheckOutcome::NoMatch {
            title: NO_MATCH_TITLE.to_string(),
            message: NO_MATCH_MESSAGE.to_string(),
        },
        Presentation::Matches { framing, results } => {
            let selected = selected_details(selection.keys(), catalog);
            let cards = results
                .iter()
                .filter_map(|score| build_card(score, catalog, &selected))
                .collect();
            let subtitle = match framing {
                Framing::StrongMatch => STRONG_MATCH_SUBTITLE,
                Framing::TopCandidates => TOP_CANDIDATES_SUBTITLE,
            };
            CheckOutcome::Matches {
                framing,
                title: RESULTS_TITLE.to_string(),
                subtitle: subtitle.to_string(),
                results: cards,
            }
        }
    };

    Ok(outcome)
}

fn red_flag_message(label: &str) -> String {
    format!(
        "The symptom '{label}' can be associated with serious medical conditions. \
         This tool cannot provide a diagnosis. Please contact a healthcare professional \
         or emergency services immediately for guidance."
    )
}

/// A disease without a guidance bundle gets no card.
fn build_card(
    score: &DiseaseScore,
    catalog: &Catalog,
    selected: &[SelectedSymptom],
) -> Option<ResultCard> {
    let disease: &Disease = catalog.disease(&score.disease)?;
    let Some(suggestions) = &disease.suggestions else {
        warn!("Disease '{}' has no guidance; card skipped", disease.name);
        return None;
    };

    Some(ResultCard {
        disease: disease.name.clone(),
        score: display_score(score.score),
        score_exact: score.score,
        score_note: SCORE_NOTE.to_string(),
        matched_symptoms: matched_symptoms(selected, disease),
        description: suggestions.description.clone(),
        self_care: suggestions.remedies.clone(),
        medication_disclaimer: MEDICATION_DISCLAIMER.to_string(),
        medication_guidance: suggestions
            .medication_guidance
            .clone()
            .unwrap_or_else(|| MEDICATION_FALLBACK.to_string()),
        common_otc: suggestions.common_otc.clone().unwrap_or_default(),
        foods_to_avoid: suggestions
            .foods_to_avoid
            .clone()
            .unwrap_or_else(|| FOODS_FALLBACK.to_string()),
        when_to_see_doctor: suggestions.when_to_see_doctor.clone(),
    })
}

/// Scores are only rounded here, at render time.
pub fn display_score(score: f64) -> u32 {
    score.clamp(0.0, 100.0).round() as u32
}
