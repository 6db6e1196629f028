use serde::{Deserialize, Serialize};

/// Criticality at or above which a selected symptom halts scoring.
pub const RED_FLAG_CRITICALITY: i64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Symptom {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub criticality: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, rename = "subOptions", skip_serializing_if = "Vec::is_empty")]
    pub sub_options: Vec<String>,
}

impl Symptom {
    pub fn is_red_flag(&self) -> bool {
        self.criticality >= RED_FLAG_CRITICALITY
    }
}

/// A named body-system grouping. Presentation only; carries no weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymptomCategory {
    pub system: String,
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
}
