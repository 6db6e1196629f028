use serde::Serialize;

use crate::catalog::Catalog;

/// A selected symptom serious enough to stop scoring and direct the user to care.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RedFlag {
    pub key: String,
    pub label: String,
    pub criticality: i64,
}

/// Returns the first selected symptom, in selection order, at or above the
/// red-flag criticality. Keys missing from the taxonomy are skipped.
pub fn evaluate_red_flag<S: AsRef<str>>(selected: &[S], catalog: &Catalog) -> Option<RedFlag> {
    selected
        .iter()
        .filter_map(|key| catalog.symptom(key.as_ref()))
        .find(|symptom| symptom.is_red_flag())
        .map(|symptom| RedFlag {
            key: symptom.key.clone(),
            label: symptom.label.clone(),
            criticality: symptom.criticality,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_catalog;

    #[test]
    fn test_no_red_flag_for_mild_symptoms() {
        let catalog = sample_catalog();
        assert!(evaluate_red_flag(&["cough", "fever"], &catalog).is_none());
    }

    #[test]
    fn test_chest_pain_triggers_regardless_of_other_selections() {
        let catalog = sample_catalog();
        let flag = evaluate_red_flag(&["cough", "chest_pain", "fever"], &catalog).unwrap();
        assert_eq!(flag.key, "chest_pain");
        assert_eq!(flag.label, "Chest pain");
        assert_eq!(flag.criticality, 5);
    }

    #[test]
    fn test_first_selected_red_flag_is_reported() {
        let catalog = sample_catalog();
        let flag = evaluate_red_flag(&["shortness_of_breath", "chest_pain"], &catalog).unwrap();
        assert_eq!(flag.key, "shortness_of_breath");

        let flag = evaluate_red_flag(&["chest_pain", "shortness_of_breath"], &catalog).unwrap();
        assert_eq!(flag.key, "chest_pain");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let catalog = sample_catalog();
        assert!(evaluate_red_flag(&["not_a_symptom"], &catalog).is_none());
    }
}
