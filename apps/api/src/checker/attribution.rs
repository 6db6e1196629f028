use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::Disease;

/// A selected symptom resolved against the taxonomy.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectedSymptom {
    pub key: String,
    pub label: String,
}

/// Resolves the selection once per check, independent of any disease.
/// Keys missing from the taxonomy have no label to show and are dropped.
pub fn selected_details<S: AsRef<str>>(selected: &[S], catalog: &Catalog) -> Vec<SelectedSymptom> {
    selected
        .iter()
        .filter_map(|key| catalog.symptom(key.as_ref()))
        .map(|s| SelectedSymptom {
            key: s.key.clone(),
            label: s.label.clone(),
        })
        .collect()
}

/// Restricts the shared selection to the symptoms this disease declares.
pub fn matched_symptoms(selected: &[SelectedSymptom], disease: &Disease) -> Vec<SelectedSymptom> {
    selected
        .iter()
        .filter(|s| disease.declares(&s.key))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_catalog;

    #[test]
    fn test_details_follow_selection_order() {
        let catalog = sample_catalog();
        let details = selected_details(&["headache", "nope", "cough"], &catalog);
        let labels: Vec<&str> = details.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Headache", "Cough"]);
    }

    #[test]
    fn test_only_declared_symptoms_are_attributed() {
        let catalog = sample_catalog();
        let details = selected_details(&["fever", "sneezing", "cough"], &catalog);

        let cold = catalog.disease("Common Cold").unwrap();
        let keys: Vec<String> = matched_symptoms(&details, cold).into_iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["sneezing", "cough"]);

        let flu = catalog.disease("Influenza").unwrap();
        let keys: Vec<String> = matched_symptoms(&details, flu).into_iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["fever", "cough"]);
    }
}
