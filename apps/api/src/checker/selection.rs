#![allow(dead_code)]

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Catalog;

/// Explicit selection state: which symptom keys are checked, in the order they
/// were checked, plus any sub-option specifier chosen for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    keys: Vec<String>,
    specifiers: BTreeMap<String, String>,
}

/// One entry of the selected-symptom tag bar.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SymptomTag {
    pub key: String,
    pub label: String,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds state from submitted keys, dropping repeats but keeping first-seen order.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self::new();
        for key in keys {
            state.select(key);
        }
        state
    }

    /// Returns false if the key was already selected.
    pub fn select(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.is_selected(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Removes the key and its specifier. Returns false if it was not selected.
    pub fn deselect(&mut self, key: &str) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        self.specifiers.remove(key);
        self.keys.len() != before
    }

    /// Flips the key; returns whether it is selected afterwards.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.deselect(key) {
            false
        } else {
            self.select(key)
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.specifiers.clear();
    }

    /// Records the chosen sub-option for a selected key. Ignored for unselected keys.
    pub fn specify(&mut self, key: &str, value: impl Into<String>) -> bool {
        if !self.is_selected(key) {
            return false;
        }
        self.specifiers.insert(key.to_string(), value.into());
        true
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn specifiers(&self) -> &BTreeMap<String, String> {
        &self.specifiers
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Tag bar contents for keys the catalog knows about.
    pub fn tags(&self, catalog: &Catalog) -> Vec<SymptomTag> {
        self.keys
            .iter()
            .filter_map(|key| {
                catalog.symptom(key).map(|s| SymptomTag {
                    key: s.key.clone(),
                    label: s.label.clone(),
                })
            })
            .collect()
    }
}

/// Form value for a sub-option label: lowercase with spaces as underscores.
pub fn sub_option_value(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_catalog;

    #[test]
    fn test_from_keys_dedupes_in_first_seen_order() {
        let state = SelectionState::from_keys(["cough", "fever", "cough"]);
        assert_eq!(state.keys(), ["cough", "fever"]);
    }

    #[test]
    fn test_deselect_drops_specifier() {
        let mut state = SelectionState::from_keys(["fever"]);
        assert!(state.specify("fever", "high_grade"));
        assert!(state.deselect("fever"));
        assert!(state.specifiers().is_empty());
        assert!(!state.deselect("fever"));
    }

    #[test]
    fn test_specify_requires_selection() {
        let mut state = SelectionState::new();
        assert!(!state.specify("fever", "low_grade"));
        assert!(state.specifiers().is_empty());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut state = SelectionState::new();
        assert!(state.toggle("cough"));
        assert!(state.is_selected("cough"));
        assert!(!state.toggle("cough"));
        assert!(state.is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = SelectionState::from_keys(["fever", "cough"]);
        state.specify("fever", "low_grade");
        state.clear();
        assert!(state.is_empty());
        assert!(state.specifiers().is_empty());
    }

    #[test]
    fn test_tags_skip_unknown_keys() {
        let catalog = sample_catalog();
        let state = SelectionState::from_keys(["cough", "unknown", "fever"]);
        let labels: Vec<String> = state.tags(&catalog).into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["Cough", "Fever"]);
    }

    #[test]
    fn test_sub_option_value_slug() {
        assert_eq!(sub_option_value("High grade fever"), "high_grade_fever");
    }
}
