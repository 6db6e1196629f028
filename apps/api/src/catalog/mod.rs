//! Symptom taxonomy and disease catalog, loaded once at startup and shared
//! read-only across handlers.

pub mod handlers;
pub mod search;
pub mod source;

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use crate::models::{Disease, Symptom, SymptomCategory};

pub use source::{load_catalog, source_for};

/// Shown in place of the checklist when the taxonomy could not be loaded.
pub const LOAD_FAILURE_NOTICE: &str =
    "Could not load symptoms. Please check the data source and ensure the server is running.";

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<SymptomCategory>,
    diseases: Vec<Disease>,
    /// symptom key → (category index, symptom index); first occurrence wins.
    index: HashMap<String, (usize, usize)>,
    load_errors: Vec<String>,
}

impl Catalog {
    pub fn new(categories: Vec<SymptomCategory>, diseases: Vec<Disease>) -> Self {
        let mut index = HashMap::new();
        for (ci, category) in categories.iter().enumerate() {
            for (si, symptom) in category.symptoms.iter().enumerate() {
                if index.contains_key(&symptom.key) {
                    warn!(
                        "Duplicate symptom key '{}' in category '{}' ignored for lookups",
                        symptom.key, category.system
                    );
                    continue;
                }
                index.insert(symptom.key.clone(), (ci, si));
            }
        }

        for disease in &diseases {
            if let Some(weights) = &disease.symptom_weights {
                for key in weights.keys() {
                    if !disease.declares(key) {
                        warn!(
                            "Disease '{}' weights undeclared symptom '{key}'; it will not count toward the total",
                            disease.name
                        );
                    }
                }
            }
        }

        Self {
            categories,
            diseases,
            index,
            load_errors: Vec::new(),
        }
    }

    pub(crate) fn with_load_errors(mut self, errors: Vec<String>) -> Self {
        self.load_errors = errors;
        self
    }

    pub fn categories(&self) -> &[SymptomCategory] {
        &self.categories
    }

    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    pub fn load_errors(&self) -> &[String] {
        &self.load_errors
    }

    pub fn symptom(&self, key: &str) -> Option<&Symptom> {
        let &(ci, si) = self.index.get(key)?;
        self.categories.get(ci)?.symptoms.get(si)
    }

    pub fn disease(&self, name: &str) -> Option<&Disease> {
        self.diseases.iter().find(|d| d.name == name)
    }

    pub fn symptom_count(&self) -> usize {
        self.categories.iter().map(|c| c.symptoms.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.symptom_count() == 0
    }

    /// User-facing notice for an unusable taxonomy, if any.
    pub fn notice(&self) -> Option<&'static str> {
        self.is_empty().then_some(LOAD_FAILURE_NOTICE)
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            categories: self.categories.len(),
            symptoms: self.symptom_count(),
            diseases: self.diseases.len(),
            load_errors: self.load_errors.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub categories: usize,
    pub symptoms: usize,
    pub diseases: usize,
    pub load_errors: usize,
}
