use crate::catalog::Catalog;
use crate::models::SymptomCategory;

/// Filters the taxonomy by a case-insensitive substring of each symptom label.
/// Categories left with no visible symptom are dropped; an empty term keeps everything.
/// The term is not trimmed, so surrounding spaces are part of the match.
pub fn search(catalog: &Catalog, term: &str) -> Vec<SymptomCategory> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return catalog.categories().to_vec();
    }

    catalog
        .categories()
        .iter()
        .filter_map(|category| {
            let symptoms: Vec<_> = category
                .symptoms
                .iter()
                .filter(|s| s.label.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            (!symptoms.is_empty()).then(|| SymptomCategory {
                system: category.system.clone(),
                symptoms,
            })
        })
        .collect()
}
