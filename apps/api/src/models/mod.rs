pub mod disease;
pub mod symptom;

pub use disease::{Disease, RiskProfile};
pub use symptom::{Symptom, SymptomCategory};
