// Selection → red-flag check → per-disease scoring → filter/rank → presentation.
// Everything below handlers is pure and synchronous; handlers own the HTTP boundary.

pub mod attribution;
pub mod handlers;
pub mod ranking;
pub mod red_flag;
pub mod report;
pub mod scoring;
pub mod selection;

pub use scoring::{DiseaseScorer, WeightedScorer};
