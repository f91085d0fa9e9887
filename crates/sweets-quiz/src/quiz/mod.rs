//! Quiz core: the sweets catalog, the fixed question sequence, answer sessions, and the
//! scoring engine that maps a completed session onto one recommended sweet.

pub mod catalog;
pub mod domain;
pub mod questions;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogError};
pub use domain::{Answer, Item, ItemId, MatchDimension};
pub use questions::{Question, QuestionOption, QuestionSet, QuestionSetError};
pub use router::quiz_router;
pub use scoring::{
    FixedIndex, RandomSource, Recommendation, ScoreComponent, ScoredItem, ScoringEngine,
    ScoringWeights, SeededRandom, Selection, ThreadRandom,
};
pub use service::{Diagnosis, DiagnosisError, DiagnosisService};
pub use session::{QuizSession, SessionError, SessionStep};
