//! Sweets quiz core: catalog, question set, answer sessions and the scoring engine that
//! turns a completed session into a single recommendation.

pub mod config;
pub mod error;
pub mod quiz;
pub mod telemetry;
