//! Scoring of extracted resume text

pub mod criteria;
pub mod matcher;
pub mod scorer;

pub use criteria::Criterion;
pub use scorer::{score, Scorer};
