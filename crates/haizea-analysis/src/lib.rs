//! haizea-analysis
//!
//! The screening engine: percentile-band classification, per-milestone
//! clinical interpretation, and whole-session aggregation. Every function
//! here is pure — identical inputs produce byte-identical outputs, so a
//! client running the analysis locally and a server running it remotely can
//! never disagree.

pub mod aggregate;
pub mod classifier;
pub mod error;
pub mod interpreter;

pub use aggregate::{AggregateAnalysis, aggregate};
pub use classifier::{Band, classify_age};
pub use error::AnalysisError;
pub use interpreter::{Interpretation, Status, interpret};
