//! haizea-core
//!
//! Pure domain types for a Haizea-Llevant screening session: milestones,
//! percentile norms, outcomes, and the evaluation session itself.
//! No I/O — this is the shared vocabulary of the Haizea workspace.

pub mod error;
pub mod models;
