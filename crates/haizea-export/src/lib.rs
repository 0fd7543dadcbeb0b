//! haizea-export
//!
//! Bundles a session with its recomputed analysis into a single versioned
//! document for download or archival. The analysis field is always
//! re-derivable from the embedded session alone; `verify` checks exactly
//! that, which makes every export auditable.

pub mod error;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use haizea_analysis::{AggregateAnalysis, aggregate};
use haizea_core::models::milestone::Milestone;
use haizea_core::models::session::Session;

use crate::error::ExportError;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExportRecord {
    pub format_version: u32,
    pub session: Session,
    pub analysis: AggregateAnalysis,
    pub exported_at: Timestamp,
}

/// Build the export bundle for a session, recomputing the analysis from
/// scratch. The `exported_at` stamp is the only clock used here.
pub fn export_session(session: &Session, dataset: &[Milestone]) -> ExportRecord {
    let analysis = aggregate(session, dataset);
    info!(
        session_id = %session.id,
        evaluated = analysis.evaluated,
        "session exported"
    );
    ExportRecord {
        format_version: FORMAT_VERSION,
        session: session.clone(),
        analysis,
        exported_at: Timestamp::now(),
    }
}

/// Serialize an export record as the downloadable pretty-printed JSON
/// document.
pub fn to_json(record: &ExportRecord) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(record)?)
}

pub fn from_json(json: &str) -> Result<ExportRecord, ExportError> {
    Ok(serde_json::from_str(json)?)
}

/// Audit an export: recomputing the analysis from the embedded session must
/// reproduce the stored analysis exactly.
pub fn verify(record: &ExportRecord, dataset: &[Milestone]) -> bool {
    aggregate(&record.session, dataset) == record.analysis
}
