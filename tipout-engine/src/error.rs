//! Unified engine errors
//!
//! Every failure here means the input shape is unusable and the whole
//! computation is rejected; the engine never returns a partial report.
//! Data-quality findings that leave the input computable (overlapping
//! config intervals, pools with no receiver) are carried on the report
//! itself, not raised as errors.

use chrono::NaiveDate;

/// Engine-level Result type
pub type EngineResult<T> = Result<T, EngineError>;

/// Computation error enum
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    // ========== Referential errors ==========
    #[error("shift {shift_id} references unknown role {role_id}")]
    /// A shift names a role id missing from the supplied histories
    UnknownRole { shift_id: String, role_id: String },

    #[error("shift {shift_id} references unknown employee {employee_id}")]
    /// A shift names an employee id missing from the supplied map
    UnknownEmployee {
        shift_id: String,
        employee_id: String,
    },

    // ========== Value errors ==========
    #[error("invalid shift {shift_id}: {reason}")]
    /// A shift carries a malformed numeric field or a duplicate id
    InvalidShift { shift_id: String, reason: String },

    #[error("invalid role {role_id}: {reason}")]
    /// A role record carries a malformed base pay rate
    InvalidRole { role_id: String, reason: String },

    #[error("invalid config {config_id}: {reason}")]
    /// A role config carries a malformed rate, pay or interval
    InvalidConfig { config_id: String, reason: String },

    #[error("invalid date range: start {start} is after end {end}")]
    /// Report range runs backwards
    InvalidRange { start: NaiveDate, end: NaiveDate },
}
