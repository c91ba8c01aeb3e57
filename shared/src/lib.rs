//! Shared types for the tipout engine
//!
//! Plain data records exchanged between the bookkeeping application and
//! the calculation engine: employees, roles with their versioned tipout
//! configuration, shift records, and the derived report types the engine
//! hands back.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Model re-exports (for convenient access)
pub use models::{
    ConfigWarning, DailyRolePresence, DateRange, Employee, EmployeeRoleSummary, OrphanedPool,
    ReportSummary, Role, RoleConfig, RoleHistory, Shift, TipoutDelta, TipoutType,
};
