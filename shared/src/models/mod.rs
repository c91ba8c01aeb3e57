//! Data models
//!
//! Shared between the tipout engine and the application feeding it.
//! Input records (employees, roles, shifts) are owned and validated by
//! the caller's store; derived records are recomputed per report and
//! never persisted. All IDs are `String` (assigned by the caller).

pub mod employee;
pub mod role;
pub mod shift;
pub mod summary;
pub mod tipout;

// Re-exports
pub use employee::*;
pub use role::*;
pub use shift::*;
pub use summary::*;
pub use tipout::*;
