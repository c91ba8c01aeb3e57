//! Tipout resolution and distribution engine
//!
//! Pure computation over an in-memory snapshot of shifts and versioned
//! role configuration: resolve which percentage rule was effective on
//! each date, accumulate daily tipout pools, distribute them across
//! eligible shifts hours-weighted, and fold everything into
//! per-employee-per-role payroll summaries. No I/O, no clocks, no shared
//! state; callers fetch the records and persist the results.
//!
//! [`compute_report`] runs the whole pipeline; the stage functions are
//! exported for callers that need a single step.

mod distribution;
mod error;
mod money;
mod pools;
mod report;
mod resolver;
mod summary;

pub use distribution::{Distribution, distribute};
pub use error::{EngineError, EngineResult};
pub use pools::{PoolAccumulation, PoolKey, ShiftContribution, accumulate};
pub use report::{TipoutReport, compute_report};
pub use resolver::{base_pay_on, effective_config, overlap_warnings, tip_pool_group_on};
pub use summary::{daily_presence, summarize};
