//! Report Computation Facade
//!
//! Single entry point for a tipout report: validate the snapshot, flag
//! configuration overlaps, accumulate daily pools, distribute them, and
//! fold everything into payroll rows. Validation rejects the whole
//! computation up front; the pipeline never emits a partial report.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use shared::models::{
    ConfigWarning, DailyRolePresence, DateRange, Employee, EmployeeRoleSummary, OrphanedPool,
    ReportSummary, Role, RoleConfig, RoleHistory, Shift, TipoutDelta,
};

use crate::distribution::distribute;
use crate::error::{EngineError, EngineResult};
use crate::pools::accumulate;
use crate::resolver::overlap_warnings;
use crate::summary::{daily_presence, summarize};

/// Everything one report computation produces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipoutReport {
    /// Inclusive range the report covers
    pub range: DateRange,
    /// One payroll row per (employee, role) pair worked in range
    pub summaries: Vec<EmployeeRoleSummary>,
    /// Whole-range totals across every row
    pub totals: ReportSummary,
    /// Per-date receiving-role presence flags
    pub presence: Vec<DailyRolePresence>,
    /// Signed per-shift transfers behind the summary nets
    pub deltas: Vec<TipoutDelta>,
    /// Pools that collected money with no eligible receiver
    pub orphaned_pools: Vec<OrphanedPool>,
    /// Data-quality findings from configuration history
    pub warnings: Vec<ConfigWarning>,
}

/// Compute a full tipout report over `range`.
///
/// Input is an immutable snapshot: every shift's role must appear in
/// `roles` (with history reaching back to the earliest shift) and every
/// employee in `employees`. Shifts outside the range are dropped before
/// the pipeline runs. Any malformed record fails the computation with
/// a descriptive error instead of producing partial output.
pub fn compute_report(
    shifts: &[Shift],
    employees: &BTreeMap<String, Employee>,
    roles: &BTreeMap<String, RoleHistory>,
    range: DateRange,
) -> EngineResult<TipoutReport> {
    validate_range(range)?;
    validate_shifts(shifts, employees, roles)?;
    for history in roles.values() {
        validate_role(&history.role)?;
        validate_configs(&history.configs)?;
    }

    let in_range: Vec<Shift> = shifts
        .iter()
        .filter(|s| range.contains(s.date))
        .cloned()
        .collect();
    if in_range.len() < shifts.len() {
        tracing::debug!(
            dropped = shifts.len() - in_range.len(),
            "Dropped shifts outside report range"
        );
    }

    let mut warnings = Vec::new();
    for (role_id, history) in roles {
        warnings.extend(overlap_warnings(role_id, &history.configs));
    }

    let accumulation = accumulate(&in_range, roles)?;
    let distribution = distribute(&accumulation, &in_range, roles)?;
    let presence = daily_presence(&in_range, roles)?;
    let (summaries, totals) = summarize(&in_range, &distribution.deltas, roles, employees, range)?;

    tracing::debug!(
        rows = summaries.len(),
        deltas = distribution.deltas.len(),
        orphaned = distribution.orphaned.len(),
        warnings = warnings.len(),
        "Computed tipout report"
    );

    Ok(TipoutReport {
        range,
        summaries,
        totals,
        presence,
        deltas: distribution.deltas,
        orphaned_pools: distribution.orphaned,
        warnings,
    })
}

// ==================== Input Validation ====================

/// Maximum allowed monetary figure per shift (1,000,000)
const MAX_AMOUNT: f64 = 1_000_000.0;
/// Maximum allowed hours per shift (one business date)
const MAX_HOURS: f64 = 24.0;
/// Maximum allowed hourly base pay rate
const MAX_PAY_RATE: f64 = 10_000.0;

fn validate_range(range: DateRange) -> EngineResult<()> {
    if range.start > range.end {
        return Err(EngineError::InvalidRange {
            start: range.start,
            end: range.end,
        });
    }
    Ok(())
}

/// A monetary or hours field must be a finite, non-negative number
/// within `max`; unbounded values would overflow `Decimal` and decay to
/// zero instead of computing.
fn require_bounded(shift_id: &str, value: f64, field: &str, max: f64) -> EngineResult<()> {
    if !value.is_finite() {
        return Err(EngineError::InvalidShift {
            shift_id: shift_id.to_string(),
            reason: format!("{field} must be a finite number, got {value}"),
        });
    }
    if value < 0.0 {
        return Err(EngineError::InvalidShift {
            shift_id: shift_id.to_string(),
            reason: format!("{field} must be non-negative, got {value}"),
        });
    }
    if value > max {
        return Err(EngineError::InvalidShift {
            shift_id: shift_id.to_string(),
            reason: format!("{field} exceeds maximum allowed ({max}), got {value}"),
        });
    }
    Ok(())
}

fn validate_shifts(
    shifts: &[Shift],
    employees: &BTreeMap<String, Employee>,
    roles: &BTreeMap<String, RoleHistory>,
) -> EngineResult<()> {
    let mut seen_ids: BTreeSet<&str> = BTreeSet::new();

    for shift in shifts {
        if !seen_ids.insert(&shift.id) {
            return Err(EngineError::InvalidShift {
                shift_id: shift.id.clone(),
                reason: "duplicate shift id".to_string(),
            });
        }
        if !roles.contains_key(&shift.role_id) {
            return Err(EngineError::UnknownRole {
                shift_id: shift.id.clone(),
                role_id: shift.role_id.clone(),
            });
        }
        if !employees.contains_key(&shift.employee_id) {
            return Err(EngineError::UnknownEmployee {
                shift_id: shift.id.clone(),
                employee_id: shift.employee_id.clone(),
            });
        }
        require_bounded(&shift.id, shift.hours, "hours", MAX_HOURS)?;
        require_bounded(&shift.id, shift.cash_tips, "cash_tips", MAX_AMOUNT)?;
        require_bounded(&shift.id, shift.credit_tips, "credit_tips", MAX_AMOUNT)?;
        require_bounded(&shift.id, shift.liquor_sales, "liquor_sales", MAX_AMOUNT)?;
    }

    Ok(())
}

fn validate_role(role: &Role) -> EngineResult<()> {
    let rate = role.base_pay_rate;
    if !rate.is_finite() || !(0.0..=MAX_PAY_RATE).contains(&rate) {
        return Err(EngineError::InvalidRole {
            role_id: role.id.clone(),
            reason: format!("base_pay_rate must be between 0 and {MAX_PAY_RATE}, got {rate}"),
        });
    }
    Ok(())
}

fn validate_configs(configs: &[RoleConfig]) -> EngineResult<()> {
    for config in configs {
        if !config.percentage_rate.is_finite() || !(0.0..=1.0).contains(&config.percentage_rate) {
            return Err(EngineError::InvalidConfig {
                config_id: config.id.clone(),
                reason: format!(
                    "percentage_rate must be between 0 and 1, got {}",
                    config.percentage_rate
                ),
            });
        }
        if let Some(rate) = config.base_pay_rate {
            if !rate.is_finite() || !(0.0..=MAX_PAY_RATE).contains(&rate) {
                return Err(EngineError::InvalidConfig {
                    config_id: config.id.clone(),
                    reason: format!(
                        "base_pay_rate must be between 0 and {MAX_PAY_RATE}, got {rate}"
                    ),
                });
            }
        }
        if let Some(to) = config.effective_to {
            if to < config.effective_from {
                return Err(EngineError::InvalidConfig {
                    config_id: config.id.clone(),
                    reason: format!(
                        "effective_to {to} precedes effective_from {}",
                        config.effective_from
                    ),
                });
            }
        }
    }

    Ok(())
}
