//! Pool Distribution
//!
//! Turns accumulated pools into signed per-shift transfers: every payer
//! sees exactly what it paid in, every eligible receiver its
//! hours-weighted cut, and the two sides of a pool cancel to zero. Pools
//! nobody may draw from are surfaced as orphans instead of vanishing.

use std::collections::BTreeMap;

use shared::models::{OrphanedPool, RoleHistory, Shift, TipoutDelta};

use crate::error::{EngineError, EngineResult};
use crate::money::{WeightedClaim, allocate_by_weight, to_decimal, to_f64};
use crate::pools::{PoolAccumulation, PoolKey};
use crate::resolver::effective_config;

/// Outcome of distributing every pool
#[derive(Debug, Default)]
pub struct Distribution {
    /// Signed transfers: payers negative, receivers positive
    pub deltas: Vec<TipoutDelta>,
    /// Pools that collected money with nobody eligible to draw it
    pub orphaned: Vec<OrphanedPool>,
}

/// Distribute accumulated pools across the eligible shifts of each day.
///
/// Payer deltas mirror the contributions one-for-one. Receiver deltas
/// come from an hours-weighted split of each pool; the residual cent
/// lands on the largest share (ties: most hours, then smallest employee
/// id). An orphaned pool keeps its payer deltas, so the books show where
/// the money went missing.
pub fn distribute(
    accumulation: &PoolAccumulation,
    shifts: &[Shift],
    roles: &BTreeMap<String, RoleHistory>,
) -> EngineResult<Distribution> {
    let mut out = Distribution::default();

    // Payer side: one negative delta per contribution
    for c in &accumulation.contributions {
        out.deltas.push(TipoutDelta {
            employee_id: c.employee_id.clone(),
            role_id: c.role_id.clone(),
            shift_id: c.shift_id.clone(),
            date: c.date,
            tipout_type: c.tipout_type,
            amount: to_f64(-c.amount),
        });
    }

    // Receiver side: split each pool across that day's eligible shifts
    for (key, total) in &accumulation.pools {
        let receivers = eligible_receivers(key, shifts, roles)?;

        if receivers.is_empty() {
            tracing::warn!(
                date = %key.date,
                tipout_type = %key.tipout_type,
                group = %key.distribution_group,
                amount = %total,
                "Tipout pool has contributions but no eligible receiver"
            );
            out.orphaned.push(OrphanedPool {
                date: key.date,
                tipout_type: key.tipout_type,
                distribution_group: key.distribution_group.clone(),
                amount: to_f64(*total),
            });
            continue;
        }

        let claims: Vec<WeightedClaim<'_>> = receivers
            .iter()
            .map(|shift| WeightedClaim {
                weight: to_decimal(shift.hours),
                tie_key: shift.employee_id.as_str(),
            })
            .collect();

        let shares = allocate_by_weight(*total, &claims);
        for (shift, share) in receivers.iter().zip(shares) {
            if share.is_zero() {
                continue;
            }
            out.deltas.push(TipoutDelta {
                employee_id: shift.employee_id.clone(),
                role_id: shift.role_id.clone(),
                shift_id: shift.id.clone(),
                date: shift.date,
                tipout_type: key.tipout_type,
                amount: to_f64(share),
            });
        }
    }

    Ok(out)
}

/// Shifts on the pool's date whose resolved rule for the pool's type
/// receives from the pool's group. Sorted by (employee id, shift id) so
/// residual assignment inside the allocator stays deterministic.
fn eligible_receivers<'a>(
    key: &PoolKey,
    shifts: &'a [Shift],
    roles: &BTreeMap<String, RoleHistory>,
) -> EngineResult<Vec<&'a Shift>> {
    let mut receivers = Vec::new();

    for shift in shifts.iter().filter(|s| s.date == key.date) {
        let history = roles
            .get(&shift.role_id)
            .ok_or_else(|| EngineError::UnknownRole {
                shift_id: shift.id.clone(),
                role_id: shift.role_id.clone(),
            })?;
        let Some(config) = effective_config(&history.configs, key.tipout_type, shift.date) else {
            continue;
        };
        if config.receives_tipout && config.group() == key.distribution_group {
            receivers.push(shift);
        }
    }

    receivers.sort_by(|a, b| a.employee_id.cmp(&b.employee_id).then_with(|| a.id.cmp(&b.id)));

    Ok(receivers)
}
