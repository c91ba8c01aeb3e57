//! Daily Pool Accumulation
//!
//! Walks every shift once per tipout type, resolves the paying rule for
//! the shift's date, and buckets cent-rounded contributions by
//! (date, tipout type, distribution group). Pools never span calendar
//! days: tips settle nightly no matter how wide the report range is.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{RoleHistory, Shift, TipoutType};

use crate::error::{EngineError, EngineResult};
use crate::money::{round_money, to_decimal};
use crate::resolver::effective_config;

/// Pool bucket identity: one settlement pot per day, type and group
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PoolKey {
    pub date: NaiveDate,
    pub tipout_type: TipoutType,
    pub distribution_group: String,
}

/// One paying shift's cent-rounded contribution to a pool
#[derive(Debug, Clone)]
pub struct ShiftContribution {
    pub shift_id: String,
    pub employee_id: String,
    pub role_id: String,
    pub date: NaiveDate,
    pub tipout_type: TipoutType,
    pub distribution_group: String,
    pub amount: Decimal,
}

/// Accumulation result: pool totals plus the itemized contributions that
/// fed them (payer-side deltas are cut from the itemization later)
#[derive(Debug, Default)]
pub struct PoolAccumulation {
    pub pools: BTreeMap<PoolKey, Decimal>,
    pub contributions: Vec<ShiftContribution>,
}

/// The shift figure a tipout type is computed from
fn contribution_base(tipout_type: TipoutType, shift: &Shift) -> f64 {
    match tipout_type {
        TipoutType::Bar => shift.liquor_sales,
        TipoutType::Host | TipoutType::Sa => shift.credit_tips,
    }
}

/// Accumulate gross pool contributions for every shift.
///
/// A shift whose role has no paying rule of a type on its date simply
/// contributes nothing for that type. Contributions are rounded to cents
/// before they enter the pool, so a pool total is always the exact sum of
/// the per-shift amounts a payer will later see as a delta. Zero-value
/// contributions are dropped outright; they would only create empty pools
/// and noise deltas.
pub fn accumulate(
    shifts: &[Shift],
    roles: &BTreeMap<String, RoleHistory>,
) -> EngineResult<PoolAccumulation> {
    let mut acc = PoolAccumulation::default();

    for shift in shifts {
        let history = roles
            .get(&shift.role_id)
            .ok_or_else(|| EngineError::UnknownRole {
                shift_id: shift.id.clone(),
                role_id: shift.role_id.clone(),
            })?;

        for tipout_type in TipoutType::ALL {
            let Some(config) = effective_config(&history.configs, tipout_type, shift.date) else {
                continue;
            };
            if !config.pays_tipout {
                continue;
            }

            let base = to_decimal(contribution_base(tipout_type, shift));
            let amount = round_money(base * to_decimal(config.percentage_rate));
            if amount.is_zero() {
                continue;
            }

            let group = config.group().to_string();
            let key = PoolKey {
                date: shift.date,
                tipout_type,
                distribution_group: group.clone(),
            };
            *acc.pools.entry(key).or_insert(Decimal::ZERO) += amount;
            acc.contributions.push(ShiftContribution {
                shift_id: shift.id.clone(),
                employee_id: shift.employee_id.clone(),
                role_id: shift.role_id.clone(),
                date: shift.date,
                tipout_type,
                distribution_group: group,
                amount,
            });
        }
    }

    tracing::debug!(
        pools = acc.pools.len(),
        contributions = acc.contributions.len(),
        "Accumulated daily tipout pools"
    );

    Ok(acc)
}
