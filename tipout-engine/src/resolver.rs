//! Tipout Config Resolver
//!
//! Logic for resolving which configuration rule is effective on a date.
//! Role config history is a set of dated intervals per tipout type;
//! resolution walks the history fresh on every lookup, so edits to the
//! history take effect on the next computation with no cache to flush.

use chrono::NaiveDate;
use shared::models::{ConfigWarning, Role, RoleConfig, TipoutType};

// ==================== Rule Resolution ====================

/// Select the config effective for `tipout_type` on `date`.
///
/// A rule applies when `effective_from <= date <= effective_to`, with an
/// open `effective_to` never bounding. If overlapping rules both cover
/// the date (an upstream data defect), the latest `effective_from` wins.
/// `None` means the role simply has no rule of that type that day and
/// neither pays nor receives.
pub fn effective_config<'a>(
    configs: &'a [RoleConfig],
    tipout_type: TipoutType,
    date: NaiveDate,
) -> Option<&'a RoleConfig> {
    configs
        .iter()
        .filter(|c| c.tipout_type == tipout_type && c.covers(date))
        .max_by_key(|c| c.effective_from)
}

/// Resolve the hourly base pay effective on `date`.
///
/// Any tipout type's window may carry a rate; among windows covering the
/// date the latest `effective_from` wins. Falls back to the role's
/// current default when none carries one.
pub fn base_pay_on(role: &Role, configs: &[RoleConfig], date: NaiveDate) -> f64 {
    configs
        .iter()
        .filter(|c| c.covers(date) && c.base_pay_rate.is_some())
        .max_by_key(|c| c.effective_from)
        .and_then(|c| c.base_pay_rate)
        .unwrap_or(role.base_pay_rate)
}

/// Resolve the tip-pool label effective on `date`, if any covering window
/// carries one. Same selection policy as [`base_pay_on`].
pub fn tip_pool_group_on(configs: &[RoleConfig], date: NaiveDate) -> Option<&str> {
    configs
        .iter()
        .filter(|c| c.covers(date) && c.tip_pool_group.is_some())
        .max_by_key(|c| c.effective_from)
        .and_then(|c| c.tip_pool_group.as_deref())
}

// ==================== History Validation ====================

/// Detect overlapping effective intervals in one role's history.
///
/// Pairwise per tipout type; two open-ended rules always overlap. Each
/// finding is logged and returned for the report's warning list so the
/// caller can surface the defect without the computation failing.
pub fn overlap_warnings(role_id: &str, configs: &[RoleConfig]) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    for tipout_type in TipoutType::ALL {
        let of_type: Vec<&RoleConfig> = configs
            .iter()
            .filter(|c| c.tipout_type == tipout_type)
            .collect();

        for (i, a) in of_type.iter().enumerate() {
            for b in &of_type[i + 1..] {
                if !intervals_overlap(a, b) {
                    continue;
                }
                let message = format!(
                    "configs {} ({}) and {} ({}) overlap",
                    a.id,
                    describe_interval(a),
                    b.id,
                    describe_interval(b),
                );
                tracing::warn!(role_id, %tipout_type, "{message}");
                warnings.push(ConfigWarning {
                    role_id: role_id.to_string(),
                    tipout_type,
                    message,
                });
            }
        }
    }

    warnings
}

/// Two inclusive intervals overlap when each starts before the other ends
fn intervals_overlap(a: &RoleConfig, b: &RoleConfig) -> bool {
    let a_starts_in_time = match b.effective_to {
        Some(to) => a.effective_from <= to,
        None => true,
    };
    let b_starts_in_time = match a.effective_to {
        Some(to) => b.effective_from <= to,
        None => true,
    };
    a_starts_in_time && b_starts_in_time
}

fn describe_interval(config: &RoleConfig) -> String {
    match config.effective_to {
        Some(to) => format!("{}..={}", config.effective_from, to),
        None => format!("{}..", config.effective_from),
    }
}
