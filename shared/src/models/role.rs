//! Role and Tipout Configuration Models

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tipout type enum
///
/// Closed set: the type fixes which shift figure the contribution is
/// computed from (bar tipout comes off liquor sales, host and
/// service-assistant tipouts off credit tips).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoutType {
    Bar,
    Host,
    Sa,
}

impl TipoutType {
    /// All tipout types, in pool-settlement order
    pub const ALL: [TipoutType; 3] = [TipoutType::Bar, TipoutType::Host, TipoutType::Sa];
}

impl fmt::Display for TipoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TipoutType::Bar => "bar",
            TipoutType::Host => "host",
            TipoutType::Sa => "sa",
        };
        write!(f, "{name}")
    }
}

/// Pool label used when a config names no distribution group
pub const DEFAULT_DISTRIBUTION_GROUP: &str = "default";

/// Role entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    /// Current hourly base pay rate, used when no config window carries one
    pub base_pay_rate: f64,
}

/// Versioned tipout rule for one role and tipout type
///
/// History entries are never edited in place: ending a rule sets
/// `effective_to` and a replacement is inserted. Per (role, tipout type)
/// the intervals must not overlap and at most one may be open-ended; the
/// engine resolves violations deterministically and flags them instead of
/// failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleConfig {
    pub id: String,
    /// Owning role ID
    pub role_id: String,
    pub tipout_type: TipoutType,
    /// Fraction of the contribution base paid into the pool (0.0-1.0)
    pub percentage_rate: f64,
    /// First date this rule applies (inclusive)
    pub effective_from: NaiveDate,
    /// Last date this rule applies (inclusive), None while current
    pub effective_to: Option<NaiveDate>,
    /// Whether the role draws from this tipout type's pool
    pub receives_tipout: bool,
    /// Whether the role pays into this tipout type's pool
    pub pays_tipout: bool,
    /// Pool label the role pays into / draws from (None = "default")
    pub distribution_group: Option<String>,
    /// Label under which the role's own credit tips are merged before payroll
    pub tip_pool_group: Option<String>,
    /// Hourly base pay rate effective during this window, when carried
    pub base_pay_rate: Option<f64>,
}

impl RoleConfig {
    /// Whether this rule's effective interval covers `date` (both ends
    /// inclusive; `effective_to = None` is open-ended).
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.effective_from <= date
            && match self.effective_to {
                Some(to) => date <= to,
                None => true,
            }
    }

    /// The distribution pool label, defaulted when unset
    pub fn group(&self) -> &str {
        self.distribution_group
            .as_deref()
            .unwrap_or(DEFAULT_DISTRIBUTION_GROUP)
    }
}

/// A role bundled with its full configuration history
///
/// The engine-facing shape: callers key these by role ID and must supply
/// history reaching back at least to the earliest shift in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleHistory {
    pub role: Role,
    pub configs: Vec<RoleConfig>,
}
