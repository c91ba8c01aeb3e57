//! Report Summary Models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-employee-per-role totals over a report range
///
/// One row per (employee, role) pair that worked at least one shift in
/// range. Tipout fields are nets across the range (received minus paid);
/// `total_payroll_tips` may go negative on heavy tipout days and is never
/// clamped, so payroll sees the true figure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeRoleSummary {
    pub employee_id: String,
    pub employee_name: String,
    pub role_id: String,
    pub role_name: String,
    pub total_hours: f64,
    pub total_cash_tips: f64,
    /// Credit tips after daily tip-pool merging
    pub total_credit_tips: f64,
    /// Credit tips as collected, before tip-pool merging
    pub total_gross_credit_tips: f64,
    pub total_liquor_sales: f64,
    /// Net bar tipout (positive = received, negative = paid)
    pub total_bar_tipout: f64,
    /// Net host tipout
    pub total_host_tipout: f64,
    /// Net service-assistant tipout
    pub total_sa_tipout: f64,
    /// Cash tips per hour (0 when no hours worked)
    pub cash_tips_per_hour: f64,
    /// Payroll tips per hour (0 when no hours worked)
    pub credit_tips_per_hour: f64,
    /// Cash plus payroll tips per hour (0 when no hours worked)
    pub total_tips_per_hour: f64,
    /// Hourly base pay resolved for the most recent shift date in range
    pub base_pay_rate: f64,
    /// Pooled credit tips plus net tipouts
    pub total_payroll_tips: f64,
    /// base_pay_rate * total_hours + total_payroll_tips
    pub payroll_total: f64,
    /// Tip-pool label resolved for the most recent shift date, if any
    pub tip_pool_group: Option<String>,
}

/// Whole-range totals across every employee and role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    pub shift_count: i64,
    /// Distinct employees who worked in range
    pub employee_count: i64,
    pub total_hours: f64,
    pub total_cash_tips: f64,
    pub total_credit_tips: f64,
    pub total_liquor_sales: f64,
    pub total_payroll_tips: f64,
    pub total_payroll: f64,
    pub cash_tips_per_hour: f64,
    pub credit_tips_per_hour: f64,
    pub total_tips_per_hour: f64,
}

/// Which tipout-receiving roles were staffed on a date
///
/// Derived from configuration, not from pool amounts, so callers can tell
/// "no pool existed" apart from "pool totaled zero".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyRolePresence {
    pub date: NaiveDate,
    /// A bar-tipout receiver worked this date
    pub bar: bool,
    /// A host-tipout receiver worked this date
    pub host: bool,
    /// A service-assistant-tipout receiver worked this date
    pub sa: bool,
}
