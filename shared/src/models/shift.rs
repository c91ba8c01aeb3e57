//! Shift Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shift record - one employee working one role on one business date
///
/// Entered and edited by the bookkeeping application; the engine treats
/// shifts as immutable inputs to a computation pass. Monetary fields are
/// raw figures as entered, in the store's currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    pub id: String,
    /// Business date the shift was worked
    pub date: NaiveDate,
    pub employee_id: String,
    pub role_id: String,
    /// Hours worked (>= 0)
    pub hours: f64,
    /// Cash tips collected (>= 0)
    pub cash_tips: f64,
    /// Credit tips collected (>= 0)
    pub credit_tips: f64,
    /// Liquor sales rung during the shift (>= 0)
    pub liquor_sales: f64,
}
