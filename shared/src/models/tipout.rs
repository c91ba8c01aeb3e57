//! Tipout Transfer and Anomaly Records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::role::TipoutType;

/// Inclusive date range a report covers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Range covering a single business date
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Signed per-shift tipout transfer
///
/// Payers carry negative amounts, receivers positive. Within one pool the
/// amounts cancel exactly; rounded to cents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TipoutDelta {
    pub employee_id: String,
    pub role_id: String,
    pub shift_id: String,
    pub date: NaiveDate,
    pub tipout_type: TipoutType,
    /// Signed amount (positive = received, negative = paid)
    pub amount: f64,
}

/// A pool that collected contributions but had no eligible receiver
///
/// Payer deltas stand; the stranded total is reported here instead of
/// being silently absorbed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrphanedPool {
    pub date: NaiveDate,
    pub tipout_type: TipoutType,
    pub distribution_group: String,
    /// Total paid in with nobody to draw it out
    pub amount: f64,
}

/// Data-quality finding raised while resolving configuration history
///
/// Overlapping effective intervals resolve deterministically (latest
/// `effective_from` wins) and are reported here rather than failing the
/// computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigWarning {
    pub role_id: String,
    pub tipout_type: TipoutType,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31));

        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2024, 1, 31)));
        assert!(!range.contains(date(2024, 2, 1)));
        assert!(!range.contains(date(2023, 12, 31)));
    }

    #[test]
    fn test_single_day_covers_only_that_date() {
        let range = DateRange::single_day(date(2024, 6, 10));

        assert!(range.contains(date(2024, 6, 10)));
        assert!(!range.contains(date(2024, 6, 9)));
        assert!(!range.contains(date(2024, 6, 11)));
    }
}
