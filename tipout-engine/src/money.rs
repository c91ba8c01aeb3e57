//! Money calculation utilities using rust_decimal for precision
//!
//! All pool and payroll arithmetic runs on `Decimal` internally; `f64`
//! appears only at the record boundary. Conversions round to 2 decimal
//! places half-up, so cents survive accumulation untouched.

use rust_decimal::prelude::*;

/// Rounding precision for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for the record boundary, rounded to cents
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a Decimal to cents, half-up
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// A weighted claim on an amount being split
#[derive(Debug, Clone)]
pub struct WeightedClaim<'a> {
    /// Relative weight (hours worked), non-negative
    pub weight: Decimal,
    /// Tie-break key for residual assignment (employee id); smaller wins
    pub tie_key: &'a str,
}

/// Split `total` across `claims` proportionally to weight, in exact cents.
///
/// Each share is rounded to cents, then the residual cent against the
/// rounded total is handed to the claim with the largest rounded share;
/// ties fall to the largest weight, then the smallest tie key. When every
/// weight is zero the split degrades to equal headcount, so claimants who
/// are present still share the amount.
///
/// Returns one share per claim, in claim order, summing to exactly
/// `round_money(total)`. Empty claims return an empty vector; the caller
/// decides what an unclaimable amount means.
pub fn allocate_by_weight(total: Decimal, claims: &[WeightedClaim<'_>]) -> Vec<Decimal> {
    if claims.is_empty() {
        return Vec::new();
    }

    let total = round_money(total);

    let mut weights: Vec<Decimal> = claims.iter().map(|c| c.weight).collect();
    let mut weight_sum: Decimal = weights.iter().copied().sum();
    if weight_sum.is_zero() {
        // Nobody clocked hours: equal split across everyone present
        weights = vec![Decimal::ONE; claims.len()];
        weight_sum = Decimal::from(claims.len());
    }

    let mut shares: Vec<Decimal> = weights
        .iter()
        .map(|w| round_money(total * *w / weight_sum))
        .collect();

    let allocated: Decimal = shares.iter().copied().sum();
    let residual = total - allocated;
    if !residual.is_zero() {
        let winner = (0..claims.len())
            .max_by(|&a, &b| {
                shares[a]
                    .cmp(&shares[b])
                    .then(weights[a].cmp(&weights[b]))
                    // Reversed: the smaller tie key takes the residual
                    .then_with(|| claims[b].tie_key.cmp(claims[a].tie_key))
            })
            .unwrap_or(0);
        shares[winner] += residual;
    }

    shares
}
