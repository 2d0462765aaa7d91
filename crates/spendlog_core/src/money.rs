//! Currency rounding helpers
//!
//! Amounts are plain `f64` in a single currency. Every value that leaves the
//! amortization calculator or the ledger is rounded to whole cents with
//! round-half-away-from-zero (`f64::round`), so repeated additions of rounded
//! installments stay on the cent grid.

/// Tolerance used when comparing cent-rounded amounts.
pub const CENT_EPSILON: f64 = 1e-6;

/// Largest error rounding a single amount to cents can introduce.
pub const HALF_CENT: f64 = 0.005;

/// Round to 2 decimal places, halves away from zero.
#[inline]
pub fn round_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Normalise -0.0 so serialized output never shows "-0.0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Round to 1 decimal place, used for percentages shown on the dashboard.
#[inline]
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `a >= b` with cent tolerance.
#[inline]
pub fn covers(a: f64, b: f64) -> bool {
    a + CENT_EPSILON >= b
}
