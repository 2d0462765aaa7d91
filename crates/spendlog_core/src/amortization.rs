//! Fixed-payment installment (EMI) calculator
//!
//! The periodic rate is always `annual / 12 / 100`, whatever the real cadence
//! of the installments. One-time fees (processing fees and GST) are added to
//! the total payable but never spread over the installments.

use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

use crate::error::{LedgerError, Result};
use crate::money::round_cents;

/// Inputs of an installment plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct InstallmentTerms {
    /// Amount financed, excluding interest and fees
    pub principal: f64,
    /// Number of installments
    pub tenure: u32,
    /// Annual interest rate in percent. 0 means a no-cost plan.
    #[serde(alias = "interest_rate")]
    pub annual_rate_percent: f64,
    #[serde(default)]
    pub processing_fees: f64,
    #[serde(default)]
    pub gst: f64,
}

impl InstallmentTerms {
    pub fn new(principal: f64, tenure: u32, annual_rate_percent: f64) -> Self {
        Self {
            principal,
            tenure,
            annual_rate_percent,
            processing_fees: 0.0,
            gst: 0.0,
        }
    }

    #[must_use]
    pub fn with_fees(mut self, processing_fees: f64, gst: f64) -> Self {
        self.processing_fees = processing_fees;
        self.gst = gst;
        self
    }

    /// Check every precondition of the calculator.
    ///
    /// Runs before any division so a zero tenure never reaches the formula.
    pub fn validate(&self) -> Result<()> {
        if self.tenure == 0 {
            return Err(LedgerError::invalid("tenure", "must be at least 1"));
        }
        check_non_negative("principal", self.principal)?;
        check_non_negative("annual_rate_percent", self.annual_rate_percent)?;
        check_non_negative("processing_fees", self.processing_fees)?;
        check_non_negative("gst", self.gst)?;
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(LedgerError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(LedgerError::invalid(field, "cannot be negative"));
    }
    Ok(())
}

/// Derived amounts of an installment plan, all rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct Amortization {
    /// Amount charged per installment
    pub monthly_amount: f64,
    /// `monthly * tenure + fees`: the full lifetime cost
    pub total_amount: f64,
    /// `monthly * tenure - principal`, 0 for no-cost plans
    pub total_interest: f64,
    /// `processing_fees + gst`
    pub total_fees: f64,
}

/// Compute the installment amount, total payable, total interest and fees.
///
/// Intermediate values stay unrounded; only the four outputs are rounded.
/// The discount factor is taken as `1 - (1 + r)^-n` through `ln_1p` and
/// `exp_m1`, which stays finite for any tenure.
pub fn compute_amortization(terms: &InstallmentTerms) -> Result<Amortization> {
    terms.validate()?;

    let tenure = f64::from(terms.tenure);
    let monthly_rate = terms.annual_rate_percent / (12.0 * 100.0);

    let (monthly_amount, total_interest) = if monthly_rate == 0.0 {
        (terms.principal / tenure, 0.0)
    } else {
        let discount = -(-tenure * monthly_rate.ln_1p()).exp_m1();
        let monthly = terms.principal * monthly_rate / discount;
        (monthly, (monthly * tenure - terms.principal).max(0.0))
    };

    let total_fees = terms.processing_fees + terms.gst;
    if !round_cents(total_fees).is_finite() {
        return Err(LedgerError::invalid(
            "processing_fees",
            "fees are too large to represent",
        ));
    }
    let total_amount = monthly_amount * tenure + total_fees;

    let amortization = Amortization {
        monthly_amount: round_cents(monthly_amount),
        total_amount: round_cents(total_amount),
        total_interest: round_cents(total_interest),
        total_fees: round_cents(total_fees),
    };
    let representable = [
        amortization.monthly_amount,
        amortization.total_amount,
        amortization.total_interest,
        amortization.total_fees,
    ]
    .iter()
    .all(|v| v.is_finite());
    if !representable {
        return Err(LedgerError::invalid(
            "principal",
            "amounts of this plan are too large to represent",
        ));
    }

    Ok(amortization)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_tenure_rejected_before_division() {
        let err = compute_amortization(&InstallmentTerms::new(1_000.0, 0, 12.0)).unwrap_err();
        assert_eq!(err.field(), Some("tenure"));
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let err = compute_amortization(&InstallmentTerms::new(-1.0, 12, 0.0)).unwrap_err();
        assert_eq!(err.field(), Some("principal"));

        let err = compute_amortization(&InstallmentTerms::new(1_000.0, 12, -0.5)).unwrap_err();
        assert_eq!(err.field(), Some("annual_rate_percent"));

        let terms = InstallmentTerms::new(1_000.0, 12, 0.0).with_fees(-10.0, 0.0);
        let err = compute_amortization(&terms).unwrap_err();
        assert_eq!(err.field(), Some("processing_fees"));
    }

    #[test]
    fn test_nan_rate_rejected() {
        let err = compute_amortization(&InstallmentTerms::new(1_000.0, 12, f64::NAN)).unwrap_err();
        assert_eq!(err.field(), Some("annual_rate_percent"));
    }

    #[test]
    fn test_overflowing_amounts_rejected() {
        let err = compute_amortization(&InstallmentTerms::new(f64::MAX, 12, 12.0)).unwrap_err();
        assert_eq!(err.field(), Some("principal"));

        let terms = InstallmentTerms::new(1_000.0, 12, 0.0).with_fees(f64::MAX, f64::MAX);
        let err = compute_amortization(&terms).unwrap_err();
        assert_eq!(err.field(), Some("processing_fees"));
    }

    #[test]
    fn test_terms_deserialize_with_interest_rate_alias() {
        let terms: InstallmentTerms =
            serde_json::from_str(r#"{"principal": 1000, "tenure": 4, "interest_rate": 0}"#)
                .unwrap();
        assert_eq!(terms.annual_rate_percent, 0.0);
        assert_eq!(terms.processing_fees, 0.0);
        assert_eq!(terms.gst, 0.0);
    }
}
