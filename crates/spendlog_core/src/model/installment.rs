use serde::{Deserialize, Serialize};

use crate::amortization::{Amortization, InstallmentTerms, compute_amortization};
use crate::error::LedgerError;

/// An installment plan: its inputs together with the amounts derived from them.
///
/// The derived amounts are only ever produced by [`compute_amortization`], so
/// monthly amount, total payable and total interest always agree with each
/// other and with the terms. Deserializing goes through the calculator too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InstallmentTerms")]
pub struct InstallmentPlan {
    #[serde(flatten)]
    terms: InstallmentTerms,
    #[serde(flatten)]
    amortization: Amortization,
}

impl InstallmentPlan {
    pub fn new(terms: InstallmentTerms) -> Result<Self, LedgerError> {
        let amortization = compute_amortization(&terms)?;
        Ok(Self {
            terms,
            amortization,
        })
    }

    pub fn terms(&self) -> &InstallmentTerms {
        &self.terms
    }

    pub fn amortization(&self) -> &Amortization {
        &self.amortization
    }

    pub fn principal(&self) -> f64 {
        self.terms.principal
    }

    pub fn tenure(&self) -> u32 {
        self.terms.tenure
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.terms.annual_rate_percent
    }

    pub fn processing_fees(&self) -> f64 {
        self.terms.processing_fees
    }

    pub fn gst(&self) -> f64 {
        self.terms.gst
    }

    pub fn monthly_amount(&self) -> f64 {
        self.amortization.monthly_amount
    }

    pub fn total_amount(&self) -> f64 {
        self.amortization.total_amount
    }

    pub fn total_interest(&self) -> f64 {
        self.amortization.total_interest
    }
}

impl TryFrom<InstallmentTerms> for InstallmentPlan {
    type Error = LedgerError;

    fn try_from(terms: InstallmentTerms) -> Result<Self, Self::Error> {
        Self::new(terms)
    }
}
