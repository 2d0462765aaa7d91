//! Read-side projection of installment progress
//!
//! Remaining installments and remaining amount are derived on read. When the
//! ledger holds a paid amount it is authoritative. When it does not (records
//! that predate payment tracking, or that were never marked paid) progress is
//! *estimated* from the calendar months elapsed since the plan started. The
//! estimate is a heuristic and is reported as such through [`PaidSource`].

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

use crate::date_math::months_elapsed;
use crate::model::Expense;
use crate::money::{CENT_EPSILON, round_cents};

/// Where `total_paid` came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub enum PaidSource {
    /// Expense is marked paid
    Settled,
    /// Cumulative amount recorded by payment actions
    Ledger,
    /// No payments recorded; months elapsed times the installment
    Estimate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct InstallmentStatus {
    pub remaining_count: u32,
    pub total_paid: f64,
    pub remaining_amount: f64,
    pub months_elapsed: u32,
    pub paid_source: PaidSource,
}

/// Project the progress of an installment expense as of `as_of`.
///
/// Returns `None` for one-time expenses and for installment expenses without
/// usable terms; listings skip those instead of failing.
pub fn project_installment_status(expense: &Expense, as_of: Date) -> Option<InstallmentStatus> {
    let plan = expense.plan()?;
    let total = plan.total_amount();
    let monthly = plan.monthly_amount();
    let tenure = plan.tenure();
    let elapsed = months_elapsed(expense.date, as_of);

    let (total_paid, paid_source) = match (expense.payment.is_paid, expense.payment.paid_amount) {
        (true, paid) => (paid.unwrap_or(total), PaidSource::Settled),
        (false, Some(paid)) => (paid, PaidSource::Ledger),
        (false, None) => (round_cents(f64::from(elapsed) * monthly), PaidSource::Estimate),
    };
    let total_paid = total_paid.clamp(0.0, total);
    let remaining_amount = round_cents(total - total_paid);

    let remaining_count = if remaining_amount <= 0.0 {
        0
    } else if monthly > 0.0 {
        let covered = (total_paid / monthly + CENT_EPSILON).floor() as u32;
        tenure.saturating_sub(covered)
    } else {
        tenure.saturating_sub(elapsed)
    };

    Some(InstallmentStatus {
        remaining_count,
        total_paid,
        remaining_amount,
        months_elapsed: elapsed,
        paid_source,
    })
}
