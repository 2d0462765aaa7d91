//! Payment ledger transitions
//!
//! Two states, unpaid and paid. [`mark_paid`] moves an installment expense
//! forward by exactly one installment per call and flips it to paid once the
//! cumulative amount reaches the total payable. [`mark_unpaid`] is a full
//! reset: accumulated installment progress is discarded, not decremented.
//!
//! Both are pure. The caller reads the record, applies the transition and
//! persists the result as one unit of work, serialized per record.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};
use crate::model::{Expense, ExpenseKind, InstallmentPlan, PaymentState};
use crate::money::{CENT_EPSILON, HALF_CENT, covers, round_cents};

/// Optional overrides for a "mark paid" action
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Amount paid. Only honoured for one-time expenses; an installment
    /// expense always advances by one installment. Absent or zero means the
    /// full amount.
    #[serde(alias = "paid_amount")]
    pub amount: Option<f64>,
    /// Payment date, defaults to today
    #[serde(alias = "paid_date")]
    pub date: Option<Date>,
}

/// Record one payment against `expense`.
pub fn mark_paid(expense: &Expense, request: PaymentRequest, today: Date) -> Result<Expense> {
    let current = expense.payment.paid_amount.unwrap_or(0.0);

    let (paid_amount, is_paid) = match &expense.kind {
        ExpenseKind::Installment(plan) => advance_one_installment(plan, current),
        ExpenseKind::IncompleteInstallment => {
            // No installment unit is known, so nothing moves
            let total = expense.amount;
            let paid = current.min(total);
            (paid, covers(paid, total))
        }
        ExpenseKind::OneTime => {
            let amount = request
                .amount
                .filter(|amount| *amount != 0.0)
                .unwrap_or(expense.amount);
            if !amount.is_finite() || amount < 0.0 {
                return Err(LedgerError::invalid(
                    "paid_amount",
                    "must be a non-negative number",
                ));
            }
            (round_cents(amount), true)
        }
    };

    let mut updated = expense.clone();
    updated.payment = PaymentState {
        is_paid,
        paid_amount: Some(paid_amount),
        paid_date: Some(request.date.unwrap_or(today)),
    };
    Ok(updated)
}

/// Reset payment state entirely, whatever was accumulated.
pub fn mark_unpaid(expense: &Expense) -> Expense {
    let mut updated = expense.clone();
    updated.payment = PaymentState::default();
    updated
}

/// Cumulative amount after one more installment, and whether that settles the plan.
///
/// Every call adds exactly one installment, clamped to the total payable.
/// The installment that completes the tenure also settles the balance when
/// what is left is no more than the cent rounding of the installments (half
/// a cent each). One-time fees are larger than that and take further calls.
fn advance_one_installment(plan: &InstallmentPlan, current: f64) -> (f64, bool) {
    let total = plan.total_amount();
    let monthly = plan.monthly_amount();

    if monthly <= 0.0 {
        return (total, true);
    }

    let paid = round_cents(current + monthly).min(total);
    if covers(paid, total) {
        return (total, true);
    }

    let tenure = f64::from(plan.tenure());
    let installments_covered = (paid / monthly + CENT_EPSILON).floor();
    let rounding_residue = tenure * HALF_CENT;
    if installments_covered >= tenure && covers(paid + rounding_residue, total) {
        (total, true)
    } else {
        (paid, false)
    }
}
