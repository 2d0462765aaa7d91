//! Bill summaries grouped by payment mode
//!
//! Installment expenses contribute what the ledger has recorded so far;
//! one-time expenses contribute their full amount once marked paid.

use serde::Serialize;

use crate::model::{Expense, PaymentMode, YearMonth};
use crate::money::round_cents;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillSummary {
    pub payment_mode: PaymentMode,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub unpaid_amount: f64,
    pub expense_count: usize,
    pub paid_count: usize,
    pub unpaid_count: usize,
    pub expenses: Vec<Expense>,
}

/// Amount of `expense` counted as paid on a bill
pub fn bill_paid_amount(expense: &Expense) -> f64 {
    if expense.is_installment() {
        expense.payment.paid_amount.unwrap_or(0.0)
    } else if expense.payment.is_paid {
        expense.amount
    } else {
        0.0
    }
}

/// Whether `expense` counts towards a bill's paid count
pub fn counts_as_paid(expense: &Expense) -> bool {
    if expense.is_installment() {
        expense.payment.paid_amount.unwrap_or(0.0) > 0.0
    } else {
        expense.payment.is_paid
    }
}

/// Summarize expenses per payment mode, optionally restricted to one month.
///
/// Payment modes without a matching expense are left out. Output follows the
/// order of `modes`.
pub fn summarize_bills(
    modes: &[PaymentMode],
    expenses: &[Expense],
    period: Option<YearMonth>,
) -> Vec<BillSummary> {
    modes
        .iter()
        .filter_map(|mode| {
            let matching: Vec<Expense> = expenses
                .iter()
                .filter(|e| e.payment_mode_id == mode.id)
                .filter(|e| period.is_none_or(|p| p.contains(e.date)))
                .cloned()
                .collect();

            if matching.is_empty() {
                return None;
            }

            let total_amount = round_cents(matching.iter().map(|e| e.amount).sum());
            let paid_amount = round_cents(matching.iter().map(bill_paid_amount).sum());
            let paid_count = matching.iter().filter(|e| counts_as_paid(e)).count();

            Some(BillSummary {
                payment_mode: mode.clone(),
                total_amount,
                paid_amount,
                unpaid_amount: round_cents(total_amount - paid_amount),
                expense_count: matching.len(),
                paid_count,
                unpaid_count: matching.len() - paid_count,
                expenses: matching,
            })
        })
        .collect()
}
