//! Scenario tests for the expense and installment engine
//!
//! Tests are organized by topic:
//! - `amortization` - Calculator fixtures and properties
//! - `ledger` - Mark paid / mark unpaid transitions
//! - `projection` - EMI progress, split into ledger-backed and estimate-based cases
//! - `expense_update` - Create and partial-update lifecycle
//! - `bills` - Per payment mode summaries
//! - `analytics` - Dashboard queries

mod bills;
mod expense_update;
mod projection;

use jiff::Timestamp;
use jiff::civil::Date;

use crate::amortization::InstallmentTerms;
use crate::model::{
    Expense, ExpenseId, ExpenseKind, InstallmentPlan, PaymentMode, PaymentModeId,
    PaymentModeKind, PaymentState,
};

pub(crate) fn epoch() -> Timestamp {
    Timestamp::UNIX_EPOCH
}

pub(crate) fn one_time(id: i64, amount: f64, category: &str, date: Date, mode: i64) -> Expense {
    Expense {
        id: ExpenseId(id),
        title: format!("expense {id}"),
        amount,
        category: category.to_string(),
        date,
        description: None,
        payment_mode_id: PaymentModeId(mode),
        kind: ExpenseKind::OneTime,
        payment: PaymentState::default(),
        created_at: epoch(),
        updated_at: None,
    }
}

pub(crate) fn installment(id: i64, terms: InstallmentTerms, date: Date, mode: i64) -> Expense {
    let plan = InstallmentPlan::new(terms).unwrap();
    Expense {
        amount: plan.total_amount(),
        kind: ExpenseKind::Installment(plan),
        ..one_time(id, terms.principal, "Electronics", date, mode)
    }
}

pub(crate) fn payment_mode(id: i64, name: &str) -> PaymentMode {
    PaymentMode {
        id: PaymentModeId(id),
        name: name.to_string(),
        kind: PaymentModeKind::CreditCard,
        icon: "CreditCard".to_string(),
        color: "#FF6B6B".to_string(),
        created_at: epoch(),
        updated_at: None,
    }
}
