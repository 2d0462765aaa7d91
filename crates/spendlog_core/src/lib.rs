//! Expense tracking and installment (EMI) engine
//!
//! This crate holds the pure domain logic behind the spendlog server:
//! - Amortization of installment plans (fixed-payment annuity, monthly rate)
//! - A payment ledger that advances installment records one unit at a time
//! - Read-side projections for EMI listings (remaining installments/amount)
//! - Per payment mode bill aggregation
//! - Dashboard analytics (overview, category breakdown, budgets, insights, trends)
//!
//! Nothing here performs I/O. Callers load records, hand them to these
//! functions, and persist whatever comes back.
//!
//! ```ignore
//! use spendlog_core::{InstallmentTerms, compute_amortization};
//!
//! let terms = InstallmentTerms::new(12_000.0, 12, 12.0);
//! let amortization = compute_amortization(&terms)?;
//! assert_eq!(amortization.monthly_amount, 1066.19);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod amortization;
pub mod analytics;
pub mod bills;
pub mod date_math;
pub mod error;
pub mod ledger;
pub mod money;
pub mod projection;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use amortization::{Amortization, InstallmentTerms, compute_amortization};
pub use error::{LedgerError, Result};
pub use ledger::{PaymentRequest, mark_paid, mark_unpaid};
pub use model::{
    Budget, BudgetId, Expense, ExpenseId, ExpenseKind, ExpenseUpdate, InstallmentPlan,
    NewExpense, PaymentMode, PaymentModeId, PaymentModeKind, PaymentState, YearMonth,
};
pub use projection::{InstallmentStatus, PaidSource, project_installment_status};
