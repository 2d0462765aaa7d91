mod budget;
mod expense;
mod ids;
mod installment;
mod payment_mode;
mod period;

pub use budget::Budget;
pub use expense::{Expense, ExpenseKind, ExpenseUpdate, NewExpense, PaymentState};
pub use ids::{BudgetId, ExpenseId, PaymentModeId};
pub use installment::InstallmentPlan;
pub use payment_mode::{PaymentMode, PaymentModeKind};
pub use period::YearMonth;
