use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ids::BudgetId;
use super::period::YearMonth;

/// Spending cap for one category in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub category: String,
    pub amount: f64,
    pub month: YearMonth,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}
