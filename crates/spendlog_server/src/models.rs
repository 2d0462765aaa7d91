use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use spendlog_core::bills::BillSummary;
use spendlog_core::model::{
    Expense, ExpenseKind, PaymentMode, PaymentModeId, PaymentModeKind, YearMonth,
};

// ============================================================================
// Payment Mode Types
// ============================================================================

fn default_icon() -> String {
    "CreditCard".to_string()
}

fn default_color() -> String {
    "#FF6B6B".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CreatePaymentModeRequest {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: PaymentModeKind,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_color")]
    pub color: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePaymentModeRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<PaymentModeKind>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

// ============================================================================
// Expense Types
// ============================================================================

fn default_limit() -> usize {
    100
}

/// Filters for the expense listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub category: Option<String>,
    pub payment_mode_id: Option<PaymentModeId>,
}

/// An expense as exposed over the API, with its payment mode embedded and
/// the installment plan spread over flat `emi_*` fields.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseResponse {
    pub id: i64,
    pub title: String,
    /// Total payable for installment expenses
    pub amount: f64,
    pub category: String,
    pub date: Date,
    pub description: Option<String>,
    pub payment_mode_id: i64,
    pub is_emi: bool,
    pub emi_tenure: Option<u32>,
    pub emi_processing_fees: Option<f64>,
    pub emi_interest_rate: Option<f64>,
    pub emi_gst: Option<f64>,
    pub emi_monthly_amount: Option<f64>,
    pub emi_total_amount: Option<f64>,
    pub emi_principal_amount: Option<f64>,
    pub emi_total_interest: Option<f64>,
    pub is_paid: bool,
    pub paid_date: Option<Date>,
    pub paid_amount: Option<f64>,
    pub payment_mode: Option<PaymentMode>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl ExpenseResponse {
    pub fn new(expense: Expense, payment_mode: Option<PaymentMode>) -> Self {
        let plan = expense.plan().copied();
        Self {
            id: expense.id.0,
            title: expense.title,
            amount: expense.amount,
            category: expense.category,
            date: expense.date,
            description: expense.description,
            payment_mode_id: expense.payment_mode_id.0,
            is_emi: !matches!(expense.kind, ExpenseKind::OneTime),
            emi_tenure: plan.map(|p| p.tenure()),
            emi_processing_fees: plan.map(|p| p.processing_fees()),
            emi_interest_rate: plan.map(|p| p.annual_rate_percent()),
            emi_gst: plan.map(|p| p.gst()),
            emi_monthly_amount: plan.map(|p| p.monthly_amount()),
            emi_total_amount: plan.map(|p| p.total_amount()),
            emi_principal_amount: plan.map(|p| p.principal()),
            emi_total_interest: plan.map(|p| p.total_interest()),
            is_paid: expense.payment.is_paid,
            paid_date: expense.payment.paid_date,
            paid_amount: expense.payment.paid_amount,
            payment_mode,
            created_at: expense.created_at,
            updated_at: expense.updated_at,
        }
    }

    /// Pair each expense with its payment mode from `modes`
    pub fn with_modes(expenses: Vec<Expense>, modes: &[PaymentMode]) -> Vec<Self> {
        expenses
            .into_iter()
            .map(|expense| {
                let mode = modes.iter().find(|m| m.id == expense.payment_mode_id).cloned();
                Self::new(expense, mode)
            })
            .collect()
    }
}

/// Response of the mark-paid / mark-unpaid actions
#[derive(Debug, Serialize)]
pub struct PaymentActionResponse {
    pub message: String,
    pub expense: ExpenseResponse,
}

// ============================================================================
// EMI and Bill Types
// ============================================================================

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EmiQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Month filter for bills; applied only when both parts are present
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct BillsQuery {
    pub month: Option<i8>,
    pub year: Option<i16>,
}

#[derive(Debug, Serialize)]
pub struct BillResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PaymentModeKind,
    pub icon: String,
    pub color: String,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub unpaid_amount: f64,
    pub expense_count: usize,
    pub paid_count: usize,
    pub unpaid_count: usize,
    pub expenses: Vec<ExpenseResponse>,
}

impl From<BillSummary> for BillResponse {
    fn from(summary: BillSummary) -> Self {
        let mode = summary.payment_mode;
        let expenses = summary
            .expenses
            .into_iter()
            .map(|e| ExpenseResponse::new(e, Some(mode.clone())))
            .collect();
        Self {
            id: mode.id.0,
            name: mode.name,
            kind: mode.kind,
            icon: mode.icon,
            color: mode.color,
            total_amount: summary.total_amount,
            paid_amount: summary.paid_amount,
            unpaid_amount: summary.unpaid_amount,
            expense_count: summary.expense_count,
            paid_count: summary.paid_count,
            unpaid_count: summary.unpaid_count,
            expenses,
        }
    }
}

// ============================================================================
// Budget Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateBudgetRequest {
    pub category: String,
    pub amount: f64,
    pub month: YearMonth,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateBudgetRequest {
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub month: Option<YearMonth>,
}
