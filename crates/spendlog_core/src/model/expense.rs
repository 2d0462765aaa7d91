//! Expense records and their create/update lifecycle
//!
//! An installment expense carries two distinct amounts: the principal that
//! was financed (kept in its [`InstallmentPlan`]) and the total payable,
//! which is what `Expense::amount` holds. Generic sums over `amount` therefore
//! always see the full lifetime cost of an installment purchase.

use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

use super::ids::{ExpenseId, PaymentModeId};
use super::installment::InstallmentPlan;
use crate::amortization::InstallmentTerms;
use crate::error::{LedgerError, Result};
use crate::money::covers;

const MAX_LABEL_LEN: usize = 200;

/// Paid/unpaid state of an expense.
///
/// Only [`crate::ledger::mark_paid`] and [`crate::ledger::mark_unpaid`]
/// produce new values of this type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct PaymentState {
    pub is_paid: bool,
    /// Cumulative amount credited so far, `None` when nothing was recorded
    pub paid_amount: Option<f64>,
    /// Date of the most recent payment action
    pub paid_date: Option<Date>,
}

/// Whether an expense is a one-off charge or paid in installments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "plan", rename_all = "snake_case")]
pub enum ExpenseKind {
    OneTime,
    Installment(InstallmentPlan),
    /// Flagged as installment but stored without usable terms (no tenure).
    /// Excluded from EMI listings, still treated as installment elsewhere.
    IncompleteInstallment,
}

impl ExpenseKind {
    pub fn is_installment(&self) -> bool {
        !matches!(self, ExpenseKind::OneTime)
    }

    pub fn plan(&self) -> Option<&InstallmentPlan> {
        match self {
            ExpenseKind::Installment(plan) => Some(plan),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub title: String,
    /// Nominal amount. For installment expenses this is the total payable.
    pub amount: f64,
    pub category: String,
    /// Purchase date; for installment expenses also the plan start
    pub date: Date,
    pub description: Option<String>,
    pub payment_mode_id: PaymentModeId,
    pub kind: ExpenseKind,
    pub payment: PaymentState,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl Expense {
    pub fn is_installment(&self) -> bool {
        self.kind.is_installment()
    }

    pub fn plan(&self) -> Option<&InstallmentPlan> {
        self.kind.plan()
    }

    /// What settles this expense in full
    pub fn payable_amount(&self) -> f64 {
        self.plan().map_or(self.amount, InstallmentPlan::total_amount)
    }

    /// The amount originally entered: principal for installment plans
    pub fn principal_amount(&self) -> f64 {
        self.plan().map_or(self.amount, InstallmentPlan::principal)
    }

    /// Overlay a partial update and rebuild the installment plan if needed.
    ///
    /// Any change to an installment input (or to the installment flag)
    /// recomputes the whole plan from the stored inputs plus the supplied
    /// ones. Derived amounts are never patched individually.
    pub fn apply_update(&self, update: &ExpenseUpdate, now: Timestamp) -> Result<Expense> {
        let mut next = self.clone();

        if let Some(title) = &update.title {
            next.title = title.clone();
        }
        if let Some(category) = &update.category {
            next.category = category.clone();
        }
        if let Some(date) = update.date {
            next.date = date;
        }
        if let Some(description) = &update.description {
            next.description = Some(description.clone());
        }
        if let Some(payment_mode_id) = update.payment_mode_id {
            next.payment_mode_id = payment_mode_id;
        }

        let was_installment = self.is_installment();
        let wants_installment = update.is_emi.unwrap_or(was_installment);

        if wants_installment {
            let needs_rebuild = !was_installment
                || update.is_emi == Some(true)
                || update.touches_installment_terms();
            if needs_rebuild {
                let terms = self.overlay_terms(update)?;
                let plan = InstallmentPlan::new(terms)?;
                check_payment_fits(&self.payment, plan.total_amount())?;
                next.amount = plan.total_amount();
                next.kind = ExpenseKind::Installment(plan);
            }
        } else if was_installment {
            if self.payment.paid_amount.is_some() && !self.payment.is_paid {
                return Err(LedgerError::invalid(
                    "is_emi",
                    "installments are partially paid; mark the expense unpaid first",
                ));
            }
            next.amount = update.amount.unwrap_or_else(|| self.principal_amount());
            next.kind = ExpenseKind::OneTime;
        } else if let Some(amount) = update.amount {
            next.amount = amount;
        }

        next.validate()?;
        next.updated_at = Some(now);
        Ok(next)
    }

    /// Stored installment inputs with the supplied ones laid over them.
    ///
    /// The principal falls back to the stored principal, never to the stored
    /// total payable.
    fn overlay_terms(&self, update: &ExpenseUpdate) -> Result<InstallmentTerms> {
        let stored = self.plan().map(|plan| *plan.terms());
        let tenure = update
            .emi_tenure
            .or(stored.map(|t| t.tenure))
            .ok_or_else(|| {
                LedgerError::invalid("emi_tenure", "required for installment expenses")
            })?;

        Ok(InstallmentTerms {
            principal: update.amount.unwrap_or_else(|| self.principal_amount()),
            tenure,
            annual_rate_percent: update
                .emi_interest_rate
                .or(stored.map(|t| t.annual_rate_percent))
                .unwrap_or(0.0),
            processing_fees: update
                .emi_processing_fees
                .or(stored.map(|t| t.processing_fees))
                .unwrap_or(0.0),
            gst: update
                .emi_gst
                .or(stored.map(|t| t.gst))
                .unwrap_or(0.0),
        })
    }

    fn validate(&self) -> Result<()> {
        validate_label("title", &self.title)?;
        validate_label("category", &self.category)?;
        match &self.kind {
            ExpenseKind::Installment(plan) if plan.principal() <= 0.0 => {
                Err(LedgerError::invalid("amount", "principal must be greater than 0"))
            }
            ExpenseKind::OneTime if !(self.amount.is_finite() && self.amount > 0.0) => {
                Err(LedgerError::invalid("amount", "must be greater than 0"))
            }
            _ => Ok(()),
        }
    }
}

/// A recorded payment must stay consistent with a rebuilt total payable.
fn check_payment_fits(payment: &PaymentState, total_amount: f64) -> Result<()> {
    let Some(paid) = payment.paid_amount else {
        return Ok(());
    };
    if !covers(total_amount, paid) {
        return Err(LedgerError::invalid(
            "amount",
            format!("total payable {total_amount:.2} would fall below the {paid:.2} already paid"),
        ));
    }
    if payment.is_paid && !covers(paid, total_amount) {
        return Err(LedgerError::invalid(
            "amount",
            "expense is marked paid; mark it unpaid before changing installment terms",
        ));
    }
    Ok(())
}

fn validate_label(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LedgerError::invalid(field, "cannot be empty"));
    }
    if value.chars().count() > MAX_LABEL_LEN {
        return Err(LedgerError::invalid(
            field,
            format!("cannot exceed {MAX_LABEL_LEN} characters"),
        ));
    }
    Ok(())
}

/// Input for a new expense. Payment state always starts unpaid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub title: String,
    /// Price of the purchase; the principal when `is_emi` is set
    pub amount: f64,
    pub category: String,
    pub date: Date,
    #[serde(default)]
    pub description: Option<String>,
    pub payment_mode_id: PaymentModeId,
    #[serde(default)]
    pub is_emi: bool,
    #[serde(default)]
    pub emi_tenure: Option<u32>,
    #[serde(default)]
    pub emi_interest_rate: Option<f64>,
    #[serde(default)]
    pub emi_processing_fees: Option<f64>,
    #[serde(default)]
    pub emi_gst: Option<f64>,
}

impl NewExpense {
    /// Installment terms when installment mode is on
    pub fn installment_terms(&self) -> Result<Option<InstallmentTerms>> {
        if !self.is_emi {
            return Ok(None);
        }
        let tenure = self.emi_tenure.ok_or_else(|| {
            LedgerError::invalid("emi_tenure", "required for installment expenses")
        })?;
        Ok(Some(InstallmentTerms {
            principal: self.amount,
            tenure,
            annual_rate_percent: self.emi_interest_rate.unwrap_or(0.0),
            processing_fees: self.emi_processing_fees.unwrap_or(0.0),
            gst: self.emi_gst.unwrap_or(0.0),
        }))
    }

    /// Build the record to store. The id is assigned by storage.
    pub fn build(self, now: Timestamp) -> Result<Expense> {
        let (amount, kind) = match self.installment_terms()? {
            Some(terms) => {
                let plan = InstallmentPlan::new(terms)?;
                (plan.total_amount(), ExpenseKind::Installment(plan))
            }
            None => (self.amount, ExpenseKind::OneTime),
        };

        let expense = Expense {
            id: ExpenseId::default(),
            title: self.title,
            amount,
            category: self.category,
            date: self.date,
            description: self.description,
            payment_mode_id: self.payment_mode_id,
            kind,
            payment: PaymentState::default(),
            created_at: now,
            updated_at: None,
        };
        expense.validate()?;
        Ok(expense)
    }
}

/// Partial update of an expense. Absent fields keep their stored value.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseUpdate {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub date: Option<Date>,
    pub description: Option<String>,
    pub payment_mode_id: Option<PaymentModeId>,
    pub is_emi: Option<bool>,
    pub emi_tenure: Option<u32>,
    pub emi_interest_rate: Option<f64>,
    pub emi_processing_fees: Option<f64>,
    pub emi_gst: Option<f64>,
}

impl ExpenseUpdate {
    fn touches_installment_terms(&self) -> bool {
        self.amount.is_some()
            || self.emi_tenure.is_some()
            || self.emi_interest_rate.is_some()
            || self.emi_processing_fees.is_some()
            || self.emi_gst.is_some()
    }
}
