use jiff::Timestamp;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};
use spendlog_core::amortization::InstallmentTerms;
use spendlog_core::model::{
    Expense, ExpenseId, ExpenseKind, InstallmentPlan, PaymentModeId, PaymentState,
};

use super::{parse_column, parse_optional_column};
use crate::error::{ApiError, ApiResult};
use crate::models::ExpenseQuery;

const COLUMNS: &str = "id, title, amount, category, date, description, payment_mode_id, \
    is_emi, emi_tenure, emi_processing_fees, emi_interest_rate, emi_gst, emi_principal_amount, \
    is_paid, paid_date, paid_amount, created_at, updated_at";

fn expense_from_row(row: &Row<'_>) -> rusqlite::Result<Expense> {
    let id = ExpenseId(row.get(0)?);
    let amount: f64 = row.get(2)?;
    let is_emi: bool = row.get(7)?;

    let kind = if is_emi {
        let tenure: Option<i64> = row.get(8)?;
        let tenure = tenure.filter(|t| *t > 0).and_then(|t| u32::try_from(t).ok());
        match tenure {
            Some(tenure) => {
                let processing_fees: Option<f64> = row.get(9)?;
                let interest_rate: Option<f64> = row.get(10)?;
                let gst: Option<f64> = row.get(11)?;
                let principal: Option<f64> = row.get(12)?;
                let terms = InstallmentTerms {
                    principal: principal.unwrap_or(amount),
                    tenure,
                    annual_rate_percent: interest_rate.unwrap_or(0.0),
                    processing_fees: processing_fees.unwrap_or(0.0),
                    gst: gst.unwrap_or(0.0),
                };
                match InstallmentPlan::new(terms) {
                    Ok(plan) => ExpenseKind::Installment(plan),
                    Err(err) => {
                        tracing::warn!(expense_id = id.0, "Stored installment terms rejected: {err}");
                        ExpenseKind::IncompleteInstallment
                    }
                }
            }
            None => {
                tracing::warn!(expense_id = id.0, "Installment expense has no tenure");
                ExpenseKind::IncompleteInstallment
            }
        }
    } else {
        ExpenseKind::OneTime
    };

    Ok(Expense {
        id,
        title: row.get(1)?,
        amount,
        category: row.get(3)?,
        date: parse_column(row, 4)?,
        description: row.get(5)?,
        payment_mode_id: PaymentModeId(row.get(6)?),
        kind,
        payment: PaymentState {
            is_paid: row.get(13)?,
            paid_date: parse_optional_column(row, 14)?,
            paid_amount: row.get(15)?,
        },
        created_at: parse_column(row, 16)?,
        updated_at: parse_optional_column(row, 17)?,
    })
}

/// Derived and input `emi_*` columns of a plan, all NULL without one
#[derive(Default)]
struct EmiColumns {
    tenure: Option<u32>,
    processing_fees: Option<f64>,
    interest_rate: Option<f64>,
    gst: Option<f64>,
    monthly_amount: Option<f64>,
    total_amount: Option<f64>,
    principal_amount: Option<f64>,
    total_interest: Option<f64>,
}

impl EmiColumns {
    fn of(plan: Option<&InstallmentPlan>) -> Self {
        let Some(plan) = plan else {
            return Self::default();
        };
        Self {
            tenure: Some(plan.tenure()),
            processing_fees: Some(plan.processing_fees()),
            interest_rate: Some(plan.annual_rate_percent()),
            gst: Some(plan.gst()),
            monthly_amount: Some(plan.monthly_amount()),
            total_amount: Some(plan.total_amount()),
            principal_amount: Some(plan.principal()),
            total_interest: Some(plan.total_interest()),
        }
    }
}

fn query_expenses(
    conn: &Connection,
    sql: &str,
    params: Vec<Value>,
) -> rusqlite::Result<Vec<Expense>> {
    let mut stmt = conn.prepare(sql)?;
    let expenses = stmt.query_map(params_from_iter(params), expense_from_row)?;
    expenses.collect()
}

/// Expenses matching `query`, newest first
pub fn list(conn: &Connection, query: &ExpenseQuery) -> rusqlite::Result<Vec<Expense>> {
    let mut sql = format!("SELECT {COLUMNS} FROM expenses WHERE 1 = 1");
    let mut params = Vec::new();

    if let Some(start) = query.start_date {
        sql.push_str(" AND date >= ?");
        params.push(Value::Text(start.to_string()));
    }
    if let Some(end) = query.end_date {
        sql.push_str(" AND date <= ?");
        params.push(Value::Text(end.to_string()));
    }
    if let Some(category) = &query.category {
        sql.push_str(" AND category = ?");
        params.push(Value::Text(category.clone()));
    }
    if let Some(mode) = query.payment_mode_id {
        sql.push_str(" AND payment_mode_id = ?");
        params.push(Value::Integer(mode.0));
    }

    sql.push_str(" ORDER BY date DESC, id DESC LIMIT ? OFFSET ?");
    params.push(Value::Integer(i64::try_from(query.limit).unwrap_or(i64::MAX)));
    params.push(Value::Integer(i64::try_from(query.skip).unwrap_or(i64::MAX)));

    query_expenses(conn, &sql, params)
}

/// Every expense, newest first
pub fn list_all(conn: &Connection) -> rusqlite::Result<Vec<Expense>> {
    query_expenses(
        conn,
        &format!("SELECT {COLUMNS} FROM expenses ORDER BY date DESC, id DESC"),
        Vec::new(),
    )
}

/// Expenses flagged as installment purchases, usable terms or not
pub fn list_installments(
    conn: &Connection,
    skip: usize,
    limit: usize,
) -> rusqlite::Result<Vec<Expense>> {
    query_expenses(
        conn,
        &format!(
            "SELECT {COLUMNS} FROM expenses WHERE is_emi = 1
             ORDER BY date DESC, id DESC LIMIT ?1 OFFSET ?2"
        ),
        vec![
            Value::Integer(i64::try_from(limit).unwrap_or(i64::MAX)),
            Value::Integer(i64::try_from(skip).unwrap_or(i64::MAX)),
        ],
    )
}

pub fn get(conn: &Connection, id: ExpenseId) -> rusqlite::Result<Option<Expense>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM expenses WHERE id = ?1"),
        [id.0],
        expense_from_row,
    )
    .optional()
}

pub fn count_for_payment_mode(conn: &Connection, id: PaymentModeId) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM expenses WHERE payment_mode_id = ?1",
        [id.0],
        |row| row.get(0),
    )
}

/// Store a new expense; the returned copy carries the assigned id
pub fn insert(conn: &Connection, expense: &Expense) -> rusqlite::Result<Expense> {
    let emi = EmiColumns::of(expense.plan());
    conn.execute(
        "INSERT INTO expenses (
            title, amount, category, date, description, payment_mode_id,
            is_emi, emi_tenure, emi_processing_fees, emi_interest_rate, emi_gst,
            emi_monthly_amount, emi_total_amount, emi_principal_amount, emi_total_interest,
            is_paid, paid_date, paid_amount, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20)",
        params![
            expense.title,
            expense.amount,
            expense.category,
            expense.date.to_string(),
            expense.description,
            expense.payment_mode_id.0,
            expense.is_installment(),
            emi.tenure,
            emi.processing_fees,
            emi.interest_rate,
            emi.gst,
            emi.monthly_amount,
            emi.total_amount,
            emi.principal_amount,
            emi.total_interest,
            expense.payment.is_paid,
            expense.payment.paid_date.map(|d| d.to_string()),
            expense.payment.paid_amount,
            expense.created_at.to_string(),
            expense.updated_at.map(|t| t.to_string()),
        ],
    )?;
    Ok(Expense {
        id: ExpenseId(conn.last_insert_rowid()),
        ..expense.clone()
    })
}

/// Overwrite a stored expense.
///
/// The `emi_*` columns of an incomplete installment row are left as they are
/// so whatever was stored for it survives edits of its other fields.
pub fn update(conn: &Connection, expense: &Expense) -> rusqlite::Result<usize> {
    let updated = conn.execute(
        "UPDATE expenses SET title = ?1, amount = ?2, category = ?3, date = ?4,
            description = ?5, payment_mode_id = ?6, is_paid = ?7, paid_date = ?8,
            paid_amount = ?9, updated_at = ?10
         WHERE id = ?11",
        params![
            expense.title,
            expense.amount,
            expense.category,
            expense.date.to_string(),
            expense.description,
            expense.payment_mode_id.0,
            expense.payment.is_paid,
            expense.payment.paid_date.map(|d| d.to_string()),
            expense.payment.paid_amount,
            expense.updated_at.map(|t| t.to_string()),
            expense.id.0,
        ],
    )?;

    if updated > 0 && expense.kind != ExpenseKind::IncompleteInstallment {
        let emi = EmiColumns::of(expense.plan());
        conn.execute(
            "UPDATE expenses SET is_emi = ?1, emi_tenure = ?2, emi_processing_fees = ?3,
                emi_interest_rate = ?4, emi_gst = ?5, emi_monthly_amount = ?6,
                emi_total_amount = ?7, emi_principal_amount = ?8, emi_total_interest = ?9
             WHERE id = ?10",
            params![
                expense.is_installment(),
                emi.tenure,
                emi.processing_fees,
                emi.interest_rate,
                emi.gst,
                emi.monthly_amount,
                emi.total_amount,
                emi.principal_amount,
                emi.total_interest,
                expense.id.0,
            ],
        )?;
    }

    Ok(updated)
}

pub fn delete(conn: &Connection, id: ExpenseId) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM expenses WHERE id = ?1", [id.0])
}

/// Load an expense, apply `change` and store the result as one transaction.
///
/// The connection mutex is held by the caller for the whole call, so two
/// actions on the same record can never interleave.
pub fn modify<F>(
    conn: &mut Connection,
    id: ExpenseId,
    now: Timestamp,
    change: F,
) -> ApiResult<Expense>
where
    F: FnOnce(&Expense) -> spendlog_core::Result<Expense>,
{
    let tx = conn.transaction()?;
    let current = get(&tx, id)?.ok_or(ApiError::ExpenseNotFound(id.0))?;

    let mut next = change(&current)?;
    next.updated_at = Some(now);
    update(&tx, &next)?;

    tx.commit()?;
    Ok(next)
}
