use rusqlite::{Connection, OptionalExtension, Row, params};
use spendlog_core::model::{Budget, BudgetId};

use super::{parse_column, parse_optional_column};

const COLUMNS: &str = "id, category, amount, month, created_at, updated_at";

fn budget_from_row(row: &Row<'_>) -> rusqlite::Result<Budget> {
    Ok(Budget {
        id: BudgetId(row.get(0)?),
        category: row.get(1)?,
        amount: row.get(2)?,
        month: parse_column(row, 3)?,
        created_at: parse_column(row, 4)?,
        updated_at: parse_optional_column(row, 5)?,
    })
}

pub fn list(conn: &Connection) -> rusqlite::Result<Vec<Budget>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM budgets ORDER BY month DESC, category"
    ))?;
    let budgets = stmt.query_map([], budget_from_row)?;
    budgets.collect()
}

pub fn get(conn: &Connection, id: BudgetId) -> rusqlite::Result<Option<Budget>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM budgets WHERE id = ?1"),
        [id.0],
        budget_from_row,
    )
    .optional()
}

pub fn insert(conn: &Connection, budget: &Budget) -> rusqlite::Result<Budget> {
    conn.execute(
        "INSERT INTO budgets (category, amount, month, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            budget.category,
            budget.amount,
            budget.month.to_string(),
            budget.created_at.to_string(),
            budget.updated_at.map(|t| t.to_string()),
        ],
    )?;
    Ok(Budget {
        id: BudgetId(conn.last_insert_rowid()),
        ..budget.clone()
    })
}

pub fn update(conn: &Connection, budget: &Budget) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE budgets SET category = ?1, amount = ?2, month = ?3, updated_at = ?4 WHERE id = ?5",
        params![
            budget.category,
            budget.amount,
            budget.month.to_string(),
            budget.updated_at.map(|t| t.to_string()),
            budget.id.0,
        ],
    )
}

pub fn delete(conn: &Connection, id: BudgetId) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM budgets WHERE id = ?1", [id.0])
}
