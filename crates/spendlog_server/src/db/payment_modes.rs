use rusqlite::{Connection, OptionalExtension, Row, params};
use spendlog_core::model::{PaymentMode, PaymentModeId};

use super::{parse_column, parse_optional_column};

const COLUMNS: &str = "id, name, type, icon, color, created_at, updated_at";

fn payment_mode_from_row(row: &Row<'_>) -> rusqlite::Result<PaymentMode> {
    Ok(PaymentMode {
        id: PaymentModeId(row.get(0)?),
        name: row.get(1)?,
        kind: parse_column(row, 2)?,
        icon: row.get(3)?,
        color: row.get(4)?,
        created_at: parse_column(row, 5)?,
        updated_at: parse_optional_column(row, 6)?,
    })
}

pub fn list(conn: &Connection) -> rusqlite::Result<Vec<PaymentMode>> {
    let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM payment_modes ORDER BY id"))?;
    let modes = stmt.query_map([], payment_mode_from_row)?;
    modes.collect()
}

pub fn get(conn: &Connection, id: PaymentModeId) -> rusqlite::Result<Option<PaymentMode>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM payment_modes WHERE id = ?1"),
        [id.0],
        payment_mode_from_row,
    )
    .optional()
}

pub fn find_by_name(conn: &Connection, name: &str) -> rusqlite::Result<Option<PaymentMode>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM payment_modes WHERE name = ?1"),
        [name],
        payment_mode_from_row,
    )
    .optional()
}

/// Store a new payment mode; the returned copy carries the assigned id
pub fn insert(conn: &Connection, mode: &PaymentMode) -> rusqlite::Result<PaymentMode> {
    conn.execute(
        "INSERT INTO payment_modes (name, type, icon, color, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            mode.name,
            mode.kind.as_str(),
            mode.icon,
            mode.color,
            mode.created_at.to_string(),
            mode.updated_at.map(|t| t.to_string()),
        ],
    )?;
    Ok(PaymentMode {
        id: PaymentModeId(conn.last_insert_rowid()),
        ..mode.clone()
    })
}

pub fn update(conn: &Connection, mode: &PaymentMode) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE payment_modes SET name = ?1, type = ?2, icon = ?3, color = ?4, updated_at = ?5
         WHERE id = ?6",
        params![
            mode.name,
            mode.kind.as_str(),
            mode.icon,
            mode.color,
            mode.updated_at.map(|t| t.to_string()),
            mode.id.0,
        ],
    )
}

pub fn delete(conn: &Connection, id: PaymentModeId) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM payment_modes WHERE id = ?1", [id.0])
}
