//! SQLite persistence
//!
//! Dates are stored as `YYYY-MM-DD` text, timestamps as RFC 3339 text and
//! budget months as `YYYY-MM`. Installment plans are rebuilt from their stored
//! inputs on load; the derived `emi_*` columns exist for SQL-side reporting.

pub mod budgets;
pub mod expenses;
pub mod payment_modes;

use std::path::Path;
use std::str::FromStr;

use rusqlite::types::Type;
use rusqlite::{Connection, Row};

/// Open the database at `path`. `:memory:` opens a private in-memory database.
pub fn open(path: &Path) -> Result<Connection, rusqlite::Error> {
    if path.as_os_str() == ":memory:" {
        Connection::open_in_memory()
    } else {
        Connection::open(path)
    }
}

pub fn init_db(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS payment_modes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            type TEXT NOT NULL DEFAULT 'credit_card',
            icon TEXT NOT NULL DEFAULT 'CreditCard',
            color TEXT NOT NULL DEFAULT '#FF6B6B',
            created_at TEXT NOT NULL,
            updated_at TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            amount REAL NOT NULL,
            category TEXT NOT NULL,
            date TEXT NOT NULL,
            description TEXT,
            payment_mode_id INTEGER NOT NULL,
            is_emi INTEGER NOT NULL DEFAULT 0,
            emi_tenure INTEGER,
            emi_processing_fees REAL,
            emi_interest_rate REAL,
            emi_gst REAL,
            emi_monthly_amount REAL,
            emi_total_amount REAL,
            emi_principal_amount REAL,
            emi_total_interest REAL,
            is_paid INTEGER NOT NULL DEFAULT 0,
            paid_date TEXT,
            paid_amount REAL,
            created_at TEXT NOT NULL,
            updated_at TEXT,
            FOREIGN KEY (payment_mode_id) REFERENCES payment_modes(id)
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_expenses_category ON expenses(category)",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS budgets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category TEXT NOT NULL,
            amount REAL NOT NULL,
            month TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT
        )",
        [],
    )?;

    Ok(())
}

/// Read a text column and parse it
fn parse_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let text: String = row.get(idx)?;
    text.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Read a nullable text column and parse it
fn parse_optional_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let text: Option<String> = row.get(idx)?;
    text.map(|t| {
        t.parse()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    })
    .transpose()
}

#[cfg(test)]
pub(crate) mod test_support {
    use jiff::Timestamp;
    use rusqlite::Connection;
    use spendlog_core::model::{PaymentMode, PaymentModeId, PaymentModeKind};

    pub fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        super::init_db(&conn).unwrap();
        conn
    }

    pub fn seed_payment_mode(conn: &Connection, name: &str) -> PaymentMode {
        let mode = PaymentMode {
            id: PaymentModeId::default(),
            name: name.to_string(),
            kind: PaymentModeKind::CreditCard,
            icon: "CreditCard".to_string(),
            color: "#FF6B6B".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: None,
        };
        super::payment_modes::insert(conn, &mode).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_db_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        init_db(&conn).unwrap();

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'
                 AND name IN ('payment_modes', 'expenses', 'budgets')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 3);
    }

    #[test]
    fn test_foreign_keys_enforced() {
        let conn = test_support::memory_db();
        let result = conn.execute(
            "INSERT INTO expenses (title, amount, category, date, payment_mode_id, created_at)
             VALUES ('x', 1.0, 'Food', '2025-01-01', 99, '2025-01-01T00:00:00Z')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_open_on_disk_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spendlog.db");
        {
            let conn = open(&path).unwrap();
            init_db(&conn).unwrap();
        }
        assert!(path.exists());

        let conn = open(&path).unwrap();
        init_db(&conn).unwrap();
    }
}
