//! Identifiers for stored records
//!
//! Each record type has its own ID type so an expense id can never be passed
//! where a payment mode id is expected. Values are SQLite rowids.

use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

/// Identifier of an expense
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct ExpenseId(pub i64);

/// Identifier of a payment mode (card, bank account, UPI handle, ...)
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct PaymentModeId(pub i64);

/// Identifier of a monthly budget
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct BudgetId(pub i64);
