use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ids::PaymentModeId;

/// The instrument a payment mode represents
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentModeKind {
    #[default]
    CreditCard,
    DebitCard,
    BankAccount,
    Upi,
    Cash,
    Wallet,
    #[serde(other)]
    Other,
}

impl PaymentModeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentModeKind::CreditCard => "credit_card",
            PaymentModeKind::DebitCard => "debit_card",
            PaymentModeKind::BankAccount => "bank_account",
            PaymentModeKind::Upi => "upi",
            PaymentModeKind::Cash => "cash",
            PaymentModeKind::Wallet => "wallet",
            PaymentModeKind::Other => "other",
        }
    }
}

impl fmt::Display for PaymentModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentModeKind {
    type Err = std::convert::Infallible;

    /// Unknown kinds map to `Other` so older rows always load.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "credit_card" => PaymentModeKind::CreditCard,
            "debit_card" => PaymentModeKind::DebitCard,
            "bank_account" => PaymentModeKind::BankAccount,
            "upi" => PaymentModeKind::Upi,
            "cash" => PaymentModeKind::Cash,
            "wallet" => PaymentModeKind::Wallet,
            _ => PaymentModeKind::Other,
        })
    }
}

/// An account or instrument expenses are paid through. Bills are grouped by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMode {
    pub id: PaymentModeId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PaymentModeKind,
    pub icon: String,
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}
