pub mod bills;
pub mod budgets;
pub mod dashboard;
pub mod emi;
pub mod expenses;
pub mod payment_modes;

pub use bills::*;
pub use budgets::*;
pub use dashboard::*;
pub use emi::*;
pub use expenses::*;
pub use payment_modes::*;

use jiff::civil::Date;

pub type DbConn = std::sync::Arc<std::sync::Mutex<rusqlite::Connection>>;

/// Today's date in the server's time zone
fn today() -> Date {
    jiff::Zoned::now().date()
}
