pub mod bills;
pub mod budgets;
pub mod dashboard;
pub mod emi;
pub mod expenses;
pub mod payment_modes;

pub use bills::bill_routes;
pub use budgets::budget_routes;
pub use dashboard::dashboard_routes;
pub use emi::emi_routes;
pub use expenses::expense_routes;
pub use payment_modes::payment_mode_routes;
