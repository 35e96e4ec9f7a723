pub mod budgets;
pub mod dashboard;
pub mod dependents;
pub mod reports;
pub mod transactions;
