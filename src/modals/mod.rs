pub mod budget;
pub mod category;
pub mod transaction;
