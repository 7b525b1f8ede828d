pub mod expo;
pub mod store;
