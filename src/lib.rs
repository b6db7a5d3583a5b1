pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::DtMoneyError;
pub use crate::core::models::transaction::{CreateTransactionInput, Transaction, TransactionType};
pub use crate::core::store::TransactionStore;
pub use crate::infrastructure::api::{TransactionsApi, rest::HttpTransactionsApi};

#[cfg(test)]
mod tests; // Include integration tests
