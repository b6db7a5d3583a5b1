use crate::core::errors::DtMoneyError;
use crate::core::models::transaction::{NewTransaction, Transaction};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    /// All transactions in insertion order.
    async fn list_transactions(&self) -> Result<Vec<Transaction>, DtMoneyError>;
    async fn get_transaction(&self, transaction_id: u64) -> Result<Option<Transaction>, DtMoneyError>;
    /// Assigns the next id and stores the record.
    async fn insert_transaction(&self, transaction: NewTransaction) -> Result<Transaction, DtMoneyError>;
}

pub mod in_memory;
