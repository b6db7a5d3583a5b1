pub mod rest;

use crate::core::errors::DtMoneyError;
use crate::core::models::{
    query::TransactionQuery,
    transaction::{NewTransaction, Transaction},
};
use async_trait::async_trait;

/// The two backend calls the transaction store depends on.
#[async_trait]
pub trait TransactionsApi: Send + Sync {
    async fn list_transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, DtMoneyError>;
    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction, DtMoneyError>;
}
