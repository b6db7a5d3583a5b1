use crate::core::errors::DtMoneyError;
use crate::core::models::transaction::{NewTransaction, Transaction};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::debug;

struct Table {
    transactions: Vec<Transaction>,
    next_id: u64,
}

pub struct InMemoryStorage {
    table: Mutex<Table>,
}

/// Seed data: a bare array or a json-server style `{ "transactions": [...] }` document.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeedFile {
    Database { transactions: Vec<Transaction> },
    List(Vec<Transaction>),
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            table: Mutex::new(Table {
                transactions: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn with_transactions(transactions: Vec<Transaction>) -> Result<Self, DtMoneyError> {
        let next_id = match transactions.iter().map(|tx| tx.id).max() {
            Some(max_id) => max_id
                .checked_add(1)
                .ok_or_else(|| DtMoneyError::StorageError(format!("No id left after seeded id {}", max_id)))?,
            None => 1,
        };
        Ok(InMemoryStorage {
            table: Mutex::new(Table { transactions, next_id }),
        })
    }

    pub fn from_json(data: &str) -> Result<Self, DtMoneyError> {
        let seed: SeedFile = serde_json::from_str(data)
            .map_err(|e| DtMoneyError::StorageError(format!("Seed data is not valid: {}", e)))?;
        let transactions = match seed {
            SeedFile::Database { transactions } | SeedFile::List(transactions) => transactions,
        };
        Self::with_transactions(transactions)
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, DtMoneyError> {
        Ok(self.table.lock().await.transactions.clone())
    }

    async fn get_transaction(&self, transaction_id: u64) -> Result<Option<Transaction>, DtMoneyError> {
        let table = self.table.lock().await;
        Ok(table.transactions.iter().find(|tx| tx.id == transaction_id).cloned())
    }

    async fn insert_transaction(&self, transaction: NewTransaction) -> Result<Transaction, DtMoneyError> {
        let mut table = self.table.lock().await;
        let id = table.next_id;
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| DtMoneyError::StorageError("Transaction ids exhausted".to_string()))?;
        let stored = transaction.into_transaction(id);
        table.transactions.push(stored.clone());
        debug!("Stored transaction {}", id);
        Ok(stored)
    }
}
