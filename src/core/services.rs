use crate::core::errors::DtMoneyError;
use crate::core::models::{
    query::{SortField, SortOrder, TransactionQuery},
    transaction::{NewTransaction, Transaction},
};
use crate::infrastructure::storage::Storage;
use chrono::{DateTime, NaiveDateTime, Utc};
use std::cmp::Ordering;
use tracing::{debug, info, warn};

/// Backend side of `/transactions`: filtering, sorting and validated inserts over a `Storage`.
pub struct TransactionService<S: Storage> {
    storage: S,
}

impl<S: Storage> TransactionService<S> {
    pub fn new(storage: S) -> Self {
        TransactionService { storage }
    }

    pub async fn list_transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, DtMoneyError> {
        let sort = query.sort.as_deref().map(SortField::parse).transpose()?;
        let mut transactions = self.storage.list_transactions().await?;

        if let Some(term) = query.q.as_deref().filter(|q| !q.is_empty()) {
            let term = term.to_lowercase();
            transactions.retain(|tx| matches_term(tx, &term));
        }

        if let Some(field) = sort {
            let order = query.order.unwrap_or_default();
            transactions.sort_by(|a, b| {
                let ordering = compare_by(field, a, b);
                match order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        debug!("Listing {} transactions for {:?}", transactions.len(), query);
        Ok(transactions)
    }

    pub async fn get_transaction(&self, transaction_id: u64) -> Result<Transaction, DtMoneyError> {
        self.storage
            .get_transaction(transaction_id)
            .await?
            .ok_or(DtMoneyError::TransactionNotFound(transaction_id))
    }

    pub async fn create_transaction(&self, transaction: NewTransaction) -> Result<Transaction, DtMoneyError> {
        if let Err(e) = validate(&transaction) {
            warn!("Rejected transaction: {}", e);
            return Err(e);
        }
        let created = self.storage.insert_transaction(transaction).await?;
        info!("Created transaction {} ({})", created.id, created.description);
        Ok(created)
    }
}

fn validate(transaction: &NewTransaction) -> Result<(), DtMoneyError> {
    if transaction.description.trim().is_empty() {
        return Err(DtMoneyError::invalid_input(
            "description",
            "Missing description",
            "description must not be empty",
        ));
    }
    if transaction.category.trim().is_empty() {
        return Err(DtMoneyError::invalid_input(
            "category",
            "Missing category",
            "category must not be empty",
        ));
    }
    if !transaction.price.is_finite() || transaction.price < 0.0 {
        return Err(DtMoneyError::invalid_input(
            "price",
            "Invalid price",
            format!("price must be a non-negative number, got {}", transaction.price),
        ));
    }
    Ok(())
}

fn matches_term(tx: &Transaction, term: &str) -> bool {
    [tx.description.as_str(), tx.category.as_str(), tx.kind.as_str()]
        .iter()
        .any(|value| value.to_lowercase().contains(term))
}

fn compare_by(field: SortField, a: &Transaction, b: &Transaction) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Description => a.description.cmp(&b.description),
        SortField::Type => a.kind.as_str().cmp(b.kind.as_str()),
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::Category => a.category.cmp(&b.category),
        SortField::CreatedAt => created_at_key(&a.created_at).cmp(&created_at_key(&b.created_at)),
    }
}

/// Orders ISO-8601 timestamps by instant; zone-less stamps count as UTC and
/// unparseable ones sort first, by their text.
fn created_at_key(raw: &str) -> (Option<DateTime<Utc>>, &str) {
    let instant = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        });
    (instant, raw)
}
