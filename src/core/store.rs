use crate::core::errors::DtMoneyError;
use crate::core::models::{
    query::TransactionQuery,
    summary::Summary,
    transaction::{CreateTransactionInput, Transaction},
};
use crate::infrastructure::api::TransactionsApi;
use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Session cache of the user's transactions.
///
/// The held list is the last successful listing from the backend, with the
/// records of successful creates prepended since then. Every change is
/// published to subscribers; a failed call leaves the list untouched.
///
/// Concurrent refreshes are not sequenced: whichever response arrives last wins.
pub struct TransactionStore<A: TransactionsApi> {
    api: A,
    transactions: watch::Sender<Vec<Transaction>>,
}

impl<A: TransactionsApi> TransactionStore<A> {
    /// An empty store that has not talked to the backend yet.
    pub fn new(api: A) -> Self {
        let (transactions, _) = watch::channel(Vec::new());
        TransactionStore { api, transactions }
    }

    /// Creates the store and performs the initial unfiltered refresh.
    ///
    /// A failed initial load is logged and leaves the store empty; callers can
    /// retry with [`fetch_transactions`](Self::fetch_transactions).
    pub async fn activate(api: A) -> Self {
        let store = Self::new(api);
        if let Err(e) = store.fetch_transactions(None).await {
            warn!("Initial transaction load failed: {}", e);
        }
        store
    }

    /// Snapshot of the current list.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.borrow().clone()
    }

    /// Receiver that observes every replacement or prepend of the list.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Transaction>> {
        self.transactions.subscribe()
    }

    pub fn summary(&self) -> Summary {
        Summary::from_transactions(&self.transactions.borrow())
    }

    /// Replaces the list with the backend's newest-first listing, filtered by
    /// `query` when it is non-empty.
    pub async fn fetch_transactions(&self, query: Option<&str>) -> Result<(), DtMoneyError> {
        let query = TransactionQuery::newest_first(query);
        debug!("Refreshing transactions with filter {:?}", query.q);
        let transactions = self.api.list_transactions(&query).await?;
        info!("Loaded {} transactions", transactions.len());
        self.transactions.send_replace(transactions);
        Ok(())
    }

    /// Submits `input` stamped with the current time and, once the backend
    /// confirms it, puts the returned record at the head of the list.
    pub async fn create_transaction(&self, input: CreateTransactionInput) -> Result<Transaction, DtMoneyError> {
        let body = input.stamp(Utc::now());
        let created = self.api.create_transaction(&body).await?;
        info!("Transaction {} created", created.id);
        self.transactions.send_modify(|list| list.insert(0, created.clone()));
        Ok(created)
    }
}
