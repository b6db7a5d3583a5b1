mod backend_tests;

use crate::api::handlers::api_routes;
use crate::core::errors::DtMoneyError;
use crate::core::models::{
    query::TransactionQuery,
    transaction::{NewTransaction, Transaction, TransactionType},
};
use crate::core::services::TransactionService;
use crate::infrastructure::api::{TransactionsApi, rest::HttpTransactionsApi};
use crate::infrastructure::client::in_process::RouterClient;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn transaction(id: u64, description: &str, kind: TransactionType, price: f64, category: &str, at: &str) -> Transaction {
    Transaction {
        id,
        description: description.to_string(),
        kind,
        price,
        category: category.to_string(),
        created_at: at.to_string(),
    }
}

/// Dev backend seeded with `seed`, reached through the in-process router.
pub fn create_test_api(seed: Vec<Transaction>) -> HttpTransactionsApi<RouterClient> {
    let service = Arc::new(TransactionService::new(InMemoryStorage::with_transactions(seed).unwrap()));
    HttpTransactionsApi::new(RouterClient::new(api_routes(service)), "http://dtmoney.test")
}

enum Reply<T> {
    Ready(Result<T, DtMoneyError>),
    Gated(oneshot::Receiver<Result<T, DtMoneyError>>),
}

impl<T> Reply<T> {
    async fn resolve(self) -> Result<T, DtMoneyError> {
        match self {
            Reply::Ready(result) => result,
            Reply::Gated(rx) => rx
                .await
                .unwrap_or_else(|_| Err(DtMoneyError::RequestFailed("gate dropped".to_string()))),
        }
    }
}

#[derive(Default)]
struct Script {
    list_replies: VecDeque<Reply<Vec<Transaction>>>,
    create_replies: VecDeque<Reply<Transaction>>,
    list_calls: Vec<TransactionQuery>,
    create_calls: Vec<NewTransaction>,
}

/// `TransactionsApi` answering from a queue of scripted replies and recording every call.
#[derive(Clone, Default)]
pub struct ScriptedApi {
    script: Arc<Mutex<Script>>,
}

impl ScriptedApi {
    pub fn reply_list(&self, result: Result<Vec<Transaction>, DtMoneyError>) {
        self.script.lock().unwrap().list_replies.push_back(Reply::Ready(result));
    }

    pub fn gate_list(&self) -> oneshot::Sender<Result<Vec<Transaction>, DtMoneyError>> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().unwrap().list_replies.push_back(Reply::Gated(rx));
        tx
    }

    pub fn reply_create(&self, result: Result<Transaction, DtMoneyError>) {
        self.script.lock().unwrap().create_replies.push_back(Reply::Ready(result));
    }

    pub fn gate_create(&self) -> oneshot::Sender<Result<Transaction, DtMoneyError>> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().unwrap().create_replies.push_back(Reply::Gated(rx));
        tx
    }

    pub fn list_calls(&self) -> Vec<TransactionQuery> {
        self.script.lock().unwrap().list_calls.clone()
    }

    pub fn create_calls(&self) -> Vec<NewTransaction> {
        self.script.lock().unwrap().create_calls.clone()
    }
}

#[async_trait]
impl TransactionsApi for ScriptedApi {
    async fn list_transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, DtMoneyError> {
        let reply = {
            let mut script = self.script.lock().unwrap();
            script.list_calls.push(query.clone());
            script.list_replies.pop_front()
        };
        match reply {
            Some(reply) => reply.resolve().await,
            None => Err(DtMoneyError::RequestFailed("no scripted listing".to_string())),
        }
    }

    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction, DtMoneyError> {
        let reply = {
            let mut script = self.script.lock().unwrap();
            script.create_calls.push(transaction.clone());
            script.create_replies.pop_front()
        };
        match reply {
            Some(reply) => reply.resolve().await,
            None => Err(DtMoneyError::RequestFailed("no scripted create".to_string())),
        }
    }
}
