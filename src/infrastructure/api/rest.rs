use crate::core::errors::DtMoneyError;
use crate::core::models::{
    query::TransactionQuery,
    transaction::{NewTransaction, Transaction},
};
use crate::config::CONFIG;
use crate::infrastructure::api::TransactionsApi;
use crate::infrastructure::client::{HttpClient, network::ReqwestClient};
use async_trait::async_trait;
use http::{Method, Request, Response, header};
use serde::de::DeserializeOwned;
use tracing::debug;

const TRANSACTIONS_PATH: &str = "transactions";

/// `TransactionsApi` over a JSON REST backend.
pub struct HttpTransactionsApi<C: HttpClient> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> HttpTransactionsApi<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpTransactionsApi { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn list_request(&self, query: &TransactionQuery) -> Result<Request<Vec<u8>>, DtMoneyError> {
        let query_string = query.to_query_string()?;
        let uri = if query_string.is_empty() {
            format!("{}/{}", self.base_url, TRANSACTIONS_PATH)
        } else {
            format!("{}/{}?{}", self.base_url, TRANSACTIONS_PATH, query_string)
        };
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::ACCEPT, "application/json")
            .body(Vec::new())
            .map_err(|e| DtMoneyError::InvalidRequest(e.to_string()))
    }

    pub(crate) fn create_request(&self, transaction: &NewTransaction) -> Result<Request<Vec<u8>>, DtMoneyError> {
        let body = serde_json::to_vec(transaction)
            .map_err(|e| DtMoneyError::InvalidRequest(format!("Body serialization failed: {}", e)))?;
        Request::builder()
            .method(Method::POST)
            .uri(format!("{}/{}", self.base_url, TRANSACTIONS_PATH))
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .map_err(|e| DtMoneyError::InvalidRequest(e.to_string()))
    }
}

impl HttpTransactionsApi<ReqwestClient> {
    /// Network client pointed at `API_URL`.
    pub fn from_config() -> Self {
        Self::new(ReqwestClient::default(), CONFIG.api_url.clone())
    }
}

fn decode<T: DeserializeOwned>(response: Response<Vec<u8>>) -> Result<T, DtMoneyError> {
    let status = response.status();
    if !status.is_success() {
        return Err(DtMoneyError::UnexpectedStatus {
            status: status.as_u16(),
            body: String::from_utf8_lossy(response.body()).into_owned(),
        });
    }
    serde_json::from_slice(response.body()).map_err(|e| DtMoneyError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl<C: HttpClient> TransactionsApi for HttpTransactionsApi<C> {
    async fn list_transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, DtMoneyError> {
        let request = self.list_request(query)?;
        debug!("GET {}", request.uri());
        let response = self.client.send(request).await?;
        decode(response)
    }

    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction, DtMoneyError> {
        let request = self.create_request(transaction)?;
        debug!("POST {}", request.uri());
        let response = self.client.send(request).await?;
        decode(response)
    }
}
