use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Outcome,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome",
        }
    }
}

/// A transaction as stored by the backend. `id` and `created_at` come from the server.
///
/// `created_at` is kept exactly as the backend sent it (any ISO-8601 form).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u64,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub price: f64,
    pub category: String,
    pub created_at: String,
}

/// What a caller supplies to create a transaction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateTransactionInput {
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub price: f64,
    pub category: String,
}

impl CreateTransactionInput {
    pub fn stamp(self, created_at: DateTime<Utc>) -> NewTransaction {
        NewTransaction {
            description: self.description,
            kind: self.kind,
            category: self.category,
            price: self.price,
            created_at,
        }
    }
}

/// Body of `POST /transactions`: the caller's input stamped with a client-side `createdAt`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl NewTransaction {
    pub fn into_transaction(self, id: u64) -> Transaction {
        Transaction {
            id,
            description: self.description,
            kind: self.kind,
            price: self.price,
            category: self.category,
            created_at: self.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}
