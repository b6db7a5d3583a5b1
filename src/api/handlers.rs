use crate::{
    api::models::*,
    core::{
        models::{
            query::TransactionQuery,
            transaction::{NewTransaction, Transaction},
        },
        services::TransactionService,
    },
    infrastructure::storage::in_memory::InMemoryStorage,
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
};

use std::sync::Arc;

// Define API routes
pub fn api_routes(service: Arc<TransactionService<InMemoryStorage>>) -> Router {
    Router::new()
        .route(
            "/transactions",
            axum::routing::get(list_transactions).post(create_transaction),
        )
        .route("/transactions/{transaction_id}", axum::routing::get(get_transaction))
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "/transactions",
    params(TransactionQuery),
    responses(
        (status = 200, description = "Transactions matching the query", body = [Transaction]),
        (status = 400, description = "Bad query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn list_transactions(
    State(service): State<Arc<TransactionService<InMemoryStorage>>>,
    Query(query): Query<TransactionQuery>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let transactions = service.list_transactions(&query).await?;
    Ok(Json(transactions))
}

#[utoipa::path(
    get,
    path = "/transactions/{transaction_id}",
    params(
        ("transaction_id" = u64, Path, description = "ID of the transaction to retrieve")
    ),
    responses(
        (status = 200, description = "Transaction retrieved successfully", body = Transaction),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_transaction(
    State(service): State<Arc<TransactionService<InMemoryStorage>>>,
    Path(transaction_id): Path<u64>,
) -> Result<Json<Transaction>, ApiError> {
    let transaction = service.get_transaction(transaction_id).await?;
    Ok(Json(transaction))
}

#[utoipa::path(
    post,
    path = "/transactions",
    request_body = NewTransaction,
    responses(
        (status = 201, description = "Transaction created", body = Transaction),
        (status = 400, description = "Invalid transaction", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn create_transaction(
    State(service): State<Arc<TransactionService<InMemoryStorage>>>,
    Json(req): Json<NewTransaction>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let transaction = service.create_transaction(req).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}
