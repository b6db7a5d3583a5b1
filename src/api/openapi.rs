use utoipa::OpenApi;

use crate::{
    api::models::ErrorResponse,
    core::models::{
        query::SortOrder,
        summary::Summary,
        transaction::{CreateTransactionInput, NewTransaction, Transaction, TransactionType},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::list_transactions,
        super::handlers::get_transaction,
        super::handlers::create_transaction
    ),
    components(schemas(
        Transaction,
        TransactionType,
        NewTransaction,
        CreateTransactionInput,
        SortOrder,
        Summary,
        ErrorResponse
    )),
    info(
        title = "dt-money API",
        description = "Development backend for the dt-money transaction store",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
