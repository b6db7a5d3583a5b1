use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::DtMoneyError;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for DtMoneyError to implement IntoResponse
pub struct ApiError(pub DtMoneyError);

impl From<DtMoneyError> for ApiError {
    fn from(err: DtMoneyError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            DtMoneyError::InvalidInput(..) | DtMoneyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            DtMoneyError::TransactionNotFound(_) => StatusCode::NOT_FOUND,
            DtMoneyError::UnexpectedStatus { .. } | DtMoneyError::RequestFailed(_) | DtMoneyError::InvalidResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            DtMoneyError::StorageError(_) | DtMoneyError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let error_message = match self.0 {
            DtMoneyError::InvalidInput(_, detail) => detail.description,
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
