use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::errors::DtMoneyError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Fields a listing can be sorted by, named as they appear on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Id,
    Description,
    Type,
    Price,
    Category,
    CreatedAt,
}

impl SortField {
    pub fn parse(name: &str) -> Result<Self, DtMoneyError> {
        match name {
            "id" => Ok(SortField::Id),
            "description" => Ok(SortField::Description),
            "type" => Ok(SortField::Type),
            "price" => Ok(SortField::Price),
            "category" => Ok(SortField::Category),
            "createdAt" => Ok(SortField::CreatedAt),
            other => Err(DtMoneyError::invalid_input(
                "_sort",
                "Unknown sort field",
                format!("cannot sort by `{}`", other),
            )),
        }
    }
}

/// Query string of `GET /transactions`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TransactionQuery {
    /// Field to sort by
    #[serde(rename = "_sort", default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// `asc` or `desc`
    #[serde(rename = "_order", default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// Free-text filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl TransactionQuery {
    /// Newest first, filtered by `q` when it is non-empty.
    pub fn newest_first(q: Option<&str>) -> Self {
        TransactionQuery {
            sort: Some("createdAt".to_string()),
            order: Some(SortOrder::Desc),
            q: q.filter(|q| !q.is_empty()).map(str::to_string),
        }
    }

    pub fn to_query_string(&self) -> Result<String, DtMoneyError> {
        serde_urlencoded::to_string(self).map_err(|e| DtMoneyError::InvalidRequest(format!("Query encoding failed: {}", e)))
    }
}
