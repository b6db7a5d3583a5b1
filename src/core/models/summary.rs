use serde::Serialize;
use utoipa::ToSchema;

use super::transaction::{Transaction, TransactionType};

/// Totals over a list of transactions.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, ToSchema)]
pub struct Summary {
    pub income: f64,
    pub outcome: f64,
    pub total: f64,
}

impl Summary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut summary = transactions.iter().fold(Summary::default(), |mut acc, tx| {
            match tx.kind {
                TransactionType::Income => acc.income += tx.price,
                TransactionType::Outcome => acc.outcome += tx.price,
            }
            acc
        });
        summary.total = summary.income - summary.outcome;
        summary
    }
}
