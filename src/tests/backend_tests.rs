use super::{create_test_api, init_tracing, transaction};
use crate::api::handlers::api_routes;
use crate::core::errors::DtMoneyError;
use crate::core::models::{
    query::{SortOrder, TransactionQuery},
    transaction::{CreateTransactionInput, NewTransaction, Transaction, TransactionType},
};
use crate::core::services::TransactionService;
use crate::core::store::TransactionStore;
use crate::infrastructure::api::TransactionsApi;
use crate::infrastructure::client::{HttpClient, in_process::RouterClient};
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use http::{Request, StatusCode};
use std::sync::Arc;

fn seed() -> Vec<Transaction> {
    vec![
        transaction(1, "Salary", TransactionType::Income, 5000.0, "Job", "2024-01-01T00:00:00Z"),
        transaction(2, "Groceries", TransactionType::Outcome, 320.5, "Food", "2024-01-03T12:00:00Z"),
        transaction(3, "Freelance", TransactionType::Income, 1200.0, "Side job", "2024-01-02T08:30:00Z"),
    ]
}

fn ids(transactions: &[Transaction]) -> Vec<u64> {
    transactions.iter().map(|tx| tx.id).collect()
}

#[tokio::test]
async fn lists_newest_first() {
    init_tracing();
    let api = create_test_api(seed());

    let listed = api
        .list_transactions(&TransactionQuery::newest_first(None))
        .await
        .unwrap();

    assert_eq!(ids(&listed), vec![2, 3, 1]);
}

#[tokio::test]
async fn filter_matches_description_category_and_type_case_insensitively() {
    let api = create_test_api(seed());

    let by_category = api
        .list_transactions(&TransactionQuery::newest_first(Some("JOB")))
        .await
        .unwrap();
    assert_eq!(ids(&by_category), vec![3, 1]);

    let by_type = api
        .list_transactions(&TransactionQuery::newest_first(Some("outcome")))
        .await
        .unwrap();
    assert_eq!(ids(&by_type), vec![2]);

    let none = api
        .list_transactions(&TransactionQuery::newest_first(Some("rent")))
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn sorts_by_any_field_ascending_by_default() {
    let api = create_test_api(seed());

    let by_price = api
        .list_transactions(&TransactionQuery {
            sort: Some("price".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(ids(&by_price), vec![2, 3, 1]);

    let by_description_desc = api
        .list_transactions(&TransactionQuery {
            sort: Some("description".to_string()),
            order: Some(SortOrder::Desc),
            q: None,
        })
        .await
        .unwrap();
    assert_eq!(ids(&by_description_desc), vec![1, 2, 3]);

    let unsorted = api.list_transactions(&TransactionQuery::default()).await.unwrap();
    assert_eq!(ids(&unsorted), vec![1, 2, 3]);
}

#[tokio::test]
async fn unknown_sort_field_is_rejected() {
    let api = create_test_api(seed());

    let err = api
        .list_transactions(&TransactionQuery {
            sort: Some("amount".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DtMoneyError::UnexpectedStatus { status: 400, .. }));
}

#[tokio::test]
async fn create_assigns_next_id_and_keeps_client_timestamp() {
    let api = create_test_api(seed());
    let body = NewTransaction {
        description: "Coffee".to_string(),
        kind: TransactionType::Outcome,
        category: "Food".to_string(),
        price: 5.0,
        created_at: "2024-01-04T09:00:00Z".parse().unwrap(),
    };

    let created = api.create_transaction(&body).await.unwrap();

    assert_eq!(created, body.clone().into_transaction(4));
    let listed = api
        .list_transactions(&TransactionQuery::newest_first(None))
        .await
        .unwrap();
    assert_eq!(ids(&listed), vec![4, 2, 3, 1]);
}

#[tokio::test]
async fn invalid_create_is_rejected_with_400() {
    let api = create_test_api(Vec::new());
    let mut body = NewTransaction {
        description: "  ".to_string(),
        kind: TransactionType::Income,
        category: "Job".to_string(),
        price: 10.0,
        created_at: "2024-01-04T09:00:00Z".parse().unwrap(),
    };

    let err = api.create_transaction(&body).await.unwrap_err();
    assert!(matches!(err, DtMoneyError::UnexpectedStatus { status: 400, ref body } if body.contains("description")));

    body.description = "Bonus".to_string();
    body.price = -1.0;
    assert!(matches!(
        api.create_transaction(&body).await,
        Err(DtMoneyError::UnexpectedStatus { status: 400, .. })
    ));

    body.price = 10.0;
    body.category = String::new();
    assert!(api.create_transaction(&body).await.is_err());
}

#[tokio::test]
async fn create_responds_201_and_get_by_id_404s_when_absent() {
    let service = Arc::new(TransactionService::new(InMemoryStorage::with_transactions(seed()).unwrap()));
    let client = RouterClient::new(api_routes(service));

    let post = Request::post("/transactions")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(
            br#"{"description":"Coffee","type":"outcome","category":"Food","price":5,"createdAt":"2024-01-04T09:00:00Z"}"#
                .to_vec(),
        )
        .unwrap();
    let response = client.send(post).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let found = client
        .send(Request::get("/transactions/4").body(Vec::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(found.status(), StatusCode::OK);
    let tx: Transaction = serde_json::from_slice(found.body()).unwrap();
    assert_eq!(tx.description, "Coffee");

    let missing = client
        .send(Request::get("/transactions/99").body(Vec::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let error: serde_json::Value = serde_json::from_slice(missing.body()).unwrap();
    assert_eq!(error["error"], "Transaction 99 not found");
}

#[tokio::test]
async fn store_against_backend_follows_salary_then_coffee_scenario() {
    init_tracing();
    let api = create_test_api(vec![transaction(
        1,
        "Salary",
        TransactionType::Income,
        5000.0,
        "Job",
        "2024-01-01T00:00:00Z",
    )]);

    let store = TransactionStore::activate(api).await;
    assert_eq!(ids(&store.transactions()), vec![1]);
    assert_eq!(store.transactions()[0].description, "Salary");

    let created = store
        .create_transaction(CreateTransactionInput {
            description: "Coffee".to_string(),
            kind: TransactionType::Outcome,
            price: 5.0,
            category: "Food".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(created.id, 2);
    assert_eq!(ids(&store.transactions()), vec![2, 1]);

    store.fetch_transactions(Some("food")).await.unwrap();
    assert_eq!(ids(&store.transactions()), vec![2]);
}
