// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use cashlog::api::{BudgetsApi, CategoriesApi, TagsApi, TransactionQuery, TransactionsApi};
use cashlog::models::{CategoryRequest, TagRequest, TransactionRequest, TransactionType};
use cashlog::stores::{CollectionStore, LoadState, WriteMode};
use chrono::NaiveDate;
use common::{FakeBackend, budget, category, client, tag, tx};
use reqwest::Method;
use rust_decimal::Decimal;
use serde_json::json;

fn request() -> TransactionRequest {
    TransactionRequest {
        transaction_date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
        transaction_type: TransactionType::Expense,
        original_amount: Decimal::from(12_000),
        original_currency: "KRW".into(),
        conversion_rate: None,
        category_id: 2,
        memo: Some("lunch".into()),
        tag_names: vec!["work".into()],
    }
}

#[test]
fn fetch_populates_and_marks_loaded() {
    let backend = FakeBackend::new();
    backend.reply(
        Method::GET,
        "/api/categories",
        200,
        json!([category(1, "Food"), category(2, "Transport")]),
    );
    let mut store = CollectionStore::new("categories", CategoriesApi::new(client(&backend)));
    assert_eq!(store.state(), LoadState::Idle);
    store.fetch_all();
    assert_eq!(store.state(), LoadState::Loaded);
    assert_eq!(store.items().len(), 2);
    assert_eq!(store.find(2).unwrap().name, "Transport");
    assert!(store.error().is_none());
}

#[test]
fn budgets_with_null_fields_still_load() {
    let backend = FakeBackend::new();
    let mut bare = budget(9, 2025, 4, 300_000, 80, vec![]);
    bare["alertThreshold"] = serde_json::Value::Null;
    bare["categories"] = serde_json::Value::Null;
    backend.reply(
        Method::GET,
        "/api/budgets",
        200,
        json!([bare, budget(10, 2025, 5, 100_000, 70, vec![category(1, "Food")])]),
    );
    let mut store = CollectionStore::new("budgets", BudgetsApi::new(client(&backend)));
    store.fetch_all();
    assert_eq!(store.state(), LoadState::Loaded);
    assert_eq!(store.items().len(), 2);
    let b = store.find(9).unwrap();
    assert_eq!(b.alert_threshold, Decimal::from(80));
    assert!(b.categories.is_empty());
}

#[test]
fn failed_fetch_keeps_previous_items() {
    let backend = FakeBackend::new();
    backend.reply(Method::GET, "/api/tags", 200, json!([tag(1, "work")]));
    backend.reply(Method::GET, "/api/tags", 503, json!({ "message": "maintenance" }));
    let mut store = CollectionStore::new("tags", TagsApi::new(client(&backend)));
    store.fetch_all();
    store.fetch_all();
    assert_eq!(store.state(), LoadState::Error);
    assert_eq!(store.error(), Some("maintenance"));
    assert_eq!(store.items().len(), 1);

    store.clear_error();
    assert!(store.error().is_none());
}

#[test]
fn add_refetches_by_default() {
    let backend = FakeBackend::new();
    backend.reply(Method::GET, "/api/transactions", 200, json!([]));
    backend.reply(
        Method::GET,
        "/api/transactions",
        200,
        json!([tx(9, "2025-01-20", "EXPENSE", 12_000, Some(category(2, "Food")), vec![])]),
    );
    backend.reply(
        Method::POST,
        "/api/transactions",
        201,
        tx(9, "2025-01-20", "EXPENSE", 12_000, Some(category(2, "Food")), vec![]),
    );
    let mut store = CollectionStore::new("transactions", TransactionsApi::new(client(&backend)));
    store.fetch_all();
    let created = store.add(&request()).unwrap();
    assert_eq!(created.id, 9);
    assert_eq!(backend.count(Method::GET, "/api/transactions"), 2);
    assert_eq!(store.items().len(), 1);

    let posted = backend
        .requests()
        .into_iter()
        .find(|r| r.method == Method::POST)
        .unwrap();
    let body = posted.body.unwrap();
    assert_eq!(body["transactionType"], "EXPENSE");
    assert_eq!(body["originalAmount"], 12000.0);
    assert_eq!(body["tagNames"], json!(["work"]));
    assert!(body.get("conversionRate").is_none());
}

#[test]
fn merge_mode_skips_the_refetch() {
    let backend = FakeBackend::new();
    backend.reply(Method::GET, "/api/categories", 200, json!([category(1, "Food")]));
    backend.reply(Method::PUT, "/api/categories/1", 200, category(1, "Groceries"));
    backend.reply(Method::POST, "/api/categories", 201, category(2, "Rent"));
    let mut store = CollectionStore::new("categories", CategoriesApi::new(client(&backend)))
        .with_write_mode(WriteMode::Merge);
    store.fetch_all();

    let req = |name: &str| CategoryRequest {
        name: name.into(),
        color: "#000000".into(),
    };
    store.update(1, &req("Groceries")).unwrap();
    store.add(&req("Rent")).unwrap();

    assert_eq!(backend.count(Method::GET, "/api/categories"), 1);
    let names: Vec<&str> = store.items().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Groceries", "Rent"]);
}

#[test]
fn failed_write_is_recorded_and_returned() {
    let backend = FakeBackend::new();
    backend.reply(Method::POST, "/api/tags", 409, json!({ "message": "Tag exists" }));
    let mut store = CollectionStore::new("tags", TagsApi::new(client(&backend)));
    let err = store
        .add(&TagRequest {
            name: "work".into(),
            color: "#000000".into(),
        })
        .unwrap_err();
    assert_eq!(err.status, 409);
    assert_eq!(store.error(), Some("Tag exists"));
    assert_eq!(store.state(), LoadState::Error);
}

#[test]
fn delete_removes_locally() {
    let backend = FakeBackend::new();
    backend.reply(Method::GET, "/api/tags", 200, json!([tag(1, "work"), tag(2, "trip")]));
    backend.reply(Method::DELETE, "/api/tags/1", 204, serde_json::Value::Null);
    let mut store = CollectionStore::new("tags", TagsApi::new(client(&backend)));
    store.fetch_all();
    store.delete(1).unwrap();
    assert_eq!(store.items().len(), 1);
    assert!(store.find(1).is_none());
    assert_eq!(backend.count(Method::GET, "/api/tags"), 1);
}

#[test]
fn failed_delete_restores_the_item() {
    let backend = FakeBackend::new();
    backend.reply(Method::GET, "/api/tags", 200, json!([tag(1, "work"), tag(2, "trip")]));
    backend.reply(Method::DELETE, "/api/tags/2", 500, json!({ "message": "in use" }));
    let mut store = CollectionStore::new("tags", TagsApi::new(client(&backend)));
    store.fetch_all();

    let pending = store.begin_delete(2);
    assert_eq!(pending.id(), 2);
    assert_eq!(store.items().len(), 1);

    let result = cashlog::api::CrudResource::delete(store.resource(), 2);
    assert!(store.finish_delete(pending, result).is_err());
    let ids: Vec<i64> = store.items().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(store.error(), Some("in use"));
    assert_eq!(store.state(), LoadState::Error);
}

#[test]
fn stale_fetch_result_is_dropped() {
    let backend = FakeBackend::new();
    let mut store = CollectionStore::new("categories", CategoriesApi::new(client(&backend)));
    let first = store.begin_fetch();
    let second = store.begin_fetch();
    assert!(store.is_loading());

    assert!(store.finish_fetch(
        second,
        Ok(vec![serde_json::from_value(category(2, "New")).unwrap()])
    ));
    assert!(!store.finish_fetch(
        first,
        Ok(vec![serde_json::from_value(category(1, "Old")).unwrap()])
    ));
    assert_eq!(store.items()[0].name, "New");
    assert_eq!(store.state(), LoadState::Loaded);
}

#[test]
fn filters_merge_and_clear() {
    let backend = FakeBackend::new();
    backend.reply(Method::GET, "/api/transactions?type=INCOME", 200, json!([]));
    backend.reply(
        Method::GET,
        "/api/transactions?startDate=2025-02-01&type=INCOME",
        200,
        json!([]),
    );
    backend.reply(Method::GET, "/api/transactions", 200, json!([]));
    let mut store = CollectionStore::new("transactions", TransactionsApi::new(client(&backend)));

    store.set_filters(TransactionQuery {
        kind: Some(TransactionType::Income),
        ..Default::default()
    });
    store.set_filters(TransactionQuery {
        start_date: NaiveDate::from_ymd_opt(2025, 2, 1),
        ..Default::default()
    });
    assert_eq!(store.query().kind, Some(TransactionType::Income));
    store.clear_filters();

    let paths: Vec<String> = backend.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "/api/transactions?type=INCOME",
            "/api/transactions?startDate=2025-02-01&type=INCOME",
            "/api/transactions",
        ]
    );
    assert_eq!(store.state(), LoadState::Loaded);
}
