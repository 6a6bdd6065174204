// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use cashlog::api::ExportFormat;
use cashlog::cli::build_cli;
use cashlog::commands::{self, dashboard, export, transactions};
use chrono::NaiveDate;
use common::{FakeBackend, app, budget, category, tag, tx};
use reqwest::Method;
use rust_decimal::Decimal;
use serde_json::json;

fn sub<'a>(m: &'a clap::ArgMatches, path: &[&str]) -> &'a clap::ArgMatches {
    let mut cur = m;
    for name in path {
        let (got, next) = cur.subcommand().unwrap();
        assert_eq!(got, *name);
        cur = next;
    }
    cur
}

fn seed(backend: &FakeBackend) {
    backend.reply(
        Method::GET,
        "/api/transactions",
        200,
        json!([
            tx(1, "2025-01-03", "INCOME", 3_000_000, Some(category(1, "Salary")), vec![]),
            tx(2, "2025-01-05", "EXPENSE", 12_000, Some(category(2, "Food")), vec![tag(1, "work")]),
            tx(3, "2025-02-01", "EXPENSE", 800_000, Some(category(3, "Rent")), vec![]),
            tx(4, "2025-01-20", "EXPENSE", 30_000, Some(category(2, "Food")), vec![]),
        ]),
    );
}

#[test]
fn dashboard_view_totals_and_recent() {
    let backend = FakeBackend::new();
    seed(&backend);
    let mut app = app(&backend);
    app.transactions.fetch_all();
    let view = dashboard::build(&app);
    assert_eq!(view.totals.income, Decimal::from(3_000_000));
    assert_eq!(view.totals.expense, Decimal::from(842_000));
    assert_eq!(view.recent[0].id, 3);
    assert_eq!(view.recent.len(), 4);
}

#[test]
fn tx_list_filters_locally_and_limits() {
    let backend = FakeBackend::new();
    seed(&backend);
    let mut app = app(&backend);
    app.transactions.fetch_all();
    let m = build_cli().get_matches_from([
        "cashlog", "tx", "list", "--month", "2025-01", "--category", "Food", "--limit", "1",
    ]);
    let rows = transactions::query_rows(&app, sub(&m, &["tx", "list"])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 4);
    assert_eq!(rows[0].category, "Food");
}

#[test]
fn tx_list_sends_server_filters() {
    let backend = FakeBackend::new();
    backend.reply(
        Method::GET,
        "/api/transactions?startDate=2025-01-01&type=EXPENSE",
        200,
        json!([]),
    );
    let mut app = app(&backend);
    let m = build_cli().get_matches_from([
        "cashlog", "tx", "list", "--start", "2025-01-01", "--type", "expense", "--json",
    ]);
    transactions::handle(&mut app, sub(&m, &["tx"])).unwrap();
    assert_eq!(
        backend.requests()[0].path,
        "/api/transactions?startDate=2025-01-01&type=EXPENSE"
    );
    assert!(app.transactions.error().is_none());
}

#[test]
fn tx_add_resolves_category_by_name() {
    let backend = FakeBackend::new();
    backend.reply(Method::GET, "/api/categories", 200, json!([category(2, "Food")]));
    backend.reply(
        Method::POST,
        "/api/transactions",
        201,
        tx(10, "2025-01-07", "EXPENSE", 9_000, Some(category(2, "Food")), vec![]),
    );
    backend.reply(Method::GET, "/api/transactions", 200, json!([]));
    let mut app = app(&backend);
    let m = build_cli().get_matches_from([
        "cashlog", "tx", "add", "--date", "2025-01-07", "--type", "expense", "--amount", "9000",
        "--category", "food",
    ]);
    transactions::handle(&mut app, sub(&m, &["tx"])).unwrap();

    let post = backend
        .requests()
        .into_iter()
        .find(|r| r.method == Method::POST)
        .unwrap();
    let body = post.body.unwrap();
    assert_eq!(body["categoryId"], 2);
    assert_eq!(body["originalCurrency"], "KRW");
}

#[test]
fn unknown_category_is_an_error() {
    let backend = FakeBackend::new();
    backend.reply(Method::GET, "/api/categories", 200, json!([]));
    let mut app = app(&backend);
    let err = commands::resolve_category(&mut app, "Nope").unwrap_err();
    assert!(err.to_string().contains("Nope"));
}

#[test]
fn rm_with_yes_deletes() {
    let backend = FakeBackend::new();
    backend.reply(Method::DELETE, "/api/budgets/5", 204, serde_json::Value::Null);
    let mut app = app(&backend);
    let m = build_cli().get_matches_from(["cashlog", "budget", "rm", "5", "--yes"]);
    commands::budgets::handle(&mut app, sub(&m, &["budget"])).unwrap();
    assert_eq!(backend.count(Method::DELETE, "/api/budgets/5"), 1);
}

#[test]
fn budget_add_sends_category_ids() {
    let backend = FakeBackend::new();
    backend.reply(
        Method::GET,
        "/api/categories",
        200,
        json!([category(1, "Food"), category(2, "Rent")]),
    );
    backend.reply(
        Method::POST,
        "/api/budgets",
        201,
        budget(7, 2025, 3, 500_000, 90, vec![category(2, "Rent")]),
    );
    backend.reply(Method::GET, "/api/budgets", 200, json!([]));
    let mut app = app(&backend);
    let m = build_cli().get_matches_from([
        "cashlog", "budget", "add", "--month", "2025-03", "--amount", "500000", "--threshold",
        "90", "--category", "Rent",
    ]);
    commands::budgets::handle(&mut app, sub(&m, &["budget"])).unwrap();
    let post = backend
        .requests()
        .into_iter()
        .find(|r| r.method == Method::POST)
        .unwrap();
    assert_eq!(
        post.body,
        Some(json!({
            "year": 2025,
            "month": 3,
            "targetAmount": 500000.0,
            "alertThreshold": 90.0,
            "categoryIds": [2]
        }))
    );
}

#[test]
fn budget_edit_can_clear_categories() {
    let backend = FakeBackend::new();
    backend.reply(
        Method::GET,
        "/api/budgets/5",
        200,
        budget(5, 2025, 3, 500_000, 80, vec![category(1, "Food"), category(2, "Rent")]),
    );
    backend.reply(Method::PUT, "/api/budgets/5", 200, budget(5, 2025, 3, 500_000, 80, vec![]));
    backend.reply(Method::GET, "/api/budgets", 200, json!([]));
    let mut app = app(&backend);
    let m = build_cli().get_matches_from(["cashlog", "budget", "edit", "5", "--all-categories"]);
    commands::budgets::handle(&mut app, sub(&m, &["budget"])).unwrap();
    let put = backend
        .requests()
        .into_iter()
        .find(|r| r.method == Method::PUT)
        .unwrap();
    assert_eq!(put.body.unwrap()["categoryIds"], json!([]));
    assert_eq!(backend.count(Method::GET, "/api/categories"), 0);

    let res = build_cli().try_get_matches_from([
        "cashlog", "budget", "edit", "5", "--all-categories", "--category", "Food",
    ]);
    assert!(res.is_err());
}

#[test]
fn label_colors_cycle() {
    assert_eq!(commands::next_label_color(0), commands::LABEL_COLORS[0]);
    assert_eq!(
        commands::next_label_color(commands::LABEL_COLORS.len() + 1),
        commands::LABEL_COLORS[1]
    );
}

#[test]
fn export_writes_download_to_file() {
    let backend = FakeBackend::new();
    backend.reply_raw(
        Method::GET,
        "/api/export/csv?startDate=2025-01-01&endDate=2025-01-31",
        200,
        b"date,amount\n2025-01-05,12000\n".to_vec(),
    );
    let app = app(&backend);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("jan.csv");
    let d = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    let written = export::export_to(
        &app,
        ExportFormat::Csv,
        d("2025-01-01"),
        d("2025-01-31"),
        Some(&out),
    )
    .unwrap();
    assert_eq!(written, out);
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "date,amount\n2025-01-05,12000\n"
    );
}

#[test]
fn failed_export_writes_nothing() {
    let backend = FakeBackend::new();
    let app = app(&backend);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.pdf");
    let d = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    let res = export::export_to(
        &app,
        ExportFormat::Pdf,
        d("2025-01-01"),
        d("2025-01-31"),
        Some(&out),
    );
    assert!(res.is_err());
    assert!(!out.exists());
}

#[test]
fn default_export_name() {
    let d = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    assert_eq!(
        ExportFormat::Excel.file_name(d("2025-01-01"), d("2025-01-31")),
        "transactions-2025-01-01-2025-01-31.xlsx"
    );
    assert_eq!("xlsx".parse::<ExportFormat>(), Ok(ExportFormat::Excel));
}

#[test]
fn settings_language_switches_output_language() {
    let backend = FakeBackend::new();
    let mut app = app(&backend);
    let m = build_cli().get_matches_from(["cashlog", "settings", "language", "en"]);
    commands::settings::handle(&mut app, sub(&m, &["settings"])).unwrap();
    assert_eq!(app.language(), cashlog::models::Language::En);
    assert!(backend.requests().is_empty());
}
