// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashlog::forms::{BudgetForm, LabelForm, TransactionForm, export_range};
use cashlog::models::{Language, TransactionType};
use rust_decimal::Decimal;

fn filled() -> TransactionForm {
    TransactionForm {
        date: "2025-01-20".into(),
        kind: "expense".into(),
        amount: "12.50".into(),
        currency: "usd".into(),
        conversion_rate: Some("1350.5".into()),
        category_id: Some(3),
        memo: Some("  ".into()),
        tags: vec!["work".into(), " ".into()],
    }
}

#[test]
fn valid_transaction_becomes_request() {
    let req = filled().validate(Language::En).unwrap();
    assert_eq!(req.transaction_type, TransactionType::Expense);
    assert_eq!(req.original_currency, "USD");
    assert_eq!(req.original_amount, "12.50".parse::<Decimal>().unwrap());
    assert_eq!(req.memo, None);
    assert_eq!(req.tag_names, vec!["work".to_string()]);
}

#[test]
fn empty_transaction_reports_every_field() {
    let errs = TransactionForm::default().validate(Language::En).unwrap_err();
    assert_eq!(errs.for_field("transactionDate"), Some("Date is required"));
    assert_eq!(errs.for_field("transactionType"), Some("Type is required"));
    assert_eq!(errs.for_field("originalAmount"), Some("Amount is required"));
    assert_eq!(errs.for_field("categoryId"), Some("Category is required"));
    assert!(errs.for_field("originalCurrency").is_some());
}

#[test]
fn messages_follow_language() {
    let errs = TransactionForm::default().validate(Language::Ko).unwrap_err();
    assert_eq!(errs.for_field("transactionDate"), Some("날짜를 입력해주세요"));
}

#[test]
fn format_errors_are_translated() {
    let mut form = filled();
    form.date = "2025-13-40".into();
    form.amount = "abc".into();
    form.conversion_rate = Some("0".into());
    let errs = form.validate(Language::Ko).unwrap_err();
    assert_eq!(
        errs.for_field("transactionDate"),
        Some("날짜 형식이 올바르지 않습니다 (YYYY-MM-DD)")
    );
    assert_eq!(errs.for_field("originalAmount"), Some("숫자 형식이 올바르지 않습니다"));
    assert_eq!(
        errs.for_field("conversionRate"),
        Some("환율은 0.01에서 10000 사이여야 합니다")
    );

    let errs = BudgetForm {
        period: "1999-12".into(),
        amount: "1000".into(),
        alert_threshold: Some("0".into()),
        category_ids: vec![],
    }
    .validate(Language::Ko)
    .unwrap_err();
    assert_eq!(errs.for_field("period"), Some("연도는 2000년 이후여야 합니다"));
    assert_eq!(
        errs.for_field("alertThreshold"),
        Some("알림 기준은 1에서 100 사이여야 합니다")
    );

    let errs = export_range(Some("2025-02-01"), Some("2025-01-31"), Language::Ko).unwrap_err();
    assert_eq!(
        errs.for_field("endDate"),
        Some("종료일은 시작일보다 빠를 수 없습니다")
    );
}

#[test]
fn amount_and_rate_bounds() {
    let mut form = filled();
    form.amount = "0".into();
    form.conversion_rate = Some("0.001".into());
    let errs = form.validate(Language::En).unwrap_err();
    assert_eq!(errs.for_field("originalAmount"), Some("Amount must be greater than 0"));
    assert!(errs.for_field("conversionRate").is_some());

    let mut form = filled();
    form.conversion_rate = Some("10000".into());
    assert!(form.validate(Language::En).is_ok());
}

#[test]
fn budget_form_checks_period_and_threshold() {
    let ok = BudgetForm {
        period: "2025-03".into(),
        amount: "500000".into(),
        alert_threshold: None,
        category_ids: vec![1, 2],
    }
    .validate(Language::En)
    .unwrap();
    assert_eq!((ok.year, ok.month), (2025, 3));
    assert_eq!(ok.alert_threshold, None);

    let errs = BudgetForm {
        period: "1999-12".into(),
        amount: "-1".into(),
        alert_threshold: Some("101".into()),
        category_ids: vec![],
    }
    .validate(Language::En)
    .unwrap_err();
    assert!(errs.for_field("period").is_some());
    assert!(errs.for_field("targetAmount").is_some());
    assert!(errs.for_field("alertThreshold").is_some());
    assert_eq!(errs.errors().len(), 3);
}

#[test]
fn label_form_normalises_color() {
    let req = LabelForm {
        name: " Food ".into(),
        color: "#ff8800".into(),
    }
    .category(Language::En)
    .unwrap();
    assert_eq!(req.name, "Food");
    assert_eq!(req.color, "#FF8800");

    let errs = LabelForm {
        name: "".into(),
        color: "red".into(),
    }
    .tag(Language::En)
    .unwrap_err();
    assert_eq!(errs.for_field("name"), Some("Name is required"));
    assert!(errs.to_string().contains("color: Color must be #RRGGBB"));
}

#[test]
fn export_range_needs_ordered_dates() {
    let (s, e) = export_range(Some("2025-01-01"), Some("2025-01-31"), Language::En).unwrap();
    assert!(s < e);

    let errs = export_range(None, Some("2025-01-31"), Language::En).unwrap_err();
    assert_eq!(errs.for_field("startDate"), Some("Please select date range"));

    let errs = export_range(Some("2025-02-01"), Some("2025-01-31"), Language::En).unwrap_err();
    assert!(errs.for_field("endDate").is_some());
}
