// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::Cell;
use serde::Serialize;

use crate::analytics::{
    self, BreakdownEntry, DailyPoint, Dimension, Filter, MonthlyPoint, TOP_N, Totals,
};
use crate::app::App;
use crate::commands::show_error;
use crate::commands::transactions::{TransactionRow, transaction_table};
use crate::i18n::Text;
use crate::models::{TransactionType, YearMonth};
use crate::utils::{
    fmt_money, fmt_percent, maybe_print_json, parse_date, parse_month, pretty_table, styled_table,
};

#[derive(Serialize)]
pub struct MonthReport {
    pub month: YearMonth,
    pub totals: Totals,
    pub top_income: Vec<TransactionRow>,
    pub top_expense: Vec<TransactionRow>,
    pub breakdown: Vec<BreakdownEntry>,
}

pub fn month_report(app: &App, filter: &Filter, month: YearMonth, dimension: Dimension) -> MonthReport {
    let items = app.transactions.items();
    let top = |kind: TransactionType| -> Vec<TransactionRow> {
        analytics::top_n(items, filter, kind, TOP_N)
            .into_iter()
            .map(TransactionRow::from)
            .collect()
    };
    MonthReport {
        month,
        totals: analytics::totals(items, filter),
        top_income: top(TransactionType::Income),
        top_expense: top(TransactionType::Expense),
        breakdown: analytics::breakdown(items, filter, dimension),
    }
}

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("report", sub)) => report(app, sub)?,
        Some(("trend", sub)) => {
            app.transactions.fetch_all();
            let points = analytics::monthly_trend(app.transactions.items(), Local::now().date_naive());
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &points)? {
                print_trend(app, &points);
            }
            show_error(app.transactions.error());
        }
        Some(("calendar", sub)) => {
            let month = parse_month(sub.get_one::<String>("month").context("--month is required")?)?;
            app.transactions.fetch_all();
            let days = analytics::daily(app.transactions.items(), month);
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &days)? {
                print_calendar(app, month, &days);
            }
            show_error(app.transactions.error());
        }
        Some(("summary", sub)) => {
            let month = parse_month(sub.get_one::<String>("month").context("--month is required")?)?;
            let summary = app
                .analytics
                .monthly_summary(month)
                .context("Failed to load monthly summary")?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &summary)? {
                let lang = app.language();
                let mut rows = vec![
                    vec![Text::Month.tr(lang).to_string(), month.to_string()],
                    vec![Text::TotalIncome.tr(lang).to_string(), fmt_money(&summary.total_income)],
                    vec![Text::TotalExpense.tr(lang).to_string(), fmt_money(&summary.total_expense)],
                    vec![Text::Balance.tr(lang).to_string(), fmt_money(&summary.net_amount)],
                ];
                if let Some(target) = summary.budget_target {
                    rows.push(vec![Text::Budget.tr(lang).to_string(), fmt_money(&target)]);
                }
                if let Some(left) = summary.budget_remaining {
                    rows.push(vec![Text::Remaining.tr(lang).to_string(), fmt_money(&left)]);
                }
                if let Some(usage) = summary.budget_usage_percentage {
                    rows.push(vec![Text::Progress.tr(lang).to_string(), format!("{:.1}%", usage)]);
                }
                if let Some(level) = &summary.alert_level {
                    rows.push(vec![Text::Status.tr(lang).to_string(), level.clone()]);
                }
                println!("{}", pretty_table(&["", ""], rows));
            }
        }
        Some(("breakdown", sub)) => {
            let start = parse_date(sub.get_one::<String>("start").context("--start is required")?)?;
            let end = parse_date(sub.get_one::<String>("end").context("--end is required")?)?;
            let shares = app
                .analytics
                .category_breakdown(start, end)
                .context("Failed to load category breakdown")?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &shares)? {
                let lang = app.language();
                if shares.is_empty() {
                    println!("{}", Text::NoDataAvailable.tr(lang));
                } else {
                    let rows = shares
                        .iter()
                        .map(|s| {
                            vec![
                                s.category.clone(),
                                fmt_money(&s.amount),
                                format!("{:.1}%", s.percentage),
                            ]
                        })
                        .collect();
                    println!(
                        "{}",
                        pretty_table(
                            &[Text::Category.tr(lang), Text::Amount.tr(lang), Text::Share.tr(lang)],
                            rows
                        )
                    );
                }
            }
        }
        _ => {}
    }
    Ok(())
}

fn report(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let month = match sub.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => YearMonth::of(Local::now().date_naive()),
    };
    let mut filter = Filter::month(month);
    if let Some(c) = sub.get_one::<String>("category") {
        filter = filter.with_category(c.as_str());
    }
    for t in sub.get_many::<String>("tag").into_iter().flatten() {
        filter = filter.with_tag(t.as_str());
    }
    let dimension = match sub.get_one::<String>("by").map(String::as_str) {
        Some("tag") => Dimension::Tag,
        _ => Dimension::Category,
    };

    app.transactions.fetch_all();
    let report = month_report(app, &filter, month, dimension);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }

    let lang = app.language();
    let palette = app.palette();
    println!("{} {}", Text::Analytics.tr(lang), month);
    println!(
        "{}",
        styled_table(
            &[
                Text::TotalIncome.tr(lang),
                Text::TotalExpense.tr(lang),
                Text::Balance.tr(lang),
            ],
            vec![vec![
                Cell::new(fmt_money(&report.totals.income)).fg(palette.kind(TransactionType::Income)),
                Cell::new(fmt_money(&report.totals.expense))
                    .fg(palette.kind(TransactionType::Expense)),
                Cell::new(fmt_money(&report.totals.balance))
                    .fg(palette.balance(&report.totals.balance)),
            ]],
        )
    );

    println!("{}", Text::TopIncome.tr(lang));
    if report.top_income.is_empty() {
        println!("{}", Text::NoIncomeThisMonth.tr(lang));
    } else {
        println!("{}", transaction_table(app, &report.top_income));
    }
    println!("{}", Text::TopExpense.tr(lang));
    if report.top_expense.is_empty() {
        println!("{}", Text::NoExpensesThisMonth.tr(lang));
    } else {
        println!("{}", transaction_table(app, &report.top_expense));
    }

    let (title, label) = match dimension {
        Dimension::Category => (Text::CategoryBreakdown, Text::Category),
        Dimension::Tag => (Text::ExpenseByTag, Text::Tags),
    };
    println!("{}", title.tr(lang));
    if report.breakdown.is_empty() {
        println!("{}", Text::NoDataAvailable.tr(lang));
    } else {
        let rows = report
            .breakdown
            .iter()
            .map(|e| {
                vec![
                    Cell::new(&e.label),
                    Cell::new(fmt_money(&e.amount)),
                    Cell::new(fmt_percent(&e.percentage)),
                ]
            })
            .collect();
        println!(
            "{}",
            styled_table(&[label.tr(lang), Text::Amount.tr(lang), Text::Share.tr(lang)], rows)
        );
    }
    show_error(app.transactions.error());
    Ok(())
}

fn print_trend(app: &App, points: &[MonthlyPoint]) {
    let lang = app.language();
    let palette = app.palette();
    println!("{}", Text::MonthlyTrend.tr(lang));
    let rows = points
        .iter()
        .map(|p| {
            let net = p.income - p.expense;
            vec![
                Cell::new(p.month),
                Cell::new(fmt_money(&p.income)).fg(palette.kind(TransactionType::Income)),
                Cell::new(fmt_money(&p.expense)).fg(palette.kind(TransactionType::Expense)),
                Cell::new(fmt_money(&net)).fg(palette.balance(&net)),
            ]
        })
        .collect();
    println!(
        "{}",
        styled_table(
            &[
                Text::Month.tr(lang),
                Text::Income.tr(lang),
                Text::Expense.tr(lang),
                Text::Balance.tr(lang),
            ],
            rows,
        )
    );
}

fn print_calendar(app: &App, month: YearMonth, days: &[DailyPoint]) {
    let lang = app.language();
    let palette = app.palette();
    println!("{} {}", Text::DailyCalendar.tr(lang), month);
    let rows = days
        .iter()
        .map(|d| {
            vec![
                Cell::new(d.date.format("%m-%d %a")),
                Cell::new(fmt_money(&d.income)).fg(palette.kind(TransactionType::Income)),
                Cell::new(fmt_money(&d.expense)).fg(palette.kind(TransactionType::Expense)),
                Cell::new(fmt_money(&d.net)).fg(palette.balance(&d.net)),
            ]
        })
        .collect();
    println!(
        "{}",
        styled_table(
            &[
                Text::Date.tr(lang),
                Text::Income.tr(lang),
                Text::Expense.tr(lang),
                Text::Balance.tr(lang),
            ],
            rows,
        )
    );
}
