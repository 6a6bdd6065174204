// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::{self, Filter, Period};
use crate::api::TransactionQuery;
use crate::app::App;
use crate::commands::{confirm_delete, resolve_category, show_error};
use crate::forms::TransactionForm;
use crate::i18n::Text;
use crate::models::{REPORTING_CURRENCY, Transaction, TransactionType};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_month, styled_table};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(app, sub)?,
        Some(("show", sub)) => show(app, sub)?,
        Some(("add", sub)) => add(app, sub)?,
        Some(("edit", sub)) => edit(app, sub)?,
        Some(("rm", sub)) => remove(app, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub kind: TransactionType,
    pub amount: Decimal,
    pub original: String,
    pub category: String,
    pub tags: String,
    pub memo: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id,
            date: t.date.to_string(),
            kind: t.kind,
            amount: t.converted_amount,
            original: format!("{} {}", t.original_amount, t.original_currency),
            category: t.category_name().unwrap_or_default().to_string(),
            tags: t
                .tags
                .iter()
                .map(|tag| tag.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            memo: t.memo.clone().unwrap_or_default(),
        }
    }
}

pub fn transaction_table(app: &App, rows: &[TransactionRow]) -> Table {
    let lang = app.language();
    let palette = app.palette();
    let cells = rows
        .iter()
        .map(|r| {
            let sign = match r.kind {
                TransactionType::Income => "+",
                TransactionType::Expense => "-",
            };
            vec![
                Cell::new(r.id),
                Cell::new(&r.date),
                Cell::new(match r.kind {
                    TransactionType::Income => Text::Income.tr(lang),
                    TransactionType::Expense => Text::Expense.tr(lang),
                }),
                Cell::new(format!("{}{}", sign, fmt_money(&r.amount))).fg(palette.kind(r.kind)),
                Cell::new(&r.original),
                Cell::new(&r.category),
                Cell::new(&r.tags),
                Cell::new(&r.memo),
            ]
        })
        .collect();
    styled_table(
        &[
            Text::Id.tr(lang),
            Text::Date.tr(lang),
            Text::Type.tr(lang),
            Text::Amount.tr(lang),
            Text::Original.tr(lang),
            Text::Category.tr(lang),
            Text::Tags.tr(lang),
            Text::Memo.tr(lang),
        ],
        cells,
    )
}

fn list(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let query = TransactionQuery {
        start_date: sub.get_one::<String>("start").map(|s| parse_date(s)).transpose()?,
        end_date: sub.get_one::<String>("end").map(|s| parse_date(s)).transpose()?,
        kind: sub
            .get_one::<String>("type")
            .map(|s| s.parse::<TransactionType>())
            .transpose()
            .map_err(anyhow::Error::msg)?,
    };
    app.transactions.set_query(query);
    let rows = query_rows(app, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        if rows.is_empty() {
            println!("{}", Text::NoTransactions.tr(app.language()));
        } else {
            println!("{}", transaction_table(app, &rows));
        }
    }
    show_error(app.transactions.error());
    Ok(())
}

/// Rows of the fetched collection narrowed by the local filters
/// (`month`, `category`, any of `tag`), newest first, capped by `limit`.
pub fn query_rows(app: &App, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut filter = Filter::default();
    if let Some(month) = sub.get_one::<String>("month") {
        filter.period = Period::Month(parse_month(month)?);
    }
    filter.category = sub.get_one::<String>("category").cloned();
    filter.tags = sub
        .get_many::<String>("tag")
        .map(|tags| tags.cloned().collect())
        .unwrap_or_default();

    let mut picked = analytics::select(app.transactions.items(), &filter);
    picked.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        picked.truncate(*limit);
    }
    Ok(picked.into_iter().map(TransactionRow::from).collect())
}

fn show(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("id is required")?;
    let t = app
        .transactions
        .resource()
        .get_by_id(id)
        .with_context(|| format!("Transaction {} not found", id))?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &t)? {
        println!("{}", transaction_table(app, &[TransactionRow::from(&t)]));
    }
    Ok(())
}

fn add(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let category = match sub.get_one::<String>("category") {
        Some(name) => Some(resolve_category(app, name)?),
        None => None,
    };
    let form = TransactionForm {
        date: sub.get_one::<String>("date").cloned().unwrap_or_default(),
        kind: sub.get_one::<String>("type").cloned().unwrap_or_default(),
        amount: sub.get_one::<String>("amount").cloned().unwrap_or_default(),
        currency: sub
            .get_one::<String>("currency")
            .cloned()
            .unwrap_or_else(|| REPORTING_CURRENCY.to_string()),
        conversion_rate: sub.get_one::<String>("rate").cloned(),
        category_id: category.as_ref().map(|c| c.id),
        memo: sub.get_one::<String>("memo").cloned(),
        tags: tag_args(sub),
    };
    let request = form.validate(app.language())?;
    let created = app
        .transactions
        .add(&request)
        .context("Failed to save transaction")?;
    println!(
        "Recorded {} {} {} on {} (id {})",
        created.kind.as_str(),
        created.original_amount,
        created.original_currency,
        created.date,
        created.id
    );
    Ok(())
}

fn edit(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("id is required")?;
    let existing = app
        .transactions
        .resource()
        .get_by_id(id)
        .with_context(|| format!("Transaction {} not found", id))?;
    let category_id = match sub.get_one::<String>("category") {
        Some(name) => Some(resolve_category(app, name)?.id),
        None => existing.category.as_ref().map(|c| c.id),
    };
    let tags = if sub.contains_id("tag") {
        tag_args(sub)
    } else {
        existing.tags.iter().map(|t| t.name.clone()).collect()
    };
    let form = TransactionForm {
        date: pick(sub, "date", existing.date.to_string()),
        kind: pick(sub, "type", existing.kind.as_str().to_string()),
        amount: pick(sub, "amount", existing.original_amount.to_string()),
        currency: pick(sub, "currency", existing.original_currency.clone()),
        conversion_rate: sub
            .get_one::<String>("rate")
            .cloned()
            .or_else(|| existing.conversion_rate.map(|r| r.to_string())),
        category_id,
        memo: sub.get_one::<String>("memo").cloned().or(existing.memo.clone()),
        tags,
    };
    let request = form.validate(app.language())?;
    app.transactions
        .update(id, &request)
        .with_context(|| format!("Failed to update transaction {}", id))?;
    println!("{} ({})", Text::Saved.tr(app.language()), id);
    Ok(())
}

fn remove(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("id is required")?;
    if !confirm_delete(app, Text::DeleteTransactionConfirm, sub)? {
        return Ok(());
    }
    app.transactions
        .delete(id)
        .with_context(|| format!("Failed to delete transaction {}", id))?;
    println!("{} ({})", Text::Deleted.tr(app.language()), id);
    Ok(())
}

fn tag_args(sub: &clap::ArgMatches) -> Vec<String> {
    sub.get_many::<String>("tag")
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default()
}

fn pick(sub: &clap::ArgMatches, id: &str, fallback: String) -> String {
    sub.get_one::<String>(id).cloned().unwrap_or(fallback)
}
