// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use comfy_table::Cell;
use serde::Serialize;

use crate::analytics::{self, Filter, Totals};
use crate::app::App;
use crate::commands::show_error;
use crate::commands::transactions::{TransactionRow, transaction_table};
use crate::i18n::Text;
use crate::models::TransactionType;
use crate::utils::{fmt_money, maybe_print_json, styled_table};

const RECENT: usize = 5;

#[derive(Serialize)]
pub struct DashboardView {
    pub totals: Totals,
    pub recent: Vec<TransactionRow>,
}

pub fn build(app: &App) -> DashboardView {
    let items = app.transactions.items();
    DashboardView {
        totals: analytics::totals(items, &Filter::default()),
        recent: analytics::recent(items, RECENT)
            .into_iter()
            .map(TransactionRow::from)
            .collect(),
    }
}

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    app.transactions.fetch_all();
    let view = build(app);
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &view)? {
        return Ok(());
    }

    let lang = app.language();
    let palette = app.palette();
    println!("{}", Text::Dashboard.tr(lang));
    println!(
        "{}",
        styled_table(
            &[
                Text::TotalIncome.tr(lang),
                Text::TotalExpense.tr(lang),
                Text::Balance.tr(lang),
            ],
            vec![vec![
                Cell::new(fmt_money(&view.totals.income))
                    .fg(palette.kind(TransactionType::Income)),
                Cell::new(fmt_money(&view.totals.expense))
                    .fg(palette.kind(TransactionType::Expense)),
                Cell::new(fmt_money(&view.totals.balance)).fg(palette.balance(&view.totals.balance)),
            ]],
        )
    );

    println!("{}", Text::RecentTransactions.tr(lang));
    if view.recent.is_empty() {
        println!("{}", Text::NoTransactions.tr(lang));
    } else {
        println!("{}", transaction_table(app, &view.recent));
    }
    show_error(app.transactions.error());
    Ok(())
}
