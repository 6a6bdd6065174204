// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use comfy_table::Cell;

use crate::analytics::{BudgetProgress, BudgetStatus, budgets_progress};
use crate::app::App;
use crate::commands::{confirm_delete, resolve_category, show_error};
use crate::forms::BudgetForm;
use crate::i18n::Text;
use crate::models::Language;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, styled_table};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(app, sub)?,
        Some(("add", sub)) => {
            let form = BudgetForm {
                period: sub.get_one::<String>("month").cloned().unwrap_or_default(),
                amount: sub.get_one::<String>("amount").cloned().unwrap_or_default(),
                alert_threshold: sub.get_one::<String>("threshold").cloned(),
                category_ids: category_ids(app, sub)?.unwrap_or_default(),
            };
            let request = form.validate(app.language())?;
            let created = app.budgets.add(&request).context("Failed to save budget")?;
            println!(
                "Budget {}-{:02} set to {} (id {})",
                created.year,
                created.month,
                fmt_money(&created.target_amount),
                created.id
            );
        }
        Some(("edit", sub)) => {
            let id = *sub.get_one::<i64>("id").context("id is required")?;
            let existing = app
                .budgets
                .resource()
                .get_by_id(id)
                .with_context(|| format!("Budget {} not found", id))?;
            let form = BudgetForm {
                period: sub
                    .get_one::<String>("month")
                    .cloned()
                    .unwrap_or_else(|| format!("{:04}-{:02}", existing.year, existing.month)),
                amount: sub
                    .get_one::<String>("amount")
                    .cloned()
                    .unwrap_or_else(|| existing.target_amount.to_string()),
                alert_threshold: Some(
                    sub.get_one::<String>("threshold")
                        .cloned()
                        .unwrap_or_else(|| existing.alert_threshold.to_string()),
                ),
                category_ids: if sub.get_flag("all_categories") {
                    Vec::new()
                } else {
                    match category_ids(app, sub)? {
                        Some(ids) => ids,
                        None => existing.categories.iter().map(|c| c.id).collect(),
                    }
                },
            };
            let request = form.validate(app.language())?;
            app.budgets
                .update(id, &request)
                .with_context(|| format!("Failed to update budget {}", id))?;
            println!("{} ({})", Text::Saved.tr(app.language()), id);
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").context("id is required")?;
            if !confirm_delete(app, Text::DeleteBudgetConfirm, sub)? {
                return Ok(());
            }
            app.budgets
                .delete(id)
                .with_context(|| format!("Failed to delete budget {}", id))?;
            println!("{} ({})", Text::Deleted.tr(app.language()), id);
        }
        _ => {}
    }
    Ok(())
}

/// `None` when no `--category` was given at all.
fn category_ids(app: &mut App, sub: &clap::ArgMatches) -> Result<Option<Vec<i64>>> {
    let Some(names) = sub.get_many::<String>("category") else {
        return Ok(None);
    };
    let mut ids = Vec::new();
    for name in names {
        ids.push(resolve_category(app, name)?.id);
    }
    Ok(Some(ids))
}

pub fn status_label(status: BudgetStatus, lang: Language) -> &'static str {
    match status {
        BudgetStatus::Safe => Text::Safe.tr(lang),
        BudgetStatus::Warning => Text::ApproachingLimit.tr(lang),
        BudgetStatus::Danger => Text::OverBudget.tr(lang),
    }
}

fn list(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    app.budgets.fetch_all();
    app.transactions.fetch_all();
    let progress: Vec<BudgetProgress> =
        budgets_progress(app.budgets.items(), app.transactions.items());
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &progress)? {
        return Ok(());
    }

    let lang = app.language();
    let palette = app.palette();
    if progress.is_empty() {
        println!("{}", Text::NoBudgets.tr(lang));
    } else {
        let rows = progress
            .iter()
            .map(|p| {
                let period = p
                    .period
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{}-{}", p.budget.year, p.budget.month));
                let scope = if p.budget.categories.is_empty() {
                    Text::AllCategories.tr(lang).to_string()
                } else {
                    p.budget
                        .categories
                        .iter()
                        .map(|c| c.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                let color = palette.status(p.status);
                vec![
                    Cell::new(p.budget.id),
                    Cell::new(period),
                    Cell::new(scope),
                    Cell::new(fmt_money(&p.budget.target_amount)),
                    Cell::new(fmt_money(&p.spent)),
                    Cell::new(fmt_money(&p.remaining)).fg(palette.balance(&p.remaining)),
                    Cell::new(fmt_percent(&p.percentage)).fg(color),
                    Cell::new(fmt_percent(&p.budget.alert_threshold)),
                    Cell::new(status_label(p.status, lang)).fg(color),
                ]
            })
            .collect();
        println!(
            "{}",
            styled_table(
                &[
                    Text::Id.tr(lang),
                    Text::Period.tr(lang),
                    Text::Categories.tr(lang),
                    Text::Budget.tr(lang),
                    Text::Spent.tr(lang),
                    Text::Remaining.tr(lang),
                    Text::Progress.tr(lang),
                    Text::AlertAt.tr(lang),
                    Text::Status.tr(lang),
                ],
                rows,
            )
        );
    }
    show_error(app.budgets.error());
    show_error(app.transactions.error());
    Ok(())
}
