// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use comfy_table::Cell;

use crate::app::App;
use crate::commands::{confirm_delete, next_label_color, show_error};
use crate::forms::LabelForm;
use crate::i18n::Text;
use crate::utils::{maybe_print_json, styled_table};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            app.categories.fetch_all();
            let lang = app.language();
            let items = app.categories.items();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &items)? {
                if items.is_empty() {
                    println!("{}", Text::NoCategories.tr(lang));
                } else {
                    let rows = items
                        .iter()
                        .map(|c| vec![Cell::new(c.id), Cell::new(&c.name), Cell::new(&c.color)])
                        .collect();
                    println!(
                        "{}",
                        styled_table(
                            &[Text::Id.tr(lang), Text::Name.tr(lang), Text::Color.tr(lang)],
                            rows
                        )
                    );
                }
            }
            show_error(app.categories.error());
        }
        Some(("add", sub)) => {
            let color = match sub.get_one::<String>("color") {
                Some(c) => c.clone(),
                None => {
                    app.categories.fetch_all();
                    next_label_color(app.categories.items().len()).to_string()
                }
            };
            let form = LabelForm {
                name: sub.get_one::<String>("name").cloned().unwrap_or_default(),
                color,
            };
            let request = form.category(app.language())?;
            let created = app
                .categories
                .add(&request)
                .context("Failed to create category")?;
            println!("Created category '{}' (id {})", created.name, created.id);
        }
        Some(("edit", sub)) => {
            let id = *sub.get_one::<i64>("id").context("id is required")?;
            let existing = app
                .categories
                .resource()
                .get_by_id(id)
                .with_context(|| format!("Category {} not found", id))?;
            let form = LabelForm {
                name: sub.get_one::<String>("name").cloned().unwrap_or(existing.name),
                color: sub.get_one::<String>("color").cloned().unwrap_or(existing.color),
            };
            let request = form.category(app.language())?;
            app.categories
                .update(id, &request)
                .with_context(|| format!("Failed to update category {}", id))?;
            println!("{} ({})", Text::Saved.tr(app.language()), id);
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").context("id is required")?;
            if !confirm_delete(app, Text::DeleteCategoryConfirm, sub)? {
                return Ok(());
            }
            app.categories
                .delete(id)
                .map_err(|e| anyhow!("Failed to delete category {}: {}", id, e))?;
            println!("{} ({})", Text::Deleted.tr(app.language()), id);
        }
        _ => {}
    }
    Ok(())
}
