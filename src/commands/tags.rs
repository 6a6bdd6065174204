// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};

use crate::app::App;
use crate::commands::{confirm_delete, next_label_color, show_error};
use crate::forms::LabelForm;
use crate::i18n::Text;
use crate::models::Tag;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(app, sub)?,
        Some(("add", sub)) => add(app, sub)?,
        Some(("edit", sub)) => edit(app, sub)?,
        Some(("rm", sub)) => remove(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    app.tags.fetch_all();
    let lang = app.language();
    let tags = app.tags.items();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &tags)? {
        return Ok(());
    }
    if tags.is_empty() {
        println!("{}", Text::NoTags.tr(lang));
    } else {
        let rows = tags
            .iter()
            .map(|t| vec![t.id.to_string(), t.name.clone(), t.color.clone()])
            .collect();
        println!(
            "{}",
            pretty_table(&[Text::Id.tr(lang), Text::Name.tr(lang), Text::Color.tr(lang)], rows)
        );
    }
    show_error(app.tags.error());
    Ok(())
}

fn add(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    app.tags.fetch_all();
    let color = sub
        .get_one::<String>("color")
        .cloned()
        .unwrap_or_else(|| next_label_color(app.tags.items().len()).to_string());
    let form = LabelForm {
        name: sub.get_one::<String>("name").cloned().unwrap_or_default(),
        color,
    };
    let request = form.tag(app.language())?;
    let created = app.tags.add(&request).context("Failed to create tag")?;
    println!("Created tag '{}' (id {})", created.name, created.id);
    Ok(())
}

// Tags have no single-item endpoint, so edits start from the listed copy.
fn edit(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("id is required")?;
    app.tags.fetch_all();
    let existing: Tag = app
        .tags
        .find(id)
        .cloned()
        .ok_or_else(|| anyhow!("Tag {} not found", id))?;
    let form = LabelForm {
        name: sub.get_one::<String>("name").cloned().unwrap_or(existing.name),
        color: sub.get_one::<String>("color").cloned().unwrap_or(existing.color),
    };
    let request = form.tag(app.language())?;
    app.tags
        .update(id, &request)
        .with_context(|| format!("Failed to update tag {}", id))?;
    println!("{} ({})", Text::Saved.tr(app.language()), id);
    Ok(())
}

fn remove(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("id is required")?;
    if !confirm_delete(app, Text::DeleteTagConfirm, sub)? {
        return Ok(());
    }
    app.tags
        .delete(id)
        .with_context(|| format!("Failed to delete tag {}", id))?;
    println!("{} ({})", Text::Deleted.tr(app.language()), id);
    Ok(())
}
