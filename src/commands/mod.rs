// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod analytics;
pub mod budgets;
pub mod categories;
pub mod dashboard;
pub mod export;
pub mod settings;
pub mod tags;
pub mod transactions;

use anyhow::{Result, anyhow};

use crate::app::App;
use crate::i18n::Text;
use crate::models::Category;
use crate::utils::confirm;

/// Colours handed out to new tags and categories when none is given.
pub const LABEL_COLORS: [&str; 8] = [
    "#3B82F6", "#EF4444", "#22C55E", "#FBBF24", "#A855F7", "#EC4899", "#14B8A6", "#F97316",
];

pub fn next_label_color(existing: usize) -> &'static str {
    LABEL_COLORS[existing % LABEL_COLORS.len()]
}

/// Prints a store's recorded error, if any, below the view.
pub fn show_error(error: Option<&str>) {
    if let Some(msg) = error {
        eprintln!("error: {}", msg);
    }
}

/// Loads categories when needed and looks one up by name (case-insensitive).
pub fn resolve_category(app: &mut App, name: &str) -> Result<Category> {
    if app.categories.items().is_empty() {
        app.categories.fetch_all();
        show_error(app.categories.error());
    }
    let wanted = name.trim();
    app.categories
        .items()
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(wanted))
        .cloned()
        .ok_or_else(|| anyhow!("Category '{}' not found", wanted))
}

/// `true` when the user agreed, or `--yes` was given.
pub fn confirm_delete(app: &App, question: Text, sub: &clap::ArgMatches) -> Result<bool> {
    if sub.get_flag("yes") {
        return Ok(true);
    }
    let stdin = std::io::stdin();
    let ok = confirm(question.tr(app.language()), &mut stdin.lock(), &mut std::io::stdout())?;
    if !ok {
        println!("{}", Text::Cancelled.tr(app.language()));
    }
    Ok(ok)
}
