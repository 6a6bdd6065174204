// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};

use crate::app::App;
use crate::commands::show_error;
use crate::i18n::Text;
use crate::models::{Language, Theme};
use crate::stores::PreferenceStorage;
use crate::utils::pretty_table;

pub fn handle<S: PreferenceStorage>(app: &mut App<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("theme", sub)) => {
            let theme: Theme = value(sub)?.parse().map_err(|e: String| anyhow!(e))?;
            app.session.set_theme(theme).context("Failed to save theme")?;
            println!("{}", Text::Saved.tr(app.language()));
            show_error(app.session.error());
        }
        Some(("language", sub)) => {
            let language: Language = value(sub)?.parse().map_err(|e: String| anyhow!(e))?;
            app.session
                .set_language(language)
                .context("Failed to save language")?;
            println!("{}", Text::Saved.tr(app.language()));
        }
        Some(("sync", _)) => {
            app.session.load_preferences();
            show(app);
            show_error(app.session.error());
        }
        _ => show(app),
    }
    Ok(())
}

fn value(sub: &clap::ArgMatches) -> Result<&str> {
    sub.get_one::<String>("value")
        .map(String::as_str)
        .context("value is required")
}

fn show<S: PreferenceStorage>(app: &App<S>) {
    let lang = app.language();
    let prefs = app.session.preferences();
    println!("{}", Text::Preferences.tr(lang));
    println!(
        "{}",
        pretty_table(
            &[Text::Settings.tr(lang), ""],
            vec![
                vec![Text::Appearance.tr(lang).to_string(), prefs.theme.as_str().to_string()],
                vec![Text::Language.tr(lang).to_string(), prefs.language.as_str().to_string()],
            ],
        )
    );
}
