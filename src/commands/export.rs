// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;

use crate::api::ExportFormat;
use crate::app::App;
use crate::forms::export_range;
use crate::i18n::Text;
use crate::stores::PreferenceStorage;

pub fn handle<S: PreferenceStorage>(app: &mut App<S>, m: &clap::ArgMatches) -> Result<()> {
    let format: ExportFormat = m
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("csv")
        .parse()
        .map_err(|e: String| anyhow!(e))?;
    let (start, end) = export_range(
        m.get_one::<String>("start").map(String::as_str),
        m.get_one::<String>("end").map(String::as_str),
        app.language(),
    )?;
    let out = m.get_one::<String>("out").map(PathBuf::from);
    let written = export_to(app, format, start, end, out.as_deref())?;
    println!("{}: {}", Text::Exported.tr(app.language()), written.display());
    Ok(())
}

/// Downloads the export and writes it to `out`, or to the default file
/// name in the working directory. Returns the path written.
pub fn export_to<S>(
    app: &App<S>,
    format: ExportFormat,
    start: NaiveDate,
    end: NaiveDate,
    out: Option<&Path>,
) -> Result<PathBuf> {
    let bytes = app
        .export
        .download(format, start, end)
        .context("Export failed")?;
    let path = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format.file_name(start, end)));
    std::fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
