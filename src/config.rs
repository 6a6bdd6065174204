// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;

use crate::stores::WriteMode;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Cashlog", "cashlog"));

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const API_URL_ENV: &str = "CASHLOG_API_URL";
pub const DATA_DIR_ENV: &str = "CASHLOG_DATA_DIR";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub data_dir: PathBuf,
    /// `None` leaves requests without a deadline.
    pub timeout: Option<Duration>,
    pub write_mode: WriteMode,
}

impl Config {
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let base_url = m
            .get_one::<String>("api_url")
            .cloned()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let data_dir = match m.get_one::<String>("data_dir") {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };
        let timeout = m.get_one::<u64>("timeout").map(|s| Duration::from_secs(*s));
        let write_mode = if m.get_flag("merge_writes") {
            WriteMode::Merge
        } else {
            WriteMode::Refetch
        };
        Ok(Self {
            base_url,
            data_dir,
            timeout,
            write_mode,
        })
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().to_path_buf())
}
