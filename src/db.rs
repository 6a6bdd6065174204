// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::{Path, PathBuf};

use crate::stores::PreferenceStorage;

pub fn db_path(data_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("cashlog.sqlite"))
}

pub fn open_or_init(data_dir: &Path) -> Result<Connection> {
    let path = db_path(data_dir)?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}

impl PreferenceStorage for Connection {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let v: Option<String> = self
            .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.execute(
            "INSERT INTO settings(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}
