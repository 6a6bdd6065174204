// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Arc;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::api::{
    AnalyticsApi, ApiClient, BudgetsApi, CategoriesApi, ExportApi, HttpTransport, SessionApi,
    TagsApi, TransactionsApi,
};
use crate::config::Config;
use crate::db;
use crate::models::Language;
use crate::stores::{
    BudgetStore, CategoryStore, CollectionStore, PreferenceStorage, SessionStore, TagStore,
    TransactionStore, WriteMode,
};
use crate::utils::Palette;

/// Owns every store and the stateless resource clients. Views get it by
/// mutable reference; there is no global state.
pub struct App<S = Connection> {
    pub transactions: TransactionStore,
    pub categories: CategoryStore,
    pub tags: TagStore,
    pub budgets: BudgetStore,
    pub session: SessionStore<S>,
    pub analytics: AnalyticsApi,
    pub export: ExportApi,
}

impl<S: PreferenceStorage> App<S> {
    pub fn new(client: ApiClient, storage: S, write_mode: WriteMode) -> Result<Self> {
        Ok(Self {
            transactions: CollectionStore::new("transactions", TransactionsApi::new(client.clone()))
                .with_write_mode(write_mode),
            categories: CollectionStore::new("categories", CategoriesApi::new(client.clone()))
                .with_write_mode(write_mode),
            tags: CollectionStore::new("tags", TagsApi::new(client.clone()))
                .with_write_mode(write_mode),
            budgets: CollectionStore::new("budgets", BudgetsApi::new(client.clone()))
                .with_write_mode(write_mode),
            session: SessionStore::restore(SessionApi::new(client.clone()), storage)?,
            analytics: AnalyticsApi::new(client.clone()),
            export: ExportApi::new(client),
        })
    }

    pub fn language(&self) -> Language {
        self.session.language()
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.session.theme())
    }
}

impl App<Connection> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(&config.base_url, config.timeout)
            .context("Failed to build HTTP client")?;
        let conn = db::open_or_init(&config.data_dir)?;
        Self::new(ApiClient::new(Arc::new(transport)), conn, config.write_mode)
    }
}
