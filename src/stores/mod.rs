// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod collection;
pub mod optimistic;
pub mod session;

pub use collection::{CollectionStore, FetchTicket, LoadState, PendingDelete, WriteMode};
pub use session::{LocalPreferences, PreferenceStorage, STORAGE_KEY, SessionStore};

use crate::api::{BudgetsApi, CategoriesApi, TagsApi, TransactionQuery, TransactionsApi};

pub type TransactionStore = CollectionStore<TransactionsApi>;
pub type CategoryStore = CollectionStore<CategoriesApi>;
pub type TagStore = CollectionStore<TagsApi>;
pub type BudgetStore = CollectionStore<BudgetsApi>;

impl CollectionStore<TransactionsApi> {
    /// Merges `patch` into the current filters and re-reads.
    pub fn set_filters(&mut self, patch: TransactionQuery) {
        let mut query = self.query().clone();
        query.merge(patch);
        self.set_query(query);
    }

    pub fn clear_filters(&mut self) {
        self.set_query(TransactionQuery::default());
    }
}
