// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing::{debug, warn};

use super::optimistic::Undo;
use crate::api::CrudResource;
use crate::error::ApiError;
use crate::models::Entity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// What a store does with its collection after a successful create/update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Re-read the whole collection.
    #[default]
    Refetch,
    /// Put the entity returned by the backend in place, no extra request.
    Merge,
}

/// Identifies one list request. Only the result of the most recently
/// issued ticket is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// An optimistic delete whose backend call has not completed yet.
#[must_use = "finish the delete with CollectionStore::finish_delete"]
#[derive(Debug)]
pub struct PendingDelete<E> {
    id: i64,
    undo: Undo<Vec<E>>,
}

impl<E> PendingDelete<E> {
    pub fn id(&self) -> i64 {
        self.id
    }
}

/// Last-fetched copy of one backend collection plus its loading and error
/// status. The backend stays authoritative; this is a write-through cache.
pub struct CollectionStore<R: CrudResource> {
    name: &'static str,
    resource: R,
    items: Vec<R::Entity>,
    query: R::Query,
    state: LoadState,
    error: Option<String>,
    write_mode: WriteMode,
    issued: u64,
}

impl<R: CrudResource> CollectionStore<R> {
    pub fn new(name: &'static str, resource: R) -> Self {
        Self {
            name,
            resource,
            items: Vec::new(),
            query: R::Query::default(),
            state: LoadState::Idle,
            error: None,
            write_mode: WriteMode::default(),
            issued: 0,
        }
    }

    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn items(&self) -> &[R::Entity] {
        &self.items
    }

    pub fn find(&self, id: i64) -> Option<&R::Entity> {
        self.items.iter().find(|e| e.id() == id)
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn query(&self) -> &R::Query {
        &self.query
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// Replaces the list parameters and re-reads the collection.
    pub fn set_query(&mut self, query: R::Query) {
        self.query = query;
        self.fetch_all();
    }

    /// Marks the store as loading and hands out the ticket the result must
    /// be delivered with.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.state = LoadState::Loading;
        self.error = None;
        FetchTicket(self.issued)
    }

    /// Applies a list result. Returns `false` when a newer fetch has been
    /// started since `ticket` was issued; the result is then dropped.
    ///
    /// A failure keeps the previous collection and records the message.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<R::Entity>, ApiError>,
    ) -> bool {
        if ticket.0 != self.issued {
            debug!(store = self.name, ticket = ticket.0, latest = self.issued, "discarding stale fetch");
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                self.state = LoadState::Loaded;
            }
            Err(err) => self.record_failure(&err),
        }
        true
    }

    /// Re-reads the collection. Failures are recorded, never returned.
    pub fn fetch_all(&mut self) {
        let ticket = self.begin_fetch();
        let result = self.resource.list(&self.query);
        self.finish_fetch(ticket, result);
    }

    pub fn add(&mut self, request: &R::Request) -> Result<R::Entity, ApiError> {
        self.state = LoadState::Loading;
        self.error = None;
        match self.resource.create(request) {
            Ok(entity) => {
                self.after_write(&entity);
                Ok(entity)
            }
            Err(err) => {
                self.record_failure(&err);
                Err(err)
            }
        }
    }

    pub fn update(&mut self, id: i64, request: &R::Request) -> Result<R::Entity, ApiError> {
        self.state = LoadState::Loading;
        self.error = None;
        match self.resource.update(id, request) {
            Ok(entity) => {
                self.after_write(&entity);
                Ok(entity)
            }
            Err(err) => {
                self.record_failure(&err);
                Err(err)
            }
        }
    }

    /// Removes the entity locally before the backend has confirmed.
    pub fn begin_delete(&mut self, id: i64) -> PendingDelete<R::Entity> {
        let undo = Undo::apply(&mut self.items, |items| items.retain(|e| e.id() != id));
        PendingDelete { id, undo }
    }

    /// Settles an optimistic delete: on failure the pre-delete collection is
    /// restored, the error recorded and the store left in `Error`.
    pub fn finish_delete(
        &mut self,
        pending: PendingDelete<R::Entity>,
        result: Result<(), ApiError>,
    ) -> Result<(), ApiError> {
        match result {
            Ok(()) => {
                pending.undo.commit();
                Ok(())
            }
            Err(err) => {
                debug!(store = self.name, id = pending.id, "restoring after failed delete");
                pending.undo.rollback(&mut self.items);
                self.record_failure(&err);
                Err(err)
            }
        }
    }

    pub fn delete(&mut self, id: i64) -> Result<(), ApiError> {
        let pending = self.begin_delete(id);
        let result = self.resource.delete(id);
        self.finish_delete(pending, result)
    }

    fn after_write(&mut self, entity: &R::Entity) {
        match self.write_mode {
            WriteMode::Refetch => self.fetch_all(),
            WriteMode::Merge => {
                match self.items.iter_mut().find(|e| e.id() == entity.id()) {
                    Some(slot) => *slot = entity.clone(),
                    None => self.items.push(entity.clone()),
                }
                self.state = LoadState::Loaded;
            }
        }
    }

    fn record_failure(&mut self, err: &ApiError) {
        warn!(store = self.name, status = err.status, message = %err.message, "request failed");
        self.error = Some(err.message.clone());
        self.state = LoadState::Error;
    }
}
