// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod analytics;
pub mod budgets;
pub mod categories;
pub mod client;
pub mod export;
pub mod session;
pub mod tags;
pub mod transactions;

pub use analytics::AnalyticsApi;
pub use budgets::BudgetsApi;
pub use categories::CategoriesApi;
pub use client::{ApiClient, ApiRequest, HttpTransport, RawResponse, Transport};
pub use export::{ExportApi, ExportFormat};
pub use session::SessionApi;
pub use tags::TagsApi;
pub use transactions::{TransactionQuery, TransactionsApi};

use crate::error::ApiError;
use crate::models::Entity;

/// The list/create/update/delete surface a collection store drives.
pub trait CrudResource {
    type Entity: Entity + Clone;
    type Request;
    /// Parameters of the list call; `()` for resources without filters.
    type Query: Default + Clone;

    fn list(&self, query: &Self::Query) -> Result<Vec<Self::Entity>, ApiError>;
    fn create(&self, request: &Self::Request) -> Result<Self::Entity, ApiError>;
    fn update(&self, id: i64, request: &Self::Request) -> Result<Self::Entity, ApiError>;
    fn delete(&self, id: i64) -> Result<(), ApiError>;
}
