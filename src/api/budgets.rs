// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::Value;

use super::CrudResource;
use super::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Budget, BudgetRequest};

const PATH: &str = "/api/budgets";

#[derive(Clone)]
pub struct BudgetsApi {
    client: ApiClient,
}

impl BudgetsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn get_by_id(&self, id: i64) -> Result<Budget, ApiError> {
        self.client.get(&format!("{}/{}", PATH, id))
    }
}

impl CrudResource for BudgetsApi {
    type Entity = Budget;
    type Request = BudgetRequest;
    type Query = ();

    fn list(&self, _query: &()) -> Result<Vec<Budget>, ApiError> {
        self.client.get(PATH)
    }

    fn create(&self, request: &BudgetRequest) -> Result<Budget, ApiError> {
        self.client.post(PATH, request)
    }

    fn update(&self, id: i64, request: &BudgetRequest) -> Result<Budget, ApiError> {
        self.client.put(&format!("{}/{}", PATH, id), request)
    }

    fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete::<Option<Value>>(&format!("{}/{}", PATH, id))
            .map(|_| ())
    }
}
