// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::Value;

use super::CrudResource;
use super::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Category, CategoryRequest};

const PATH: &str = "/api/categories";

#[derive(Clone)]
pub struct CategoriesApi {
    client: ApiClient,
}

impl CategoriesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn get_all(&self) -> Result<Vec<Category>, ApiError> {
        self.client.get(PATH)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Category, ApiError> {
        self.client.get(&format!("{}/{}", PATH, id))
    }
}

impl CrudResource for CategoriesApi {
    type Entity = Category;
    type Request = CategoryRequest;
    type Query = ();

    fn list(&self, _query: &()) -> Result<Vec<Category>, ApiError> {
        self.get_all()
    }

    fn create(&self, request: &CategoryRequest) -> Result<Category, ApiError> {
        self.client.post(PATH, request)
    }

    fn update(&self, id: i64, request: &CategoryRequest) -> Result<Category, ApiError> {
        self.client.put(&format!("{}/{}", PATH, id), request)
    }

    fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete::<Option<Value>>(&format!("{}/{}", PATH, id))
            .map(|_| ())
    }
}
