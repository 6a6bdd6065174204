// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::Value;

use super::CrudResource;
use super::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Tag, TagRequest};

const PATH: &str = "/api/tags";

#[derive(Clone)]
pub struct TagsApi {
    client: ApiClient,
}

impl TagsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CrudResource for TagsApi {
    type Entity = Tag;
    type Request = TagRequest;
    type Query = ();

    fn list(&self, _query: &()) -> Result<Vec<Tag>, ApiError> {
        self.client.get(PATH)
    }

    fn create(&self, request: &TagRequest) -> Result<Tag, ApiError> {
        self.client.post(PATH, request)
    }

    fn update(&self, id: i64, request: &TagRequest) -> Result<Tag, ApiError> {
        self.client.put(&format!("{}/{}", PATH, id), request)
    }

    fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete::<Option<Value>>(&format!("{}/{}", PATH, id))
            .map(|_| ())
    }
}
