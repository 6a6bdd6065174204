// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::client::ApiClient;
use crate::error::ApiError;
use crate::models::{SessionPreferences, UpdateSessionRequest};

const PATH: &str = "/api/session/preferences";

#[derive(Clone)]
pub struct SessionApi {
    client: ApiClient,
}

impl SessionApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn get_preferences(&self) -> Result<SessionPreferences, ApiError> {
        self.client.get(PATH)
    }

    pub fn update_preferences(
        &self,
        request: &UpdateSessionRequest,
    ) -> Result<SessionPreferences, ApiError> {
        self.client.put(PATH, request)
    }
}
