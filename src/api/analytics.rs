// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use super::client::{ApiClient, with_query};
use crate::error::ApiError;
use crate::models::{CategoryShare, MonthlySummary, YearMonth};

/// Server-computed reports. The client-side equivalents live in
/// [`crate::analytics`].
#[derive(Clone)]
pub struct AnalyticsApi {
    client: ApiClient,
}

impl AnalyticsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn monthly_summary(&self, month: YearMonth) -> Result<MonthlySummary, ApiError> {
        self.client.get(&with_query(
            "/api/analytics/monthly-summary",
            &[("yearMonth", Some(month.to_string()))],
        ))
    }

    pub fn category_breakdown(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CategoryShare>, ApiError> {
        self.client.get(&with_query(
            "/api/analytics/category-breakdown",
            &[
                ("startDate", Some(start.to_string())),
                ("endDate", Some(end.to_string())),
            ],
        ))
    }
}
