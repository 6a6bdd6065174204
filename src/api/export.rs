// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use chrono::NaiveDate;

use super::client::{ApiClient, with_query};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
    Pdf,
}

impl ExportFormat {
    /// Path segment of the export endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Excel => "excel",
            Self::Pdf => "pdf",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Excel => "xlsx",
            Self::Pdf => "pdf",
        }
    }

    pub fn file_name(&self, start: NaiveDate, end: NaiveDate) -> String {
        format!("transactions-{}-{}.{}", start, end, self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "excel" | "xlsx" => Ok(Self::Excel),
            "pdf" => Ok(Self::Pdf),
            other => Err(format!("Unknown format: {} (use csv|excel|pdf)", other)),
        }
    }
}

#[derive(Clone)]
pub struct ExportApi {
    client: ApiClient,
}

impl ExportApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetches the generated file for transactions between `start` and `end`.
    pub fn download(
        &self,
        format: ExportFormat,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<u8>, ApiError> {
        let path = with_query(
            &format!("/api/export/{}", format.as_str()),
            &[
                ("startDate", Some(start.to_string())),
                ("endDate", Some(end.to_string())),
            ],
        );
        self.client.download(&path)
    }
}
