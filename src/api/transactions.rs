// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde_json::Value;

use super::CrudResource;
use super::client::{ApiClient, with_query};
use crate::error::ApiError;
use crate::models::{Transaction, TransactionRequest, TransactionType};

const PATH: &str = "/api/transactions";

/// Server-side filters for the transaction list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub kind: Option<TransactionType>,
}

impl TransactionQuery {
    /// Overwrites the fields that are set in `patch`, keeping the rest.
    pub fn merge(&mut self, patch: TransactionQuery) {
        if patch.start_date.is_some() {
            self.start_date = patch.start_date;
        }
        if patch.end_date.is_some() {
            self.end_date = patch.end_date;
        }
        if patch.kind.is_some() {
            self.kind = patch.kind;
        }
    }

    pub fn to_path(&self) -> String {
        with_query(
            PATH,
            &[
                ("startDate", self.start_date.map(|d| d.to_string())),
                ("endDate", self.end_date.map(|d| d.to_string())),
                ("type", self.kind.map(|k| k.as_str().to_string())),
            ],
        )
    }
}

#[derive(Clone)]
pub struct TransactionsApi {
    client: ApiClient,
}

impl TransactionsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn get_all(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, ApiError> {
        self.client.get(&query.to_path())
    }

    pub fn get_by_id(&self, id: i64) -> Result<Transaction, ApiError> {
        self.client.get(&format!("{}/{}", PATH, id))
    }

    pub fn create(&self, request: &TransactionRequest) -> Result<Transaction, ApiError> {
        self.client.post(PATH, request)
    }

    pub fn update(&self, id: i64, request: &TransactionRequest) -> Result<Transaction, ApiError> {
        self.client.put(&format!("{}/{}", PATH, id), request)
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete::<Option<Value>>(&format!("{}/{}", PATH, id))
            .map(|_| ())
    }
}

impl CrudResource for TransactionsApi {
    type Entity = Transaction;
    type Request = TransactionRequest;
    type Query = TransactionQuery;

    fn list(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, ApiError> {
        self.get_all(query)
    }

    fn create(&self, request: &TransactionRequest) -> Result<Transaction, ApiError> {
        TransactionsApi::create(self, request)
    }

    fn update(&self, id: i64, request: &TransactionRequest) -> Result<Transaction, ApiError> {
        TransactionsApi::update(self, id, request)
    }

    fn delete(&self, id: i64) -> Result<(), ApiError> {
        TransactionsApi::delete(self, id)
    }
}
