// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use cashlog::api::{ApiClient, ApiRequest, RawResponse, Transport};
use cashlog::app::App;
use cashlog::db;
use cashlog::error::ApiError;
use cashlog::stores::WriteMode;
use reqwest::Method;
use rusqlite::Connection;
use serde_json::{Value, json};

type Reply = Result<RawResponse, ApiError>;

/// Scripted backend. Replies are queued per `(method, path)`; the last one
/// queued for a route keeps being served. Unknown routes answer 404.
#[derive(Default)]
pub struct FakeBackend {
    routes: Mutex<HashMap<(Method, String), VecDeque<Reply>>>,
    log: Mutex<Vec<ApiRequest>>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, method: Method, path: &str, status: u16, body: Value) {
        let bytes = if body.is_null() {
            Vec::new()
        } else {
            body.to_string().into_bytes()
        };
        self.reply_raw(method, path, status, bytes);
    }

    pub fn reply_raw(&self, method: Method, path: &str, status: u16, body: Vec<u8>) {
        self.push(method, path, Ok(RawResponse { status, body }));
    }

    pub fn fail(&self, method: Method, path: &str, err: ApiError) {
        self.push(method, path, Err(err));
    }

    fn push(&self, method: Method, path: &str, reply: Reply) {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.log.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

impl Transport for FakeBackend {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        self.log.lock().unwrap().push(request.clone());
        let mut routes = self.routes.lock().unwrap();
        match routes.get_mut(&(request.method.clone(), request.path.clone())) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if !queue.is_empty() => queue[0].clone(),
            _ => Ok(RawResponse {
                status: 404,
                body: br#"{"message":"no route"}"#.to_vec(),
            }),
        }
    }
}

pub fn client(backend: &Arc<FakeBackend>) -> ApiClient {
    ApiClient::new(backend.clone())
}

pub fn memory_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

pub fn app(backend: &Arc<FakeBackend>) -> App {
    App::new(client(backend), memory_db(), WriteMode::Refetch).unwrap()
}

pub fn category(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "color": "#3B82F6" })
}

pub fn tag(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "color": "#22C55E" })
}

/// A KRW transaction as the backend sends it.
pub fn tx(id: i64, date: &str, kind: &str, amount: i64, category: Option<Value>, tags: Vec<Value>) -> Value {
    json!({
        "id": id,
        "transactionDate": date,
        "transactionType": kind,
        "originalAmount": amount,
        "originalCurrency": "KRW",
        "conversionRate": null,
        "amountKrw": amount,
        "category": category,
        "memo": null,
        "tags": tags,
        "createdAt": "2025-01-01T09:00:00",
        "updatedAt": "2025-01-01T09:00:00"
    })
}

pub fn budget(id: i64, year: i32, month: u32, target: i64, threshold: i64, categories: Vec<Value>) -> Value {
    json!({
        "id": id,
        "year": year,
        "month": month,
        "targetAmount": target,
        "alertThreshold": threshold,
        "categories": categories
    })
}
