// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod analytics;
pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod logging;
pub mod models;
pub mod stores;
pub mod utils;
