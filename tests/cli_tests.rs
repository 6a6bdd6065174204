// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use cashlog::cli::build_cli;
use cashlog::config::{Config, DEFAULT_API_URL};
use cashlog::stores::WriteMode;

#[test]
fn cli_definition_is_consistent() {
    build_cli().debug_assert();
}

#[test]
fn global_options_build_config() {
    let m = build_cli().get_matches_from([
        "cashlog",
        "--api-url",
        "http://api.example:9000",
        "--data-dir",
        "/tmp/cashlog-test",
        "--timeout",
        "15",
        "--merge-writes",
        "dashboard",
    ]);
    let config = Config::from_matches(&m).unwrap();
    assert_eq!(config.base_url, "http://api.example:9000");
    assert_eq!(config.data_dir.to_str(), Some("/tmp/cashlog-test"));
    assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    assert_eq!(config.write_mode, WriteMode::Merge);
}

#[test]
fn defaults_without_options() {
    let m = build_cli().get_matches_from(["cashlog", "--data-dir", "/tmp/x", "dashboard"]);
    let config = Config::from_matches(&m).unwrap();
    if std::env::var_os("CASHLOG_API_URL").is_none() {
        assert_eq!(config.base_url, DEFAULT_API_URL);
    }
    assert_eq!(config.timeout, None);
    assert_eq!(config.write_mode, WriteMode::Refetch);
}

#[test]
fn tx_add_collects_repeated_tags() {
    let m = build_cli().get_matches_from([
        "cashlog", "tx", "add", "--date", "2025-01-02", "--type", "expense", "--amount", "9000",
        "--category", "Food", "--tag", "work", "--tag", "lunch",
    ]);
    let (_, tx) = m.subcommand().unwrap();
    let (name, add) = tx.subcommand().unwrap();
    assert_eq!(name, "add");
    let tags: Vec<&String> = add.get_many::<String>("tag").unwrap().collect();
    assert_eq!(tags, vec!["work", "lunch"]);
}

#[test]
fn tx_add_requires_core_fields() {
    let res = build_cli().try_get_matches_from(["cashlog", "tx", "add", "--date", "2025-01-02"]);
    assert!(res.is_err());
}

#[test]
fn report_dimension_is_restricted() {
    let ok = build_cli().try_get_matches_from(["cashlog", "analytics", "report", "--by", "tag"]);
    assert!(ok.is_ok());
    let bad = build_cli().try_get_matches_from(["cashlog", "analytics", "report", "--by", "payee"]);
    assert!(bad.is_err());
}

#[test]
fn list_and_report_accept_several_tags() {
    let m = build_cli().get_matches_from(["cashlog", "tx", "list", "--tag", "trip", "--tag", "family"]);
    let (_, tx) = m.subcommand().unwrap();
    let (_, list) = tx.subcommand().unwrap();
    let tags: Vec<&String> = list.get_many::<String>("tag").unwrap().collect();
    assert_eq!(tags, vec!["trip", "family"]);

    let ok = build_cli().try_get_matches_from([
        "cashlog", "analytics", "report", "--tag", "a", "--tag", "b",
    ]);
    assert!(ok.is_ok());
}

#[test]
fn calendar_needs_a_month() {
    assert!(build_cli().try_get_matches_from(["cashlog", "analytics", "calendar"]).is_err());
    let ok = build_cli().try_get_matches_from(["cashlog", "analytics", "calendar", "--month", "2024-02"]);
    assert!(ok.is_ok());
}

#[test]
fn json_flags_conflict() {
    let res = build_cli().try_get_matches_from(["cashlog", "dashboard", "--json", "--jsonl"]);
    assert!(res.is_err());
}
