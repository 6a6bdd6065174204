// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

use crate::config::{API_URL_ENV, DATA_DIR_ENV, DEFAULT_API_URL};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    ]
}

fn id_arg() -> Arg {
    Arg::new("id")
        .required(true)
        .value_parser(value_parser!(i64))
}

fn yes_arg() -> Arg {
    Arg::new("yes")
        .long("yes")
        .short('y')
        .action(ArgAction::SetTrue)
        .help("Skip the confirmation prompt")
}

fn label_cmd(name: &'static str, what: &'static str) -> Command {
    Command::new(name)
        .about(format!("Manage {}", what))
        .subcommand_required(true)
        .subcommand(Command::new("list").args(json_args()))
        .subcommand(
            Command::new("add")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("color").long("color").help("#RRGGBB; picked automatically when omitted")),
        )
        .subcommand(
            Command::new("edit")
                .arg(id_arg())
                .arg(Arg::new("name").long("name"))
                .arg(Arg::new("color").long("color")),
        )
        .subcommand(Command::new("rm").arg(id_arg()).arg(yes_arg()))
}

fn tx_fields(cmd: Command, required: bool) -> Command {
    cmd.arg(Arg::new("date").long("date").required(required).help("YYYY-MM-DD"))
        .arg(
            Arg::new("type")
                .long("type")
                .required(required)
                .help("income | expense"),
        )
        .arg(Arg::new("amount").long("amount").required(required))
        .arg(Arg::new("category").long("category").required(required))
        .arg(Arg::new("currency").long("currency").help("ISO code, default KRW"))
        .arg(Arg::new("rate").long("rate").help("Conversion rate to KRW"))
        .arg(Arg::new("memo").long("memo"))
        .arg(
            Arg::new("tag")
                .long("tag")
                .action(ArgAction::Append)
                .help("Repeat for several tags"),
        )
}

fn budget_fields(cmd: Command, required: bool) -> Command {
    cmd.arg(Arg::new("month").long("month").required(required).help("YYYY-MM"))
        .arg(Arg::new("amount").long("amount").required(required))
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .help("Alert threshold in percent (default 80)"),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .action(ArgAction::Append)
                .help("Restrict to a category; repeat for several. None means all"),
        )
}

pub fn build_cli() -> Command {
    Command::new("cashlog")
        .about("Personal finance tracking client: transactions, budgets, analytics")
        .version(clap::crate_version!())
        .arg(
            Arg::new("api_url")
                .long("api-url")
                .global(true)
                .env(API_URL_ENV)
                .default_value(DEFAULT_API_URL),
        )
        .arg(
            Arg::new("data_dir")
                .long("data-dir")
                .global(true)
                .env(DATA_DIR_ENV)
                .help("Where local preferences are kept"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Request timeout in seconds; none by default"),
        )
        .arg(
            Arg::new("merge_writes")
                .long("merge-writes")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Merge saved entities locally instead of re-reading the list"),
        )
        .subcommand(Command::new("dashboard").about("Totals and recent transactions").args(json_args()))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .arg(Arg::new("start").long("start").help("YYYY-MM-DD"))
                        .arg(Arg::new("end").long("end").help("YYYY-MM-DD"))
                        .arg(Arg::new("type").long("type").help("income | expense"))
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("tag")
                                .long("tag")
                                .action(ArgAction::Append)
                                .help("Repeat to match any of several tags"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                )
                .subcommand(Command::new("show").arg(id_arg()).args(json_args()))
                .subcommand(tx_fields(Command::new("add"), true))
                .subcommand(tx_fields(Command::new("edit").arg(id_arg()), false))
                .subcommand(Command::new("rm").arg(id_arg()).arg(yes_arg())),
        )
        .subcommand(label_cmd("category", "categories"))
        .subcommand(label_cmd("tag", "tags"))
        .subcommand(
            Command::new("budget")
                .about("Monthly budgets")
                .subcommand_required(true)
                .subcommand(Command::new("list").args(json_args()))
                .subcommand(budget_fields(Command::new("add"), true))
                .subcommand(
                    budget_fields(Command::new("edit").arg(id_arg()), false).arg(
                        Arg::new("all_categories")
                            .long("all-categories")
                            .action(ArgAction::SetTrue)
                            .conflicts_with("category")
                            .help("Clear the category list so the budget covers everything"),
                    ),
                )
                .subcommand(Command::new("rm").arg(id_arg()).arg(yes_arg())),
        )
        .subcommand(
            Command::new("analytics")
                .about("Reports over fetched transactions")
                .subcommand_required(true)
                .subcommand(
                    Command::new("report")
                        .arg(Arg::new("month").long("month").help("YYYY-MM, default current"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("tag")
                                .long("tag")
                                .action(ArgAction::Append)
                                .help("Repeat to match any of several tags"),
                        )
                        .arg(
                            Arg::new("by")
                                .long("by")
                                .value_parser(["category", "tag"])
                                .default_value("category"),
                        )
                        .args(json_args()),
                )
                .subcommand(Command::new("trend").args(json_args()))
                .subcommand(
                    Command::new("calendar")
                        .about("Income and expense for every day of a month")
                        .arg(Arg::new("month").long("month").required(true).help("YYYY-MM"))
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("summary")
                        .about("Monthly summary computed by the server")
                        .arg(Arg::new("month").long("month").required(true))
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("breakdown")
                        .about("Category breakdown computed by the server")
                        .arg(Arg::new("start").long("start").required(true))
                        .arg(Arg::new("end").long("end").required(true))
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Download transactions as a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv | excel | pdf"),
                )
                .arg(Arg::new("start").long("start"))
                .arg(Arg::new("end").long("end"))
                .arg(Arg::new("out").long("out").help("Defaults to transactions-<start>-<end>.<ext>")),
        )
        .subcommand(
            Command::new("settings")
                .about("Theme and language")
                .subcommand(Command::new("show"))
                .subcommand(Command::new("theme").arg(Arg::new("value").required(true)))
                .subcommand(Command::new("language").arg(Arg::new("value").required(true)))
                .subcommand(Command::new("sync").about("Adopt the theme stored on the server")),
        )
}
