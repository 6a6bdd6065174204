// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use cashlog::{app::App, cli, commands, config::Config, logging};

fn main() -> Result<()> {
    logging::init();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config = Config::from_matches(&matches)?;
    let mut app = App::from_config(&config)?;

    match matches.subcommand() {
        Some(("dashboard", sub)) => commands::dashboard::handle(&mut app, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut app, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut app, sub)?,
        Some(("tag", sub)) => commands::tags::handle(&mut app, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&mut app, sub)?,
        Some(("analytics", sub)) => commands::analytics::handle(&mut app, sub)?,
        Some(("export", sub)) => commands::export::handle(&mut app, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&mut app, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
