// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Color, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

use crate::analytics::BudgetStatus;
use crate::models::{Theme, TransactionType, YearMonth};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<YearMonth> {
    s.parse::<YearMonth>().map_err(anyhow::Error::msg)
}

/// `₩1,234,567` style; negative amounts keep their sign in front.
pub fn fmt_money(d: &Decimal) -> String {
    let rounded = d.round_dp(0).abs();
    let digits = rounded.trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if d.is_sign_negative() && !rounded.is_zero() {
        format!("-₩{}", grouped)
    } else {
        format!("₩{}", grouped)
    }
}

pub fn fmt_percent(d: &Decimal) -> String {
    format!("{:.1}%", d.round_dp(1))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Same as [`pretty_table`] but rows are pre-built cells, so callers can colour them.
pub fn styled_table(headers: &[&str], rows: Vec<Vec<Cell>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r);
    }
    t
}

/// Terminal colours for the active theme.
pub struct Palette {
    theme: Theme,
}

impl Palette {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn kind(&self, kind: TransactionType) -> Color {
        match (kind, self.theme) {
            (TransactionType::Income, Theme::Light) => Color::DarkGreen,
            (TransactionType::Income, Theme::Dark) => Color::Green,
            (TransactionType::Expense, Theme::Light) => Color::DarkRed,
            (TransactionType::Expense, Theme::Dark) => Color::Red,
        }
    }

    pub fn status(&self, status: BudgetStatus) -> Color {
        match (status, self.theme) {
            (BudgetStatus::Safe, Theme::Light) => Color::DarkGreen,
            (BudgetStatus::Safe, Theme::Dark) => Color::Green,
            (BudgetStatus::Warning, Theme::Light) => Color::DarkYellow,
            (BudgetStatus::Warning, Theme::Dark) => Color::Yellow,
            (BudgetStatus::Danger, Theme::Light) => Color::DarkRed,
            (BudgetStatus::Danger, Theme::Dark) => Color::Red,
        }
    }

    pub fn balance(&self, amount: &Decimal) -> Color {
        match (amount.is_sign_negative() && !amount.is_zero(), self.theme) {
            (true, Theme::Light) => Color::DarkRed,
            (true, Theme::Dark) => Color::Red,
            (false, Theme::Light) => Color::DarkBlue,
            (false, Theme::Dark) => Color::Cyan,
        }
    }
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Asks a yes/no question on `output`, reading the answer from `input`.
pub fn confirm(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
    write!(output, "{} [y/N] ", prompt)?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
