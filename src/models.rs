// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Currency every transaction is converted into by the backend.
pub const REPORTING_CURRENCY: &str = "KRW";

/// Alert threshold applied when a budget does not carry one.
pub const DEFAULT_ALERT_THRESHOLD: u32 = 80;

/// Anything the backend identifies by a numeric id.
pub trait Entity {
    fn id(&self) -> i64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INCOME" => Ok(Self::Income),
            "EXPENSE" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "transactionDate")]
    pub date: NaiveDate,
    #[serde(rename = "transactionType")]
    pub kind: TransactionType,
    pub original_amount: Decimal,
    pub original_currency: String,
    #[serde(default)]
    pub conversion_rate: Option<Decimal>,
    /// Amount in [`REPORTING_CURRENCY`]; the only value aggregation looks at.
    #[serde(rename = "amountKrw")]
    pub converted_amount: Decimal,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Transaction {
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub transaction_date: NaiveDate,
    pub transaction_type: TransactionType,
    #[serde(with = "rust_decimal::serde::float")]
    pub original_amount: Decimal,
    pub original_currency: String,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub conversion_rate: Option<Decimal>,
    pub category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    pub tag_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRequest {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagRequest {
    pub name: String,
    pub color: String,
}

fn default_alert_threshold() -> Decimal {
    Decimal::from(DEFAULT_ALERT_THRESHOLD)
}

/// The backend sends `null` for optional fields it has no value for; read
/// that the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn alert_threshold_or_default<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Decimal, D::Error> {
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_else(default_alert_threshold))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i64,
    pub year: i32,
    pub month: u32,
    pub target_amount: Decimal,
    #[serde(
        default = "default_alert_threshold",
        deserialize_with = "alert_threshold_or_default"
    )]
    pub alert_threshold: Decimal,
    /// Empty means the budget covers every category.
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
}

impl Budget {
    pub fn period(&self) -> Option<YearMonth> {
        YearMonth::new(self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRequest {
    pub year: i32,
    pub month: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub target_amount: Decimal,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub alert_threshold: Option<Decimal>,
    /// Always sent; an empty list means every category.
    pub category_ids: Vec<i64>,
}

macro_rules! impl_entity {
    ($($t:ty),*) => {
        $(impl Entity for $t {
            fn id(&self) -> i64 {
                self.id
            }
        })*
    };
}

impl_entity!(Transaction, Category, Tag, Budget);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_income: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_expense: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub net_amount: Decimal,
    #[serde(default)]
    pub budget_target: Option<Decimal>,
    #[serde(default)]
    pub budget_remaining: Option<Decimal>,
    #[serde(default)]
    pub budget_usage_percentage: Option<f64>,
    #[serde(default)]
    pub alert_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Decimal,
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    #[serde(alias = "LIGHT")]
    Light,
    #[serde(alias = "DARK")]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Spelling the backend uses for the theme.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Light => "LIGHT",
            Self::Dark => "DARK",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("Unknown theme '{}' (use light|dark)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" => Ok(Self::Ko),
            "en" => Ok(Self::En),
            other => Err(format!("Unknown language '{}' (use ko|en)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPreferences {
    pub theme: Theme,
    #[serde(default)]
    pub default_currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateSessionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<&'static str>,
}

impl UpdateSessionRequest {
    pub fn theme(theme: Theme) -> Self {
        Self {
            theme: Some(theme.wire_name()),
        }
    }
}

/// A calendar month, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Moves `delta` months forward (or backward when negative).
    pub fn shift(self, delta: i32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 + delta;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// First and last day of the month.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)?;
        let last = self.shift(1).first_day()?.pred_opt()?;
        Some((first, last))
    }

    fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid month '{}', expected YYYY-MM", s);
        let (y, m) = s.trim().split_once('-').ok_or_else(invalid)?;
        if y.len() != 4 || m.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = y.parse().map_err(|_| invalid())?;
        let month: u32 = m.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
