// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Field-level validation of user input before anything is sent.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::ValidationErrors;
use crate::i18n::Text;
use crate::models::{
    BudgetRequest, CategoryRequest, Language, TagRequest, TransactionRequest, TransactionType,
    YearMonth,
};

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex colour pattern"));
static CURRENCY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{3}$").expect("currency pattern"));

const MIN_BUDGET_YEAR: i32 = 2000;

/// Raw transaction input, as typed.
#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    pub date: String,
    pub kind: String,
    pub amount: String,
    pub currency: String,
    pub conversion_rate: Option<String>,
    pub category_id: Option<i64>,
    pub memo: Option<String>,
    pub tags: Vec<String>,
}

impl TransactionForm {
    pub fn validate(&self, lang: Language) -> Result<TransactionRequest, ValidationErrors> {
        let mut errs = ValidationErrors::default();

        let date = match self.date.trim() {
            "" => {
                errs.push("transactionDate", Text::DateRequired.tr(lang));
                None
            }
            s => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| {
                    errs.push("transactionDate", Text::InvalidDate.tr(lang))
                })
                .ok(),
        };

        let kind = match self.kind.trim() {
            "" => {
                errs.push("transactionType", Text::TypeRequired.tr(lang));
                None
            }
            s => s
                .parse::<TransactionType>()
                .map_err(|_| errs.push("transactionType", Text::InvalidType.tr(lang)))
                .ok(),
        };

        let amount = positive_decimal(&mut errs, "originalAmount", &self.amount, lang);

        let currency = self.currency.trim().to_ascii_uppercase();
        if !CURRENCY.is_match(&currency) {
            errs.push("originalCurrency", Text::CurrencyLength.tr(lang));
        }

        let conversion_rate = match self.conversion_rate.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => match s.parse::<Decimal>() {
                Ok(r) if r >= Decimal::new(1, 2) && r <= Decimal::from(10_000) => Some(r),
                Ok(_) => {
                    errs.push("conversionRate", Text::RateRange.tr(lang));
                    None
                }
                Err(_) => {
                    errs.push("conversionRate", Text::InvalidNumber.tr(lang));
                    None
                }
            },
        };

        if self.category_id.is_none() {
            errs.push("categoryId", Text::CategoryRequired.tr(lang));
        }

        let tag_names: Vec<String> = self
            .tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        match (date, kind, amount, self.category_id) {
            (Some(transaction_date), Some(transaction_type), Some(original_amount), Some(category_id))
                if errs.is_empty() =>
            {
                Ok(TransactionRequest {
                    transaction_date,
                    transaction_type,
                    original_amount,
                    original_currency: currency,
                    conversion_rate,
                    category_id,
                    memo: self
                        .memo
                        .as_deref()
                        .map(str::trim)
                        .filter(|m| !m.is_empty())
                        .map(str::to_string),
                    tag_names,
                })
            }
            _ => Err(errs),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BudgetForm {
    /// `YYYY-MM`
    pub period: String,
    pub amount: String,
    pub alert_threshold: Option<String>,
    pub category_ids: Vec<i64>,
}

impl BudgetForm {
    pub fn validate(&self, lang: Language) -> Result<BudgetRequest, ValidationErrors> {
        let mut errs = ValidationErrors::default();

        let period = match self.period.trim().parse::<YearMonth>() {
            Ok(p) if p.year() >= MIN_BUDGET_YEAR => Some(p),
            Ok(_) => {
                errs.push("period", Text::YearTooEarly.tr(lang));
                None
            }
            Err(_) => {
                errs.push("period", Text::InvalidMonth.tr(lang));
                None
            }
        };

        let amount = positive_decimal(&mut errs, "targetAmount", &self.amount, lang);

        let threshold = match self.alert_threshold.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => match s.parse::<Decimal>() {
                Ok(v) if v >= Decimal::ONE && v <= Decimal::ONE_HUNDRED => Some(v),
                _ => {
                    errs.push("alertThreshold", Text::ThresholdRange.tr(lang));
                    None
                }
            },
        };

        match (period, amount) {
            (Some(period), Some(target_amount)) if errs.is_empty() => Ok(BudgetRequest {
                year: period.year(),
                month: period.month(),
                target_amount,
                alert_threshold: threshold,
                category_ids: self.category_ids.clone(),
            }),
            _ => Err(errs),
        }
    }
}

/// Name and colour, shared by tags and categories.
#[derive(Debug, Clone, Default)]
pub struct LabelForm {
    pub name: String,
    pub color: String,
}

impl LabelForm {
    fn check(&self, lang: Language) -> Result<(String, String), ValidationErrors> {
        let mut errs = ValidationErrors::default();
        let name = self.name.trim();
        if name.is_empty() {
            errs.push("name", Text::NameRequired.tr(lang));
        }
        let color = self.color.trim();
        if color.is_empty() {
            errs.push("color", Text::ColorRequired.tr(lang));
        } else if !HEX_COLOR.is_match(color) {
            errs.push("color", Text::InvalidColor.tr(lang));
        }
        errs.into_result((name.to_string(), color.to_ascii_uppercase()))
    }

    pub fn category(&self, lang: Language) -> Result<CategoryRequest, ValidationErrors> {
        self.check(lang)
            .map(|(name, color)| CategoryRequest { name, color })
    }

    pub fn tag(&self, lang: Language) -> Result<TagRequest, ValidationErrors> {
        self.check(lang).map(|(name, color)| TagRequest { name, color })
    }
}

/// Both ends are required and must be in order.
pub fn export_range(
    start: Option<&str>,
    end: Option<&str>,
    lang: Language,
) -> Result<(NaiveDate, NaiveDate), ValidationErrors> {
    let mut errs = ValidationErrors::default();
    let mut parse = |field: &'static str, raw: Option<&str>| match raw.map(str::trim) {
        None | Some("") => {
            errs.push(field, Text::DateRangeRequired.tr(lang));
            None
        }
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| errs.push(field, Text::InvalidDate.tr(lang)))
            .ok(),
    };
    let start = parse("startDate", start);
    let end = parse("endDate", end);
    match (start, end) {
        (Some(s), Some(e)) if s > e => {
            errs.push("endDate", Text::EndBeforeStart.tr(lang));
            Err(errs)
        }
        (Some(s), Some(e)) => errs.into_result((s, e)),
        _ => Err(errs),
    }
}

fn positive_decimal(
    errs: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
    lang: Language,
) -> Option<Decimal> {
    match raw.trim() {
        "" => {
            errs.push(field, Text::AmountRequired.tr(lang));
            None
        }
        s => match s.parse::<Decimal>() {
            Ok(v) if v > Decimal::ZERO => Some(v),
            Ok(_) => {
                errs.push(field, Text::AmountPositive.tr(lang));
                None
            }
            Err(_) => {
                errs.push(field, Text::InvalidNumber.tr(lang));
                None
            }
        },
    }
}
