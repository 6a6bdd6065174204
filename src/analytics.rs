// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Client-side aggregation over a fetched transaction collection.
//!
//! Everything here is a pure function of `(transactions, filter)` and is
//! recomputed from scratch on every render; nothing is cached.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Budget, Transaction, TransactionType, YearMonth};

/// Entries in the top income/expense lists.
pub const TOP_N: usize = 5;
/// Length of the monthly trend, current month included.
pub const TREND_MONTHS: usize = 6;
/// Breakdown label for expenses without a category.
pub const UNCATEGORIZED: &str = "(uncategorized)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Period {
    #[default]
    All,
    Month(YearMonth),
    /// Inclusive on both ends; a missing bound is open.
    Range {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl Period {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Month(m) => m.contains(date),
            Self::Range { start, end } => {
                start.is_none_or(|s| date >= s) && end.is_none_or(|e| date <= e)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub period: Period,
    pub category: Option<String>,
    /// A transaction matches when it carries any of these; empty means no
    /// tag restriction.
    pub tags: Vec<String>,
}

impl Filter {
    pub fn month(month: YearMonth) -> Self {
        Self {
            period: Period::Month(month),
            ..Self::default()
        }
    }

    pub fn range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            period: Period::Range { start, end },
            ..Self::default()
        }
    }

    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.category = Some(name.into());
        self
    }

    pub fn with_tag(mut self, name: impl Into<String>) -> Self {
        self.tags.push(name.into());
        self
    }

    pub fn matches(&self, t: &Transaction) -> bool {
        self.period.contains(t.date)
            && self
                .category
                .as_deref()
                .is_none_or(|c| t.category_name() == Some(c))
            && (self.tags.is_empty() || self.tags.iter().any(|tag| t.has_tag(tag)))
    }
}

pub fn select<'a>(transactions: &'a [Transaction], filter: &Filter) -> Vec<&'a Transaction> {
    transactions.iter().filter(|t| filter.matches(t)).collect()
}

/// Sum of converted amounts of one type inside the filter.
pub fn total(transactions: &[Transaction], filter: &Filter, kind: TransactionType) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == kind && filter.matches(t))
        .map(|t| t.converted_amount)
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub count: usize,
}

pub fn totals(transactions: &[Transaction], filter: &Filter) -> Totals {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    let mut count = 0;
    for t in transactions.iter().filter(|t| filter.matches(t)) {
        match t.kind {
            TransactionType::Income => income += t.converted_amount,
            TransactionType::Expense => expense += t.converted_amount,
        }
        count += 1;
    }
    Totals {
        income,
        expense,
        balance: income - expense,
        count,
    }
}

/// The `n` largest transactions of one type, largest first. Equal amounts
/// keep their input order.
pub fn top_n<'a>(
    transactions: &'a [Transaction],
    filter: &Filter,
    kind: TransactionType,
    n: usize,
) -> Vec<&'a Transaction> {
    let mut picked: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.kind == kind && filter.matches(t))
        .collect();
    picked.sort_by(|a, b| b.converted_amount.cmp(&a.converted_amount));
    picked.truncate(n);
    picked
}

/// Newest first, by transaction date.
pub fn recent(transactions: &[Transaction], n: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Category,
    /// A transaction counts in full towards each of its tags, so the groups
    /// can add up to more than the total expense.
    Tag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    pub label: String,
    pub amount: Decimal,
    /// Share of the filtered expense total, 0..=100 for categories.
    pub percentage: Decimal,
}

/// Expense sums per group, largest first (ties by label).
pub fn breakdown(
    transactions: &[Transaction],
    filter: &Filter,
    dimension: Dimension,
) -> Vec<BreakdownEntry> {
    let expenses: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.kind == TransactionType::Expense && filter.matches(t))
        .collect();
    let overall: Decimal = expenses.iter().map(|t| t.converted_amount).sum();

    let mut groups: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in &expenses {
        match dimension {
            Dimension::Category => {
                let label = t.category_name().unwrap_or(UNCATEGORIZED).to_string();
                *groups.entry(label).or_insert(Decimal::ZERO) += t.converted_amount;
            }
            Dimension::Tag => {
                for tag in &t.tags {
                    *groups.entry(tag.name.clone()).or_insert(Decimal::ZERO) +=
                        t.converted_amount;
                }
            }
        }
    }

    let mut entries: Vec<BreakdownEntry> = groups
        .into_iter()
        .map(|(label, amount)| BreakdownEntry {
            percentage: percent_of(amount, overall),
            label,
            amount,
        })
        .collect();
    entries.sort_by(|a, b| b.amount.cmp(&a.amount));
    entries
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    pub month: YearMonth,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Income and expense for the [`TREND_MONTHS`] months ending with the
/// month of `today`, oldest first. Months without data are zero.
pub fn monthly_trend(transactions: &[Transaction], today: NaiveDate) -> Vec<MonthlyPoint> {
    let current = YearMonth::of(today);
    (0..TREND_MONTHS as i32)
        .rev()
        .map(|back| {
            let month = current.shift(-back);
            let filter = Filter::month(month);
            MonthlyPoint {
                month,
                income: total(transactions, &filter, TransactionType::Income),
                expense: total(transactions, &filter, TransactionType::Expense),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

/// One point per calendar day of `month`, first day first. Days without
/// transactions are zero.
pub fn daily(transactions: &[Transaction], month: YearMonth) -> Vec<DailyPoint> {
    let Some((first, last)) = month.bounds() else {
        return Vec::new();
    };
    let mut sums: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
    for t in transactions.iter().filter(|t| month.contains(t.date)) {
        let (income, expense) = sums.entry(t.date).or_default();
        match t.kind {
            TransactionType::Income => *income += t.converted_amount,
            TransactionType::Expense => *expense += t.converted_amount,
        }
    }
    first
        .iter_days()
        .take_while(|d| *d <= last)
        .map(|date| {
            let (income, expense) = sums.get(&date).copied().unwrap_or_default();
            DailyPoint {
                date,
                income,
                expense,
                net: income - expense,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Safe,
    Warning,
    Danger,
}

impl BudgetStatus {
    /// `raw_percentage` is the unclamped spend share.
    pub fn classify(raw_percentage: Decimal, alert_threshold: Decimal) -> Self {
        if raw_percentage >= Decimal::ONE_HUNDRED {
            Self::Danger
        } else if raw_percentage >= alert_threshold {
            Self::Warning
        } else {
            Self::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub budget: Budget,
    pub period: Option<YearMonth>,
    pub spent: Decimal,
    /// `target - spent`; negative once overspent.
    pub remaining: Decimal,
    /// Clamped to 100 for display.
    pub percentage: Decimal,
    pub raw_percentage: Decimal,
    pub status: BudgetStatus,
}

/// Spend against one budget: expenses in the budget's month, restricted to
/// its categories unless it has none.
pub fn budget_progress(budget: &Budget, transactions: &[Transaction]) -> BudgetProgress {
    let period = budget.period();
    let spent: Decimal = match period {
        Some(month) => transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Expense && month.contains(t.date))
            .filter(|t| {
                budget.categories.is_empty()
                    || t.category
                        .as_ref()
                        .is_some_and(|c| budget.categories.iter().any(|bc| bc.id == c.id))
            })
            .map(|t| t.converted_amount)
            .sum(),
        None => Decimal::ZERO,
    };
    let raw_percentage = if budget.target_amount > Decimal::ZERO {
        percent_of(spent, budget.target_amount)
    } else if spent > Decimal::ZERO {
        Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    BudgetProgress {
        budget: budget.clone(),
        period,
        spent,
        remaining: budget.target_amount - spent,
        percentage: raw_percentage.min(Decimal::ONE_HUNDRED),
        raw_percentage,
        status: BudgetStatus::classify(raw_percentage, budget.alert_threshold),
    }
}

/// Progress for every budget, latest period first.
pub fn budgets_progress(budgets: &[Budget], transactions: &[Transaction]) -> Vec<BudgetProgress> {
    let mut out: Vec<BudgetProgress> = budgets
        .iter()
        .map(|b| budget_progress(b, transactions))
        .collect();
    out.sort_by(|a, b| b.period.cmp(&a.period));
    out
}

fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}
