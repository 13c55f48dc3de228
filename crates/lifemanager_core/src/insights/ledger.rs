//! Income/expense aggregations.

use crate::model::record::Record;
use crate::model::transaction::Transaction;
use chrono::{Local, NaiveDate, TimeZone};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LedgerTotals {
    pub income: f64,
    pub expense: f64,
    /// `income - expense`.
    pub balance: f64,
}

pub fn ledger_totals(transactions: &[Record<Transaction>]) -> LedgerTotals {
    let (income, expense) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(income, expense), record| {
                let tx = &record.fields;
                if tx.is_income() {
                    (income + tx.amount, expense)
                } else {
                    (income, expense + tx.amount)
                }
            });

    LedgerTotals {
        income,
        expense,
        balance: income - expense,
    }
}

pub fn balance(transactions: &[Record<Transaction>]) -> f64 {
    ledger_totals(transactions).balance
}

/// Expense totals per category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown {
    buckets: BTreeMap<String, f64>,
}

impl CategoryBreakdown {
    pub fn get(&self, category: &str) -> Option<f64> {
        self.buckets.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets by amount descending; ties keep category name order.
    pub fn sorted_desc(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .buckets
            .iter()
            .map(|(category, amount)| (category.as_str(), *amount))
            .collect();
        entries.sort_by(|left, right| right.1.total_cmp(&left.1));
        entries
    }

    /// Largest bucket, floored at 1 so it can always be used as a divisor.
    pub fn scale_max(&self) -> f64 {
        self.buckets.values().copied().fold(1.0, f64::max)
    }

    /// Bar width in percent of the largest bucket.
    pub fn bar_width_percent(&self, amount: f64) -> f64 {
        amount / self.scale_max() * 100.0
    }
}

/// Sums expense amounts per category; income is ignored.
pub fn category_breakdown(transactions: &[Record<Transaction>]) -> CategoryBreakdown {
    let mut buckets = BTreeMap::new();
    for tx in transactions
        .iter()
        .map(|record| &record.fields)
        .filter(|tx| tx.is_expense())
    {
        *buckets.entry(tx.category.clone()).or_insert(0.0) += tx.amount;
    }
    CategoryBreakdown { buckets }
}

/// Expense total for calendar `day` as observed in `tz`.
pub fn daily_spend_on<Tz: TimeZone>(
    transactions: &[Record<Transaction>],
    day: NaiveDate,
    tz: &Tz,
) -> f64 {
    transactions
        .iter()
        .map(|record| &record.fields)
        .filter(|tx| tx.is_expense() && tx.date.with_timezone(tz).date_naive() == day)
        .map(|tx| tx.amount)
        .sum()
}

/// Expense total for today in local time.
pub fn spent_today(transactions: &[Record<Transaction>]) -> f64 {
    daily_spend_on(transactions, Local::now().date_naive(), &Local)
}

/// Sorts by transaction date, newest first.
pub fn sort_newest_first(transactions: &mut [Record<Transaction>]) {
    transactions.sort_by(|left, right| right.fields.date.cmp(&left.fields.date));
}
