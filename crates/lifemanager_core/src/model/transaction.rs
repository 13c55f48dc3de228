//! Income/expense ledger entity.
//!
//! Amounts are taken as entered: no sign or range validation is applied on
//! write, and category vocabularies are advisory.

use super::record::{Collection, Entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Utilities",
    "Entertainment",
    "Health",
    "Shopping",
    "Investment",
    "Other",
];

pub const INCOME_CATEGORIES: &[&str] = &["Salary", "Freelance", "Investment", "Gift", "Other"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Category vocabulary offered for this direction.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            Self::Income => INCOME_CATEGORIES,
            Self::Expense => EXPENSE_CATEGORIES,
        }
    }

    /// Category preselected for a new entry.
    pub fn default_category(self) -> &'static str {
        match self {
            Self::Income => "Salary",
            Self::Expense => "Food",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn income(amount: f64, category: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self::new(TransactionType::Income, amount, category, date)
    }

    pub fn expense(amount: f64, category: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self::new(TransactionType::Expense, amount, category, date)
    }

    pub fn new(
        kind: TransactionType,
        amount: f64,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            amount,
            category: category.into(),
            description: String::new(),
            date,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Returns whether `category` belongs to the vocabulary of `kind`.
    pub fn has_known_category(&self) -> bool {
        self.kind.categories().contains(&self.category.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TransactionPatch {
    #[serde(default, rename = "type")]
    pub kind: Option<TransactionType>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl Entity for Transaction {
    const COLLECTION: Collection = Collection::Transactions;
    type Patch = TransactionPatch;

    fn apply_patch(&mut self, patch: TransactionPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }
}
