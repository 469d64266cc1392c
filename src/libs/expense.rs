//! Expense records.
//!
//! Expenses have a lifecycle independent of sessions: they are created,
//! edited and deleted directly by the user, optionally referencing the
//! session they were incurred in.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a recorded expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseType {
    Toll,
    Meal,
    Fuel,
    Other,
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseType::Toll => "toll",
            ExpenseType::Meal => "meal",
            ExpenseType::Fuel => "fuel",
            ExpenseType::Other => "other",
        };
        write!(f, "{}", label)
    }
}

/// A single recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub user_id: String,
    /// Session the expense belongs to, when it was incurred during one.
    pub session_id: Option<i64>,
    pub kind: ExpenseType,
    pub amount: f64,
    pub description: String,
    pub timestamp: NaiveDateTime,
    /// Reference to a receipt image, when one was attached.
    pub receipt: Option<String>,
}

/// Fields a new expense is created from; id, owner and timestamp are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub session_id: Option<i64>,
    pub kind: ExpenseType,
    pub amount: f64,
    pub description: String,
    pub receipt: Option<String>,
}

/// A closed set of editable expense fields. Fields left as `None` keep
/// their stored value.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub kind: Option<ExpenseType>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub receipt: Option<String>,
}

impl ExpensePatch {
    pub(crate) fn apply(&self, expense: &mut Expense) {
        if let Some(kind) = self.kind {
            expense.kind = kind;
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(description) = &self.description {
            expense.description = description.clone();
        }
        if let Some(receipt) = &self.receipt {
            expense.receipt = Some(receipt.clone());
        }
    }
}
