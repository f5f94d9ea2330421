//! Transaction summary
//!
//! Splits a normalized transaction table into expense and income subsets and
//! produces the grouped totals (by category, by account, by day) shown on the
//! dashboard. Generation is a pure function of the table and the category
//! filter; every call is independently reproducible.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::models::{Money, Transaction};

/// Restricts the expense subset to a set of categories
///
/// Income is never filtered; it stays fully visible regardless of the
/// selected categories.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Keep every category (the "all" sentinel)
    #[default]
    All,
    /// Keep only expenses whose category is in the set
    Only(BTreeSet<String>),
}

impl CategoryFilter {
    /// Build a filter from a list of category names
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Only(names.into_iter().map(Into::into).collect())
    }

    /// Check whether a category passes the filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(names) => names.contains(category),
        }
    }
}

/// Expense total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    /// Sum of expense amounts (absolute value)
    pub total: Money,
    pub transaction_count: usize,
    /// Percentage of total expenses
    pub percentage: f64,
}

/// Expense total for one account
#[derive(Debug, Clone, PartialEq)]
pub struct AccountTotal {
    pub account: String,
    pub total: Money,
}

/// Expense total for one calendar date
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Money,
}

/// Derived summaries for one loaded table and one filter
#[derive(Debug, Clone, Default)]
pub struct Summary {
    /// Expense rows (negative amounts, sign flipped to positive), filtered
    pub expenses: Vec<Transaction>,
    /// Income rows (positive amounts), never filtered
    pub income: Vec<Transaction>,
    /// Expense totals by category, sorted by descending total
    pub category_totals: Vec<CategoryTotal>,
    /// Expense totals by account, in account-name order
    pub account_totals: Vec<AccountTotal>,
    /// Expense totals by date, chronologically ordered
    pub daily_totals: Vec<DailyTotal>,
    /// Sum of the (filtered) expense subset
    pub total_expenses: Money,
    /// Sum of the income subset
    pub total_income: Money,
    /// Display currency, taken from the first row of the input table
    pub currency: String,
}

impl Summary {
    /// Generate a summary for a table and a category filter.
    ///
    /// Zero-amount rows belong to neither subset. An empty table, or a filter
    /// that matches nothing, yields empty summaries rather than an error.
    pub fn generate(table: &[Transaction], filter: &CategoryFilter) -> Self {
        let currency = table
            .first()
            .map(|t| t.currency.clone())
            .unwrap_or_default();

        let mut expenses: Vec<Transaction> = Vec::new();
        let mut income: Vec<Transaction> = Vec::new();

        for txn in table {
            if txn.is_expense() {
                if filter.matches(&txn.category) {
                    let mut expense = txn.clone();
                    // Sign information is discarded once classified
                    expense.amount = expense.amount.abs();
                    expenses.push(expense);
                }
            } else if txn.is_income() {
                income.push(txn.clone());
            }
        }

        let total_expenses: Money = expenses.iter().map(|t| t.amount).sum();
        let total_income: Money = income.iter().map(|t| t.amount).sum();

        // Group expense amounts by category, account, and date
        let mut by_category: BTreeMap<&str, (Money, usize)> = BTreeMap::new();
        let mut by_account: BTreeMap<&str, Money> = BTreeMap::new();
        let mut by_date: BTreeMap<NaiveDate, Money> = BTreeMap::new();

        for txn in &expenses {
            let entry = by_category
                .entry(txn.category.as_str())
                .or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;

            *by_account.entry(txn.account.as_str()).or_default() += txn.amount;
            *by_date.entry(txn.date).or_default() += txn.amount;
        }

        let mut category_totals: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, (total, transaction_count))| {
                let percentage = if total_expenses.is_zero() {
                    0.0
                } else {
                    (total.cents() as f64 / total_expenses.cents() as f64) * 100.0
                };
                CategoryTotal {
                    category: category.to_string(),
                    total,
                    transaction_count,
                    percentage,
                }
            })
            .collect();

        // Descending by total; the sort is stable so ties keep name order
        category_totals.sort_by(|a, b| b.total.cmp(&a.total));

        let account_totals = by_account
            .into_iter()
            .map(|(account, total)| AccountTotal {
                account: account.to_string(),
                total,
            })
            .collect();

        let daily_totals = by_date
            .into_iter()
            .map(|(date, total)| DailyTotal { date, total })
            .collect();

        Self {
            expenses,
            income,
            category_totals,
            account_totals,
            daily_totals,
            total_expenses,
            total_income,
            currency,
        }
    }
}
