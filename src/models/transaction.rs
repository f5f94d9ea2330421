//! Transaction model
//!
//! Represents one normalized row of an uploaded CSV export. Rows have no
//! identity beyond their position in the loaded table; nothing about them
//! survives the session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Default category assigned to rows with a blank or missing category cell
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A normalized transaction row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Free-text description
    pub description: String,

    /// Signed amount: negative for expenses, positive for income
    pub amount: Money,

    /// Category label, never blank after normalization
    pub category: String,

    /// Currency code, assumed constant across the whole file
    pub currency: String,

    /// Source account label
    pub account: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        currency: impl Into<String>,
        account: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            category: category.into(),
            currency: currency.into(),
            account: account.into(),
        }
    }

    /// Check if this is an expense (strictly negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// Check if this is income (strictly positive amount)
    ///
    /// Zero-amount rows are neither expense nor income.
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%d/%m/%Y"),
            self.description,
            self.amount.format_with_currency(&self.currency)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(amount_cents: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            "Coffee",
            Money::from_cents(amount_cents),
            "Food",
            "EUR",
            "Cash",
        )
    }

    #[test]
    fn test_expense_income_classification() {
        assert!(sample(-350).is_expense());
        assert!(!sample(-350).is_income());

        assert!(sample(350).is_income());
        assert!(!sample(350).is_expense());
    }

    #[test]
    fn test_zero_amount_is_neither() {
        let txn = sample(0);
        assert!(!txn.is_expense());
        assert!(!txn.is_income());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", sample(-350)), "15/01/2023 Coffee -3.50 EUR");
    }

    #[test]
    fn test_serialization() {
        let txn = sample(-350);
        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
