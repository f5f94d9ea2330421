//! Session-held transaction table
//!
//! The table loaded from one CSV file is a scoped mutable cache: it lives in
//! memory for the duration of one session, accepts per-row category edits,
//! and is discarded when the session ends. Summaries are recomputed from it
//! on every interaction.

use std::path::Path;

use crate::error::{SpendscopeError, SpendscopeResult};
use crate::loader;
use crate::models::Transaction;
use crate::reports::{CategoryFilter, Summary};

/// One loaded transaction table plus edit operations over it
#[derive(Debug, Clone, Default)]
pub struct Session {
    transactions: Vec<Transaction>,
}

impl Session {
    /// Load a session from a CSV file
    pub fn load<P: AsRef<Path>>(path: P) -> SpendscopeResult<Self> {
        Ok(Self {
            transactions: loader::load_csv(path)?,
        })
    }

    /// Create a session from an already-normalized table
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// The normalized table, in file order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of rows in the table
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Re-categorize one row, identified by its position in the table
    pub fn set_category(&mut self, row: usize, category: impl Into<String>) -> SpendscopeResult<()> {
        let len = self.transactions.len();
        let txn = self
            .transactions
            .get_mut(row)
            .ok_or(SpendscopeError::RowOutOfRange { row, len })?;
        txn.category = category.into();
        Ok(())
    }

    /// Recompute the summary for the current table state
    pub fn summarize(&self, filter: &CategoryFilter) -> Summary {
        Summary::generate(&self.transactions, filter)
    }
}
