//! spendscope - Terminal personal-finance dashboard for CSV exports
//!
//! This library provides the core functionality for spendscope: load a CSV
//! transaction export, classify rows into expenses and income, and produce
//! the grouped summaries shown on the dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions)
//! - `loader`: CSV loading and normalization
//! - `reports`: Expense/income summaries and grouped totals
//! - `session`: The session-held table of the last load
//! - `registry`: Persisted set of known category names
//! - `storage`: JSON file storage layer
//! - `display`: Terminal rendering
//!
//! # Example
//!
//! ```rust,ignore
//! use spendscope::reports::CategoryFilter;
//! use spendscope::session::Session;
//!
//! let session = Session::load("transactions.csv")?;
//! let summary = session.summarize(&CategoryFilter::All);
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod loader;
pub mod models;
pub mod registry;
pub mod reports;
pub mod session;
pub mod storage;

pub use error::SpendscopeError;
