//! Core data models for spendscope

pub mod money;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, DEFAULT_CATEGORY};
