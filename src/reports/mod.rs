//! Report generation for loaded transaction tables

pub mod summary;

pub use summary::{AccountTotal, CategoryFilter, CategoryTotal, DailyTotal, Summary};
