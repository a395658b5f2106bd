//! Shared domain types, error taxonomy, and ordered-collection logic.

pub mod error;
pub mod ordering;
pub mod types;
