//! Compiled-in portfolio dataset.
//!
//! # Invariants
//! - `shipped_portfolio()` is deterministic: every call builds an equal value.
//! - The shipped data passes `PortfolioData::validate()`.

mod shipped;

pub use shipped::shipped_portfolio;
