//! Portfolio data access contracts.
//!
//! # Responsibility
//! - Own the immutable dataset behind a read-only accessor.
//! - Keep dataset sourcing details away from query/use-case code.
//!
//! # Invariants
//! - A repository never exposes mutable access to its data.
//! - Caller-supplied data must pass `PortfolioData::validate()` before it is held.

pub mod portfolio_repo;
