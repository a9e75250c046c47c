//! Core use-case services.
//!
//! # Responsibility
//! - Expose snapshot and category queries to UI/FFI callers.
//! - Keep callers decoupled from how the dataset is sourced.

pub mod portfolio_service;
