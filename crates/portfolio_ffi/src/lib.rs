//! Flutter-facing bindings for `portfolio_core`.

pub mod api;
