//! Portfolio domain model.
//!
//! # Responsibility
//! - Define the value records rendered by the portfolio UI sections.
//! - Keep one canonical shape for skills, projects, experience and contact data.
//!
//! # Invariants
//! - Every record is an immutable value; equality is field equality.
//! - `Project::id` is unique across top-level and contribution-nested projects.
//! - Serialized field names stay camelCase for UI binding compatibility.

pub mod portfolio;
pub mod profile;
pub mod project;
pub mod skill;
