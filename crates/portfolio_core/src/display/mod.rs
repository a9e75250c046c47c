//! Presentation-facing lookups kept apart from the data records.
//!
//! # Responsibility
//! - Map enum tags to display labels.
//! - Resolve free-text icon keys and platform labels to icon identifiers.
//! - Map portfolio sections to scroll list indices.
//!
//! The UI layer owns rendering; these helpers only return identifiers/labels.

pub mod icons;
pub mod labels;
pub mod section;
