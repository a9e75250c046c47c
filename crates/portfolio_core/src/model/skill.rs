//! Skill domain model.
//!
//! # Invariants
//! - `level` is a percentage in `0..=100`; enforced by `Skill::validate()`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Upper bound for `Skill::level`.
pub const MAX_SKILL_LEVEL: u8 = 100;

/// Tab category used to group skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillCategory {
    /// Programming languages and frameworks.
    Dev,
    /// Deployment and infrastructure.
    Ops,
    /// Database engines.
    Database,
    /// GIS and mapping platforms.
    Gis,
    /// Editors and IDEs.
    Ide,
}

impl SkillCategory {
    /// All categories in tab order.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Dev,
        SkillCategory::Ops,
        SkillCategory::Database,
        SkillCategory::Gis,
        SkillCategory::Ide,
    ];

    /// Tab selected when the skills section first renders.
    pub const DEFAULT_SELECTED: SkillCategory = SkillCategory::Dev;

    /// Upper-case wire tag, e.g. `GIS`.
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Dev => "DEV",
            Self::Ops => "OPS",
            Self::Database => "DATABASE",
            Self::Gis => "GIS",
            Self::Ide => "IDE",
        }
    }
}

impl FromStr for SkillCategory {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_tag() == normalized)
            .ok_or_else(|| ParseCategoryError::new("skill", value))
    }
}

/// Error returned when a category tag string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    kind: &'static str,
    value: String,
}

impl ParseCategoryError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.trim().to_string(),
        }
    }

    /// Category family that failed to parse (`skill`, `project`, `status`).
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl Display for ParseCategoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} category: `{}`", self.kind, self.value)
    }
}

impl Error for ParseCategoryError {}

/// One entry of the skills section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage in `0..=100`.
    pub level: u8,
    pub category: SkillCategory,
    /// Free-text icon key resolved by `display::icons`.
    pub icon: Option<String>,
    pub description: Option<String>,
}

impl Skill {
    /// Creates a skill without icon or description.
    pub fn new(name: impl Into<String>, level: u8, category: SkillCategory) -> Self {
        Self {
            name: name.into(),
            level,
            category,
            icon: None,
            description: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Level as a `0.0..=1.0` fraction for progress bars.
    pub fn level_fraction(&self) -> f32 {
        f32::from(self.level.min(MAX_SKILL_LEVEL)) / f32::from(MAX_SKILL_LEVEL)
    }

    /// Validates presence and range invariants.
    pub fn validate(&self) -> Result<(), SkillValidationError> {
        if self.name.trim().is_empty() {
            return Err(SkillValidationError::EmptyName);
        }
        if self.level > MAX_SKILL_LEVEL {
            return Err(SkillValidationError::LevelOutOfRange {
                name: self.name.clone(),
                level: self.level,
            });
        }
        Ok(())
    }
}

/// Skill-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillValidationError {
    EmptyName,
    LevelOutOfRange { name: String, level: u8 },
}

impl Display for SkillValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "skill name must not be empty"),
            Self::LevelOutOfRange { name, level } => write!(
                f,
                "skill `{name}` level {level} is out of range (expected 0..={MAX_SKILL_LEVEL})"
            ),
        }
    }
}

impl Error for SkillValidationError {}

#[cfg(test)]
mod tests {
    use super::{Skill, SkillCategory, SkillValidationError};

    #[test]
    fn parses_tags_case_insensitively() {
        assert_eq!("gis".parse::<SkillCategory>(), Ok(SkillCategory::Gis));
        assert_eq!(" Database ".parse::<SkillCategory>(), Ok(SkillCategory::Database));
        let err = "cloud".parse::<SkillCategory>().unwrap_err();
        assert_eq!(err.to_string(), "unknown skill category: `cloud`");
    }

    #[test]
    fn validate_rejects_level_above_hundred() {
        let skill = Skill::new("Rust", 101, SkillCategory::Dev);
        assert_eq!(
            skill.validate().unwrap_err(),
            SkillValidationError::LevelOutOfRange {
                name: "Rust".to_string(),
                level: 101,
            }
        );
    }

    #[test]
    fn validate_accepts_bounds() {
        assert!(Skill::new("A", 0, SkillCategory::Ops).validate().is_ok());
        assert!(Skill::new("B", 100, SkillCategory::Ops).validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let skill = Skill::new("  ", 50, SkillCategory::Ide);
        assert_eq!(skill.validate().unwrap_err(), SkillValidationError::EmptyName);
    }

    #[test]
    fn level_fraction_scales_to_unit_interval() {
        let skill = Skill::new("QGIS", 85, SkillCategory::Gis);
        assert!((skill.level_fraction() - 0.85).abs() < f32::EPSILON);
    }
}
