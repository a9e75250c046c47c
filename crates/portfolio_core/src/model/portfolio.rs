//! Portfolio aggregate root and dataset-wide validation.
//!
//! # Responsibility
//! - Compose every section's records into one snapshot.
//! - Check dataset-wide invariants before a repository accepts the data.
//!
//! # Invariants
//! - Project ids are unique across top-level and nested projects.
//! - Contribution-nested projects carry `ProjectCategory::Professional`.
//! - Validation is presence/range only; it never rewrites data.

use crate::display::icons::is_known_icon_key;
use crate::model::profile::{Education, ExternalLink, PersonalInfo, ProfessionalContribution};
use crate::model::project::{Project, ProjectCategory};
use crate::model::skill::{Skill, SkillValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

static PROJECT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid project id regex"));

/// Complete portfolio snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal_info: PersonalInfo,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub professional_contributions: Vec<ProfessionalContribution>,
    #[serde(default)]
    pub educations: Vec<Education>,
    pub external_links: Vec<ExternalLink>,
}

impl PortfolioData {
    /// Iterates top-level projects, then contribution-nested projects in order.
    pub fn all_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().chain(
            self.professional_contributions
                .iter()
                .flat_map(|contribution| contribution.projects.iter()),
        )
    }

    /// Validates dataset-wide invariants, reporting the first violation.
    pub fn validate(&self) -> Result<(), PortfolioValidationError> {
        if self.personal_info.name.trim().is_empty() {
            return Err(PortfolioValidationError::MissingPersonalField("name"));
        }
        if self.personal_info.email.trim().is_empty() {
            return Err(PortfolioValidationError::MissingPersonalField("email"));
        }

        for skill in &self.skills {
            skill.validate()?;
        }

        let mut seen = HashSet::<&str>::new();
        for project in self.all_projects() {
            let id = project.id.as_str();
            if id.is_empty() {
                return Err(PortfolioValidationError::EmptyProjectId);
            }
            if !PROJECT_ID_RE.is_match(id) {
                return Err(PortfolioValidationError::InvalidProjectId(id.to_string()));
            }
            if !seen.insert(id) {
                return Err(PortfolioValidationError::DuplicateProjectId(id.to_string()));
            }
        }

        for contribution in &self.professional_contributions {
            if let Some(project) = contribution
                .projects
                .iter()
                .find(|project| project.category != ProjectCategory::Professional)
            {
                return Err(PortfolioValidationError::NestedProjectCategory {
                    id: project.id.clone(),
                    category: project.category,
                });
            }
        }

        Ok(())
    }

    /// Icon keys that resolve to the default icon, sorted and deduplicated.
    ///
    /// Advisory only: unknown keys still render with the fallback icon.
    pub fn unknown_icon_keys(&self) -> Vec<String> {
        let skill_keys = self.skills.iter().filter_map(|skill| skill.icon.as_deref());
        let tech_keys = self
            .all_projects()
            .flat_map(|project| project.all_technologies())
            .filter_map(|technology| technology.icon.as_deref());

        skill_keys
            .chain(tech_keys)
            .filter(|key| !is_known_icon_key(key))
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Dataset validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioValidationError {
    MissingPersonalField(&'static str),
    Skill(SkillValidationError),
    EmptyProjectId,
    InvalidProjectId(String),
    DuplicateProjectId(String),
    NestedProjectCategory {
        id: String,
        category: ProjectCategory,
    },
}

impl Display for PortfolioValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPersonalField(name) => {
                write!(f, "personal info field must not be empty: {name}")
            }
            Self::Skill(err) => write!(f, "{err}"),
            Self::EmptyProjectId => write!(f, "project id must not be empty"),
            Self::InvalidProjectId(id) => write!(
                f,
                "project id is invalid: {id} (expected lowercase kebab-case)"
            ),
            Self::DuplicateProjectId(id) => write!(f, "project id is duplicated: {id}"),
            Self::NestedProjectCategory { id, category } => write!(
                f,
                "contribution project `{id}` must use PROFESSIONAL category, got {}",
                category.as_tag()
            ),
        }
    }
}

impl Error for PortfolioValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Skill(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SkillValidationError> for PortfolioValidationError {
    fn from(value: SkillValidationError) -> Self {
        Self::Skill(value)
    }
}
