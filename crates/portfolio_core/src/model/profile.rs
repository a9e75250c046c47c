//! Personal, experience, education and contact records.

use crate::model::project::Project;
use serde::{Deserialize, Serialize};

/// Number of nested projects listed on a collapsed experience timeline item.
pub const CONTRIBUTION_PREVIEW_PROJECTS: usize = 3;

const CURRENT_PERIOD_MARKER: &str = "Present";

/// Hero/contact section identity. One per dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub avatar_url: String,
    pub location: String,
    pub email: String,
}

impl PersonalInfo {
    /// `mailto:` URI used by the contact "Send Message" action.
    pub fn mailto_uri(&self) -> String {
        format!("mailto:{}", self.email.trim())
    }
}

/// Employment entry rendered on the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalContribution {
    pub company: String,
    pub role: String,
    /// Free-text range, e.g. `2020 - Present`.
    pub period: String,
    pub description: String,
    /// Nested projects; each carries `ProjectCategory::Professional`.
    pub projects: Vec<Project>,
}

impl ProfessionalContribution {
    /// Whether this is an ongoing position (period mentions `Present`).
    pub fn is_current(&self) -> bool {
        self.period.contains(CURRENT_PERIOD_MARKER)
    }

    /// Leading nested projects shown before the card is expanded.
    pub fn preview_projects(&self) -> &[Project] {
        let end = self.projects.len().min(CONTRIBUTION_PREVIEW_PROJECTS);
        &self.projects[..end]
    }
}

/// Academic entry rendered on the education timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
    pub field: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Social/contact link shown in the contact section and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLink {
    /// Display label; also the lookup key for social icons.
    pub platform: String,
    pub url: String,
    pub icon: String,
    pub description: String,
}

impl ExternalLink {
    pub fn new(
        platform: impl Into<String>,
        url: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
            icon: icon.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PersonalInfo, ProfessionalContribution};
    use crate::model::project::{Project, ProjectCategory, ProjectStatus};

    fn contribution(period: &str, project_count: usize) -> ProfessionalContribution {
        ProfessionalContribution {
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            period: period.to_string(),
            description: "work".to_string(),
            projects: (0..project_count)
                .map(|index| {
                    Project::new(
                        format!("acme-{index}"),
                        format!("Acme {index}"),
                        "nested",
                        ProjectCategory::Professional,
                        ProjectStatus::Completed,
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn is_current_detects_present_marker() {
        assert!(contribution("2020 - Present", 0).is_current());
        assert!(!contribution("2018 - 2020", 0).is_current());
    }

    #[test]
    fn preview_projects_caps_at_three() {
        let long = contribution("2019 - 2021", 5);
        let ids: Vec<&str> = long.preview_projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["acme-0", "acme-1", "acme-2"]);

        let short = contribution("2019 - 2021", 2);
        assert_eq!(short.preview_projects().len(), 2);
    }

    #[test]
    fn mailto_uri_trims_email() {
        let info = PersonalInfo {
            name: "N".to_string(),
            tagline: String::new(),
            description: String::new(),
            avatar_url: String::new(),
            location: String::new(),
            email: " someone@example.com ".to_string(),
        };
        assert_eq!(info.mailto_uri(), "mailto:someone@example.com");
    }
}
