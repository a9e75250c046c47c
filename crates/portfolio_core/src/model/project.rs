//! Project domain model.
//!
//! # Responsibility
//! - Describe showcased projects, their features and technology stacks.
//!
//! # Invariants
//! - `Project::id` is a lowercase kebab-case slug, unique per dataset.
//! - `Technology` carries no identity; it is purely descriptive.

use crate::model::skill::ParseCategoryError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Stable project key used for lookups and expanded-card state.
pub type ProjectId = String;

/// Tab category used to group projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectCategory {
    Fullstack,
    Mobile,
    Tool,
    /// Work delivered for an employer; used by contribution-nested projects.
    Professional,
}

impl ProjectCategory {
    /// All categories in tab order.
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Fullstack,
        ProjectCategory::Mobile,
        ProjectCategory::Tool,
        ProjectCategory::Professional,
    ];

    /// Tab selected when the projects section first renders.
    pub const DEFAULT_SELECTED: ProjectCategory = ProjectCategory::Fullstack;

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Fullstack => "FULLSTACK",
            Self::Mobile => "MOBILE",
            Self::Tool => "TOOL",
            Self::Professional => "PROFESSIONAL",
        }
    }
}

impl FromStr for ProjectCategory {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_tag() == normalized)
            .ok_or_else(|| ParseCategoryError::new("project", value))
    }
}

/// Lifecycle stage shown on the project status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Completed,
    Ongoing,
    Planned,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Completed,
        ProjectStatus::Ongoing,
        ProjectStatus::Planned,
    ];

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Completed => "COMPLETED",
            Self::Ongoing => "ONGOING",
            Self::Planned => "PLANNED",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_tag() == normalized)
            .ok_or_else(|| ParseCategoryError::new("status", value))
    }
}

/// Technology badge attached to projects and features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    pub name: String,
    pub icon: Option<String>,
    pub url: Option<String>,
}

impl Technology {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
            url: None,
        }
    }

    /// Shorthand for the common `name + icon` shape.
    pub fn with_icon(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: Some(icon.into()),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// One highlighted feature inside a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFeature {
    pub title: String,
    pub description: String,
    pub technologies: Vec<Technology>,
}

impl ProjectFeature {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        technologies: Vec<Technology>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            technologies,
        }
    }
}

/// Kind of outbound project link, in card button order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectLinkKind {
    Github,
    Live,
    PlayStore,
    AppStore,
}

/// Showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub status: ProjectStatus,
    pub features: Vec<ProjectFeature>,
    #[serde(default)]
    pub technologies: Vec<Technology>,
    /// Either a remote URL or a bundled `res://` resource reference.
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub play_store_url: Option<String>,
    pub app_store_url: Option<String>,
}

impl Project {
    /// Creates a project with no features, technologies, image or links.
    pub fn new(
        id: impl Into<ProjectId>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: ProjectCategory,
        status: ProjectStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category,
            status,
            features: Vec::new(),
            technologies: Vec::new(),
            image_url: None,
            github_url: None,
            live_url: None,
            play_store_url: None,
            app_store_url: None,
        }
    }

    pub fn with_features(mut self, features: Vec<ProjectFeature>) -> Self {
        self.features = features;
        self
    }

    pub fn with_technologies(mut self, technologies: Vec<Technology>) -> Self {
        self.technologies = technologies;
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_github(mut self, url: impl Into<String>) -> Self {
        self.github_url = Some(url.into());
        self
    }

    pub fn with_live(mut self, url: impl Into<String>) -> Self {
        self.live_url = Some(url.into());
        self
    }

    pub fn with_play_store(mut self, url: impl Into<String>) -> Self {
        self.play_store_url = Some(url.into());
        self
    }

    pub fn with_app_store(mut self, url: impl Into<String>) -> Self {
        self.app_store_url = Some(url.into());
        self
    }

    /// Present outbound links in github, live, play store, app store order.
    pub fn external_links(&self) -> Vec<(ProjectLinkKind, &str)> {
        [
            (ProjectLinkKind::Github, &self.github_url),
            (ProjectLinkKind::Live, &self.live_url),
            (ProjectLinkKind::PlayStore, &self.play_store_url),
            (ProjectLinkKind::AppStore, &self.app_store_url),
        ]
        .into_iter()
        .filter_map(|(kind, url)| url.as_deref().map(|url| (kind, url)))
        .collect()
    }

    /// Iterates top-level technologies followed by every feature's technologies.
    pub fn all_technologies(&self) -> impl Iterator<Item = &Technology> {
        self.technologies.iter().chain(
            self.features
                .iter()
                .flat_map(|feature| feature.technologies.iter()),
        )
    }
}
