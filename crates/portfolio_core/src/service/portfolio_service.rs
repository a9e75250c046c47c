//! Portfolio query service.
//!
//! # Responsibility
//! - Return the full snapshot and category-filtered views of it.
//! - Provide lookups used by expanded cards, dialogs and the contact section.
//!
//! # Invariants
//! - Every query is a stable linear filter; relative order is preserved.
//! - An empty result is a normal outcome, never an error.
//! - Category queries over projects only scan the top-level list.

use crate::model::portfolio::PortfolioData;
use crate::model::profile::ExternalLink;
use crate::model::project::{Project, ProjectCategory};
use crate::model::skill::{Skill, SkillCategory};
use crate::repo::portfolio_repo::PortfolioRepository;
use log::debug;

/// Use-case wrapper for portfolio queries.
pub struct PortfolioService<R: PortfolioRepository> {
    repo: R,
}

impl<R: PortfolioRepository> PortfolioService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the fully assembled aggregate.
    pub fn portfolio_data(&self) -> &PortfolioData {
        self.repo.portfolio()
    }

    /// Skills whose category equals `category`, in dataset order.
    pub fn skills_by_category(&self, category: SkillCategory) -> Vec<&Skill> {
        let skills: Vec<&Skill> = self
            .portfolio_data()
            .skills
            .iter()
            .filter(|skill| skill.category == category)
            .collect();
        debug!(
            "event=skills_query module=service category={} count={}",
            category.as_tag(),
            skills.len()
        );
        skills
    }

    /// Top-level projects whose category equals `category`, in dataset order.
    ///
    /// Contribution-nested projects are not included.
    pub fn projects_by_category(&self, category: ProjectCategory) -> Vec<&Project> {
        let projects: Vec<&Project> = self
            .portfolio_data()
            .projects
            .iter()
            .filter(|project| project.category == category)
            .collect();
        debug!(
            "event=projects_query module=service category={} count={}",
            category.as_tag(),
            projects.len()
        );
        projects
    }

    /// Finds a project by id, searching top-level then nested projects.
    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.portfolio_data()
            .all_projects()
            .find(|project| project.id == id)
    }

    /// Finds an external link by exact platform label.
    pub fn find_external_link(&self, platform: &str) -> Option<&ExternalLink> {
        self.portfolio_data()
            .external_links
            .iter()
            .find(|link| link.platform == platform)
    }

    /// Skill tabs with at least one record, in declaration order.
    pub fn categories_with_skills(&self) -> Vec<SkillCategory> {
        let skills = &self.portfolio_data().skills;
        SkillCategory::ALL
            .into_iter()
            .filter(|category| skills.iter().any(|skill| skill.category == *category))
            .collect()
    }

    /// Project tabs with at least one top-level record, in declaration order.
    pub fn categories_with_projects(&self) -> Vec<ProjectCategory> {
        let projects = &self.portfolio_data().projects;
        ProjectCategory::ALL
            .into_iter()
            .filter(|category| projects.iter().any(|project| project.category == *category))
            .collect()
    }
}
