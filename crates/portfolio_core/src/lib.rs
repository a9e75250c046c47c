//! Core domain logic for the portfolio app.
//! This crate owns the portfolio data model, the bundled dataset and the
//! category queries the UI renders from.

pub mod data;
pub mod display;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use data::shipped_portfolio;
pub use display::icons::{
    is_known_icon_key, social_icon_for, status_icon_for, tech_icon_for, SocialIcon, TechIcon,
};
pub use display::labels::{project_category_label, project_status_label, skill_category_label};
pub use display::section::PortfolioSection;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::portfolio::{PortfolioData, PortfolioValidationError};
pub use model::profile::{Education, ExternalLink, PersonalInfo, ProfessionalContribution};
pub use model::project::{
    Project, ProjectCategory, ProjectFeature, ProjectId, ProjectLinkKind, ProjectStatus,
    Technology,
};
pub use model::skill::{ParseCategoryError, Skill, SkillCategory, SkillValidationError};
pub use repo::portfolio_repo::{PortfolioRepository, StaticPortfolioRepository};
pub use service::portfolio_service::PortfolioService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
