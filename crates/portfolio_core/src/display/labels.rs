//! Display labels for category and status tags.

use crate::model::project::{ProjectCategory, ProjectStatus};
use crate::model::skill::SkillCategory;

/// Tab label for a skill category.
pub fn skill_category_label(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Dev => "Development",
        SkillCategory::Ops => "DevOps",
        SkillCategory::Database => "Databases",
        SkillCategory::Gis => "GIS & Mapping",
        SkillCategory::Ide => "Development Tools",
    }
}

/// Tab label for a project category.
pub fn project_category_label(category: ProjectCategory) -> &'static str {
    match category {
        ProjectCategory::Fullstack => "FullStack Platforms",
        ProjectCategory::Mobile => "Mobile Applications",
        ProjectCategory::Tool => "Development Tools",
        ProjectCategory::Professional => "Professional Work",
    }
}

/// Badge label for a project status.
pub fn project_status_label(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "Completed",
        ProjectStatus::Ongoing => "In Progress",
        ProjectStatus::Planned => "Planned",
    }
}
