//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `portfolio_core` linkage without the Flutter/FFI runtime.
//! - Print a deterministic per-category summary of the bundled dataset.

use portfolio_core::{
    project_category_label, skill_category_label, PortfolioService, ProjectCategory,
    SkillCategory, StaticPortfolioRepository,
};

fn main() {
    println!("portfolio_core ping={}", portfolio_core::ping());
    println!("portfolio_core version={}", portfolio_core::core_version());

    let service = PortfolioService::new(StaticPortfolioRepository::shipped());
    let data = service.portfolio_data();
    if let Err(err) = data.validate() {
        eprintln!("dataset invalid: {err}");
        std::process::exit(1);
    }
    println!("owner={} <{}>", data.personal_info.name, data.personal_info.email);

    for category in SkillCategory::ALL {
        let names: Vec<&str> = service
            .skills_by_category(category)
            .iter()
            .map(|skill| skill.name.as_str())
            .collect();
        println!(
            "skills[{}] {}: {}",
            category.as_tag(),
            skill_category_label(category),
            names.join(", ")
        );
    }

    for category in ProjectCategory::ALL {
        let ids: Vec<&str> = service
            .projects_by_category(category)
            .iter()
            .map(|project| project.id.as_str())
            .collect();
        println!(
            "projects[{}] {}: {}",
            category.as_tag(),
            project_category_label(category),
            ids.join(", ")
        );
    }

    let unknown = data.unknown_icon_keys();
    if !unknown.is_empty() {
        println!("icon_fallback_keys={}", unknown.join(","));
    }
}
