use portfolio_core::{
    PortfolioService, ProjectCategory, SkillCategory, StaticPortfolioRepository,
};

fn service() -> PortfolioService<StaticPortfolioRepository> {
    PortfolioService::new(StaticPortfolioRepository::shipped())
}

#[test]
fn gis_skills_are_returned_in_dataset_order() {
    let service = service();
    let names: Vec<&str> = service
        .skills_by_category(SkillCategory::Gis)
        .iter()
        .map(|skill| skill.name.as_str())
        .collect();

    assert_eq!(
        names,
        vec!["ArcGIS Online", "ArcGIS Enterprise", "ArcGIS Developers", "QGIS"]
    );
}

#[test]
fn mobile_projects_are_returned_in_dataset_order() {
    let service = service();
    let ids: Vec<&str> = service
        .projects_by_category(ProjectCategory::Mobile)
        .iter()
        .map(|project| project.id.as_str())
        .collect();

    assert_eq!(ids, vec!["botola-max", "geolight-meter", "pharmagest"]);
}

#[test]
fn skill_filter_is_exact_and_stable_for_every_category() {
    let service = service();
    let all = &service.portfolio_data().skills;

    for category in SkillCategory::ALL {
        let filtered = service.skills_by_category(category);
        assert!(filtered.iter().all(|skill| skill.category == category));

        let expected: Vec<&str> = all
            .iter()
            .filter(|skill| skill.category == category)
            .map(|skill| skill.name.as_str())
            .collect();
        let actual: Vec<&str> = filtered.iter().map(|skill| skill.name.as_str()).collect();
        assert_eq!(actual, expected, "order mismatch for {category:?}");
    }

    let total: usize = SkillCategory::ALL
        .iter()
        .map(|category| service.skills_by_category(*category).len())
        .sum();
    assert_eq!(total, all.len());
}

#[test]
fn project_filter_is_exact_for_every_category() {
    let service = service();
    for category in ProjectCategory::ALL {
        assert!(service
            .projects_by_category(category)
            .iter()
            .all(|project| project.category == category));
    }
}

#[test]
fn professional_filter_does_not_recurse_into_contributions() {
    let service = service();
    assert!(service
        .projects_by_category(ProjectCategory::Professional)
        .is_empty());
    assert!(service.find_project("find-tobissi").is_some());
}

#[test]
fn find_project_covers_top_level_and_nested_projects() {
    let service = service();

    let top = service.find_project("chatup").expect("top-level project");
    assert_eq!(top.title, "ChatUp");

    let nested = service.find_project("eco-geste").expect("nested project");
    assert_eq!(nested.category, ProjectCategory::Professional);

    assert!(service.find_project("missing-project").is_none());
}

#[test]
fn find_external_link_matches_exact_platform() {
    let service = service();
    let linkedin = service.find_external_link("LinkedIn").expect("linkedin link");
    assert_eq!(linkedin.url, "https://linkedin.com/in/younesmrabti1996");
    assert!(service.find_external_link("linkedin").is_none());
}

#[test]
fn snapshot_is_idempotent() {
    let first = StaticPortfolioRepository::shipped().into_inner();
    let second = StaticPortfolioRepository::shipped().into_inner();
    assert_eq!(first, second);

    let service = service();
    assert_eq!(service.portfolio_data(), service.portfolio_data());
}

#[test]
fn default_tabs_have_records() {
    let service = service();
    assert!(!service
        .skills_by_category(SkillCategory::DEFAULT_SELECTED)
        .is_empty());
    assert!(!service
        .projects_by_category(ProjectCategory::DEFAULT_SELECTED)
        .is_empty());
}

#[test]
fn current_contribution_previews_nested_projects() {
    let service = service();
    let contribution = &service.portfolio_data().professional_contributions[0];
    assert!(contribution.is_current());
    let titles: Vec<&str> = contribution
        .preview_projects()
        .iter()
        .map(|project| project.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Find Tobissi", "ÉCO-GESTE", "Borne Citoyenne"]);
}
