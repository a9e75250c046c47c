use portfolio_core::{
    shipped_portfolio, PortfolioValidationError, Project, ProjectCategory, ProjectStatus, Skill,
    SkillCategory, SkillValidationError, StaticPortfolioRepository,
};

fn nested_project(id: &str, category: ProjectCategory) -> Project {
    Project::new(id, "Nested", "nested project", category, ProjectStatus::Completed)
}

#[test]
fn shipped_dataset_is_valid() {
    let data = shipped_portfolio();
    assert_eq!(data.validate(), Ok(()));
    assert!(StaticPortfolioRepository::try_new(data).is_ok());
}

#[test]
fn shipped_skill_levels_are_percentages() {
    let data = shipped_portfolio();
    assert!(data.skills.iter().all(|skill| skill.level <= 100));
}

#[test]
fn shipped_project_ids_are_unique_including_nested() {
    let data = shipped_portfolio();
    let mut ids: Vec<&str> = data.all_projects().map(|project| project.id.as_str()).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert_eq!(total, data.projects.len() + 3);
}

#[test]
fn validate_rejects_out_of_range_skill_level() {
    let mut data = shipped_portfolio();
    data.skills.push(Skill::new("Overconfident", 120, SkillCategory::Dev));

    let err = data.validate().unwrap_err();
    assert_eq!(
        err,
        PortfolioValidationError::Skill(SkillValidationError::LevelOutOfRange {
            name: "Overconfident".to_string(),
            level: 120,
        })
    );
}

#[test]
fn validate_rejects_duplicate_top_level_id() {
    let mut data = shipped_portfolio();
    let duplicate = data.projects[0].clone();
    data.projects.push(duplicate);

    let err = data.validate().unwrap_err();
    assert_eq!(
        err,
        PortfolioValidationError::DuplicateProjectId("qr-checks".to_string())
    );
}

#[test]
fn validate_rejects_nested_id_colliding_with_top_level() {
    let mut data = shipped_portfolio();
    data.professional_contributions[0]
        .projects
        .push(nested_project("chatup", ProjectCategory::Professional));

    let err = data.validate().unwrap_err();
    assert_eq!(
        err,
        PortfolioValidationError::DuplicateProjectId("chatup".to_string())
    );
}

#[test]
fn validate_rejects_malformed_project_id() {
    let mut data = shipped_portfolio();
    data.projects[0].id = "QR Checks".to_string();
    let err = data.validate().unwrap_err();
    assert!(matches!(err, PortfolioValidationError::InvalidProjectId(_)));

    data.projects[0].id = String::new();
    assert_eq!(
        data.validate().unwrap_err(),
        PortfolioValidationError::EmptyProjectId
    );
}

#[test]
fn validate_rejects_non_professional_nested_project() {
    let mut data = shipped_portfolio();
    data.professional_contributions[0]
        .projects
        .push(nested_project("side-app", ProjectCategory::Mobile));

    let err = data.validate().unwrap_err();
    assert_eq!(
        err,
        PortfolioValidationError::NestedProjectCategory {
            id: "side-app".to_string(),
            category: ProjectCategory::Mobile,
        }
    );
    assert!(err.to_string().contains("PROFESSIONAL"));
}

#[test]
fn validate_requires_personal_name_and_email() {
    let mut data = shipped_portfolio();
    data.personal_info.email = "  ".to_string();
    assert_eq!(
        data.validate().unwrap_err(),
        PortfolioValidationError::MissingPersonalField("email")
    );

    data.personal_info.name.clear();
    assert_eq!(
        data.validate().unwrap_err(),
        PortfolioValidationError::MissingPersonalField("name")
    );
}

#[test]
fn try_new_rejects_invalid_dataset() {
    let mut data = shipped_portfolio();
    data.skills[0].level = 101;
    let err = StaticPortfolioRepository::try_new(data).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn unknown_icon_keys_lists_fallback_keys_sorted() {
    let keys = shipped_portfolio().unknown_icon_keys();

    assert!(keys.contains(&"vscode".to_string()));
    assert!(keys.contains(&"nextjs".to_string()));
    assert!(!keys.contains(&"flutter".to_string()));
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
}
