//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose snapshot, category queries and navigation lookups to Dart via FRB.
//! - Translate core types into flat, display-ready response structs.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Unknown category tags produce `ok=false` envelopes, never errors thrown to Dart.
//! - Empty query results are `ok=true` with no items.

use log::warn;
use portfolio_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    project_category_label, project_status_label, skill_category_label, social_icon_for,
    status_icon_for, tech_icon_for, ExternalLink, PortfolioSection, PortfolioService, Project,
    ProjectCategory, ProjectLinkKind, Skill, SkillCategory, StaticPortfolioRepository, Technology,
};
use std::sync::OnceLock;

static PORTFOLIO_SERVICE: OnceLock<PortfolioService<StaticPortfolioRepository>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Full portfolio snapshot as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotResponse {
    pub ok: bool,
    /// camelCase JSON of the whole aggregate; empty on failure.
    pub json: String,
    pub message: String,
}

/// Category tab descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    /// Upper-case tag accepted by the query functions.
    pub tag: String,
    pub label: String,
    /// `false` when the tab would render an empty list.
    pub has_records: bool,
}

/// Skill row for the skills section.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillItem {
    pub name: String,
    pub level: u8,
    /// `level` scaled to `0.0..=1.0` for progress bars.
    pub level_fraction: f32,
    pub category: String,
    pub icon: String,
    pub description: Option<String>,
}

/// Response envelope for skill category queries.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillListResponse {
    pub ok: bool,
    pub items: Vec<SkillItem>,
    pub message: String,
}

/// Outbound project link button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLinkItem {
    /// `github|live|play_store|app_store`.
    pub kind: String,
    pub url: String,
}

/// Feature block inside an expanded project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    pub technologies: Vec<TechnologyItem>,
}

/// Technology chip with resolved icon identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnologyItem {
    pub name: String,
    pub icon: String,
    pub url: Option<String>,
}

/// Project card for the projects section and details dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub status_label: String,
    pub status_icon: String,
    pub image_url: Option<String>,
    pub technologies: Vec<TechnologyItem>,
    pub features: Vec<FeatureItem>,
    pub links: Vec<ProjectLinkItem>,
}

/// Response envelope for project category queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListResponse {
    pub ok: bool,
    pub items: Vec<ProjectItem>,
    pub message: String,
}

/// Response envelope for single project lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLookupResponse {
    pub ok: bool,
    pub item: Option<ProjectItem>,
    pub message: String,
}

/// Bottom navigation destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionItem {
    /// Upper-case section key, e.g. `EXPERIENCE`.
    pub key: String,
    pub title: String,
    pub icon: String,
    pub list_index: u32,
}

/// Hero/contact identity with a ready-to-open `mailto:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalInfoItem {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub avatar_url: String,
    pub location: String,
    pub email: String,
    pub mailto_uri: String,
}

/// Contact/footer link with resolved social icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLinkItem {
    pub platform: String,
    pub url: String,
    pub description: String,
    /// `code|extension|phone_android|business|favorite|link`.
    pub social_icon: String,
}

/// Experience timeline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionItem {
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
    /// Period mentions `Present`.
    pub is_current: bool,
    /// Titles shown before the card is expanded.
    pub preview_titles: Vec<String>,
    /// Every nested project id, resolvable through `find_project`.
    pub project_ids: Vec<String>,
}

/// Education timeline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationItem {
    pub institution: String,
    pub degree: String,
    pub period: String,
    pub field: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Returns the whole aggregate as camelCase JSON.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn portfolio_snapshot_json() -> SnapshotResponse {
    match serde_json::to_string(portfolio_service().portfolio_data()) {
        Ok(json) => SnapshotResponse {
            ok: true,
            json,
            message: String::new(),
        },
        Err(err) => SnapshotResponse {
            ok: false,
            json: String::new(),
            message: format!("portfolio_snapshot_json failed: {err}"),
        },
    }
}

/// Skill tabs in display order; every category is listed.
#[flutter_rust_bridge::frb(sync)]
pub fn skill_tabs() -> Vec<TabItem> {
    let populated = portfolio_service().categories_with_skills();
    SkillCategory::ALL
        .into_iter()
        .map(|category| TabItem {
            tag: category.as_tag().to_string(),
            label: skill_category_label(category).to_string(),
            has_records: populated.contains(&category),
        })
        .collect()
}

/// Project tabs in display order; empty categories stay listed.
#[flutter_rust_bridge::frb(sync)]
pub fn project_tabs() -> Vec<TabItem> {
    let populated = portfolio_service().categories_with_projects();
    ProjectCategory::ALL
        .into_iter()
        .map(|category| TabItem {
            tag: category.as_tag().to_string(),
            label: project_category_label(category).to_string(),
            has_records: populated.contains(&category),
        })
        .collect()
}

/// Filters skills by category tag (`DEV|OPS|DATABASE|GIS|IDE`, case-insensitive).
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Unknown tag returns `ok=false` with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn skills_by_category(category: String) -> SkillListResponse {
    let category = match category.parse::<SkillCategory>() {
        Ok(category) => category,
        Err(err) => {
            warn!("event=ffi_query module=ffi status=rejected op=skills_by_category error={err}");
            return SkillListResponse {
                ok: false,
                items: Vec::new(),
                message: format!("skills_by_category failed: {err}"),
            };
        }
    };

    let items = portfolio_service()
        .skills_by_category(category)
        .into_iter()
        .map(to_skill_item)
        .collect::<Vec<_>>();
    SkillListResponse {
        ok: true,
        message: count_message(items.len()),
        items,
    }
}

/// Filters top-level projects by category tag
/// (`FULLSTACK|MOBILE|TOOL|PROFESSIONAL`, case-insensitive).
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Unknown tag returns `ok=false` with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn projects_by_category(category: String) -> ProjectListResponse {
    let category = match category.parse::<ProjectCategory>() {
        Ok(category) => category,
        Err(err) => {
            warn!(
                "event=ffi_query module=ffi status=rejected op=projects_by_category error={err}"
            );
            return ProjectListResponse {
                ok: false,
                items: Vec::new(),
                message: format!("projects_by_category failed: {err}"),
            };
        }
    };

    let items = portfolio_service()
        .projects_by_category(category)
        .into_iter()
        .map(to_project_item)
        .collect::<Vec<_>>();
    ProjectListResponse {
        ok: true,
        message: count_message(items.len()),
        items,
    }
}

/// Looks up one project by id, including experience-nested projects.
#[flutter_rust_bridge::frb(sync)]
pub fn find_project(id: String) -> ProjectLookupResponse {
    let id = id.trim();
    match portfolio_service().find_project(id) {
        Some(project) => ProjectLookupResponse {
            ok: true,
            item: Some(to_project_item(project)),
            message: String::new(),
        },
        None => ProjectLookupResponse {
            ok: false,
            item: None,
            message: format!("project not found: {id}"),
        },
    }
}

/// Identity shown by the hero and contact sections.
#[flutter_rust_bridge::frb(sync)]
pub fn personal_info() -> PersonalInfoItem {
    let info = &portfolio_service().portfolio_data().personal_info;
    PersonalInfoItem {
        name: info.name.clone(),
        tagline: info.tagline.clone(),
        description: info.description.clone(),
        avatar_url: info.avatar_url.clone(),
        location: info.location.clone(),
        email: info.email.clone(),
        mailto_uri: info.mailto_uri(),
    }
}

/// All external links in dataset order.
#[flutter_rust_bridge::frb(sync)]
pub fn external_links() -> Vec<ExternalLinkItem> {
    portfolio_service()
        .portfolio_data()
        .external_links
        .iter()
        .map(to_external_link_item)
        .collect()
}

/// Looks up one external link by exact platform label, e.g. `LinkedIn`.
#[flutter_rust_bridge::frb(sync)]
pub fn find_external_link(platform: String) -> Option<ExternalLinkItem> {
    portfolio_service()
        .find_external_link(platform.as_str())
        .map(to_external_link_item)
}

/// Experience timeline entries in dataset order.
#[flutter_rust_bridge::frb(sync)]
pub fn contributions() -> Vec<ContributionItem> {
    portfolio_service()
        .portfolio_data()
        .professional_contributions
        .iter()
        .map(|contribution| ContributionItem {
            company: contribution.company.clone(),
            role: contribution.role.clone(),
            period: contribution.period.clone(),
            description: contribution.description.clone(),
            is_current: contribution.is_current(),
            preview_titles: contribution
                .preview_projects()
                .iter()
                .map(|project| project.title.clone())
                .collect(),
            project_ids: contribution
                .projects
                .iter()
                .map(|project| project.id.clone())
                .collect(),
        })
        .collect()
}

/// Education timeline entries in dataset order.
#[flutter_rust_bridge::frb(sync)]
pub fn educations() -> Vec<EducationItem> {
    portfolio_service()
        .portfolio_data()
        .educations
        .iter()
        .map(|education| EducationItem {
            institution: education.institution.clone(),
            degree: education.degree.clone(),
            period: education.period.clone(),
            field: education.field.clone(),
            location: education.location.clone(),
            description: education.description.clone(),
        })
        .collect()
}

/// Section highlighted for the first visible list item.
#[flutter_rust_bridge::frb(sync)]
pub fn section_for_list_index(index: u32) -> SectionItem {
    let index = usize::try_from(index).unwrap_or(usize::MAX);
    to_section_item(PortfolioSection::from_list_index(index))
}

/// All bottom navigation destinations in order.
#[flutter_rust_bridge::frb(sync)]
pub fn portfolio_sections() -> Vec<SectionItem> {
    PortfolioSection::ALL.into_iter().map(to_section_item).collect()
}

fn portfolio_service() -> &'static PortfolioService<StaticPortfolioRepository> {
    PORTFOLIO_SERVICE.get_or_init(|| PortfolioService::new(StaticPortfolioRepository::shipped()))
}

fn count_message(count: usize) -> String {
    if count == 0 {
        "No results.".to_string()
    } else {
        format!("Found {count} result(s).")
    }
}

fn to_skill_item(skill: &Skill) -> SkillItem {
    SkillItem {
        name: skill.name.clone(),
        level: skill.level,
        level_fraction: skill.level_fraction(),
        category: skill.category.as_tag().to_string(),
        icon: tech_icon_for(skill.icon.as_deref().unwrap_or_default())
            .as_str()
            .to_string(),
        description: skill.description.clone(),
    }
}

fn to_technology_item(technology: &Technology) -> TechnologyItem {
    TechnologyItem {
        name: technology.name.clone(),
        icon: tech_icon_for(technology.icon.as_deref().unwrap_or_default())
            .as_str()
            .to_string(),
        url: technology.url.clone(),
    }
}

fn to_project_item(project: &Project) -> ProjectItem {
    ProjectItem {
        id: project.id.clone(),
        title: project.title.clone(),
        description: project.description.clone(),
        category: project.category.as_tag().to_string(),
        status: project.status.as_tag().to_string(),
        status_label: project_status_label(project.status).to_string(),
        status_icon: status_icon_for(project.status).to_string(),
        image_url: project.image_url.clone(),
        technologies: project.technologies.iter().map(to_technology_item).collect(),
        features: project
            .features
            .iter()
            .map(|feature| FeatureItem {
                title: feature.title.clone(),
                description: feature.description.clone(),
                technologies: feature.technologies.iter().map(to_technology_item).collect(),
            })
            .collect(),
        links: project
            .external_links()
            .into_iter()
            .map(|(kind, url)| ProjectLinkItem {
                kind: link_kind_label(kind).to_string(),
                url: url.to_string(),
            })
            .collect(),
    }
}

fn link_kind_label(kind: ProjectLinkKind) -> &'static str {
    match kind {
        ProjectLinkKind::Github => "github",
        ProjectLinkKind::Live => "live",
        ProjectLinkKind::PlayStore => "play_store",
        ProjectLinkKind::AppStore => "app_store",
    }
}

fn to_external_link_item(link: &ExternalLink) -> ExternalLinkItem {
    ExternalLinkItem {
        platform: link.platform.clone(),
        url: link.url.clone(),
        description: link.description.clone(),
        social_icon: social_icon_for(link.platform.as_str()).as_str().to_string(),
    }
}

fn to_section_item(section: PortfolioSection) -> SectionItem {
    let key = match section {
        PortfolioSection::Hero => "HERO",
        PortfolioSection::Skills => "SKILLS",
        PortfolioSection::Projects => "PROJECTS",
        PortfolioSection::Experience => "EXPERIENCE",
        PortfolioSection::Education => "EDUCATION",
        PortfolioSection::Contact => "CONTACT",
    };
    SectionItem {
        key: key.to_string(),
        title: section.title().to_string(),
        icon: section.icon().to_string(),
        list_index: u32::try_from(section.list_index()).unwrap_or(u32::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        contributions, core_version, educations, external_links, find_external_link,
        find_project, init_logging, personal_info, ping, portfolio_sections,
        portfolio_snapshot_json, project_tabs, projects_by_category, section_for_list_index,
        skill_tabs, skills_by_category,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn skills_by_category_accepts_lowercase_tag() {
        let response = skills_by_category("gis".to_string());
        assert!(response.ok, "{}", response.message);
        let names: Vec<&str> = response.items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["ArcGIS Online", "ArcGIS Enterprise", "ArcGIS Developers", "QGIS"]
        );
        assert_eq!(response.items[0].icon, "public");
        assert_eq!(response.message, "Found 4 result(s).");
    }

    #[test]
    fn skills_by_category_rejects_unknown_tag() {
        let response = skills_by_category("cooking".to_string());
        assert!(!response.ok);
        assert!(response.items.is_empty());
        assert!(response.message.contains("cooking"));
    }

    #[test]
    fn projects_by_category_maps_links_and_status() {
        let response = projects_by_category("MOBILE".to_string());
        assert!(response.ok, "{}", response.message);
        let ids: Vec<&str> = response.items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["botola-max", "geolight-meter", "pharmagest"]);

        let pharmagest = &response.items[2];
        assert_eq!(pharmagest.status_label, "In Progress");
        assert_eq!(pharmagest.status_icon, "schedule");
        assert_eq!(pharmagest.links.len(), 1);
        assert_eq!(pharmagest.links[0].kind, "play_store");
    }

    #[test]
    fn professional_query_is_empty_but_ok() {
        let response = projects_by_category("professional".to_string());
        assert!(response.ok);
        assert!(response.items.is_empty());
        assert_eq!(response.message, "No results.");
    }

    #[test]
    fn find_project_resolves_nested_and_reports_missing() {
        let found = find_project(" borne-citoyenne ".to_string());
        assert!(found.ok, "{}", found.message);
        assert_eq!(found.item.map(|item| item.category), Some("PROFESSIONAL".to_string()));

        let missing = find_project("nope".to_string());
        assert!(!missing.ok);
        assert!(missing.item.is_none());
    }

    #[test]
    fn snapshot_json_uses_camel_case_fields() {
        let response = portfolio_snapshot_json();
        assert!(response.ok, "{}", response.message);
        let value: serde_json::Value = serde_json::from_str(&response.json).unwrap();
        assert_eq!(value["personalInfo"]["location"], "Morocco");
        assert!(value["professionalContributions"].is_array());
    }

    #[test]
    fn tabs_list_every_category_and_flag_empty_ones() {
        let skill_tabs = skill_tabs();
        assert_eq!(skill_tabs.len(), 5);
        assert_eq!(skill_tabs[0].label, "Development");
        assert!(skill_tabs.iter().all(|tab| tab.has_records));

        let project_tabs = project_tabs();
        let tags: Vec<&str> = project_tabs.iter().map(|tab| tab.tag.as_str()).collect();
        assert_eq!(tags, vec!["FULLSTACK", "MOBILE", "TOOL", "PROFESSIONAL"]);
        let populated: Vec<bool> = project_tabs.iter().map(|tab| tab.has_records).collect();
        assert_eq!(populated, vec![true, true, true, false]);
        assert_eq!(project_tabs[3].label, "Professional Work");
    }

    #[test]
    fn sections_follow_navigation_order() {
        let sections = portfolio_sections();
        assert_eq!(sections.len(), 6);
        assert_eq!(sections[5].list_index, 5);
        assert_eq!(section_for_list_index(6).key, "CONTACT");
        assert_eq!(section_for_list_index(42).key, "HERO");
    }

    #[test]
    fn personal_info_carries_mailto_uri() {
        let info = personal_info();
        assert_eq!(info.email, "admin@youmrabti.com");
        assert_eq!(info.mailto_uri, "mailto:admin@youmrabti.com");
    }

    #[test]
    fn external_links_resolve_social_icons() {
        let links = external_links();
        let icons: Vec<&str> = links.iter().map(|link| link.social_icon.as_str()).collect();
        assert_eq!(
            icons,
            vec!["code", "extension", "phone_android", "business", "favorite"]
        );

        let linkedin = find_external_link("LinkedIn".to_string()).expect("linkedin link");
        assert_eq!(linkedin.url, "https://linkedin.com/in/younesmrabti1996");
        assert!(find_external_link("Mastodon".to_string()).is_none());
    }

    #[test]
    fn contributions_expose_current_flag_and_preview() {
        let items = contributions();
        assert_eq!(items.len(), 1);
        let contribution = &items[0];
        assert!(contribution.is_current);
        assert_eq!(
            contribution.preview_titles,
            vec!["Find Tobissi", "ÉCO-GESTE", "Borne Citoyenne"]
        );
        assert!(contribution
            .project_ids
            .iter()
            .all(|id| find_project(id.clone()).ok));
    }

    #[test]
    fn shipped_educations_are_empty() {
        assert!(educations().is_empty());
    }
}
