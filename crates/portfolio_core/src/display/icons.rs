//! Icon key resolution.
//!
//! # Invariants
//! - Lookups are case-insensitive and total: unknown keys map to the default.
//! - Identifiers are stable snake_case strings consumed by the UI icon set.

use crate::model::project::ProjectStatus;
use serde::Serialize;

/// Technology/skill icon identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TechIcon {
    Code,
    Terminal,
    ChangeCircle,
    PhoneAndroid,
    Coffee,
    Bolt,
    IntegrationInstructions,
    Storage,
    Public,
    Image,
    Cloud,
    PhoneIphone,
    Sensors,
    Place,
    TableView,
    Security,
    Leaderboard,
    SportsSoccer,
    Work,
    Sync,
    EmojiEvents,
    /// Fallback for unrecognized keys.
    Extension,
}

impl TechIcon {
    pub const DEFAULT: TechIcon = TechIcon::Extension;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Terminal => "terminal",
            Self::ChangeCircle => "change_circle",
            Self::PhoneAndroid => "phone_android",
            Self::Coffee => "coffee",
            Self::Bolt => "bolt",
            Self::IntegrationInstructions => "integration_instructions",
            Self::Storage => "storage",
            Self::Public => "public",
            Self::Image => "image",
            Self::Cloud => "cloud",
            Self::PhoneIphone => "phone_iphone",
            Self::Sensors => "sensors",
            Self::Place => "place",
            Self::TableView => "table_view",
            Self::Security => "security",
            Self::Leaderboard => "leaderboard",
            Self::SportsSoccer => "sports_soccer",
            Self::Work => "work",
            Self::Sync => "sync",
            Self::EmojiEvents => "emoji_events",
            Self::Extension => "extension",
        }
    }
}

fn lookup_tech_icon(key: &str) -> Option<TechIcon> {
    let icon = match key {
        "javascript" | "typescript" | "code" => TechIcon::Code,
        "nodejs" | "express" | "windows" | "powershell" => TechIcon::Terminal,
        "angular" => TechIcon::ChangeCircle,
        "dart" | "flutter" => TechIcon::PhoneAndroid,
        "java" => TechIcon::Coffee,
        "swift" | "socketio" | "real-time" => TechIcon::Bolt,
        "dotnet" | "c#" | "csharp" => TechIcon::IntegrationInstructions,
        "mysql" | "postgresql" | "mongodb" | "database" => TechIcon::Storage,
        "geojson" | "esri" | "earth-engine" | "gis" | "qgis" | "arcgis" | "arcgis-dev" => {
            TechIcon::Public
        }
        "svg" | "canvas" | "image" | "panorama" => TechIcon::Image,
        "docker" | "cloud" | "automation" | "integration" => TechIcon::Cloud,
        "mobile" | "android" | "ios" => TechIcon::PhoneIphone,
        "sensor" | "magnetometer" | "compass" => TechIcon::Sensors,
        "location" | "gps" | "place" => TechIcon::Place,
        "excel" | "xlsx" => TechIcon::TableView,
        "security" | "encryption" => TechIcon::Security,
        "analytics" => TechIcon::Leaderboard,
        "sports" => TechIcon::SportsSoccer,
        "business" => TechIcon::Work,
        "sync" => TechIcon::Sync,
        "reward" | "game" => TechIcon::EmojiEvents,
        _ => return None,
    };
    Some(icon)
}

/// Resolves a free-text icon key, falling back to `TechIcon::DEFAULT`.
pub fn tech_icon_for(key: &str) -> TechIcon {
    lookup_tech_icon(key.trim().to_ascii_lowercase().as_str()).unwrap_or(TechIcon::DEFAULT)
}

/// Whether `key` hits an explicit entry rather than the fallback.
pub fn is_known_icon_key(key: &str) -> bool {
    lookup_tech_icon(key.trim().to_ascii_lowercase().as_str()).is_some()
}

/// Footer/contact icon identifier for an external link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialIcon {
    Code,
    Extension,
    PhoneAndroid,
    Business,
    Favorite,
    Link,
}

impl SocialIcon {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Extension => "extension",
            Self::PhoneAndroid => "phone_android",
            Self::Business => "business",
            Self::Favorite => "favorite",
            Self::Link => "link",
        }
    }
}

/// Resolves an exact platform label; unknown platforms use `SocialIcon::Link`.
pub fn social_icon_for(platform: &str) -> SocialIcon {
    match platform {
        "GitHub - Main Profile" => SocialIcon::Code,
        "GitHub - Flutter Packages" => SocialIcon::Extension,
        "GitHub - Flutter Apps" => SocialIcon::PhoneAndroid,
        "LinkedIn" => SocialIcon::Business,
        "Patreon" => SocialIcon::Favorite,
        _ => SocialIcon::Link,
    }
}

/// Status badge icon identifier.
pub fn status_icon_for(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "check_circle",
        ProjectStatus::Ongoing => "schedule",
        ProjectStatus::Planned => "event",
    }
}
