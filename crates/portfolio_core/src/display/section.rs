//! Portfolio screen sections and their scroll-list positions.
//!
//! # Invariants
//! - Section order is fixed: hero, skills, projects, experience, education, contact.
//! - The footer occupies list index 6 and highlights the contact tab.

use serde::{Deserialize, Serialize};

/// Bottom navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortfolioSection {
    Hero,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
}

const FOOTER_LIST_INDEX: usize = 6;

impl PortfolioSection {
    pub const ALL: [PortfolioSection; 6] = [
        PortfolioSection::Hero,
        PortfolioSection::Skills,
        PortfolioSection::Projects,
        PortfolioSection::Experience,
        PortfolioSection::Education,
        PortfolioSection::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Contact => "Contact",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Hero => "home",
            Self::Skills => "star",
            Self::Projects => "folder",
            Self::Experience => "work",
            Self::Education => "school",
            Self::Contact => "email",
        }
    }

    /// Scroll target index for this section.
    pub fn list_index(self) -> usize {
        match self {
            Self::Hero => 0,
            Self::Skills => 1,
            Self::Projects => 2,
            Self::Experience => 3,
            Self::Education => 4,
            Self::Contact => 5,
        }
    }

    /// Section highlighted when `index` is the first visible list item.
    ///
    /// Out-of-range indices resolve to `Hero`.
    pub fn from_list_index(index: usize) -> Self {
        match index {
            0 => Self::Hero,
            1 => Self::Skills,
            2 => Self::Projects,
            3 => Self::Experience,
            4 => Self::Education,
            5 | FOOTER_LIST_INDEX => Self::Contact,
            _ => Self::Hero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PortfolioSection;

    #[test]
    fn list_index_round_trips_for_every_section() {
        for section in PortfolioSection::ALL {
            assert_eq!(PortfolioSection::from_list_index(section.list_index()), section);
        }
    }

    #[test]
    fn footer_maps_to_contact_and_overflow_to_hero() {
        assert_eq!(PortfolioSection::from_list_index(6), PortfolioSection::Contact);
        assert_eq!(PortfolioSection::from_list_index(7), PortfolioSection::Hero);
        assert_eq!(PortfolioSection::from_list_index(usize::MAX), PortfolioSection::Hero);
    }

    #[test]
    fn titles_follow_navigation_bar() {
        let titles: Vec<&str> = PortfolioSection::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(
            titles,
            vec!["Home", "Skills", "Projects", "Experience", "Education", "Contact"]
        );
    }
}
