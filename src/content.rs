//! Static copy rendered by the landing page.

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
}

impl NavLink {
    /// In-page anchor, the lower-cased label behind a `#`.
    pub fn href(&self) -> String {
        format!("#{}", self.label.to_lowercase())
    }
}

/// Shared by the desktop list and the mobile panel.
pub static NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "About" },
    NavLink { label: "Services" },
    NavLink { label: "Team" },
    NavLink { label: "Contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
}

const SERVICE_DESCRIPTION: &str =
    "High-quality, scalable and modern digital solutions tailored to your business.";

pub static SERVICES: [ServiceCard; 3] = [
    ServiceCard { title: "Web Development", description: SERVICE_DESCRIPTION },
    ServiceCard { title: "Mobile Apps", description: SERVICE_DESCRIPTION },
    ServiceCard { title: "UI/UX Design", description: SERVICE_DESCRIPTION },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub portrait: String,
}

const TEAM_NAMES: [&str; 3] = ["John Doe", "Jane Smith", "Michael Lee"];
const TEAM_ROLE: &str = "Senior Developer";

pub fn team() -> Vec<TeamMember> {
    TEAM_NAMES
        .iter()
        .enumerate()
        .map(|(position, &name)| TeamMember {
            name,
            role: TEAM_ROLE,
            portrait: config::portrait_url(position),
        })
        .collect()
}

pub const HERO_TITLE: &str = "Building Digital Excellence";
pub const HERO_SUBTITLE: &str = "We create innovative solutions that transform businesses and deliver exceptional digital experiences.";

pub const ABOUT_TITLE: &str = "About Our Company";
pub const ABOUT_BODY: &str = "We are a passionate team delivering cutting-edge web, mobile, and branding solutions. Our goal is to build scalable digital products that help businesses grow.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_map_to_lowercase_anchors() {
        let labels: Vec<_> = NAV_LINKS.iter().map(|l| l.label).collect();
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.href()).collect();
        assert_eq!(labels, ["About", "Services", "Team", "Contact"]);
        assert_eq!(hrefs, ["#about", "#services", "#team", "#contact"]);
    }

    #[test]
    fn services_are_fixed_and_ordered() {
        let titles: Vec<_> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles, ["Web Development", "Mobile Apps", "UI/UX Design"]);
        assert!(SERVICES.iter().all(|s| s.description == SERVICE_DESCRIPTION));
    }

    #[test]
    fn team_has_three_senior_developers() {
        let members = team();
        let names: Vec<_> = members.iter().map(|m| m.name).collect();
        assert_eq!(names, ["John Doe", "Jane Smith", "Michael Lee"]);
        assert!(members.iter().all(|m| m.role == "Senior Developer"));
        assert!(members[1].portrait.ends_with("/men/31.jpg"));
    }
}
