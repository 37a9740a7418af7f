use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Viewport width (px) below which the burger menu replaces the desktop links.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Fraction of a section that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const BRAND_NAME: &str = "BeyoundTechHub";
pub const COPYRIGHT: &str = "© 2026 YourCompany. All rights reserved.";

pub const LOGO_URL: &str = "https://rajkumar716.github.io/companylogo.png";
pub const ABOUT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1521737604893-d14cc237f11d";

const PORTRAIT_BASE_URL: &str = "https://randomuser.me/api/portraits/men";
const PORTRAIT_FIRST_INDEX: usize = 30;

/// Portrait locator for the team member at `position` in the team list.
pub fn portrait_url(position: usize) -> String {
    format!("{}/{}.jpg", PORTRAIT_BASE_URL, PORTRAIT_FIRST_INDEX + position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portraits_start_at_thirty() {
        assert_eq!(portrait_url(0), "https://randomuser.me/api/portraits/men/30.jpg");
        assert_eq!(portrait_url(2), "https://randomuser.me/api/portraits/men/32.jpg");
    }

    #[test]
    fn breakpoint_matches_md_width() {
        assert_eq!(MOBILE_BREAKPOINT_PX, 768.0);
    }
}
