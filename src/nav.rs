//! Responsive navigation state.
//!
//! The header owns one `NavigationState`; everything it renders is derived
//! through [`NavView`] so the toggle rules can be checked without a browser.

use crate::config::MOBILE_BREAKPOINT_PX;
use crate::content::{NavLink, NAV_LINKS};

pub const OPEN_GLYPH: &str = "☰";
pub const CLOSE_GLYPH: &str = "✖";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    menu_open: bool,
}

impl NavigationState {
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggled(mut self) -> Self {
        self.toggle_menu();
        self
    }
}

pub fn below_breakpoint(viewport_width: f64) -> bool {
    viewport_width < MOBILE_BREAKPOINT_PX
}

/// What the header shows for a given state and viewport width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavView {
    pub glyph: &'static str,
    pub desktop_links: &'static [NavLink],
    pub mobile_links: Option<&'static [NavLink]>,
}

impl NavView {
    pub fn new(state: NavigationState, viewport_width: f64) -> Self {
        let mobile_visible = state.is_menu_open() && below_breakpoint(viewport_width);
        Self {
            glyph: if state.is_menu_open() { CLOSE_GLYPH } else { OPEN_GLYPH },
            desktop_links: &NAV_LINKS,
            mobile_links: mobile_visible.then_some(&NAV_LINKS[..]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NARROW: f64 = 375.0;
    const WIDE: f64 = 1280.0;

    #[test]
    fn starts_closed_without_panel() {
        let state = NavigationState::default();
        assert!(!state.is_menu_open());
        assert_eq!(NavView::new(state, NARROW).mobile_links, None);
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut state = NavigationState::default();
        state.toggle_menu();
        assert!(state.is_menu_open());
        state.toggle_menu();
        assert_eq!(state, NavigationState::default());
    }

    #[test]
    fn panel_visible_only_when_open_and_narrow() {
        for open in [false, true] {
            for width in [NARROW, MOBILE_BREAKPOINT_PX - 1.0, MOBILE_BREAKPOINT_PX, WIDE] {
                let state = if open {
                    NavigationState::default().toggled()
                } else {
                    NavigationState::default()
                };
                let view = NavView::new(state, width);
                assert_eq!(
                    view.mobile_links.is_some(),
                    open && width < MOBILE_BREAKPOINT_PX,
                    "open={open} width={width}"
                );
            }
        }
    }

    #[test]
    fn desktop_links_ignore_the_flag() {
        let closed = NavView::new(NavigationState::default(), WIDE);
        let open = NavView::new(NavigationState::default().toggled(), WIDE);
        assert_eq!(closed.desktop_links.len(), 4);
        assert_eq!(closed.desktop_links, open.desktop_links);
    }

    #[test]
    fn click_through_scenario() {
        let mut state = NavigationState::default();
        let view = NavView::new(state, NARROW);
        assert_eq!(view.glyph, OPEN_GLYPH);
        assert!(view.mobile_links.is_none());

        state.toggle_menu();
        let view = NavView::new(state, NARROW);
        assert_eq!(view.glyph, CLOSE_GLYPH);
        let links = view.mobile_links.expect("panel should be open");
        assert_eq!(links.len(), 4);
        assert_eq!(links[3].href(), "#contact");

        state.toggle_menu();
        assert_eq!(NavView::new(state, NARROW), NavView::new(NavigationState::default(), NARROW));
    }
}
