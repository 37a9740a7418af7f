use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::use_window_size;

use crate::components::hover::use_hover;
use crate::config;
use crate::content::NavLink;
use crate::motion::LOGO_TILT;
use crate::nav::{NavView, NavigationState};

fn nav_anchor(link: &NavLink, class: &'static str) -> Html {
    html! {
        <a key={link.label} href={link.href()} class={class}>
            {link.label}
        </a>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let nav_state = use_state(NavigationState::default);
    let (viewport_width, _) = use_window_size();
    let logo = use_hover(LOGO_TILT);

    let view = NavView::new(*nav_state, viewport_width);

    let toggle_menu = {
        let nav_state = nav_state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = (*nav_state).toggled();
            debug!("Mobile menu open: {}", next.is_menu_open());
            nav_state.set(next);
        })
    };

    html! {
        <header class="site-header">
            <div class="header-bar">
                <div class="brand">
                    <img
                        src={config::LOGO_URL}
                        alt={format!("{} Logo", config::BRAND_NAME)}
                        class="brand-logo"
                        style={logo.style}
                        onmouseenter={logo.onmouseenter}
                        onmouseleave={logo.onmouseleave}
                    />
                    <h1 class="brand-title">{config::BRAND_NAME}</h1>
                </div>

                <nav class="desktop-nav">
                    { for view.desktop_links.iter().map(|link| nav_anchor(link, "nav-link")) }
                </nav>

                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded={nav_state.is_menu_open().to_string()}
                    onclick={toggle_menu}
                >
                    {view.glyph}
                </button>
            </div>

            {
                if let Some(links) = view.mobile_links {
                    html! {
                        <div class="mobile-nav">
                            { for links.iter().map(|link| nav_anchor(link, "nav-link mobile-nav-link")) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
