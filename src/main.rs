use yew::prelude::*;
use log::info;

mod config;
mod content;
mod motion;
mod nav;
mod reveal;
mod styles;
mod components {
    pub mod background;
    pub mod header;
    pub mod hover;
    pub mod section;
}
mod pages {
    pub mod landing;
}

use components::{background::AnimatedBackground, header::Header};
use pages::landing::Landing;
use styles::GlobalStyles;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <GlobalStyles />
            <AnimatedBackground />
            <div class="page-content">
                <Header />
                <Landing />
            </div>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {} landing page", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
