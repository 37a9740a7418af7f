use yew::prelude::*;

use crate::motion::BLOBS;

/// Fixed gradient backdrop with three drifting blobs behind the page.
#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    let keyframes: String = BLOBS.iter().map(|blob| blob.keyframes()).collect::<Vec<_>>().join("\n");

    html! {
        <div class="page-background" aria-hidden="true">
            <style>{keyframes}</style>
            <div class="page-gradient"></div>
            {
                BLOBS.iter().map(|blob| html! {
                    <div key={blob.name} class="blob" style={blob.style()}></div>
                }).collect::<Html>()
            }
        </div>
    }
}
