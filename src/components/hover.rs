use yew::prelude::*;

use crate::motion::HoverEffect;

/// Inline style plus the pointer handlers that drive it.
pub struct Hover {
    pub style: String,
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

#[hook]
pub fn use_hover(effect: HoverEffect) -> Hover {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    Hover {
        style: effect.style(*hovered),
        onmouseenter,
        onmouseleave,
    }
}
