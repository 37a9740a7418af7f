use yew::prelude::*;

use crate::reveal::{use_reveal_once, FADE_IN_UP};

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    /// Used in log lines.
    pub label: &'static str,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// A page section that fades in and rises the first time it is scrolled into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let reveal = use_reveal_once(node.clone(), props.label);

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("page-section", reveal.is_visible().then_some("revealed"), props.class.clone())}
            style={FADE_IN_UP.style(reveal)}
        >
            { for props.children.iter() }
        </section>
    }
}
