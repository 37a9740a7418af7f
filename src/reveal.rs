//! One-shot "fade in and rise" reveal for page sections.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Hidden,
    Visible,
}

impl Reveal {
    /// Next state after an intersection notification. `Visible` is terminal.
    pub fn observe(self, intersecting: bool) -> Self {
        match self {
            Reveal::Hidden if intersecting => Reveal::Visible,
            other => other,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Reveal::Visible
    }
}

/// Visual values for the two reveal states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealVariant {
    pub offset_px: f64,
    pub duration_secs: f64,
}

pub const FADE_IN_UP: RevealVariant = RevealVariant {
    offset_px: 40.0,
    duration_secs: 0.8,
};

impl RevealVariant {
    pub fn style(&self, reveal: Reveal) -> String {
        let transition = format!(
            "transition: opacity {d}s ease-out, transform {d}s ease-out;",
            d = self.duration_secs
        );
        match reveal {
            Reveal::Hidden => format!(
                "opacity: 0; transform: translateY({}px); {}",
                self.offset_px, transition
            ),
            Reveal::Visible => format!("opacity: 1; transform: none; {}", transition),
        }
    }
}

/// Keeps an armed observer alive; disconnects when dropped.
pub struct OnceObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for OnceObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_reveal` the first time `target` enters the viewport, then disarms.
pub fn observe_once(target: &Element, on_reveal: impl Fn() + 'static) -> Result<OnceObserver, JsValue> {
    let mut current = Reveal::Hidden;
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            let next = current.observe(intersecting);
            if next != current {
                current = next;
                observer.disconnect();
                on_reveal();
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(target);

    Ok(OnceObserver {
        observer,
        _callback: callback,
    })
}

/// Reveal state for the element behind `node`. Falls back to visible when
/// the browser cannot observe it.
#[hook]
pub fn use_reveal_once(node: NodeRef, label: &'static str) -> Reveal {
    let reveal = use_state(Reveal::default);

    {
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let armed = match node.cast::<Element>() {
                    Some(element) => {
                        let on_reveal = {
                            let reveal = reveal.clone();
                            move || {
                                debug!("Revealing section {}", label);
                                reveal.set(Reveal::Visible);
                            }
                        };
                        match observe_once(&element, on_reveal) {
                            Ok(observer) => Some(observer),
                            Err(err) => {
                                warn!("Could not observe section {}: {:?}", label, err);
                                reveal.set(Reveal::Visible);
                                None
                            }
                        }
                    }
                    None => {
                        warn!("Section {} has no element to observe", label);
                        reveal.set(Reveal::Visible);
                        None
                    }
                };

                move || drop(armed)
            },
            node,
        );
    }

    *reveal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(Reveal::default(), Reveal::Hidden);
        assert_eq!(Reveal::Hidden.observe(false), Reveal::Hidden);
    }

    #[test]
    fn first_intersection_reveals_for_good() {
        let mut state = Reveal::default().observe(true);
        assert!(state.is_visible());
        for intersecting in [false, true, false, false] {
            state = state.observe(intersecting);
            assert!(state.is_visible());
        }
    }

    #[test]
    fn sections_reveal_independently() {
        let about = Reveal::default();
        let team = Reveal::default();

        let about = about.observe(true);
        assert!(about.is_visible());
        assert_eq!(team, Reveal::Hidden);

        let team = team.observe(false);
        assert_eq!(team, Reveal::Hidden);
        assert!(about.is_visible());
    }

    #[test]
    fn variant_styles() {
        let hidden = FADE_IN_UP.style(Reveal::Hidden);
        assert!(hidden.starts_with("opacity: 0; transform: translateY(40px);"));
        assert!(hidden.contains("opacity 0.8s"));

        let visible = FADE_IN_UP.style(Reveal::Visible);
        assert!(visible.starts_with("opacity: 1; transform: none;"));
        assert!(visible.contains("transform 0.8s"));
    }
}
