use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::Element;
use yew::prelude::*;

use crate::motion::scroll::{self, Anchor, Geometry, TriggerRegion};

/// Current scroll offset and the node's layout, or `None` while it is unmounted.
fn measure(node: &NodeRef) -> Option<(f64, Geometry)> {
    let window = web_sys::window()?;
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some((
        scroll_y,
        Geometry::from_client_rect(rect.top(), rect.height(), scroll_y, viewport_height),
    ))
}

/// Whether a measured sample has scrolled past `anchor`. An unmounted node
/// never has.
fn reached(sample: Option<(f64, Geometry)>, anchor: Anchor) -> bool {
    sample.map_or(false, |(scroll_y, geometry)| scroll::passed(scroll_y, anchor, &geometry))
}

/// Runs `sample` now and again on every window scroll and resize.
fn on_scroll_and_resize(sample: Rc<dyn Fn()>) -> Vec<EventListener> {
    sample();
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    ["scroll", "resize"]
        .into_iter()
        .map(|event| {
            let sample = sample.clone();
            EventListener::new(&window, event, move |_| sample())
        })
        .collect()
}

/// Progress through `region`, measured on `node`, in `[0, 1]`.
#[hook]
pub fn use_scroll_progress(node: &NodeRef, region: TriggerRegion) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let node = node.clone();
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = on_scroll_and_resize(Rc::new(move || {
                    if let Some((scroll_y, geometry)) = measure(&node) {
                        progress.set(scroll::progress(scroll_y, region.bounds(&geometry)));
                    }
                }));
                move || drop(listeners)
            },
            (),
        );
    }

    *progress
}

/// Turns true once the scroll offset passes `anchor` on `node`, and stays true.
#[hook]
pub fn use_reveal(node: &NodeRef, anchor: Anchor) -> bool {
    let revealed = use_state_eq(|| false);
    let done = *revealed;

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |&done| {
                let listeners = if done {
                    Vec::new()
                } else {
                    on_scroll_and_resize(Rc::new(move || {
                        if reached(measure(&node), anchor) {
                            revealed.set(true);
                        }
                    }))
                };
                move || drop(listeners)
            },
            done,
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    fn sample(scroll_y: f64) -> Option<(f64, Geometry)> {
        // Element 1000px down the page in an 800px viewport.
        Some((scroll_y, Geometry::from_client_rect(1000.0 - scroll_y, 400.0, scroll_y, 800.0)))
    }

    #[test]
    fn unmounted_node_is_never_reached() {
        assert!(!reached(None, config::REVEAL_AT));
    }

    #[test]
    fn reveal_anchor_is_reached_once_scrolled_past() {
        // Top edge at 85% of the viewport: 1000 - 0.85 * 800.
        assert!(!reached(sample(300.0), config::REVEAL_AT));
        assert!(reached(sample(320.0), config::REVEAL_AT));
        assert!(reached(sample(900.0), config::REVEAL_AT));
    }
}
