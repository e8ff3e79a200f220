use gloo_events::EventListener;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Keeps an observer and its JS callback alive; disconnects on drop.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe<F>(targets: &[Element], root_margin: Option<&str>, mut on_entry: F) -> Option<ObserverGuard>
where
    F: FnMut(&IntersectionObserverEntry) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            if let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() {
                on_entry(entry);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(0.0));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    for target in targets {
        observer.observe(target);
    }
    Some(ObserverGuard {
        observer,
        _callback: callback,
    })
}

/// Turns true the first time the node scrolls into view and stays true.
#[hook]
pub fn use_in_view(node: &NodeRef) -> bool {
    let seen = use_state_eq(|| false);
    let seen_now = *seen;

    {
        let node = node.clone();
        let seen = seen.clone();
        use_effect_with_deps(
            move |&already_seen| {
                let guard = if already_seen {
                    None
                } else if let Some(element) = node.cast::<Element>() {
                    observe(&[element], None, move |entry| {
                        if entry.is_intersecting() {
                            seen.set(true);
                        }
                    })
                } else {
                    warn!("use_in_view: node is not mounted");
                    None
                };
                move || drop(guard)
            },
            seen_now,
        );
    }

    *seen
}

/// Id of the tracked section currently crossing the middle of the viewport.
/// Only observes while `enabled`; the sections exist on the home page alone.
#[hook]
pub fn use_active_section(enabled: bool) -> Option<String> {
    let active = use_state_eq(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |&enabled| {
                let sections: Vec<Element> = if enabled {
                    web_sys::window()
                        .and_then(|w| w.document())
                        .map(|doc| {
                            config::TRACKED_SECTIONS
                                .iter()
                                .filter_map(|id| doc.get_element_by_id(id))
                                .collect()
                        })
                        .unwrap_or_default()
                } else {
                    active.set(None);
                    Vec::new()
                };

                let guard = if sections.is_empty() {
                    None
                } else {
                    debug!("Tracking {} nav sections", sections.len());
                    observe(&sections, Some(config::ACTIVE_SECTION_ROOT_MARGIN), move |entry| {
                        if entry.is_intersecting() {
                            active.set(Some(entry.target().id()));
                        }
                    })
                };
                move || drop(guard)
            },
            enabled,
        );
    }

    (*active).clone()
}

/// Follows the user's reduced-motion preference, including live changes.
#[hook]
pub fn use_reduced_motion() -> bool {
    let reduced = use_state_eq(|| {
        web_sys::window()
            .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    });

    {
        let reduced = reduced.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window()
                    .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
                    .map(|query| {
                        let target = query.clone();
                        EventListener::new(&target, "change", move |_| {
                            debug!("Reduced motion preference changed: {}", query.matches());
                            reduced.set(query.matches());
                        })
                    });
                move || drop(listener)
            },
            (),
        );
    }

    *reduced
}
