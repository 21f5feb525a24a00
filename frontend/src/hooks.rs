//! Browser signals as hooks. Each one subscribes when the component mounts
//! and releases its listener or observer in the effect destructor.

use gloo_console::warn;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};
use yew::prelude::*;
use yew_hooks::prelude::use_window_size;

use crate::config::InViewOptions;

/// Whether an observer entry counts as "on screen" for `threshold`.
pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// Whether the next observer report should reach the component. Latched
/// observers only ever report the first reveal.
pub fn should_report(visible: bool, once: bool) -> bool {
    visible || !once
}

fn observe(
    node: &NodeRef,
    options: InViewOptions,
    setter: UseStateSetter<bool>,
) -> Result<Box<dyn FnOnce()>, &'static str> {
    let element = node.cast::<Element>().ok_or("node is not mounted")?;

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let Some(entry) = entries.iter().last() else {
                return;
            };
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let visible = crosses_threshold(
                entry.is_intersecting(),
                entry.intersection_ratio(),
                options.threshold,
            );
            if visible && options.once {
                observer.disconnect();
            }
            if should_report(visible, options.once) {
                setter.set(visible);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|_| "IntersectionObserver unavailable")?;
    observer.observe(&element);

    Ok(Box::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

/// Tracks whether the element behind `node` is on screen.
///
/// Without `IntersectionObserver` support the element is reported visible
/// straight away so reveal animations never leave content hidden.
#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let destructor: Box<dyn FnOnce()> =
                    match observe(node, *options, in_view.setter()) {
                        Ok(destructor) => destructor,
                        Err(reason) => {
                            warn!("visibility tracking disabled:", reason);
                            in_view.set(true);
                            Box::new(|| ())
                        }
                    };
                destructor
            },
            (node, options),
        );
    }

    *in_view
}

/// Current viewport width in CSS pixels, updated on resize.
#[hook]
pub fn use_viewport_width() -> f64 {
    let (width, _height) = use_window_size();
    width
}

/// `true` once the page is scrolled further than `threshold_px`.
#[hook]
pub fn use_scrolled(threshold_px: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold_px| {
                let threshold_px = *threshold_px;
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let window = window.clone();
                        move || {
                            if let Ok(scroll_y) = window.scroll_y() {
                                scrolled.set(scroll_y > threshold_px);
                            }
                        }
                    });

                    match window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        Ok(()) => {
                            // Pick up a restored scroll position without waiting for an event.
                            if callback
                                .as_ref()
                                .unchecked_ref::<web_sys::js_sys::Function>()
                                .call0(&JsValue::NULL)
                                .is_err()
                            {
                                warn!("could not read the initial scroll position");
                            }
                            Box::new(move || {
                                let _ = window.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            })
                        }
                        Err(_) => {
                            warn!("could not listen for scroll events");
                            Box::new(|| ())
                        }
                    }
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            threshold_px,
        );
    }

    *scrolled
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        debug!("scrolled to top");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_must_reach_threshold() {
        assert!(crosses_threshold(true, 0.2, 0.2));
        assert!(crosses_threshold(true, 0.9, 0.2));
        // Still intersecting while leaving, but below the threshold.
        assert!(!crosses_threshold(true, 0.1, 0.2));
        assert!(!crosses_threshold(false, 0.0, 0.0));
    }

    #[test]
    fn latched_observers_ignore_hide_reports() {
        assert!(should_report(true, true));
        assert!(!should_report(false, true));
        assert!(should_report(false, false));
        assert!(should_report(true, false));
    }
}
