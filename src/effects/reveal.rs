use std::collections::HashSet;

use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::EffectsConfig;
use crate::dom;

const KEY_ATTRIBUTE: &str = "data-reveal-key";

/// Remembers which targets have been revealed. Reveals are one-way: nothing
/// here ever forgets a key.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    /// Returns true only the first time `key` is seen intersecting.
    pub fn record(&mut self, key: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: usize) -> bool {
        self.revealed.contains(&key)
    }
}

/// Adds `revealed_class` to every element matching `reveal_selector` once it
/// scrolls into view. Revealed elements are unobserved right away.
#[hook]
pub fn use_scroll_reveal(config: &EffectsConfig) {
    let config = config.clone();
    use_effect_with_deps(
        move |config: &EffectsConfig| {
            let watch = observe_targets(config);
            move || {
                if let Some(watch) = watch {
                    watch.observer.disconnect();
                }
            }
        },
        config,
    );
}

struct RevealWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

fn observe_targets(config: &EffectsConfig) -> Option<RevealWatch> {
    let document = dom::document()?;
    let targets = dom::query_all(&document, &config.reveal_selector);
    if targets.is_empty() {
        debug!("No reveal targets for '{}'", config.reveal_selector);
        return None;
    }

    let revealed_class = config.revealed_class.clone();
    let mut tracker = RevealTracker::default();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(key) = target
                .get_attribute(KEY_ATTRIBUTE)
                .and_then(|key| key.parse::<usize>().ok())
            else {
                continue;
            };

            if tracker.record(key, entry.is_intersecting()) {
                debug!("Revealing target {}", key);
                dom::warn_on_err(target.class_list().add_1(&revealed_class), "reveal");
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin);

    let observer = dom::warn_on_err(
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options),
        "IntersectionObserver",
    )?;

    for (key, target) in targets.iter().enumerate() {
        dom::warn_on_err(target.set_attribute(KEY_ATTRIBUTE, &key.to_string()), "reveal key");
        observer.observe(target);
    }
    info!("Scroll reveal watching {} elements", targets.len());

    Some(RevealWatch {
        observer,
        _callback: callback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_on_first_intersection() {
        let mut tracker = RevealTracker::default();
        assert!(!tracker.record(0, false));
        assert!(tracker.record(0, true));
        assert!(!tracker.record(0, true));
        assert!(tracker.is_revealed(0));
    }

    #[test]
    fn leaving_the_viewport_keeps_the_reveal() {
        let mut tracker = RevealTracker::default();
        tracker.record(3, true);
        for visible in [false, true, false, false] {
            tracker.record(3, visible);
            assert!(tracker.is_revealed(3));
        }
    }

    #[test]
    fn targets_are_tracked_independently() {
        let mut tracker = RevealTracker::default();
        assert!(tracker.record(1, true));
        assert!(!tracker.is_revealed(2));
        assert!(tracker.record(2, true));
    }
}
