use std::borrow::Cow;

use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::config::EffectsConfig;
use crate::dom;

/// The element id an in-page `href` points at. `None` for a bare `#` and for
/// links that leave the page.
pub fn fragment_id(href: &str) -> Option<Cow<'_, str>> {
    let raw = href.strip_prefix('#')?;
    if raw.is_empty() {
        return None;
    }
    Some(urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw)))
}

/// Replaces the browser's jump-to-fragment with a smooth scroll for every
/// link matching `anchor_selector`. Clicks are caught once on the document,
/// so links rendered later are covered too.
#[hook]
pub fn use_anchor_scroll(config: &EffectsConfig) {
    let selector = config.anchor_selector.clone();
    use_effect_with_deps(
        move |selector: &String| {
            let document = dom::document();
            let selector = selector.clone();

            let click_callback = Closure::wrap(Box::new(move |event: Event| {
                let Some(link) = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .and_then(|element| element.closest(&selector).ok().flatten())
                else {
                    return;
                };
                let Some(href) = link.get_attribute("href") else {
                    return;
                };

                // In-page link from here on: never let the browser jump.
                event.prevent_default();
                scroll_to_fragment(&href);
            }) as Box<dyn FnMut(Event)>);

            if let Some(document) = &document {
                dom::warn_on_err(
                    document.add_event_listener_with_callback(
                        "click",
                        click_callback.as_ref().unchecked_ref(),
                    ),
                    "anchor scroll listener",
                );
                info!("Anchor scroll attached");
            }

            move || {
                if let Some(document) = document {
                    dom::warn_on_err(
                        document.remove_event_listener_with_callback(
                            "click",
                            click_callback.as_ref().unchecked_ref(),
                        ),
                        "anchor scroll listener",
                    );
                }
            }
        },
        selector,
    );
}

/// Resolves `href` to its in-page target through `lookup`. `lookup` only
/// runs for a real fragment id; a miss is logged and yields `None`.
pub fn fragment_target<T>(href: &str, lookup: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    let id = fragment_id(href)?;
    let target = lookup(id.as_ref());
    if target.is_none() {
        debug!("No element for fragment '{}'", id);
    }
    target
}

fn scroll_to_fragment(href: &str) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(target) = fragment_target(href, |id| document.get_element_by_id(id)) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
