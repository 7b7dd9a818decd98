//! Lookup helpers shared by the effects. Anything that can be missing comes
//! back as an `Option`; callers skip the effect instead of failing.

use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// All elements matching `selector`, or an empty list if the selector is
/// invalid or nothing matches.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Some(list) = warn_on_err(document.query_selector_all(selector), selector) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Logs a JS-side failure and drops it.
pub fn warn_on_err<T>(result: Result<T, JsValue>, context: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{}: {:?}", context, e);
            None
        }
    }
}
