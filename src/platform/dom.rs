//! DOM helpers

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::games;

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Create `<tag class="..">text</tag>`
pub fn element(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if !text.is_empty() {
        el.set_text_content(Some(text));
    }
    Ok(el)
}

/// "Back to Games" link to the games list
pub fn back_link(document: &Document) -> Result<Element, JsValue> {
    let link = element(document, "a", "back", "Back to Games")?;
    link.set_attribute("href", games::LIST_ROUTE)?;
    Ok(link)
}

/// Attach a click handler that lives as long as the page
pub fn on_click(el: &Element, mut f: impl FnMut() + 'static) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| f());
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Remove all children
pub fn clear(el: &Element) {
    el.set_inner_html("");
}
