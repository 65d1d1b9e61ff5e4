//! DOM lookup helpers and tab switching.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document object available"))
}

/// Look up an element by id.
///
/// # Errors
/// Returns JsValue error if the element is not on the page.
pub fn element(id: &str) -> Result<Element, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element not found: #{}", id)))
}

pub fn html_element(id: &str) -> Result<HtmlElement, JsValue> {
    element(id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an HTMLElement", id)))
}

pub fn input(id: &str) -> Result<HtmlInputElement, JsValue> {
    element(id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an input element", id)))
}

/// Set the `display` style of an element.
pub fn set_display(id: &str, value: &str) -> Result<(), JsValue> {
    html_element(id)?.style().set_property("display", value)?;
    Ok(())
}

pub fn show(id: &str) -> Result<(), JsValue> {
    set_display(id, "block")
}

pub fn hide(id: &str) -> Result<(), JsValue> {
    set_display(id, "none")
}

/// Wire every `.tab-button` to move the `active` class onto itself and the
/// `.tab-content` named by its `data-tab` attribute.
pub fn init_tabs() -> Result<(), JsValue> {
    let buttons = document()?.query_selector_all(".tab-button")?;
    for i in 0..buttons.length() {
        let Some(node) = buttons.item(i) else { continue };
        let button: Element = node.dyn_into()?;

        let handler = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Err(e) = activate_tab(&event) {
                web_sys::console::error_1(&e);
            }
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }
    Ok(())
}

fn activate_tab(event: &web_sys::Event) -> Result<(), JsValue> {
    let document = document()?;
    let button: Element = event
        .current_target()
        .ok_or("No event target")?
        .dyn_into()?;

    for selector in [".tab-button", ".tab-content"] {
        let nodes = document.query_selector_all(selector)?;
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                let el: Element = node.dyn_into()?;
                el.class_list().remove_1("active")?;
            }
        }
    }

    button.class_list().add_1("active")?;
    if let Some(tab_id) = button.get_attribute("data-tab") {
        element(&tab_id)?.class_list().add_1("active")?;
    }
    Ok(())
}
