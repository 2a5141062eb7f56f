use crate::Result;
use crate::error::{DEFAULT_ERROR_MESSAGE, Error};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

pub const HIDDEN_CLASS: &str = "hidden";

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn get_window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::new(DEFAULT_ERROR_MESSAGE, "no global `window` exists"))
}

pub fn get_document() -> Result<Document> {
    get_window()?
        .document()
        .ok_or_else(|| Error::new(DEFAULT_ERROR_MESSAGE, "should have a document on window"))
}

pub fn get_body() -> Result<HtmlElement> {
    get_document()?
        .body()
        .ok_or_else(|| Error::new(DEFAULT_ERROR_MESSAGE, "document should have a body"))
}

pub fn create_element(document: &Document, name: &str) -> Result<Element> {
    Ok(document.create_element(name)?)
}

pub fn get_element_by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::missing_element(&format!("#{id}")))
}

pub fn get_element_by_id_dyn<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    Ok(get_element_by_id(document, id)?.dyn_into()?)
}

pub fn query_selector_single_element(element: &Element, selector: &str) -> Result<Element> {
    element
        .query_selector(selector)?
        .ok_or_else(|| Error::missing_element(selector))
}

pub fn query_selector_all(element: &Element, selector: &str) -> Result<Vec<Element>> {
    let nodes = element.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(node) = nodes.get(index) {
            elements.push(node.dyn_into::<Element>()?);
        }
    }
    Ok(elements)
}

pub fn add_class(element: &Element, class: &str) {
    let classes = element.class_list();
    if let Err(error) = classes.add_1(class) {
        log::error!("Can't add class `{class}`: {error:?}");
    }
}

pub fn remove_class(element: &Element, class: &str) {
    let classes = element.class_list();
    if let Err(error) = classes.remove_1(class) {
        log::error!("Can't remove class `{class}`: {error:?}");
    }
}

#[cfg(test)]
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn set_visible(element: &Element, visible: bool) {
    if visible {
        remove_class(element, HIDDEN_CLASS);
    } else {
        add_class(element, HIDDEN_CLASS);
    }
}

#[cfg(test)]
pub fn is_visible(element: &Element) -> bool {
    !has_class(element, HIDDEN_CLASS)
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<()> {
    Ok(element.set_attribute(name, value)?)
}

/// Register `handler` as a listener which lives as long as the page.
pub fn add_event_listener<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<()>
where
    F: Fn(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn(_)>);
    target.add_event_listener_with_event_listener(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
