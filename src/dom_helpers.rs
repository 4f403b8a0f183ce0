// Helper functions for finding the window, document, canvas and widget
// elements the app binds to

use crate::error::WebError;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, HtmlFormElement,
    Window,
};

pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, WebError> {
    window.document().ok_or(WebError::NoDocument)
}

pub fn canvas_by_id(document: &Document, id: &str) -> Result<HtmlCanvasElement, WebError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WebError::ElementNotFound(format!("#{}", id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| WebError::WrongElementType(format!("#{}", id)))
}

pub fn form_by_id(document: &Document, id: &str) -> Result<HtmlFormElement, WebError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WebError::ElementNotFound(format!("#{}", id)))?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| WebError::WrongElementType(format!("#{}", id)))
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, WebError> {
    canvas
        .get_context("2d")?
        .ok_or(WebError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| WebError::NoContext)
}

pub fn query_one(document: &Document, selector: &str) -> Result<HtmlElement, WebError> {
    as_html(document.query_selector(selector)?, selector)
}

// First match below `parent` rather than in the whole document
pub fn query_within(parent: &Element, selector: &str) -> Result<HtmlElement, WebError> {
    as_html(parent.query_selector(selector)?, selector)
}

fn as_html(found: Option<Element>, selector: &str) -> Result<HtmlElement, WebError> {
    found
        .ok_or_else(|| WebError::ElementNotFound(selector.to_owned()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WebError::WrongElementType(selector.to_owned()))
}

// Elements that are not HtmlElements (e.g. svg) are skipped; may be empty
pub fn query_any(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, WebError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

// Like `query_any`, but nothing matching is an error
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, WebError> {
    let elements = query_any(document, selector)?;
    if elements.is_empty() {
        return Err(WebError::ElementNotFound(selector.to_owned()));
    }
    Ok(elements)
}

pub fn viewport_size(window: &Window) -> Result<(f64, f64), WebError> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), WebError> {
    element.style().set_property(property, value)?;
    Ok(())
}
