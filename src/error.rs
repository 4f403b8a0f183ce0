//! Errors raised while wiring the widgets into the page.
//!
//! The simulation itself cannot fail; only DOM lookups and browser calls can.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum WebError {
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// Nothing in the document matched the id or selector.
    ElementNotFound(String),
    /// The element exists but is not of the expected kind.
    WrongElementType(String),
    /// The canvas refused to hand out a 2d context.
    NoContext,
    /// A browser call threw.
    Js(String),
}

impl WebError {
    /// Whether the page simply lacks a usable element for the widget, either
    /// nothing matches or the match is the wrong kind of element.
    /// Widgets treat this as "nothing to do" rather than a failure.
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            WebError::ElementNotFound(_) | WebError::WrongElementType(_) | WebError::NoContext
        )
    }
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::NoWindow => write!(f, "no global window"),
            WebError::NoDocument => write!(f, "window has no document"),
            WebError::ElementNotFound(what) => write!(f, "no element matches {}", what),
            WebError::WrongElementType(what) => write!(f, "element {} has the wrong type", what),
            WebError::NoContext => write!(f, "canvas has no 2d context"),
            WebError::Js(msg) => write!(f, "browser call failed: {}", msg),
        }
    }
}

impl std::error::Error for WebError {}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<WebError> for JsValue {
    fn from(e: WebError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
