use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures when talking to the browser. None of these are fatal for the
/// page; callers log them and carry on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BrowserError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("element `{0}` is not mounted")]
    MissingElement(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        BrowserError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
