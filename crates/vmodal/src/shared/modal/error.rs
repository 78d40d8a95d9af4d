use thiserror::Error;
use wasm_bindgen::JsValue;

/// Raised only when the host page cannot carry a modal at all.
#[derive(Debug, Error)]
pub enum ModalError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("invalid modal options: {0}")]
    InvalidOptions(String),
}

impl From<JsValue> for ModalError {
    fn from(value: JsValue) -> Self {
        ModalError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<ModalError> for JsValue {
    fn from(err: ModalError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
