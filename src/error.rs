use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("local storage is not available")]
    StorageUnavailable,

    #[error("element not found: {0}")]
    Missing(String),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("failed to parse translations: {0}")]
    Translations(#[from] serde_json::Error),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        PageError::Js(message)
    }
}
