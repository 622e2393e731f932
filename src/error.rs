//! Structured error types for postnav.
//!
//! Widget constructors return these; event handlers swallow DOM failures
//! instead (a late callback against a torn-down page is not an error).

/// All errors that can occur while building or mounting a widget.
#[derive(Debug, thiserror::Error)]
pub enum PostnavError {
    /// A required document/element was missing or a DOM call failed.
    #[error("DOM: {0}")]
    Dom(String),

    /// Invalid widget configuration.
    #[error("Config: {0}")]
    Config(String),

    /// Malformed embedded JSON (e.g. a `data-tags` attribute).
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// URL construction failure.
    #[error("URL: {0}")]
    Url(#[from] url::ParseError),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PostnavError>;

impl From<String> for PostnavError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for PostnavError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<PostnavError> for wasm_bindgen::JsValue {
    fn from(e: PostnavError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
