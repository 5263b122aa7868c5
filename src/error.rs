//! Structured error types for sheetgrid.
//!
//! Resolution itself is total; only upstream error payloads, malformed
//! addresses and malformed JSON surface as errors.

/// All errors that can surface from sheetgrid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The upstream payload was a transport or API error instead of a spreadsheet.
    #[error("Input error: {message}")]
    Input { message: String },

    /// A column letter sequence or cell address could not be decoded.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// JSON (de)serialization failure at an entry point.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GridError {
    /// Message carried by an input error, or the rendered error otherwise.
    pub fn message(&self) -> String {
        match self {
            Self::Input { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
