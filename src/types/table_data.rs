use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::Spreadsheet;
use crate::error::{GridError, Result};

/// Payload handed to the table: grid data, or one of the two error shapes
/// the upstream fetch can produce.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TableData {
    Ok(Spreadsheet),
    /// Transport-level failure (connection refused, DNS, ...).
    TransportError(TransportError),
    /// API-level failure delivered as a successful response with an `error` body.
    ApiError(ApiError),
}

/// Error object from the HTTP layer. Fields are read leniently: a numeric
/// `code` is kept as its text.
#[derive(Debug, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransportError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errno: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syscall: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl TransportError {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            code: text(obj.get("code")),
            errno: obj.get("errno").and_then(Value::as_i64),
            syscall: text(obj.get("syscall")),
            message: text(obj.get("message")),
            stack: text(obj.get("stack")),
        }
    }
}

#[derive(Debug, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub error: ApiErrorBody,
}

impl ApiError {
    /// `error` may be the usual object body or a bare code string
    /// (`{"error": "invalid_grant", "error_description": "..."}`).
    fn from_object(obj: &Map<String, Value>) -> Self {
        let mut body = match obj.get("error") {
            Some(Value::Object(inner)) => ApiErrorBody::from_object(inner),
            other => ApiErrorBody {
                code: text(other),
                ..ApiErrorBody::default()
            },
        };
        if body.error_description.is_none() {
            body.error_description = text(obj.get("error_description"));
        }
        Self { error: body }
    }
}

#[derive(Debug, Serialize, Clone, Default)]
pub struct ApiErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

impl ApiErrorBody {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            code: text(obj.get("code")),
            message: text(obj.get("message")),
            status: text(obj.get("status")),
            error_description: text(obj.get("error_description")),
        }
    }
}

/// Strings and numbers as text; anything else (including empty strings) is absent.
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

const TRANSPORT_KEYS: [&str; 4] = ["code", "errno", "syscall", "message"];

impl<'de> Deserialize<'de> for TableData {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let Some(obj) = value.as_object() else {
            return Err(D::Error::custom("table data must be a JSON object"));
        };

        // Error shapes never fail to decode; only grid data is strictly typed
        if obj.contains_key("error") {
            return Ok(TableData::ApiError(ApiError::from_object(obj)));
        }
        if !obj.contains_key("sheets") && TRANSPORT_KEYS.iter().any(|k| obj.contains_key(*k)) {
            return Ok(TableData::TransportError(TransportError::from_object(obj)));
        }
        Spreadsheet::deserialize(value)
            .map(TableData::Ok)
            .map_err(D::Error::custom)
    }
}

impl TableData {
    /// Parse a JSON payload.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Collapse both error shapes into a single [`GridError::Input`].
    pub fn into_spreadsheet(self) -> Result<Spreadsheet> {
        match self {
            TableData::Ok(sheet) => Ok(sheet),
            other => Err(GridError::Input {
                message: other.error_message().unwrap_or_default(),
            }),
        }
    }

    /// Borrowing variant of [`TableData::into_spreadsheet`].
    pub fn spreadsheet(&self) -> Result<&Spreadsheet> {
        match self {
            TableData::Ok(sheet) => Ok(sheet),
            other => Err(GridError::Input {
                message: other.error_message().unwrap_or_default(),
            }),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, TableData::Ok(_))
    }

    /// Human-readable message for either error shape; `None` for grid data.
    pub fn error_message(&self) -> Option<String> {
        let message = match self {
            TableData::Ok(_) => return None,
            TableData::TransportError(e) => e
                .message
                .clone()
                .or_else(|| e.code.clone())
                .or_else(|| e.syscall.clone()),
            TableData::ApiError(ApiError { error }) => error
                .message
                .clone()
                .or_else(|| error.status.clone())
                .or_else(|| error.error_description.clone())
                .or_else(|| error.code.clone()),
        };
        Some(message.unwrap_or_else(|| "unknown error".to_string()))
    }
}

impl From<Spreadsheet> for TableData {
    fn from(sheet: Spreadsheet) -> Self {
        TableData::Ok(sheet)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_shape() {
        let data = TableData::from_json(
            r#"{"error":{"code":403,"message":"The caller does not have permission","status":"PERMISSION_DENIED"}}"#,
        )
        .unwrap();
        assert!(data.is_error());
        let err = data.into_spreadsheet().unwrap_err();
        assert_eq!(err.message(), "The caller does not have permission");
    }

    #[test]
    fn test_transport_error_shape() {
        let data = TableData::from_json(
            r#"{"code":"ECONNREFUSED","errno":-111,"syscall":"connect"}"#,
        )
        .unwrap();
        assert!(matches!(data, TableData::TransportError(_)));
        assert_eq!(data.error_message().as_deref(), Some("ECONNREFUSED"));
    }

    #[test]
    fn test_error_without_details() {
        let data = TableData::from_json(r#"{"error":{}}"#).unwrap();
        assert_eq!(data.error_message().as_deref(), Some("unknown error"));
    }

    #[test]
    fn test_error_fields_read_leniently() {
        let data = TableData::from_json(r#"{"error":{"code":"403","status":7}}"#).unwrap();
        assert_eq!(data.error_message().as_deref(), Some("7"));

        let data = TableData::from_json(r#"{"error":null}"#).unwrap();
        assert_eq!(data.error_message().as_deref(), Some("unknown error"));

        let data = TableData::from_json(r#"{"code":-3008,"message":["x"]}"#).unwrap();
        assert_eq!(data.error_message().as_deref(), Some("-3008"));
    }

    #[test]
    fn test_spreadsheet_shape() {
        let data = TableData::from_json(r#"{"sheets":[]}"#).unwrap();
        assert!(!data.is_error());
        assert!(data.spreadsheet().unwrap().rows().is_empty());
    }

    #[test]
    fn test_empty_object_is_empty_spreadsheet() {
        let data = TableData::from_json("{}").unwrap();
        assert!(matches!(data, TableData::Ok(_)));
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(matches!(
            TableData::from_json("[1,2]"),
            Err(GridError::Json(_))
        ));
    }
}
