//! Error bodies returned by the API.

use serde::{Deserialize, Serialize};

/// `{"detail": ...}` error body.
///
/// `detail` is usually a string, but validation failures carry a list of
/// objects, so any JSON value is accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human readable detail: strings as-is, anything else as compact JSON.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Parse a raw response body, if it is an error body at all.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let body = ErrorBody::parse(r#"{"detail":"Agent unreachable"}"#).unwrap();
        assert_eq!(body.detail_text().as_deref(), Some("Agent unreachable"));
    }

    #[test]
    fn test_list_detail_is_json() {
        let body =
            ErrorBody::parse(r#"{"detail":[{"loc":["body","liked"],"msg":"field required"}]}"#)
                .unwrap();
        let text = body.detail_text().unwrap();
        assert!(text.starts_with('['));
        assert!(text.contains("field required"));
    }

    #[test]
    fn test_missing_detail() {
        assert_eq!(ErrorBody::parse("{}").unwrap().detail_text(), None);
        assert!(ErrorBody::parse("<html>502</html>").is_none());
    }
}
