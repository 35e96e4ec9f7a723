use thiserror::Error;

const RAW_BODY_PREVIEW: usize = 100;

/// Failure of a single call against the finance API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("{message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(_) => None,
        }
    }
}

/// Message shown to the user when the API rejects a request.
///
/// JSON bodies surface their `detail` field when present. Anything else is
/// reported with the status and the start of the raw body.
pub fn describe_failure(status: u16, content_type: Option<&str>, body: &str) -> String {
    let is_json = content_type
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);

    if is_json {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            let shown = match value.get("detail") {
                Some(detail) if !is_falsy(detail) => detail,
                _ => &value,
            };
            return match shown {
                serde_json::Value::String(text) => text.clone(),
                other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
            };
        }
    }

    let preview: String = body.chars().take(RAW_BODY_PREVIEW).collect();
    format!("Server Error ({}): {}...", status, preview)
}

fn is_falsy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_detail_string_is_used_verbatim() {
        let msg = describe_failure(
            400,
            Some("application/json"),
            r#"{"detail": "Category already has a budget. Use Update."}"#,
        );
        assert_eq!(msg, "Category already has a budget. Use Update.");
    }

    #[test]
    fn structured_detail_is_pretty_printed() {
        let msg = describe_failure(
            422,
            Some("application/json; charset=utf-8"),
            r#"{"detail": [{"loc": ["body", "amount"], "msg": "field required"}]}"#,
        );
        assert!(msg.starts_with('['));
        assert!(msg.contains("\"msg\": \"field required\""));
    }

    #[test]
    fn json_without_detail_falls_back_to_whole_body() {
        let msg = describe_failure(500, Some("application/json"), r#"{"error": "boom"}"#);
        assert!(msg.contains("\"error\": \"boom\""));
    }

    #[test]
    fn raw_bodies_are_truncated() {
        let body = "x".repeat(250);
        let msg = describe_failure(502, Some("text/html"), &body);
        assert_eq!(msg, format!("Server Error (502): {}...", "x".repeat(100)));
    }

    #[test]
    fn missing_content_type_is_treated_as_raw() {
        let msg = describe_failure(500, None, "Internal Server Error");
        assert_eq!(msg, "Server Error (500): Internal Server Error...");
    }

    #[test]
    fn status_errors_expose_their_code() {
        let err = ApiError::Status {
            status: 404,
            message: "Transaction not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Transaction not found");
    }
}
