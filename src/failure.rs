use serde::Deserialize;

/// Outcome of inspecting a failed generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Quota or rate limit exhausted. Recovered by switching to demo mode.
    QuotaExceeded,
    /// Anything else, surfaced to the user with this notice.
    Generation(String),
}

pub const GENERIC_FAILURE_NOTICE: &str = "An unexpected error occurred.";

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    status: Option<String>,
}

fn mentions_quota(message: &str) -> bool {
    let lower = message.to_lowercase();
    ["quota", "resource_exhausted", "resource exhausted", "429"]
        .iter()
        .any(|needle| lower.contains(needle))
}

fn structured_quota(message: &str) -> bool {
    let trimmed = message.trim_start();
    if !trimmed.starts_with('{') {
        return false;
    }
    let Ok(ErrorEnvelope { error: Some(body) }) = serde_json::from_str::<ErrorEnvelope>(trimmed) else {
        return false;
    };
    body.status.as_deref() == Some("RESOURCE_EXHAUSTED")
        || body.code.as_ref().and_then(serde_json::Value::as_i64) == Some(429)
}

/// Classifies an error message from the image service.
///
/// Free-text indicators are checked first, then the message is parsed as a
/// `{"error": {"code", "status"}}` payload.
pub fn classify_failure(message: &str) -> FailureKind {
    if mentions_quota(message) || structured_quota(message) {
        return FailureKind::QuotaExceeded;
    }
    let notice = message.trim();
    if notice.is_empty() {
        FailureKind::Generation(GENERIC_FAILURE_NOTICE.to_string())
    } else {
        FailureKind::Generation(notice.to_string())
    }
}
