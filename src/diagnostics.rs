//! Structured diagnostics for render failures.
//!
//! The error boundary is the only producer. Reports go to the browser console
//! here; a production deployment forwards them to a monitoring service.

use serde::Serialize;
use wasm_bindgen::JsValue;

/// Human-shareable failure id: `ERR_<timestamp>_<9 base36 chars>`.
pub fn new_error_id() -> String {
    error_id_from(js_sys::Date::now(), js_sys::Math::random())
}

pub(crate) fn error_id_from(now_ms: f64, seed: f64) -> String {
    format!("ERR_{}_{}", now_ms as u64, base36_fraction(seed, 9))
}

/// Base36 digits of the fractional part of `x`, like the tail of
/// `Math.random().toString(36)`.
fn base36_fraction(x: f64, len: usize) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut frac = x - x.floor();
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        frac *= 36.0;
        let digit = (frac.floor() as usize).min(35);
        out.push(DIGITS[digit] as char);
        frac -= frac.floor();
    }
    out
}

/// Display classification of a caught failure, by message substring.
/// The heuristic is intentionally kept as-is: no upstream error taxonomy
/// exists, so the exact substrings are part of the observable behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Load,
    Generic,
}

impl FailureKind {
    pub fn classify(message: &str) -> Self {
        if message.contains("fetch") || message.contains("network") {
            FailureKind::Network
        } else if message.contains("Loading chunk") {
            FailureKind::Load
        } else {
            FailureKind::Generic
        }
    }

    /// User-facing guidance text, one of three mutually exclusive messages.
    pub fn guidance(self) -> &'static str {
        match self {
            FailureKind::Network => {
                "We're having trouble connecting to our servers. \
                 Please check your internet connection and try again."
            }
            FailureKind::Load => {
                "There was an issue loading part of the application. \
                 This usually fixes itself with a refresh."
            }
            FailureKind::Generic => {
                "An unexpected error occurred while loading the page. \
                 Our team has been notified and will investigate."
            }
        }
    }
}

/// The one wire-shaped payload in the system.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub error_id: String,
    pub message: String,
    pub stack: Option<String>,
    pub component_stack: Option<String>,
    pub timestamp: String,
    pub user_agent: String,
    pub url: String,
    pub retry_count: u32,
}

impl ErrorReport {
    /// Fills the environment fields from the live page.
    pub fn from_failure(error_id: &str, message: &str, retry_count: u32) -> Self {
        let window = web_sys::window();
        let user_agent = window
            .as_ref()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default();
        let url = window
            .as_ref()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        Self {
            error_id: error_id.to_owned(),
            message: message.to_owned(),
            stack: None,
            component_stack: None,
            timestamp: js_sys::Date::new_0()
                .to_iso_string()
                .as_string()
                .unwrap_or_default(),
            user_agent,
            url,
            retry_count,
        }
    }

    /// Readable serialization for the copy-to-clipboard action.
    pub fn to_clipboard_text(&self) -> String {
        format!(
            "Error ID: {}\nError: {}\nURL: {}\nTimestamp: {}\nUser Agent: {}\nRetry Count: {}",
            self.error_id, self.message, self.url, self.timestamp, self.user_agent, self.retry_count
        )
    }
}

/// Emits the report to the diagnostic sink. Fire-and-forget: serialization
/// failures end up on the console too and are never surfaced to the user.
pub fn capture(report: &ErrorReport) {
    match serde_json::to_string(report) {
        Ok(json) => web_sys::console::error_2(
            &JsValue::from_str("boundary caught a render failure:"),
            &JsValue::from_str(&json),
        ),
        Err(err) => web_sys::console::error_1(&JsValue::from_str(&format!(
            "failed to serialize error report: {err}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn error_id_has_timestamp_and_suffix() {
        let id = error_id_from(1_700_000_000_000.0, 0.5);
        assert!(id.starts_with("ERR_1700000000000_"));
        let suffix = id.rsplit('_').next().unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn error_ids_unique_across_thousand_failures() {
        // Same timestamp, distinct random seeds: the suffix alone must
        // disambiguate concurrent failures.
        let mut seen = HashSet::new();
        for n in 0..1000u32 {
            let seed = f64::from(n) / 1000.0 + 0.000_123;
            let id = error_id_from(1_700_000_000_000.0, seed);
            assert!(seen.insert(id), "collision at seed index {n}");
        }
    }

    #[test]
    fn classification_matches_known_substrings() {
        assert_eq!(
            FailureKind::classify("Failed to fetch dynamically imported module"),
            FailureKind::Network
        );
        assert_eq!(
            FailureKind::classify("a network error occurred"),
            FailureKind::Network
        );
        assert_eq!(
            FailureKind::classify("Loading chunk 42 failed"),
            FailureKind::Load
        );
        assert_eq!(
            FailureKind::classify("index out of bounds"),
            FailureKind::Generic
        );
    }

    #[test]
    fn network_wins_over_chunk_when_both_match() {
        // The network check runs first, so it wins when both substrings appear.
        assert_eq!(
            FailureKind::classify("network: Loading chunk 3 failed"),
            FailureKind::Network
        );
    }

    #[test]
    fn guidance_texts_are_distinct() {
        let texts = [
            FailureKind::Network.guidance(),
            FailureKind::Load.guidance(),
            FailureKind::Generic.guidance(),
        ];
        assert_eq!(
            texts.iter().collect::<HashSet<_>>().len(),
            3,
            "guidance messages must be mutually exclusive"
        );
    }

    #[test]
    fn report_serializes_with_expected_keys() {
        let report = ErrorReport {
            error_id: "ERR_1_abc".into(),
            message: "boom".into(),
            stack: None,
            component_stack: None,
            timestamp: "2025-01-01T00:00:00.000Z".into(),
            user_agent: "test".into(),
            url: "https://rnm-server.com/".into(),
            retry_count: 2,
        };
        let json = serde_json::to_string(&report).unwrap();
        for key in [
            "errorId",
            "message",
            "stack",
            "componentStack",
            "timestamp",
            "userAgent",
            "url",
            "retryCount",
        ] {
            assert!(json.contains(key), "missing key {key} in {json}");
        }
    }

    #[test]
    fn clipboard_text_carries_the_id() {
        let report = ErrorReport {
            error_id: "ERR_1_abc".into(),
            message: "boom".into(),
            stack: None,
            component_stack: None,
            timestamp: "t".into(),
            user_agent: "ua".into(),
            url: "u".into(),
            retry_count: 0,
        };
        let text = report.to_clipboard_text();
        assert!(text.contains("Error ID: ERR_1_abc"));
        assert!(text.contains("Error: boom"));
    }
}
