//! Response classification shared by every Studio mode.
//!
//! Order: status first; failed JSON responses surface their `error` or
//! `message`; successful binary media is kept; anything else is an
//! "unexpected response" carrying a bounded excerpt of the body.
use axum::body::Bytes;
use serde_json::Value;

use crate::studio::transport::TransportResponse;
use crate::studio::Mode;
use crate::utils::text::{excerpt, UNEXPECTED_EXCERPT_CHARS};

#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    Media { bytes: Bytes, media_type: String },
    Failure(String),
}

pub fn classify(mode: Mode, response: &TransportResponse) -> Classified {
    let content_type = response.content_type.as_deref().unwrap_or("").trim();
    let ct = content_type.to_ascii_lowercase();
    let generic = || format!("{} failed ({})", mode.verb(), response.status);

    if !response.is_ok() {
        if ct.contains("application/json") {
            let message = serde_json::from_slice::<Value>(&response.body)
                .ok()
                .and_then(|v| error_message(&v))
                .unwrap_or_else(generic);
            return Classified::Failure(message);
        }
        return Classified::Failure(generic());
    }

    let typed_media = ct.starts_with("image/") || ct.starts_with("video/");
    if typed_media || ct.contains("octet-stream") {
        let media_type = if typed_media {
            content_type.to_string()
        } else {
            mode.fallback_media_type().to_string()
        };
        return Classified::Media { bytes: response.body.clone(), media_type };
    }

    let shown = if content_type.is_empty() { "no content-type" } else { content_type };
    Classified::Failure(format!(
        "Unexpected response ({}): {}",
        shown,
        excerpt(&response.body, UNEXPECTED_EXCERPT_CHARS)
    ))
}

fn error_message(v: &Value) -> Option<String> {
    ["error", "message"]
        .iter()
        .filter_map(|key| v.get(*key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, content_type: Option<&str>, body: &'static [u8]) -> TransportResponse {
        TransportResponse {
            status,
            content_type: content_type.map(str::to_string),
            body: Bytes::from_static(body),
        }
    }

    #[test]
    fn json_error_field_is_surfaced() {
        let r = response(400, Some("application/json"), br#"{"ok":false,"error":"Prompt is required"}"#);
        assert_eq!(classify(Mode::Image, &r), Classified::Failure("Prompt is required".into()));
    }

    #[test]
    fn json_message_field_is_the_fallback() {
        let r = response(502, Some("application/json; charset=utf-8"), br#"{"message":"bad gateway"}"#);
        assert_eq!(classify(Mode::Video, &r), Classified::Failure("bad gateway".into()));
    }

    #[test]
    fn unreadable_json_error_uses_generic_message() {
        let r = response(500, Some("application/json"), b"{oops");
        assert_eq!(classify(Mode::Remix, &r), Classified::Failure("Remix failed (500)".into()));
        let r = response(500, Some("application/json"), br#"{"detail":"x"}"#);
        assert_eq!(classify(Mode::Image, &r), Classified::Failure("Generate failed (500)".into()));
    }

    #[test]
    fn non_json_error_uses_generic_message() {
        let r = response(503, Some("text/html"), b"<html>down</html>");
        assert_eq!(classify(Mode::Image, &r), Classified::Failure("Generate failed (503)".into()));
        let r = response(404, None, b"");
        assert_eq!(classify(Mode::Video, &r), Classified::Failure("Generate failed (404)".into()));
    }

    #[test]
    fn typed_media_keeps_its_type() {
        let r = response(200, Some("image/webp"), b"RIFF");
        assert_eq!(
            classify(Mode::Image, &r),
            Classified::Media { bytes: Bytes::from_static(b"RIFF"), media_type: "image/webp".into() }
        );
        let r = response(200, Some("video/mp4"), b"ftyp");
        assert!(matches!(classify(Mode::Video, &r), Classified::Media { media_type, .. } if media_type == "video/mp4"));
    }

    #[test]
    fn octet_stream_gets_mode_fallback_type() {
        let r = response(200, Some("application/octet-stream"), b"\x00");
        assert!(matches!(classify(Mode::Remix, &r), Classified::Media { media_type, .. } if media_type == "image/png"));
        assert!(matches!(classify(Mode::Video, &r), Classified::Media { media_type, .. } if media_type == "video/mp4"));
    }

    #[test]
    fn unexpected_success_body_is_excerpted() {
        let r = TransportResponse {
            status: 200,
            content_type: Some("text/plain".into()),
            body: Bytes::from("x".repeat(500)),
        };
        match classify(Mode::Image, &r) {
            Classified::Failure(msg) => {
                assert!(msg.starts_with("Unexpected response (text/plain): "));
                assert_eq!(msg.len(), "Unexpected response (text/plain): ".len() + 160);
            }
            other => panic!("unexpected {other:?}"),
        }
        let r = response(200, None, b"hello");
        assert_eq!(
            classify(Mode::Image, &r),
            Classified::Failure("Unexpected response (no content-type): hello".into())
        );
    }

    #[test]
    fn successful_json_is_unexpected() {
        let r = response(200, Some("application/json"), br#"{"ok":true}"#);
        assert!(matches!(classify(Mode::Image, &r), Classified::Failure(m) if m.starts_with("Unexpected response (application/json)")));
    }
}
