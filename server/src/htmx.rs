//! htmx request/response conventions.
//!
//! A request carrying `HX-Request: true` asks for a fragment; fragment
//! responses name an out-of-band event in `HX-Trigger` so other regions of
//! the page can refresh themselves.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, HeaderName, HeaderValue},
    response::Response,
};
use todomvc_core::{RequestMode, Trigger};

pub const HX_REQUEST: HeaderName = HeaderName::from_static("hx-request");
pub const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");

/// Extracts the `RequestMode` from the `HX-Request` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode(pub RequestMode);

impl<S> FromRequestParts<S> for Mode
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Mode(request_mode(&parts.headers)))
    }
}

pub fn request_mode(headers: &HeaderMap) -> RequestMode {
    match headers.get(HX_REQUEST) {
        Some(value) if value.as_bytes().eq_ignore_ascii_case(b"true") => RequestMode::Fragment,
        _ => RequestMode::FullPage,
    }
}

/// Attach `trigger` as the response's `HX-Trigger` header.
pub fn set_trigger(response: &mut Response, trigger: Trigger) {
    response
        .headers_mut()
        .insert(HX_TRIGGER, HeaderValue::from_static(trigger.as_str()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_selects_fragment_mode() {
        let mut headers = HeaderMap::new();
        assert_eq!(request_mode(&headers), RequestMode::FullPage);

        headers.insert(HX_REQUEST, HeaderValue::from_static("true"));
        assert_eq!(request_mode(&headers), RequestMode::Fragment);

        headers.insert(HX_REQUEST, HeaderValue::from_static("TRUE"));
        assert_eq!(request_mode(&headers), RequestMode::Fragment);
    }

    #[test]
    fn other_header_values_stay_full_page() {
        let mut headers = HeaderMap::new();
        headers.insert(HX_REQUEST, HeaderValue::from_static("false"));
        assert_eq!(request_mode(&headers), RequestMode::FullPage);
    }

    #[test]
    fn trigger_header_is_set() {
        let mut response = Response::new(axum::body::Body::empty());
        set_trigger(&mut response, Trigger::ItemDeleted);
        assert_eq!(response.headers()[HX_TRIGGER], "itemDeleted");
    }
}
