//! Content negotiation between JSON and XML entity bodies.
//!
//! The service produces `application/json` and `application/xml`; the
//! first supported range in the `Accept` header wins, and JSON is the
//! fallback for an absent header, `*/*`, or no supported range.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Media types the service can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaType {
    #[default]
    Json,
    Xml,
}

impl MediaType {
    /// Pick the first supported media range in the `Accept` header, in
    /// header order.
    pub fn from_accept(accept: Option<&str>) -> Self {
        let Some(accept) = accept else {
            return MediaType::Json;
        };
        for range in accept.split(',') {
            // Strip q-values and other parameters; ordering in the header
            // already expresses the client's preference here.
            let essence = range.split(';').next().unwrap_or(range).trim();
            match essence {
                "application/json" | "text/json" | "application/*" | "*/*" => {
                    return MediaType::Json;
                }
                "application/xml" | "text/xml" => return MediaType::Xml,
                _ => {}
            }
        }
        MediaType::Json
    }

    fn content_type(self) -> HeaderValue {
        match self {
            MediaType::Json => HeaderValue::from_static("application/json"),
            MediaType::Xml => HeaderValue::from_static("application/xml"),
        }
    }
}

impl<S> FromRequestParts<S> for MediaType
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let accept = parts
            .headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok());
        Ok(MediaType::from_accept(accept))
    }
}

/// A response entity serialized according to the negotiated media type.
pub struct Entity<T> {
    media: MediaType,
    value: T,
}

impl<T: Serialize> Entity<T> {
    pub fn new(media: MediaType, value: T) -> Self {
        Self { media, value }
    }
}

impl<T: Serialize> IntoResponse for Entity<T> {
    fn into_response(self) -> Response {
        let serialized = match self.media {
            MediaType::Json => serde_json::to_string(&self.value).map_err(|e| e.to_string()),
            MediaType::Xml => quick_xml::se::to_string(&self.value).map_err(|e| e.to_string()),
        };
        match serialized {
            Ok(body) => {
                ([(header::CONTENT_TYPE, self.media.content_type())], body).into_response()
            }
            // Unreachable for the fixed entities; kept so the responder is
            // total over any Serialize payload.
            Err(e) => {
                tracing::error!(error = %e, "Entity serialization failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
