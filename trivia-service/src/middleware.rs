//! Request tracking middleware
//!
//! Every request gets an `x-request-id` (UUIDv7, so ids sort by arrival time)
//! unless the caller already sent one, and the id is echoed on the response.

use http::{HeaderName, HeaderValue, Request};
use tower_http::{
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    sensitive_headers::SetSensitiveRequestHeadersLayer,
};
use uuid::Uuid;

/// Sensitive headers that should be masked in logs
pub const SENSITIVE_HEADERS: &[&str] = &["authorization", "cookie", "set-cookie", "x-api-key"];

/// Generates time-ordered request ids
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Create a request ID layer
pub fn request_id_layer() -> SetRequestIdLayer<MakeUuidRequestId> {
    SetRequestIdLayer::x_request_id(MakeUuidRequestId)
}

/// Create a request ID propagation layer
pub fn request_id_propagation_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// Create a sensitive headers layer
pub fn sensitive_headers_layer() -> SetSensitiveRequestHeadersLayer {
    SetSensitiveRequestHeadersLayer::new(SENSITIVE_HEADERS.iter().copied().map(HeaderName::from_static))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header;

    #[test]
    fn test_request_ids_are_uuid_v7() {
        let request = Request::new(());
        let mut make = MakeUuidRequestId;

        let first = make.make_request_id(&request).unwrap();
        let second = make.make_request_id(&request).unwrap();

        let first = Uuid::parse_str(first.header_value().to_str().unwrap()).unwrap();
        let second = Uuid::parse_str(second.header_value().to_str().unwrap()).unwrap();
        assert_eq!(first.get_version_num(), 7);
        assert_ne!(first, second);
    }

    #[test]
    fn test_sensitive_headers_are_valid_names() {
        for name in SENSITIVE_HEADERS {
            assert_eq!(HeaderName::from_static(name).as_str(), *name);
        }
        assert!(SENSITIVE_HEADERS.contains(&header::AUTHORIZATION.as_str()));
    }
}
