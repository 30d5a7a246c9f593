/*---------- Imports ----------*/
use crate::models::message::MessageResponse;
use lambda_http::http::{
    header::{
        ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
        CONTENT_TYPE,
    },
    response::Builder,
    Error as HttpError, StatusCode,
};
use lambda_http::{Body, Response};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Content-Type";
pub const ALLOW_METHODS: &str = "POST, OPTIONS";
pub const JSON_CONTENT_TYPE: &str = "application/json";

pub struct HttpResponse;

impl HttpResponse {
    /// Empty 200 for CORS preflight. Carries only the CORS headers.
    pub fn build_preflight_response() -> Result<Response<Body>, HttpError> {
        Self::cors_builder(StatusCode::OK).body(Body::Empty)
    }

    pub fn build_json_response(
        status: StatusCode,
        payload: &MessageResponse,
    ) -> Result<Response<Body>, HttpError> {
        // fields are plain strings and an enum, serialization can't fail
        let body = serde_json::to_string(payload).unwrap_or_default();

        Self::cors_builder(status)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(Body::Text(body))
    }

    fn cors_builder(status: StatusCode) -> Builder {
        Response::builder()
            .status(status)
            .header(ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN)
            .header(ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS)
            .header(ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preflight_has_no_content_type_or_body() {
        let response = HttpResponse::build_preflight_response().unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(CONTENT_TYPE).is_none());
        assert_eq!(response.headers().len(), 3);
        assert!(matches!(response.body(), Body::Empty));
    }

    #[test]
    fn json_response_carries_cors_and_content_type() {
        let response = HttpResponse::build_json_response(
            StatusCode::METHOD_NOT_ALLOWED,
            &MessageResponse::method_not_allowed(),
        )
        .unwrap();
        let headers = response.headers();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers.len(), 4);
    }
}
