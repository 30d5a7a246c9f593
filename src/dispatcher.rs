/*---------- Imports ----------*/
use crate::models::{message::MessageResponse, request::RequestKind};
use crate::utils::{body::parse_body, http::HttpResponse};
use lambda_http::http::{Error as HttpError, StatusCode};
use lambda_http::{Body, Request, Response};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Turns one invocation into its response. Holds no state, so the same
/// request always produces the same response.
pub fn handle(request: &Request) -> Result<Response<Body>, HttpError> {
    let method = request.method();
    let kind = RequestKind::from_method(method);
    info!(%kind, "dispatching request");

    let response = match kind {
        RequestKind::Preflight => HttpResponse::build_preflight_response()?,

        RequestKind::Create => match parse_body::<Value>(request.body()) {
            Ok(payload) => {
                // message processing is not implemented, the payload is only validated
                debug!(%payload, "request body accepted");

                HttpResponse::build_json_response(StatusCode::OK, &MessageResponse::success())?
            }

            Err(error) => {
                warn!(%method, %error, "malformed request body");

                HttpResponse::build_json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &MessageResponse::error(error.to_string()),
                )?
            }
        },

        RequestKind::Unsupported => {
            warn!(%method, "method not allowed");

            HttpResponse::build_json_response(
                StatusCode::METHOD_NOT_ALLOWED,
                &MessageResponse::method_not_allowed(),
            )?
        }
    };

    info!(status = response.status().as_u16(), "response ready");

    Ok(response)
}
