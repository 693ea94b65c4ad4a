use poem::{web::Json, Error, IntoResponse, Response};
use serde_json::json;

/// Rewrite framework errors into the `{success: false, error}` envelope
///
/// Covers what never reaches a handler: unmatched routes, unsupported
/// methods and request payloads that fail to decode. Errors that already
/// carry a response (the endpoints' own `ApiError`s) pass through unchanged.
pub async fn envelope_errors(err: Error) -> Response {
    if err.is_from_response() {
        return err.into_response();
    }

    let status = err.status();
    let message = if status.is_server_error() {
        tracing::error!("Unhandled error: {}", err);
        "Internal server error".to_string()
    } else {
        tracing::debug!("Request rejected with {}: {}", status, err);
        err.to_string()
    };

    Json(json!({ "success": false, "error": message }))
        .with_status(status)
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::http::StatusCode;

    #[tokio::test]
    async fn test_status_is_preserved() {
        let resp = envelope_errors(Error::from_status(StatusCode::NOT_FOUND)).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_body_is_failure_envelope() {
        let resp = envelope_errors(Error::from_string("broken body", StatusCode::BAD_REQUEST)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = resp.into_body().into_string().await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "broken body");
        assert!(value.get("data").is_none());
    }

    #[tokio::test]
    async fn test_server_errors_hide_details() {
        let resp = envelope_errors(Error::from_string(
            "disk full at /var/lib",
            StatusCode::INTERNAL_SERVER_ERROR,
        ))
        .await;

        let body = resp.into_body().into_string().await.unwrap();
        assert!(!body.contains("/var/lib"));
    }

    #[tokio::test]
    async fn test_existing_responses_pass_through() {
        let original = Response::builder()
            .status(StatusCode::CONFLICT)
            .body("keep me");
        let resp = envelope_errors(Error::from_response(original)).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(resp.into_body().into_string().await.unwrap(), "keep me");
    }
}
