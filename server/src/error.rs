use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

fn rejected(body_text: String) -> ErrorStatus {
    ErrorStatus(Report::new(KernelError::Validation).attach_printable(body_text))
}

/// A body axum could not decode is a validation failure like any other.
impl From<JsonRejection> for ErrorStatus {
    fn from(rejection: JsonRejection) -> Self {
        rejected(rejection.body_text())
    }
}

impl From<PathRejection> for ErrorStatus {
    fn from(rejection: PathRejection) -> Self {
        rejected(rejection.body_text())
    }
}

impl From<QueryRejection> for ErrorStatus {
    fn from(rejection: QueryRejection) -> Self {
        rejected(rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: &'static str,
    error: String,
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        let (status, message) = match self.0.current_context() {
            KernelError::Validation => (
                StatusCode::BAD_REQUEST,
                "Something is wrong with the request, check the fields and try again",
            ),
            KernelError::NotFound => (StatusCode::NOT_FOUND, "Could not find the requested item"),
            KernelError::Concurrency => (
                StatusCode::CONFLICT,
                "The shopping cart changed meanwhile, try again",
            ),
            KernelError::Timeout => (StatusCode::REQUEST_TIMEOUT, "The request timed out"),
            KernelError::Persistence => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not reach the bookstore database",
            ),
            KernelError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong"),
        };
        if status.is_server_error() {
            tracing::error!(error = ?self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }
        let body = ErrorResponse {
            message,
            error: format!("{:#}", self.0),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;
    use kernel::KernelError;

    use super::ErrorStatus;

    #[test]
    fn status_per_context() {
        let expected = [
            (KernelError::Validation, StatusCode::BAD_REQUEST),
            (KernelError::NotFound, StatusCode::NOT_FOUND),
            (KernelError::Concurrency, StatusCode::CONFLICT),
            (KernelError::Timeout, StatusCode::REQUEST_TIMEOUT),
            (KernelError::Persistence, StatusCode::INTERNAL_SERVER_ERROR),
            (KernelError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (context, status) in expected {
            let response = ErrorStatus::from(Report::new(context)).into_response();
            assert_eq!(response.status(), status, "{context:?}");
        }
    }

    #[tokio::test]
    async fn body_carries_message_and_detail() {
        let report = Report::new(KernelError::Validation).attach_printable("title is required");
        let response = ErrorStatus::from(report).into_response();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
        assert!(body["error"]
            .as_str()
            .is_some_and(|detail| detail.contains("title is required")));
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn malformed_path_and_query_answer_with_json() {
        use axum::body::Body;
        use axum::extract::rejection::{PathRejection, QueryRejection};
        use axum::extract::{Path, Query};
        use axum::http::Request;
        use axum::routing::{get, put};
        use axum::Router;
        use kernel::prelude::entity::SelectLimit;
        use serde::Deserialize;
        use tower::ServiceExt;
        use uuid::Uuid;

        #[derive(Deserialize)]
        struct Paging {
            #[allow(dead_code)]
            limit: SelectLimit,
        }

        let router: Router = Router::new()
            .route(
                "/cart/:id/add",
                put(|id: Result<Path<Uuid>, PathRejection>| async move {
                    let Path(id) = id.map_err(ErrorStatus::from)?;
                    Ok::<_, ErrorStatus>(id.to_string())
                }),
            )
            .route(
                "/books",
                get(|req: Result<Query<Paging>, QueryRejection>| async move {
                    req.map_err(ErrorStatus::from)?;
                    Ok::<_, ErrorStatus>("ok")
                }),
            );

        for request in [
            Request::put("/cart/not-a-uuid/add").body(Body::empty()).unwrap(),
            Request::get("/books?limit=many").body(Body::empty()).unwrap(),
        ] {
            let response = router.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response.headers()[axum::http::header::CONTENT_TYPE],
                "application/json"
            );
            let body = json_body(response).await;
            assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
            assert!(body["error"].as_str().is_some_and(|e| e.contains("Invalid input")));
        }
    }

    #[tokio::test]
    async fn not_found_message_fits_cart_items_and_books() {
        let report = Report::new(KernelError::NotFound).attach_printable("no cart item with id 42");
        let body = json_body(ErrorStatus::from(report).into_response()).await;
        assert_eq!(body["message"], "Could not find the requested item");
    }
}
