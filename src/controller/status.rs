use axum::http::StatusCode;

/// Check the status of the service
///
/// If the service is running, returns a 204.
#[utoipa::path(
    operation_id = "status",
    head,
    path = "/status",
    responses(
        (status = 204, description = "The service is healthy."),
    )
)]
pub(crate) async fn handler() -> StatusCode {
    metrics::counter!("status_check").increment(1);
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn status_head_success() {
        let app = crate::service::server::tests::app(Default::default());
        let res = app
            .oneshot(
                Request::builder()
                    .method(Method::HEAD)
                    .uri("/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }
}
