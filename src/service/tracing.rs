use tower_http::trace::MakeSpan;
use tracing::{Level, Span};

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Configuration {
    /// Header carrying the request id set by an upstream proxy.
    pub header: Option<String>,
}

impl Configuration {
    pub fn add_layer(&self, router: axum::Router) -> axum::Router {
        if let Some(ref header) = self.header {
            router.layer(
                tower_http::trace::TraceLayer::new_for_http()
                    .make_span_with(WithRequestIdMakeSpan::new(header.clone())),
            )
        } else {
            router.layer(tower_http::trace::TraceLayer::new_for_http())
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct WithRequestIdMakeSpan {
    header: String,
}

impl WithRequestIdMakeSpan {
    pub fn new(header: String) -> Self {
        Self { header }
    }

    fn request_id<'r, B>(&self, request: &'r axum::http::Request<B>) -> &'r str {
        request
            .headers()
            .get(&self.header)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }
}

impl<B> MakeSpan<B> for WithRequestIdMakeSpan {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        tracing::span!(
            Level::DEBUG,
            "request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
            request_id = %self.request_id(request),
        )
    }
}
