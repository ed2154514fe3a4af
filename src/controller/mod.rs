pub(crate) mod metrics;
pub(crate) mod status;
pub(crate) mod templates;

use axum::routing::{get, head, Router};

pub(crate) fn create() -> Router {
    Router::new()
        .route("/status", head(status::handler))
        .route("/metrics", get(metrics::handler))
        .route("/api/provisioning/templates", get(templates::list::handler))
        .route(
            "/api/provisioning/templates/{name}",
            get(templates::get::handler)
                .put(templates::put::handler)
                .delete(templates::delete::handler),
        )
        .merge(crate::service::openapi::service())
}
