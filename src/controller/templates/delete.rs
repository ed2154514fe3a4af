use crate::error::ServerError;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use provisioning_engine::store::Store;

/// Delete a message template
#[utoipa::path(
    operation_id = "delete_template",
    delete,
    path = "/api/provisioning/templates/{name}",
    tag = "provisioning",
    params(
        ("name" = String, Path, description = "Name of the template.")
    ),
    responses(
        (status = 204, description = "The template has been deleted."),
        (status = 404, description = "No template with this name.", body = ServerError),
    )
)]
pub(crate) async fn handler(
    Extension(store): Extension<Store>,
    Path(name): Path<String>,
) -> Result<StatusCode, ServerError> {
    metrics::counter!("template_delete").increment(1);
    store.delete(&name).await?;
    tracing::info!(resource_type = "template", resource_id = %name, "template deleted");
    Ok(StatusCode::NO_CONTENT)
}
