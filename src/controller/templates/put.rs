use crate::error::ServerError;
use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use provisioning_engine::resource::{provision, Provisionable};
use provisioning_engine::store::Store;
use provisioning_prelude::{MessageTemplate, MessageTemplateContent, MessageTemplatePayload};

/// Create or update a message template
///
/// A template without any `define` block gets wrapped in one named after the template.
#[utoipa::path(
    operation_id = "put_template",
    put,
    path = "/api/provisioning/templates/{name}",
    tag = "provisioning",
    params(
        ("name" = String, Path, description = "Name of the template.")
    ),
    request_body(content = MessageTemplateContent, content_type = "application/json"),
    responses(
        (status = 202, description = "The template has been stored.", body = MessageTemplate),
        (status = 400, description = "The template is invalid.", body = ServerError),
        (status = 500, description = "The template couldn't be checked or stored.", body = ServerError),
    )
)]
pub(crate) async fn handler(
    Extension(store): Extension<Store>,
    Path(name): Path<String>,
    Json(payload): Json<MessageTemplatePayload>,
) -> Result<(StatusCode, Json<MessageTemplate>), ServerError> {
    metrics::counter!("template_put").increment(1);
    let template = provision(MessageTemplate::from_content(name, payload.into()))?;
    store.save(template.clone()).await?;
    tracing::info!(
        resource_type = template.resource_type(),
        resource_id = template.resource_id(),
        "template provisioned"
    );
    Ok((StatusCode::ACCEPTED, Json(template)))
}
