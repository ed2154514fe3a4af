use crate::error::ServerError;
use axum::extract::{Extension, Json};
use provisioning_engine::store::Store;
use provisioning_prelude::MessageTemplate;

/// Get all message templates
///
/// Returns every provisioned message template, ordered by name.
#[utoipa::path(
    operation_id = "get_templates",
    get,
    path = "/api/provisioning/templates",
    tag = "provisioning",
    responses(
        (status = 200, description = "The provisioned message templates.", body = Vec<MessageTemplate>),
        (status = 500, description = "The templates couldn't be loaded.", body = ServerError),
    )
)]
pub(crate) async fn handler(
    Extension(store): Extension<Store>,
) -> Result<Json<Vec<MessageTemplate>>, ServerError> {
    let list = store.list().await?;
    Ok(Json(list))
}
