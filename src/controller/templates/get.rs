use crate::error::ServerError;
use axum::extract::{Extension, Json, Path};
use provisioning_engine::store::Store;
use provisioning_prelude::MessageTemplate;

/// Get a message template
#[utoipa::path(
    operation_id = "get_template",
    get,
    path = "/api/provisioning/templates/{name}",
    tag = "provisioning",
    params(
        ("name" = String, Path, description = "Name of the template.")
    ),
    responses(
        (status = 200, description = "The message template.", body = MessageTemplate),
        (status = 404, description = "No template with this name.", body = ServerError),
    )
)]
pub(crate) async fn handler(
    Extension(store): Extension<Store>,
    Path(name): Path<String>,
) -> Result<Json<MessageTemplate>, ServerError> {
    let template = store.get(&name).await?;
    Ok(Json(template))
}

#[cfg(test)]
mod tests {
    use super::handler;
    use axum::extract::{Extension, Path};
    use axum::http::StatusCode;
    use provisioning_engine::store::Store;
    use provisioning_prelude::MessageTemplate;

    #[tokio::test]
    async fn should_find_template() {
        let store = Store::default();
        store
            .save(MessageTemplate::new("welcome", "body"))
            .await
            .unwrap();
        let result = handler(Extension(store), Path("welcome".into()))
            .await
            .unwrap();
        assert_eq!(result.0, MessageTemplate::new("welcome", "body"));
    }

    #[tokio::test]
    async fn should_fail_with_unknown_template() {
        let err = handler(Extension(Store::default()), Path("unknown".into()))
            .await
            .unwrap_err();
        assert_eq!(err.code(), StatusCode::NOT_FOUND);
    }
}
