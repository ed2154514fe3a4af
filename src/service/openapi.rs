use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::controller::metrics::handler,
        crate::controller::status::handler,
        crate::controller::templates::list::handler,
        crate::controller::templates::get::handler,
        crate::controller::templates::put::handler,
        crate::controller::templates::delete::handler,
    ),
    components(schemas(
        crate::error::ServerError,
        provisioning_prelude::MessageTemplate,
        provisioning_prelude::MessageTemplateContent,
    )),
    tags(
        (name = "provisioning", description = "Provisioning of alerting message templates.")
    )
)]
pub struct ApiDoc;

pub(crate) fn service() -> SwaggerUi {
    SwaggerUi::new("/swagger").url("/openapi.json", ApiDoc::openapi())
}
