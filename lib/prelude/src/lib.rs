/// A provisioned message template, as listed, fetched and echoed by the API.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct MessageTemplate {
    /// Unique name of the template.
    pub name: String,
    /// Template source, wrapped in a named definition once validated.
    #[cfg_attr(
        feature = "openapi",
        schema(example = "{{ define \"welcome\" }}\n  Hello {{ .Alert }}\n{{ end }}")
    )]
    pub template: String,
}

impl MessageTemplate {
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }

    /// Builds the resource from the body of a put request, the name coming from the route.
    pub fn from_content(name: impl Into<String>, content: MessageTemplateContent) -> Self {
        Self {
            name: name.into(),
            template: content.template,
        }
    }
}

/// Body of a put request. The name is carried by the route.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct MessageTemplateContent {
    /// Missing content is left to validation, which rejects it.
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "Hello {{ .Alert }}"))]
    pub template: String,
}

/// Transport envelope binding a request body to [`MessageTemplateContent`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct MessageTemplatePayload {
    pub body: MessageTemplateContent,
}

impl From<MessageTemplatePayload> for MessageTemplateContent {
    fn from(value: MessageTemplatePayload) -> Self {
        value.body
    }
}
