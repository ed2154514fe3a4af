//! Identity contract shared by every provisionable resource kind.

pub mod template;

use crate::Error;
use provisioning_prelude::MessageTemplate;

/// Capabilities the provisioning api relies on, whatever the kind of resource.
pub trait Provisionable: Sized {
    /// Constant tag of the resource kind, used in logs and error messages.
    fn resource_type(&self) -> &'static str;

    /// Natural key of the resource within its kind.
    fn resource_id(&self) -> &str;

    /// Checks the resource and returns its normalized form, ready to be stored.
    fn validate(self) -> Result<Self, Error>;
}

/// Closed set of the resource kinds that can be provisioned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    Template(MessageTemplate),
}

impl From<MessageTemplate> for Resource {
    fn from(value: MessageTemplate) -> Self {
        Self::Template(value)
    }
}

impl Provisionable for Resource {
    fn resource_type(&self) -> &'static str {
        match self {
            Self::Template(inner) => inner.resource_type(),
        }
    }

    fn resource_id(&self) -> &str {
        match self {
            Self::Template(inner) => inner.resource_id(),
        }
    }

    fn validate(self) -> Result<Self, Error> {
        match self {
            Self::Template(inner) => inner.validate().map(Self::Template),
        }
    }
}

/// Validates a resource before it gets handed to a store.
pub fn provision<R: Provisionable>(resource: R) -> Result<R, Error> {
    let resource_type = resource.resource_type();
    let resource_id = resource.resource_id().to_owned();
    match resource.validate() {
        Ok(found) => {
            tracing::debug!(resource_type, %resource_id, "resource validated");
            Ok(found)
        }
        Err(err) => {
            metrics::counter!("resource_validation_error", "resource_type" => resource_type)
                .increment(1);
            tracing::debug!(resource_type, %resource_id, "resource rejected: {err}");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{provision, Provisionable, Resource};
    use crate::Error;
    use provisioning_prelude::MessageTemplate;

    #[test]
    fn resource_should_delegate_identity() {
        let resource = Resource::from(MessageTemplate::new("welcome", "Hello"));
        assert_eq!(resource.resource_type(), "template");
        assert_eq!(resource.resource_id(), "welcome");
    }

    #[test]
    fn resource_should_delegate_validation() {
        let resource = Resource::from(MessageTemplate::new("welcome", "Hello"))
            .validate()
            .unwrap();
        assert_eq!(
            resource,
            Resource::Template(MessageTemplate::new(
                "welcome",
                "{{ define \"welcome\" }}\n  Hello\n{{ end }}"
            ))
        );
    }

    #[test]
    fn provision_should_return_normalized_resource() {
        let found = provision(MessageTemplate::new("x", "  {{ define \"x\" }}body{{ end }}\n"))
            .unwrap();
        assert_eq!(found.template, "{{ define \"x\" }}body{{ end }}");
    }

    #[test]
    fn provision_should_forward_errors() {
        let err = provision(Resource::from(MessageTemplate::new("", "Hello"))).unwrap_err();
        assert!(matches!(err, Error::InvalidResource(_)));
    }
}
