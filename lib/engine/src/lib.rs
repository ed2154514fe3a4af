pub mod resource;
pub mod store;

pub use provisioning_prelude as prelude;

use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    InvalidResource(Cow<'static, str>),
    #[error("{0}")]
    Internal(String),
    #[error("{resource_type} {resource_id:?} not found")]
    NotFound {
        resource_type: &'static str,
        resource_id: String,
    },
    #[error(transparent)]
    Storage(#[from] store::local::Error),
}

impl Error {
    pub(crate) fn invalid(message: &'static str) -> Self {
        Self::InvalidResource(Cow::Borrowed(message))
    }

    pub(crate) fn not_found(resource_type: &'static str, resource_id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            resource_id: resource_id.into(),
        }
    }
}
