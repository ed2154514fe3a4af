use crate::resource::template::RESOURCE_TYPE;
use crate::resource::Provisionable;
use crate::Error;
use provisioning_prelude::MessageTemplate;

pub mod local;
pub mod memory;

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Config {
    Memory,
    Local(local::Config),
}

impl Default for Config {
    fn default() -> Self {
        Self::Memory
    }
}

impl From<Config> for Store {
    fn from(value: Config) -> Self {
        tracing::debug!("building template store");
        match value {
            Config::Memory => Store::Memory(memory::MemoryStore::default()),
            Config::Local(item) => Store::Local(item.into()),
        }
    }
}

/// Where the validated templates are kept, keyed by their name.
#[derive(Clone, Debug)]
pub enum Store {
    Memory(memory::MemoryStore),
    Local(local::LocalStore),
}

impl Default for Store {
    fn default() -> Self {
        Self::Memory(memory::MemoryStore::default())
    }
}

impl Store {
    /// Inserts the template or replaces the one with the same name.
    pub async fn save(&self, template: MessageTemplate) -> Result<(), Error> {
        tracing::debug!("saving template {}", template.resource_id());
        match self {
            Self::Memory(inner) => {
                inner.save(template).await;
                Ok(())
            }
            Self::Local(inner) => inner.save(template).await.map_err(Error::from),
        }
    }

    pub async fn get(&self, name: &str) -> Result<MessageTemplate, Error> {
        let found = match self {
            Self::Memory(inner) => inner.get(name).await,
            Self::Local(inner) => inner.get(name).await?,
        };
        found.ok_or_else(|| Error::not_found(RESOURCE_TYPE, name))
    }

    /// Lists every template, ordered by name.
    pub async fn list(&self) -> Result<Vec<MessageTemplate>, Error> {
        match self {
            Self::Memory(inner) => Ok(inner.list().await),
            Self::Local(inner) => inner.list().await.map_err(Error::from),
        }
    }

    pub async fn delete(&self, name: &str) -> Result<(), Error> {
        tracing::debug!("deleting template {}", name);
        let removed = match self {
            Self::Memory(inner) => inner.delete(name).await,
            Self::Local(inner) => inner.delete(name).await?,
        };
        if removed {
            Ok(())
        } else {
            Err(Error::not_found(RESOURCE_TYPE, name))
        }
    }
}
