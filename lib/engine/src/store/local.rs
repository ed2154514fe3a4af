use provisioning_prelude::MessageTemplate;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_path")]
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

impl Config {
    fn default_path() -> PathBuf {
        PathBuf::from("templates.json")
    }
}

impl From<Config> for LocalStore {
    fn from(value: Config) -> Self {
        Self::new(value.path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unable to read templates file: {0:?}")]
    ReadFailed(std::io::Error),
    #[error("Unable to deserialize templates file: {0:?}")]
    FormatInvalid(serde_json::Error),
    #[error("Unable to serialize templates: {0:?}")]
    SerializeFailed(serde_json::Error),
    #[error("Unable to write templates file: {0:?}")]
    WriteFailed(std::io::Error),
}

/// Keeps the whole collection in a single json file.
///
/// Every change rewrites a sibling temporary file and renames it over the
/// original, under a lock so that concurrent writers don't lose updates.
#[derive(Clone, Debug)]
pub struct LocalStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl LocalStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Arc::new(path),
            lock: Arc::default(),
        }
    }

    fn temporary_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    async fn read(&self) -> Result<BTreeMap<String, MessageTemplate>, Error> {
        let content = match tokio::fs::read(self.path.as_path()).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("templates file {:?} not found, starting empty", self.path);
                return Ok(BTreeMap::new());
            }
            Err(err) => {
                metrics::counter!("template_store_error", "backend" => "local", "reason" => "read_failed")
                    .increment(1);
                tracing::error!("unable to read templates file: {:?}", err);
                return Err(Error::ReadFailed(err));
            }
        };
        let list: Vec<MessageTemplate> = serde_json::from_slice(&content).map_err(|err| {
            metrics::counter!("template_store_error", "backend" => "local", "reason" => "format_invalid")
                .increment(1);
            tracing::error!("unable to deserialize templates file: {:?}", err);
            Error::FormatInvalid(err)
        })?;
        Ok(list
            .into_iter()
            .map(|item| (item.name.clone(), item))
            .collect())
    }

    async fn write(&self, templates: &BTreeMap<String, MessageTemplate>) -> Result<(), Error> {
        let list = templates.values().collect::<Vec<_>>();
        let content = serde_json::to_vec_pretty(&list).map_err(|err| {
            tracing::error!("unable to serialize templates: {:?}", err);
            Error::SerializeFailed(err)
        })?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| self.write_failed(err))?;
        }
        let temporary = self.temporary_path();
        tokio::fs::write(&temporary, content)
            .await
            .map_err(|err| self.write_failed(err))?;
        tokio::fs::rename(&temporary, self.path.as_path())
            .await
            .map_err(|err| self.write_failed(err))
    }

    fn write_failed(&self, err: std::io::Error) -> Error {
        metrics::counter!("template_store_error", "backend" => "local", "reason" => "write_failed")
            .increment(1);
        tracing::error!("unable to write templates file {:?}: {:?}", self.path, err);
        Error::WriteFailed(err)
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    pub(super) async fn save(&self, template: MessageTemplate) -> Result<(), Error> {
        let _guard = self.lock.lock().await;
        let mut templates = self.read().await?;
        templates.insert(template.name.clone(), template);
        self.write(&templates).await
    }

    pub(super) async fn get(&self, name: &str) -> Result<Option<MessageTemplate>, Error> {
        let _guard = self.lock.lock().await;
        let mut templates = self.read().await?;
        Ok(templates.remove(name))
    }

    pub(super) async fn list(&self) -> Result<Vec<MessageTemplate>, Error> {
        let _guard = self.lock.lock().await;
        let templates = self.read().await?;
        Ok(templates.into_values().collect())
    }

    pub(super) async fn delete(&self, name: &str) -> Result<bool, Error> {
        let _guard = self.lock.lock().await;
        let mut templates = self.read().await?;
        if templates.remove(name).is_none() {
            return Ok(false);
        }
        self.write(&templates).await?;
        Ok(true)
    }
}
