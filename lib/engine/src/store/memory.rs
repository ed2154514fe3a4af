use provisioning_prelude::MessageTemplate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<BTreeMap<String, MessageTemplate>>>,
}

impl MemoryStore {
    pub(super) async fn save(&self, template: MessageTemplate) {
        let mut inner = self.inner.write().await;
        inner.insert(template.name.clone(), template);
    }

    pub(super) async fn get(&self, name: &str) -> Option<MessageTemplate> {
        self.inner.read().await.get(name).cloned()
    }

    pub(super) async fn list(&self) -> Vec<MessageTemplate> {
        self.inner.read().await.values().cloned().collect()
    }

    pub(super) async fn delete(&self, name: &str) -> bool {
        self.inner.write().await.remove(name).is_some()
    }
}
