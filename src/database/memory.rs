use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{DocumentStore, ID_FIELD};
use crate::utils::AppError;

/// In-process store with the same contract as [`super::MongoDB`]
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails as if the server were unreachable
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.offline {
            return Err(AppError::DatabaseError("server selection timed out".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        self.check_online()?;

        let collections = self.collections.read().await;
        let documents = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|doc| {
                        let mut doc = doc.clone();
                        doc.remove(ID_FIELD);
                        doc
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(documents)
    }

    async fn insert_one(&self, collection: &str, mut document: Document) -> Result<(), AppError> {
        self.check_online()?;

        if !document.contains_key(ID_FIELD) {
            document.insert(ID_FIELD, ObjectId::new());
        }

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_online()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn assigns_and_hides_identifier() {
        let store = MemoryStore::new();
        store.insert_one("habits", doc! { "name": "Read" }).await.unwrap();

        let raw = store.collections.read().await;
        assert!(raw["habits"][0].contains_key(ID_FIELD));
        drop(raw);

        let habits = store.find_all("habits").await.unwrap();
        assert_eq!(habits, vec![doc! { "name": "Read" }]);
    }

    #[tokio::test]
    async fn keeps_insertion_order_per_collection() {
        let store = MemoryStore::new();
        store.insert_one("habits", doc! { "n": 1 }).await.unwrap();
        store.insert_one("users", doc! { "name": "Ana" }).await.unwrap();
        store.insert_one("habits", doc! { "n": 2 }).await.unwrap();

        let habits = store.find_all("habits").await.unwrap();
        assert_eq!(habits, vec![doc! { "n": 1 }, doc! { "n": 2 }]);
        assert!(store.find_all("missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn offline_store_fails_every_operation() {
        let store = MemoryStore::offline();
        assert!(store.ping().await.is_err());
        assert!(store.find_all("users").await.is_err());
        assert!(store.insert_one("habits", doc! {}).await.is_err());
    }
}
