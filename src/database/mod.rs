use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Database};
use std::error::Error;

use crate::utils::AppError;

#[cfg(test)]
pub mod memory;

#[cfg(test)]
pub use memory::MemoryStore;

/// Database used when the connection string carries no path
pub const DEFAULT_DATABASE: &str = "habitdb";

/// Identifier field the store attaches to every document
pub const ID_FIELD: &str = "_id";

/// Minimal document-store contract the handlers depend on.
///
/// `find_all` never returns the identifier field.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError>;

    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        // Pool and timeouts are left to the driver defaults
        let client = Client::with_uri_str(uri).await?;

        let db_name = database_name_from_uri(uri);
        let db = client.database(db_name);

        let mongodb = Self { db };

        // Test connection
        mongodb.ping().await?;
        log::info!("✅ Connected to MongoDB database: {}", db_name);

        Ok(mongodb)
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoDB {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        let mut projection = Document::new();
        projection.insert(ID_FIELD, 0);

        let cursor = self
            .collection::<Document>(collection)
            .find(doc! {})
            .projection(projection)
            .await?;

        let documents: Vec<Document> = cursor.try_collect().await?;
        log::debug!("📄 {}: fetched {} documents", collection, documents.len());

        Ok(documents)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), AppError> {
        let result = self
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;

        log::debug!("📝 {}: inserted {}", collection, result.inserted_id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

/// Extract database name from URI or use default
pub fn database_name_from_uri(uri: &str) -> &str {
    let without_scheme = uri.split_once("://").map(|(_, rest)| rest).unwrap_or(uri);

    without_scheme
        .split_once('/')
        .map(|(_, path)| path)
        .and_then(|path| path.split('?').next())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_DATABASE)
}
