use serde_json::{Map, Value};

use crate::{
    database::DocumentStore,
    models::{document_from_json, document_to_json, HABITS, USERS},
    utils::AppError,
};

/// Every stored user, identifier omitted
pub async fn list_users(store: &dyn DocumentStore) -> Result<Vec<Value>, AppError> {
    list_collection(store, USERS).await
}

/// Every stored habit, identifier omitted
pub async fn list_habits(store: &dyn DocumentStore) -> Result<Vec<Value>, AppError> {
    list_collection(store, HABITS).await
}

/// Stores the body as a new habit. No validation, no duplicate detection.
pub async fn add_habit(store: &dyn DocumentStore, body: Map<String, Value>) -> Result<(), AppError> {
    let document = document_from_json(body)?;
    store.insert_one(HABITS, document).await
}

async fn list_collection(store: &dyn DocumentStore, collection: &str) -> Result<Vec<Value>, AppError> {
    let documents = store.find_all(collection).await?;
    Ok(documents.into_iter().map(document_to_json).collect())
}
