use mongodb::bson::{self, Bson, Document};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::utils::AppError;

pub const USERS: &str = "users";
pub const HABITS: &str = "habits";

/// Acknowledgment returned after a write
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Habit added")]
    pub msg: String,
}

impl MessageResponse {
    pub fn habit_added() -> Self {
        Self {
            msg: "Habit added".to_string(),
        }
    }
}

/// Converts a client JSON object into a storable document, as-is
pub fn document_from_json(body: Map<String, Value>) -> Result<Document, AppError> {
    Ok(bson::to_document(&body)?)
}

/// Renders a stored document as plain JSON (relaxed extended JSON for BSON-only types)
pub fn document_to_json(document: Document) -> Value {
    Bson::Document(document).into_relaxed_extjson()
}
