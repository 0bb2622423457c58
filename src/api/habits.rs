use actix_web::{web, HttpResponse};
use serde_json::{Map, Value};

use crate::{
    database::DocumentStore,
    models::MessageResponse,
    services::record_service,
    utils::AppError,
};

/// GET /api/habits - Lists every habit document
#[utoipa::path(
    get,
    path = "/api/habits",
    tag = "Habits",
    responses(
        (status = 200, description = "All habits, without the store identifier", body = Vec<serde_json::Value>),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn get_habits(store: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    let habits = record_service::list_habits(store.get_ref()).await?;

    log::info!("📋 GET /habits - {} habits", habits.len());
    Ok(HttpResponse::Ok().json(habits))
}

/// POST /api/habits - Stores the request body as a new habit
///
/// Any JSON object is accepted; the assigned identifier is not returned.
#[utoipa::path(
    post,
    path = "/api/habits",
    tag = "Habits",
    request_body(content = serde_json::Value, description = "Any JSON object", content_type = "application/json"),
    responses(
        (status = 201, description = "Habit stored", body = MessageResponse),
        (status = 400, description = "Body is not a JSON object"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn add_habit(
    store: web::Data<dyn DocumentStore>,
    body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /habits - {} fields", body.len());

    record_service::add_habit(store.get_ref(), body.into_inner()).await?;

    Ok(HttpResponse::Created().json(MessageResponse::habit_added()))
}
