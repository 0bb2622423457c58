use actix_web::{web, HttpResponse};

use crate::{database::DocumentStore, services::record_service, utils::AppError};

/// GET /api/users - Lists every user document
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, without the store identifier", body = Vec<serde_json::Value>),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn get_users(store: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    let users = record_service::list_users(store.get_ref()).await?;

    log::info!("👥 GET /users - {} users", users.len());
    Ok(HttpResponse::Ok().json(users))
}
