use actix_web::web;
use std::sync::Arc;

use crate::database::DocumentStore;

pub mod habits;
pub mod health;
pub mod swagger;
pub mod users;

/// Wraps a store as shared application data for the handlers
pub fn store_data(store: Arc<dyn DocumentStore>) -> web::Data<dyn DocumentStore> {
    web::Data::from(store)
}

/// Registers the health check and the record endpoints
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/users", web::get().to(users::get_users))
                .route("/habits", web::get().to(habits::get_habits))
                .route("/habits", web::post().to(habits::add_habit)),
        );
}
