use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Habit Service API",
        version = "1.0.0",
        description = "Habit tracker backend. Users and habits are schema-less documents; \
                       any JSON object is accepted as a habit and the store identifier is never returned."
    ),
    paths(
        // Records
        crate::api::users::get_users,
        crate::api::habits::get_habits,
        crate::api::habits::add_habit,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::MessageResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "Read-only listing of stored users."),
        (name = "Habits", description = "Listing and creation of habits."),
        (name = "Health", description = "Health check including store connectivity."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/users"));
        assert!(paths.contains_key("/health"));

        let habits = &paths["/api/habits"];
        assert!(habits.get.is_some());
        assert!(habits.post.is_some());
    }
}
