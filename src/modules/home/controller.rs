use axum::Json;
use axum::http::StatusCode;
use coursebook_models::MessageResponse;

pub const WELCOME_MESSAGE: &str =
    "Welcome back to school, students! Here you can find a list of courses.";

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse)
    ),
    tag = "Home"
)]
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME_MESSAGE))
}

/// Fallback for any request no route matched.
pub async fn route_not_found() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new("Route Not Found")),
    )
}
