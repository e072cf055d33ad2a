use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::IntoResponse,
};
use coursebook_core::errors::AppError;
use coursebook_models::{CreateUserDto, MessageResponse, UserSummary, ValidationErrorResponse};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Get the authenticated user
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "The authenticated user", body = UserSummary),
        (status = 401, description = "Missing or invalid credentials", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(auth_user), fields(user_id = auth_user.user_id()))]
pub async fn get_current_user(auth_user: AuthUser) -> Json<UserSummary> {
    Json(UserSummary::from(auth_user.0))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", headers(("Location" = String))),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::create_user(&state.db, state.auth_config.bcrypt_cost, dto).await?;
    tracing::info!(user_id = user.id, "User registered");

    Ok((StatusCode::CREATED, [(LOCATION, "/")]))
}
