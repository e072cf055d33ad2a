use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header::LOCATION},
    response::IntoResponse,
};
use coursebook_core::AppError;
use coursebook_models::{CourseDto, CourseWithOwner, MessageResponse, ValidationErrorResponse};
use tracing::{info, instrument};

use crate::middleware::auth::AuthUser;
use crate::modules::courses::service::{COURSE_NOT_FOUND, CourseService};
use crate::state::AppState;
use crate::utils::auth_helpers::assert_owner;
use crate::validator::ValidatedJson;

/// Ids that do not parse as integers cannot name a course.
fn course_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::not_found(anyhow!(COURSE_NOT_FOUND)))
}

#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "Every course with its owner", body = Vec<CourseWithOwner>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseWithOwner>>, AppError> {
    let courses = CourseService::get_courses(&state.db).await?;
    Ok(Json(courses))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course with its owner", body = CourseWithOwner),
        (status = 404, description = "Course not found", body = MessageResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state, path))]
pub async fn get_course(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<CourseWithOwner>, AppError> {
    let id = course_id(path)?;
    let course = CourseService::get_course(&state.db, id).await?;
    Ok(Json(course))
}

#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CourseDto,
    responses(
        (status = 201, description = "Course created", headers(("Location" = String))),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid credentials", body = MessageResponse)
    ),
    tag = "Courses",
    security(("basic_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id()))]
pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::create_course(&state.db, auth_user.user_id(), dto).await?;
    info!(course_id = course.id, "Course created");

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/api/courses/{}", course.id))],
    ))
}

#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    request_body = CourseDto,
    responses(
        (status = 204, description = "Course updated"),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid credentials", body = MessageResponse),
        (status = 403, description = "Not the course owner", body = MessageResponse),
        (status = 404, description = "Course not found", body = MessageResponse)
    ),
    tag = "Courses",
    security(("basic_auth" = []))
)]
#[instrument(skip(state, auth_user, path), fields(user_id = auth_user.user_id()))]
pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    path: Result<Path<i64>, PathRejection>,
    ValidatedJson(dto): ValidatedJson<CourseDto>,
) -> Result<StatusCode, AppError> {
    let id = course_id(path)?;
    let course = CourseService::find_course(&state.db, id).await?;
    assert_owner(&course, &auth_user)?;

    CourseService::update_course(&state.db, id, dto).await?;
    info!(course_id = id, "Course updated");

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 401, description = "Missing or invalid credentials", body = MessageResponse),
        (status = 403, description = "Not the course owner", body = MessageResponse),
        (status = 404, description = "Course not found", body = MessageResponse)
    ),
    tag = "Courses",
    security(("basic_auth" = []))
)]
#[instrument(skip(state, auth_user, path), fields(user_id = auth_user.user_id()))]
pub async fn delete_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = course_id(path)?;
    let course = CourseService::find_course(&state.db, id).await?;
    assert_owner(&course, &auth_user)?;

    CourseService::delete_course(&state.db, id).await?;
    info!(course_id = id, "Course deleted");

    Ok(StatusCode::NO_CONTENT)
}
