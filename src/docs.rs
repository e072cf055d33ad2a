use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use coursebook_models::{
    Course, CourseDto, CourseWithOwner, CreateUserDto, MessageResponse, UserSummary,
    ValidationErrorResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::home::controller::welcome,
        crate::modules::users::controller::get_current_user,
        crate::modules::users::controller::create_user,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
    ),
    components(
        schemas(
            UserSummary,
            CreateUserDto,
            Course,
            CourseWithOwner,
            CourseDto,
            MessageResponse,
            ValidationErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Home", description = "Welcome endpoint"),
        (name = "Users", description = "Registration and the authenticated user"),
        (name = "Courses", description = "Course catalog; writes are limited to the owner")
    ),
    info(
        title = "Coursebook API",
        version = "0.1.0",
        description = "A course catalog REST API built with Rust, Axum, and SQLite using HTTP Basic authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            )
        }
    }
}
