//! # Coursebook Models
//!
//! Domain models, DTOs, and validation rules for the Coursebook API.
//!
//! # Modules
//!
//! - [`courses`]: Course rows, responses with their owner, and the course DTO
//! - [`responses`]: Shared JSON message bodies
//! - [`users`]: User rows, the public user summary, and the registration DTO
//! - [`validation`]: E-mail syntax and flattening of validation errors
//!
//! # Example
//!
//! ```ignore
//! use coursebook_models::users::CreateUserDto;
//! use coursebook_models::validation::validation_messages;
//! use validator::Validate;
//!
//! if let Err(errors) = dto.validate() {
//!     for message in validation_messages(&errors) {
//!         eprintln!("{message}");
//!     }
//! }
//! ```

pub mod courses;
pub mod responses;
pub mod users;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use courses::{Course, CourseDto, CourseWithOwner, CourseWithOwnerRow};
pub use responses::{MessageResponse, ValidationErrorResponse};
pub use users::{CreateUserDto, User, UserSummary};
pub use validation::{is_valid_email, validation_messages};
