//! Request authentication.
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Basic base64(email:password)`
//! 2. The [`auth::AuthUser`] extractor parses the header, loads the user by
//!    e-mail, and verifies the password against the stored bcrypt hash
//! 3. The handler receives the authenticated [`coursebook_models::User`];
//!    any failure is answered with `401 {"message": "Access Denied"}` before
//!    the handler runs
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn create_course(AuthUser(user): AuthUser) -> impl IntoResponse {
//!     // user.id becomes the course owner
//! }
//! ```

pub mod auth;
