//! # Coursebook API
//!
//! A REST API built with Rust, Axum, and SQLite for a course catalog: users
//! register, then create, update, and delete the courses they own.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Basic-auth authenticator (AuthUser extractor)
//! ├── modules/          # Feature modules
//! │   ├── home/        # Welcome route
//! │   ├── users/       # Registration and current user
//! │   └── courses/     # Course catalog CRUD
//! └── utils/            # Ownership checks
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Database access
//! - `router.rs`: Axum router configuration
//!
//! Models and DTOs live in the `coursebook-models` crate, the error type and
//! password hashing in `coursebook-core`, and header parsing in
//! `coursebook-auth`.
//!
//! ## Authentication
//!
//! Write operations use HTTP Basic authentication. The user name is the
//! e-mail address given at registration; the password is checked against the
//! stored bcrypt hash. Every failure answers `401 {"message": "Access Denied"}`.
//!
//! ## Quick Start
//!
//! ```bash
//! DATABASE_URL=sqlite://coursebook.db?mode=rwc
//! PORT=5000
//! ENABLE_GLOBAL_ERROR_LOGGING=true
//! ```
//!
//! API documentation is served at `/scalar` and `/api-docs/openapi.json`.

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;

// Re-export workspace crates for convenience
pub use coursebook_auth;
pub use coursebook_config;
pub use coursebook_core;
pub use coursebook_db;
pub use coursebook_models;
