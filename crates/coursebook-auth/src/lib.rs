//! # Coursebook Auth
//!
//! Authentication building blocks for the Coursebook API.
//!
//! - [`credentials`]: Parses the `Authorization: Basic ...` header
//! - [`outcome`]: The result of an authentication attempt and the reasons
//!   it can be denied
//!
//! Looking the user up and verifying the password needs the database, so the
//! authenticator itself lives with the HTTP layer; this crate stays free of
//! I/O.
//!
//! # Example
//!
//! ```ignore
//! use coursebook_auth::{AuthFailure, Credentials};
//!
//! match Credentials::from_headers(&headers) {
//!     Some(credentials) => println!("login attempt for {}", credentials.name),
//!     None => println!("{}", AuthFailure::MissingCredentials),
//! }
//! ```

pub mod credentials;
pub mod outcome;

// Re-export commonly used types at crate root
pub use credentials::Credentials;
pub use outcome::{AuthFailure, AuthOutcome};
