use std::fmt;

use axum::http::HeaderMap;
use axum_extra::headers::authorization::Basic;
use axum_extra::headers::{Authorization, HeaderMapExt};

/// Username/password pair taken from a Basic `Authorization` header.
///
/// `name` is the e-mail address the user registered with.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub pass: String,
}

impl Credentials {
    /// Returns `None` when the header is absent, uses another scheme, or is
    /// not valid base64 `name:pass`.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let Authorization(basic) = headers.typed_get::<Authorization<Basic>>()?;

        Some(Self {
            name: basic.username().to_string(),
            pass: basic.password().to_string(),
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("pass", &"<redacted>")
            .finish()
    }
}
