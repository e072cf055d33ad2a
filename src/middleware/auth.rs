use std::sync::OnceLock;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use coursebook_auth::{AuthFailure, AuthOutcome, Credentials};
use coursebook_core::errors::AppError;
use coursebook_core::password::{hash_password_with_cost, verify_password, verify_password_blocking};
use coursebook_models::User;
use tracing::{info, warn};

use crate::modules::users::service::UserService;
use crate::state::AppState;

/// Extractor that authenticates the request with HTTP Basic credentials and
/// provides the current user.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl AuthUser {
    pub fn user_id(&self) -> i64 {
        self.0.id
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        let user = authenticate(state, &parts.headers)
            .await?
            .into_result()
            .map_err(|failure| {
                warn!(reason = %failure, "Access denied");
                AppError::unauthorized()
            })?;

        info!(user_id = user.id, "Authentication successful");

        let auth_user = AuthUser(user);
        parts.extensions.insert(auth_user.clone());
        Ok(auth_user)
    }
}

/// Resolves the Basic credentials in `headers` to a user.
///
/// Denials are values, not errors: only storage or hashing failures come
/// back as `Err`.
pub async fn authenticate(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<AuthOutcome<User>, AppError> {
    let Some(credentials) = Credentials::from_headers(headers) else {
        return Ok(AuthFailure::MissingCredentials.into());
    };

    let Some(user) = UserService::find_by_email(&state.db, &credentials.name).await? else {
        // Same bcrypt work as a real check so timing does not reveal
        // which addresses are registered.
        let cost = state.auth_config.bcrypt_cost;
        let pass = credentials.pass;
        let _ = tokio::task::spawn_blocking(move || verify_password(&pass, dummy_hash(cost))).await;
        return Ok(AuthFailure::UnknownUser(credentials.name).into());
    };

    if verify_password_blocking(credentials.pass, user.password.clone()).await? {
        Ok(AuthOutcome::Authenticated(user))
    } else {
        Ok(AuthFailure::BadPassword(credentials.name).into())
    }
}

fn dummy_hash(cost: u32) -> &'static str {
    static DUMMY_HASH: OnceLock<String> = OnceLock::new();
    DUMMY_HASH.get_or_init(|| {
        hash_password_with_cost("coursebook-dummy-password", cost).unwrap_or_default()
    })
}
