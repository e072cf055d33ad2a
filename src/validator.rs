use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use coursebook_core::errors::AppError;
use coursebook_models::validation::validation_messages;
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor that runs the payload's `Validate` rules.
///
/// Every rejection is a 400 whose `errors` array lists what is wrong, so
/// handlers only ever see well-formed, valid input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(vec![rejection_message(&rejection)]))?;

        value
            .validate()
            .map_err(|errors| AppError::validation(validation_messages(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

fn rejection_message(rejection: &JsonRejection) -> String {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return "Missing 'Content-Type: application/json' header".to_string();
    }

    let error_msg = rejection.body_text();

    if error_msg.contains("missing field") {
        let field = error_msg
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return format!("No value was found for {}.", field);
    }

    if error_msg.contains("invalid type") {
        return "Invalid field type in request".to_string();
    }

    "Invalid request body".to_string()
}
