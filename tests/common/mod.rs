use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, Request, Response, header};
use axum_extra::headers::{Authorization, HeaderMapExt};
use coursebook::router::init_router;
use coursebook::state::AppState;
use coursebook_config::{AuthConfig, CorsConfig, LoggingConfig};
use coursebook_core::hash_password_with_cost;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

/// Lowest cost bcrypt accepts; keeps the suite fast.
pub const TEST_BCRYPT_COST: u32 = 4;

#[allow(dead_code)]
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub password: String,
}

pub fn setup_test_app(pool: SqlitePool) -> Router {
    let state = AppState {
        db: pool,
        auth_config: AuthConfig {
            bcrypt_cost: TEST_BCRYPT_COST,
        },
        cors_config: CorsConfig::default(),
        logging_config: LoggingConfig::default(),
    };
    init_router(state)
}

pub async fn create_test_user(pool: &SqlitePool, email: &str, password: &str) -> TestUser {
    let hashed = hash_password_with_cost(password, TEST_BCRYPT_COST).unwrap();

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO users (first_name, last_name, email_address, password)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind("Test")
    .bind("User")
    .bind(email)
    .bind(&hashed)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_course(pool: &SqlitePool, user_id: i64, title: &str) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO courses (title, description, estimated_time, materials_needed, user_id)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind("A course used in tests.")
    .bind(Some("2 hours"))
    .bind(None::<String>)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Letters and digits only, so the address passes the e-mail rule.
pub fn generate_unique_email() -> String {
    format!("test{}@test.com", Uuid::new_v4().simple())
}

pub fn basic_auth(email: &str, password: &str) -> HeaderValue {
    let mut headers = HeaderMap::new();
    headers.typed_insert(Authorization::basic(email, password));
    headers
        .remove(header::AUTHORIZATION)
        .expect("authorization header")
}

#[allow(dead_code)]
pub fn json_request(
    method: &str,
    uri: &str,
    auth: Option<HeaderValue>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[allow(dead_code)]
pub fn empty_request(method: &str, uri: &str, auth: Option<HeaderValue>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[allow(dead_code)]
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
