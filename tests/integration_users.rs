mod common;

use axum::http::{StatusCode, header};
use common::{
    basic_auth, body_bytes, body_json, create_test_user, empty_request, generate_unique_email,
    json_request, send, setup_test_app,
};
use serde_json::json;
use sqlx::SqlitePool;

fn new_user(email: &str) -> serde_json::Value {
    json!({
        "firstName": "Joe",
        "lastName": "Smith",
        "emailAddress": email,
        "password": "joepassword"
    })
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_user(pool: SqlitePool) {
    let email = generate_unique_email();

    let response = send(
        setup_test_app(pool.clone()),
        json_request("POST", "/api/users", None, new_user(&email)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert!(body_bytes(response).await.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_created_user_can_authenticate(pool: SqlitePool) {
    let email = generate_unique_email();
    send(
        setup_test_app(pool.clone()),
        json_request("POST", "/api/users", None, new_user(&email)),
    )
    .await;

    let response = send(
        setup_test_app(pool.clone()),
        empty_request(
            "GET",
            "/api/users",
            Some(basic_auth(&email, "joepassword")),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["firstName"], "Joe");
    assert_eq!(body["lastName"], "Smith");
    assert_eq!(body["emailAddress"], email.as_str());
    assert!(body["id"].is_i64());
    assert!(body.get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_password_is_stored_hashed(pool: SqlitePool) {
    let email = generate_unique_email();
    send(
        setup_test_app(pool.clone()),
        json_request("POST", "/api/users", None, new_user(&email)),
    )
    .await;

    let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE email_address = ?")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_ne!(stored, "joepassword");
    assert!(coursebook_core::verify_password("joepassword", &stored).unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_user_missing_fields(pool: SqlitePool) {
    let response = send(
        setup_test_app(pool.clone()),
        json_request("POST", "/api/users", None, json!({})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({
            "message": "Validation failed",
            "errors": [
                "No value was found for e-mail address.",
                "No value was found for first name.",
                "No value was found for last name.",
                "No value was found for password."
            ]
        })
    );

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_user_invalid_email(pool: SqlitePool) {
    let response = send(
        setup_test_app(pool),
        json_request("POST", "/api/users", None, new_user("joe@smith.io")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["errors"], json!(["Please provide a valid e-mail address."]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_user_duplicate_email(pool: SqlitePool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "existing").await;

    let response = send(
        setup_test_app(pool.clone()),
        json_request("POST", "/api/users", None, new_user(&email)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"], json!(["Email already exists."]));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_concurrent_registrations_create_one_user(pool: SqlitePool) {
    let email = generate_unique_email();
    let mut requests = tokio::task::JoinSet::new();
    for _ in 0..8 {
        let app = setup_test_app(pool.clone());
        let request = json_request("POST", "/api/users", None, new_user(&email));
        requests.spawn(async move {
            let response = send(app, request).await;
            let status = response.status();
            (status, body_bytes(response).await)
        });
    }

    let mut created = 0;
    while let Some(result) = requests.join_next().await {
        let (status, body) = result.unwrap();
        if status == StatusCode::CREATED {
            created += 1;
            continue;
        }
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["errors"], json!(["Email already exists."]));
    }
    assert_eq!(created, 1);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email_address = ?")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_user_without_json_content_type(pool: SqlitePool) {
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/users")
        .body(axum::body::Body::from(new_user("joe@smith.com").to_string()))
        .unwrap();

    let response = send(setup_test_app(pool), request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Validation failed");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_current_user_requires_auth(pool: SqlitePool) {
    let response = send(
        setup_test_app(pool),
        empty_request("GET", "/api/users", None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "message": "Access Denied" }));
}
