mod common;

use auth::JwtHandler;
use common::TestApp;
use common::JWT_SECRET;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register")
        .json(&json!({
            "name": "A",
            "email": "A@X.com",
            "password": "p"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["accessToken"].as_str().unwrap();

    let claims: serde_json::Value = JwtHandler::new(JWT_SECRET).decode(token).unwrap();
    assert_eq!(claims["email"], "a@x.com");
    assert_eq!(claims["name"], "A");
    assert_eq!(claims["role"]["name"], "CUSTOMER");
    assert_eq!(claims["role"]["id"], 3);
    assert_eq!(
        claims["exp"].as_i64().unwrap() - claims["iat"].as_i64().unwrap(),
        24 * 60 * 60
    );
}

#[tokio::test]
async fn test_register_duplicate_email_any_case() {
    let app = TestApp::spawn().await;
    app.register("A", "a@x.com", "p").await;

    let response = app
        .post("/register")
        .json(&json!({
            "name": "B",
            "email": "A@x.COM",
            "password": "q"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"]["name"], "EmailAlreadyTakenError");
    assert_eq!(body["error"]["message"], "a@x.com is already taken");
    assert_eq!(body["error"]["details"]["email"], "a@x.com");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register")
        .json(&json!({
            "name": "A",
            "email": "not-an-email",
            "password": "p"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"]["name"], "InvalidEmailError");
}

#[tokio::test]
async fn test_register_missing_field() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register")
        .json(&json!({ "email": "a@x.com", "password": "p" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"]["name"], "InvalidRequestBodyError");
}

#[tokio::test]
async fn test_login_success_case_insensitive() {
    let app = TestApp::spawn().await;
    app.register("A", "a@x.com", "p").await;

    let response = app
        .post("/login")
        .json(&json!({ "email": "A@X.COM", "password": "p" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["accessToken"].as_str().unwrap();

    let claims: serde_json::Value = JwtHandler::new(JWT_SECRET).decode(token).unwrap();
    assert_eq!(claims["email"], "a@x.com");
    assert_eq!(claims["role"]["name"], "CUSTOMER");
}

#[tokio::test]
async fn test_login_unregistered_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/login")
        .json(&json!({ "email": "nobody@x.com", "password": "p" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"]["name"], "EmailNotRegisteredError");
    assert_eq!(body["error"]["details"]["email"], "nobody@x.com");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;
    app.register("A", "a@x.com", "p").await;

    let response = app
        .post("/login")
        .json(&json!({ "email": "a@x.com", "password": "wrong" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"]["name"], "WrongPasswordError");
    assert_eq!(body["error"]["message"], "Password is not correct");
}

#[tokio::test]
async fn test_get_user_success() {
    let app = TestApp::spawn().await;
    let token = app.register("A", "a@x.com", "p").await;

    let response = app
        .get_authenticated("/user", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["name"], "A");
    assert_eq!(body["role"]["name"], "CUSTOMER");
    assert!(body["id"].is_string());
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());
    assert!(!body.to_string().contains("$2"));
}

#[tokio::test]
async fn test_get_user_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/user")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"]["name"], "InvalidTokenError");
}

#[tokio::test]
async fn test_get_user_invalid_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/user", "invalid_token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_user_token_signed_with_other_key() {
    let app = TestApp::spawn().await;
    app.register("A", "a@x.com", "p").await;

    let forged = JwtHandler::new(b"some-other-secret-key-of-sufficient-length")
        .encode(&json!({ "sub": "x", "exp": chrono::Utc::now().timestamp() + 3600 }))
        .unwrap();

    let response = app
        .get_authenticated("/user", &forged)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_route_rejects_customer() {
    let app = TestApp::spawn().await;
    let token = app.register("A", "a@x.com", "p").await;

    let response = app
        .post_authenticated("/v1/cars", &token)
        .json(&json!({ "name": "Avanza", "price": 300000, "size": "SMALL" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"]["name"], "InsufficientAccessError");
    assert!(body["error"]["details"].to_string().contains("CUSTOMER"));
}

#[tokio::test]
async fn test_admin_route_accepts_admin() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let response = app
        .get_authenticated("/user", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["role"]["name"], "ADMIN");
    assert_eq!(body["roleId"], 2);
}
