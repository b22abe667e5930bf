use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use chrono::Utc;
use rental_service::domain::car::service::CarService;
use rental_service::domain::user::models::EmailAddress;
use rental_service::domain::user::models::RoleId;
use rental_service::domain::user::models::User;
use rental_service::domain::user::models::UserId;
use rental_service::domain::user::ports::UserRepository;
use rental_service::domain::user::service::AuthService;
use rental_service::inbound::http::router::create_router;
use rental_service::outbound::repositories::InMemoryCarRepository;
use rental_service::outbound::repositories::InMemoryRoleRepository;
use rental_service::outbound::repositories::InMemoryUserRepository;
use serde_json::json;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub users: Arc<InMemoryUserRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let users = Arc::new(InMemoryUserRepository::new());

        // Lowest bcrypt cost keeps the suite fast
        let authenticator = Arc::new(Authenticator::with_hasher(
            JWT_SECRET,
            PasswordHasher::bcrypt(4),
        ));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&users),
            Arc::new(InMemoryRoleRepository::seeded()),
            authenticator,
            chrono::Duration::hours(24),
        ));
        let car_service = Arc::new(CarService::new(Arc::new(InMemoryCarRepository::new())));

        let router = create_router(auth_service, car_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            users,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register a customer and return its access token
    pub async fn register(&self, name: &str, email: &str, password: &str) -> String {
        let response = self
            .post("/register")
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        access_token(response).await
    }

    /// Log in and return the access token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        access_token(response).await
    }

    /// Insert an ADMIN account directly into storage and log it in.
    ///
    /// Registration only ever creates customers.
    pub async fn admin_token(&self) -> String {
        let password = "admin-password";
        let password_hash = PasswordHasher::bcrypt(4)
            .hash(password)
            .expect("Failed to hash password");

        self.users
            .create(User {
                id: UserId::new(),
                name: "Admin".to_string(),
                email: EmailAddress::new("admin@x.com".to_string()).unwrap(),
                password_hash,
                image: None,
                role_id: RoleId(2),
                created_at: Utc::now(),
            })
            .await
            .expect("Failed to seed admin");

        self.login("admin@x.com", password).await
    }
}

async fn access_token(response: reqwest::Response) -> String {
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["accessToken"]
        .as_str()
        .expect("Response carries no accessToken")
        .to_string()
}
