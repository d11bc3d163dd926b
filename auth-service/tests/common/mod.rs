use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::PasswordHasher;
use auth_service::credentials::errors::AuthError;
use auth_service::credentials::models::EmailAddress;
use auth_service::credentials::models::User;
use auth_service::credentials::ports::UserRepository;
use auth_service::credentials::service::AuthService;
use auth_service::inbound::http::router::create_router;
use chrono::Utc;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_IDENTIFIER: &str = "https://example.com";

/// Credential store kept in memory, with a switch to simulate an outage.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
    unavailable: Mutex<bool>,
}

impl InMemoryUserRepository {
    pub fn insert(&self, email: &str, password: &str, role: &str) {
        let password_hash = PasswordHasher::with_cost(4)
            .hash(password)
            .expect("Failed to hash password");

        self.insert_raw(email, password_hash.into_bytes(), role);
    }

    pub fn insert_raw(&self, email: &str, password_hash: Vec<u8>, role: &str) {
        let user = User {
            email: email.to_string(),
            password_hash,
            role: role.to_string(),
            active: true,
            created_at: Utc::now(),
        };

        self.users.lock().unwrap().insert(email.to_string(), user);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock().unwrap() = unavailable;
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError> {
        if *self.unavailable.lock().unwrap() {
            return Err(AuthError::DatabaseError(
                "error communicating with database: Connection refused (os error 111)"
                    .to_string(),
            ));
        }

        Ok(self.users.lock().unwrap().get(email.as_str()).cloned())
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryUserRepository>,
    pub authenticator: Arc<Authenticator>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with(TEST_SECRET, false).await
    }

    pub async fn spawn_with(secret: &[u8], conceal_unknown_users: bool) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryUserRepository::default());
        let authenticator = Arc::new(Authenticator::new(secret, TEST_IDENTIFIER));

        let auth_service = Arc::new(
            AuthService::new(Arc::clone(&repository), Arc::clone(&authenticator))
                .with_conceal_unknown_users(conceal_unknown_users),
        );

        let router = create_router(auth_service, "test");

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            repository,
            authenticator,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}
