use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;
use tempfile::TempDir;

use server::config::{
    AppConfig, AuthConfig, CorsConfig, SeedConfig, ServerConfig, UploadConfig,
};
use server::entity::account::NewAccount;
use server::session::SessionStore;
use server::state::AppState;
use server::store::{MemStorage, Storage};
use server::utils::hash;

pub mod routes {
    pub const LOGIN: &str = "/api/login";
    pub const LOGOUT: &str = "/api/logout";
    pub const AUTH_STATUS: &str = "/api/auth/status";
    pub const DOGS: &str = "/api/dogs";
    pub const UPLOAD: &str = "/api/upload";

    pub fn dog(id: i32) -> String {
        format!("/api/dogs/{id}")
    }

    pub fn dog_status(id: i32) -> String {
        format!("/api/admin/dogs/{id}/status")
    }
}

/// A running test server over a fresh in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    /// Direct store handle for fixtures the API does not expose
    /// (e.g. non-admin accounts — there is no register endpoint).
    pub store: Arc<MemStorage>,
    _uploads: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestResponse {
    async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.expect("Failed to read response body");
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let uploads = tempfile::tempdir().expect("Failed to create uploads dir");

        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec![],
                    max_age: 3600,
                },
            },
            auth: AuthConfig {
                session_ttl_hours: 24,
                admin_username: "admin".to_string(),
                admin_password: "password123".to_string(),
            },
            uploads: UploadConfig {
                dir: uploads.path().to_string_lossy().into_owned(),
                max_file_size: 5 * 1024 * 1024,
                max_files: 3,
            },
            seed: SeedConfig {
                demo_listings: false,
            },
        };

        let store = Arc::new(MemStorage::new());
        server::seed::seed_admin(&store, &config).expect("Failed to seed admin");

        let sessions = Arc::new(SessionStore::new(chrono::Duration::hours(
            config.auth.session_ttl_hours,
        )));

        let state = AppState {
            store: store.clone(),
            sessions,
            config: Arc::new(config),
        };

        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            store,
            _uploads: uploads,
        }
    }

    /// A fresh client with its own cookie jar — one per principal.
    pub fn client() -> Client {
        Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to build client")
    }

    /// Insert a (non-admin) account directly; the API has no register
    /// endpoint.
    pub fn create_account(&self, username: &str, password: &str) -> i32 {
        let hashed = hash::hash_password(password).expect("Failed to hash password");
        self.store
            .create_account(NewAccount {
                username: username.to_string(),
                password: hashed,
            })
            .id
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, client: &Client, path: &str) -> TestResponse {
        let res = client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");
        TestResponse::from_response(res).await
    }

    pub async fn post(&self, client: &Client, path: &str, body: &Value) -> TestResponse {
        let res = client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");
        TestResponse::from_response(res).await
    }

    pub async fn post_empty(&self, client: &Client, path: &str) -> TestResponse {
        let res = client
            .post(self.url(path))
            .send()
            .await
            .expect("Failed to send POST request");
        TestResponse::from_response(res).await
    }

    pub async fn patch(&self, client: &Client, path: &str, body: &Value) -> TestResponse {
        let res = client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send PATCH request");
        TestResponse::from_response(res).await
    }

    /// Log `client` in; panics unless the server accepts the credentials.
    pub async fn login_as(&self, client: &Client, username: &str, password: &str) {
        let res = self
            .post(
                client,
                routes::LOGIN,
                &serde_json::json!({"username": username, "password": password}),
            )
            .await;
        assert_eq!(res.status, 200, "Login failed: {}", res.text);
    }
}

/// A complete, valid found-dog report body.
pub fn valid_report() -> Value {
    serde_json::json!({
        "color": "Brown",
        "description": "Friendly dog found near the park entrance",
        "imageUrls": ["http://x/1.jpg"],
        "address": "1 Main St",
        "city": "Springfield",
        "latitude": "1.0",
        "longitude": "2.0",
        "dateFound": "2024-01-01",
        "timeFound": "10:00",
        "finderName": "Jo Smith",
        "finderPhone": "5551234567",
        "finderEmail": "jo@example.com"
    })
}
