use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use advisor_booking::config::Config;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-that-is-long-enough";

/// A running test server instance with a dedicated in-memory database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body, return status plus raw response text. Error bodies
    /// are plain-text literals, so callers parse JSON only when they expect
    /// it.
    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, String) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let text = resp.text().await.expect("read body failed");
        (status, text)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let text = resp.text().await.expect("read body failed");
        (status, text)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> (StatusCode, String) {
        self.post_json(
            "/user/register",
            &json!({ "name": name, "email": email, "password": password }),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> (StatusCode, String) {
        self.post_json("/user/login", &json!({ "email": email, "password": password }))
            .await
    }

    pub async fn add_advisor(&self, name: &str, photo_url: &str) -> (StatusCode, String) {
        self.post_json(
            "/admin/advisor",
            &json!({ "name": name, "photo_url": photo_url }),
        )
        .await
    }

    pub async fn book(&self, user_id: i64, advisor_id: i64, date_time: &str) -> (StatusCode, String) {
        self.post_json(
            &format!("/user/{user_id}/advisor/{advisor_id}"),
            &json!({ "date_time": date_time }),
        )
        .await
    }

    /// Register and return the user's id from the response.
    pub async fn register_ok(&self, name: &str, email: &str, password: &str) -> i64 {
        let (status, body) = self.register(name, email, password).await;
        assert_eq!(status, StatusCode::OK, "register failed: {body}");
        let v: Value = serde_json::from_str(&body).expect("register body not JSON");
        v["id"].as_i64().expect("register body missing id")
    }
}

/// Spawn a test app backed by a fresh in-memory SQLite database.
pub async fn spawn_app() -> TestApp {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        // sqlx turns the foreign_keys pragma on by default; the schema
        // documents that references are declared but not enforced.
        .foreign_keys(false);

    // In-memory database lives in a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_level: "warn".to_string(),
    };

    let app = advisor_booking::build_app(pool.clone(), config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::new();

    TestApp { addr, pool, client }
}
