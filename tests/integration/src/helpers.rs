//! Test helpers for integration tests
//!
//! Spawns an in-process server on a local port, seeds users directly in
//! the database and mints session tokens for them.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use blog_api::{create_app, create_app_state};
use blog_common::{AppConfig, JwtService};
use blog_core::{Role, UserId};
use blog_db::{create_pool, PgPool, PoolSettings};
use reqwest::{multipart, Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::unique_suffix;

/// A seeded user together with a valid session token
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: UserId,
    pub token: String,
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub pool: PgPool,
    jwt: JwtService,
    _uploads: TempDir,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    ///
    /// Uploads go to a scratch directory and rate limits are lifted.
    pub async fn start_with_config(mut config: AppConfig) -> Result<Self> {
        let uploads = tempfile::tempdir()?;
        config.storage.upload_dir = uploads.path().to_string_lossy().into_owned();
        config.rate_limit.requests_per_second = 10_000;
        config.rate_limit.burst = 10_000;

        let pool = create_pool(&PoolSettings::from(&config.database)).await?;
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.leeway_seconds);

        let state = create_app_state(config).await?;
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            pool,
            jwt,
            _uploads: uploads,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Insert a user row and issue a token for it
    pub async fn seed_user(&self, role: Role) -> Result<TestUser> {
        let id = UserId::new();
        sqlx::query("INSERT INTO users (id, email, name, role) VALUES ($1, $2, $3, $4)")
            .bind(id.into_inner())
            .bind(format!("it_{id}@example.com"))
            .bind(format!("Tester {}", unique_suffix()))
            .bind(role.as_str())
            .execute(&self.pool)
            .await?;

        let token = self.token_for(id, role, chrono::Duration::hours(1))?;
        Ok(TestUser { id, token })
    }

    /// Issue a token with an arbitrary lifetime (negative for expired)
    pub fn token_for(&self, id: UserId, role: Role, ttl: chrono::Duration) -> Result<String> {
        Ok(self.jwt.issue_token(id, role, ttl)?)
    }

    /// Remove a seeded user; their posts, comments and media cascade
    pub async fn delete_user(&self, user: &TestUser) -> Result<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user.id.into_inner())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(authed(self.client.get(self.url(path)), token).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with auth token and JSON body
    pub async fn post_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(authed(self.client.post(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a POST request with auth token and no body
    pub async fn post_empty_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(authed(self.client.post(self.url(path)), token).send().await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(authed(self.client.patch(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request with auth token and no body
    pub async fn put_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(authed(self.client.put(self.url(path)), token).send().await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(authed(self.client.delete(self.url(path)), token).send().await?)
    }

    /// Upload a file as the multipart `file` field
    pub async fn upload_auth(
        &self,
        token: &str,
        filename: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<Response> {
        let part = multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime_type)?;
        let form = multipart::Form::new().part("file", part);

        Ok(authed(self.client.post(self.url("/api/v1/media")), token)
            .multipart(form)
            .send()
            .await?)
    }
}

fn authed(request: RequestBuilder, token: &str) -> RequestBuilder {
    request.header("Authorization", format!("Bearer {token}"))
}

/// Create a test configuration from the environment
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();
    AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    for var in ["DATABASE_URL", "JWT_SECRET"] {
        if std::env::var(var).is_err() {
            eprintln!("Skipping test: {var} not set");
            return false;
        }
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error response and return its machine code
pub async fn assert_error_code(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("No error code in {body}"))
}
