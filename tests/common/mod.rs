#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::json;

use linkcut::application::services::{AuthService, LinkService};
use linkcut::domain::entities::{Link, NewLink, NewUser, User};
use linkcut::domain::repositories::{LinkRepository, UserRepository};
use linkcut::error::AppError;
use linkcut::routes::app_router;
use linkcut::state::AppState;

pub const TEST_SIGNING_SECRET: &str = "integration-test-secret";

/// In-memory link store implementing the same contract as the PostgreSQL
/// repository, including unique-violation semantics on create and rename.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Inserts a fully specified link, bypassing creation defaults. Used to
    /// seed links with particular access or expiry timestamps.
    pub fn seed(&self, mut link: Link) {
        link.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.links.lock().unwrap().push(link);
    }

    pub fn get(&self, code: &str) -> Option<Link> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.short_code == code)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    fn conflict() -> AppError {
        AppError::conflict("Unique constraint violation", json!({}))
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();
        if links.iter().any(|l| l.short_code == new_link.short_code) {
            return Err(Self::conflict());
        }

        let link = Link {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            original_url: new_link.original_url,
            short_code: new_link.short_code,
            created_at: Utc::now(),
            last_accessed_at: None,
            access_count: 0,
            expires_at: new_link.expires_at,
        };
        links.push(link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.get(code))
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.original_url == original_url)
            .cloned())
    }

    async fn record_access(
        &self,
        code: &str,
        accessed_at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let mut links = self.links.lock().unwrap();
        match links.iter_mut().find(|l| l.short_code == code) {
            Some(link) => {
                link.access_count += 1;
                link.last_accessed_at = Some(accessed_at);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn rename_code(
        &self,
        old_code: &str,
        new_code: &str,
    ) -> Result<Option<Link>, AppError> {
        let mut links = self.links.lock().unwrap();
        if !links.iter().any(|l| l.short_code == old_code) {
            return Ok(None);
        }
        if links
            .iter()
            .any(|l| l.short_code == new_code && l.short_code != old_code)
        {
            return Err(Self::conflict());
        }

        let link = links
            .iter_mut()
            .find(|l| l.short_code == old_code)
            .expect("presence checked above");
        link.short_code = new_code.to_string();
        Ok(Some(link.clone()))
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|l| l.short_code != code);
        Ok(links.len() < before)
    }

    async fn delete_unused(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|l| match l.last_accessed_at {
            None => false,
            Some(accessed) => accessed >= cutoff,
        });
        Ok((before - links.len()) as u64)
    }

    async fn list_expired(&self, now: DateTime<Utc>) -> Result<Vec<Link>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.expires_at.is_some_and(|e| e < now))
            .cloned()
            .collect())
    }
}

/// In-memory user store mirroring the PostgreSQL repository contract.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.username == new_user.username || u.email == new_user.email)
        {
            return Err(AppError::conflict("Unique constraint violation", json!({})));
        }

        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}

/// A running test server plus handles to its in-memory stores.
pub struct TestApp {
    pub server: TestServer,
    pub links: Arc<InMemoryLinkRepository>,
    pub users: Arc<InMemoryUserRepository>,
}

/// Builds a test server over in-memory repositories.
pub fn spawn_app() -> TestApp {
    let links = Arc::new(InMemoryLinkRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());

    let link_service = Arc::new(LinkService::new(links.clone()));
    let auth_service = Arc::new(AuthService::new(users.clone(), TEST_SIGNING_SECRET, 30));

    let state = AppState::new(link_service, auth_service);
    let server = TestServer::new(app_router(state)).unwrap();

    TestApp {
        server,
        links,
        users,
    }
}

/// Seeds a link with explicit access and expiry timestamps.
pub fn seed_link(
    app: &TestApp,
    code: &str,
    url: &str,
    last_accessed_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
) {
    app.links.seed(Link {
        id: 0,
        original_url: url.to_string(),
        short_code: code.to_string(),
        created_at: Utc::now(),
        last_accessed_at,
        access_count: 0,
        expires_at,
    });
}

/// Registers a user and returns a bearer token for them.
pub async fn auth_token(app: &TestApp, username: &str) -> String {
    app.server
        .post("/register")
        .json(&json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "pw",
        }))
        .await
        .assert_status_ok();

    let response = app
        .server
        .post("/token")
        .form(&[("username", username), ("password", "pw")])
        .await;
    response.assert_status_ok();

    response.json::<serde_json::Value>()["access_token"]
        .as_str()
        .expect("token response contains access_token")
        .to_string()
}
