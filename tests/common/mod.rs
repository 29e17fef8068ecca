#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::json;

use linkify::domain::entities::{Click, Link, NewClick, NewLink, NewUser, User};
use linkify::domain::repositories::{LinkRepository, UserRepository};
use linkify::error::AppError;
use linkify::infrastructure::cache::NullCache;
use linkify::infrastructure::qr::SvgQrEncoder;
use linkify::routes::app_router;
use linkify::state::AppState;

pub const BASE_URL: &str = "https://sho.rt";

#[derive(Default)]
struct LinkStore {
    links: Vec<Link>,
    clicks: Vec<Click>,
    next_link_id: i64,
    next_click_id: i64,
}

/// In-memory link store. One mutex guards links and clicks together, so
/// every repository call is a single atomic step, like a database statement.
#[derive(Default)]
pub struct MemoryLinkRepository {
    store: Mutex<LinkStore>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a link directly, bypassing the service layer.
    pub fn seed_link(
        &self,
        code: &str,
        long_url: &str,
        owner_id: i64,
        expires_at: Option<DateTime<Utc>>,
    ) -> Link {
        let mut store = self.store.lock().unwrap();
        store.next_link_id += 1;
        let link = Link {
            id: store.next_link_id,
            code: code.to_string(),
            long_url: long_url.to_string(),
            owner_id,
            click_count: 0,
            created_at: Utc::now(),
            expires_at,
        };
        store.links.push(link.clone());
        link
    }

    /// Inserts a click with a controlled timestamp, bumping the counter.
    pub fn seed_click(
        &self,
        link_id: i64,
        ip_address: Option<&str>,
        user_agent: Option<&str>,
        referrer: &str,
        accessed_at: DateTime<Utc>,
    ) {
        let mut store = self.store.lock().unwrap();
        store.next_click_id += 1;
        let click = Click {
            id: store.next_click_id,
            link_id,
            ip_address: ip_address.map(str::to_string),
            user_agent: user_agent.map(str::to_string),
            referrer: referrer.to_string(),
            accessed_at,
        };
        store.clicks.push(click);
        let link = store
            .links
            .iter_mut()
            .find(|l| l.id == link_id)
            .expect("seeding click for unknown link");
        link.click_count += 1;
    }

    pub fn link_by_code(&self, code: &str) -> Option<Link> {
        let store = self.store.lock().unwrap();
        store.links.iter().find(|l| l.code == code).cloned()
    }

    pub fn clicks_of(&self, link_id: i64) -> Vec<Click> {
        let store = self.store.lock().unwrap();
        store
            .clicks
            .iter()
            .filter(|c| c.link_id == link_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut store = self.store.lock().unwrap();
        if store.links.iter().any(|l| l.code == new_link.code) {
            return Err(AppError::conflict("Unique constraint violation", vec![]));
        }

        store.next_link_id += 1;
        let link = Link {
            id: store.next_link_id,
            code: new_link.code,
            long_url: new_link.long_url,
            owner_id: new_link.owner_id,
            click_count: 0,
            created_at: Utc::now(),
            expires_at: new_link.expires_at,
        };
        store.links.push(link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.link_by_code(code))
    }

    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError> {
        let store = self.store.lock().unwrap();
        let mut links: Vec<Link> = store
            .links
            .iter()
            .filter(|l| l.owner_id == owner_id)
            .cloned()
            .collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(links)
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let store = self.store.lock().unwrap();
        Ok(store.links.iter().any(|l| l.code == code))
    }

    async fn record_click(&self, code: &str, click: NewClick) -> Result<bool, AppError> {
        let mut store = self.store.lock().unwrap();
        let now = Utc::now();

        let Some(index) = store
            .links
            .iter()
            .position(|l| l.code == code && l.expires_at.is_none_or(|e| e > now))
        else {
            return Ok(false);
        };

        store.next_click_id += 1;
        let link_id = store.links[index].id;
        let id = store.next_click_id;
        store.clicks.push(Click {
            id,
            link_id,
            ip_address: click.ip_address,
            user_agent: click.user_agent,
            referrer: click.referrer,
            accessed_at: now,
        });
        store.links[index].click_count += 1;
        Ok(true)
    }

    async fn clicks_for_link(&self, link_id: i64) -> Result<Vec<Click>, AppError> {
        Ok(self.clicks_of(link_id))
    }

    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError> {
        let mut store = self.store.lock().unwrap();
        let Some(index) = store.links.iter().position(|l| l.code == code) else {
            return Ok(false);
        };

        let link_id = store.links[index].id;
        store.links.remove(index);
        store.clicks.retain(|c| c.link_id != link_id);
        Ok(true)
    }
}

#[derive(Default)]
struct UserStore {
    users: Vec<User>,
    next_id: i64,
}

/// In-memory user store.
#[derive(Default)]
pub struct MemoryUserRepository {
    store: Mutex<UserStore>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id_by_email(&self, email: &str) -> Option<i64> {
        let store = self.store.lock().unwrap();
        store.users.iter().find(|u| u.email == email).map(|u| u.id)
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut store = self.store.lock().unwrap();
        if store.users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::conflict("Unique constraint violation", vec![]));
        }

        store.next_id += 1;
        let user = User {
            id: store.next_id,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        store.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let store = self.store.lock().unwrap();
        Ok(store.users.iter().find(|u| u.email == email).cloned())
    }
}

/// Full application over in-memory stores, with handles for seeding and
/// store-side assertions.
pub struct TestApp {
    pub server: TestServer,
    pub links: Arc<MemoryLinkRepository>,
    pub users: Arc<MemoryUserRepository>,
}

pub fn spawn_app() -> TestApp {
    let links = Arc::new(MemoryLinkRepository::new());
    let users = Arc::new(MemoryUserRepository::new());

    let state = AppState::new(
        links.clone(),
        users.clone(),
        Arc::new(NullCache::new()),
        Arc::new(SvgQrEncoder::new()),
        BASE_URL,
        "test-secret",
    );

    let server = TestServer::new(app_router(state)).unwrap();
    TestApp {
        server,
        links,
        users,
    }
}

impl TestApp {
    /// Registers an account and returns its bearer token.
    pub async fn register(&self, email: &str, password: &str) -> String {
        let response = self
            .server
            .post("/auth/register")
            .json(&json!({ "email": email, "password": password }))
            .await;
        response.assert_status_ok();
        response.json::<serde_json::Value>()["token"]
            .as_str()
            .expect("token in register response")
            .to_string()
    }

    pub fn user_id(&self, email: &str) -> i64 {
        self.users
            .user_id_by_email(email)
            .expect("registered user id")
    }
}
