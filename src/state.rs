//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, AuthService, LinkService, RedirectService};
use crate::domain::repositories::{LinkRepository, UserRepository};
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::qr::QrEncoder;

/// Service container cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub qr_encoder: Arc<dyn QrEncoder>,
}

impl AppState {
    /// Wires the services over the given stores and cache.
    ///
    /// Taking the repositories as trait objects lets tests assemble the
    /// full router over in-memory stores.
    pub fn new(
        links: Arc<dyn LinkRepository>,
        users: Arc<dyn UserRepository>,
        cache: Arc<dyn CacheService>,
        qr_encoder: Arc<dyn QrEncoder>,
        base_url: &str,
        jwt_secret: &str,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(users, jwt_secret)),
            link_service: Arc::new(LinkService::new(links.clone(), cache.clone(), base_url)),
            redirect_service: Arc::new(RedirectService::new(links.clone(), cache)),
            analytics_service: Arc::new(AnalyticsService::new(links)),
            qr_encoder,
        }
    }
}
