//! Application services orchestrating domain logic over the stores.

mod analytics_service;
mod auth_service;
mod link_service;
mod redirect_service;

pub use analytics_service::AnalyticsService;
pub use auth_service::{AuthService, AuthSession, Claims};
pub use link_service::LinkService;
pub use redirect_service::RedirectService;
