//! HTTP request handlers.

mod analytics;
mod auth;
mod health;
mod links;
mod redirect;
mod shorten;

pub use analytics::analytics_handler;
pub use auth::{login_handler, register_handler};
pub use health::health_handler;
pub use links::{delete_link_handler, user_links_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
