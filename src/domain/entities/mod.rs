//! Core business entities.

mod click;
mod link;
mod user;

pub use click::{Click, DIRECT_REFERRER, NewClick};
pub use link::{Link, NewLink};
pub use user::{NewUser, User};
