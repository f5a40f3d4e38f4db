//! Domain entities definitions.

pub mod session;
pub mod user;

pub use self::{session::Session, user::User};
