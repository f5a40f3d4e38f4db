//! [`Command`] definition.

pub mod ensure_seeded;
pub mod sign_in;
pub mod sign_out;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    ensure_seeded::EnsureSeeded, sign_in::SignIn, sign_out::SignOut,
};
