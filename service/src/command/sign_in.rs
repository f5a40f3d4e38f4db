//! [`Command`] for signing in.

use common::operations::Insert;
use derive_more::{Display, Error};
use secrecy::{ExposeSecret as _, SecretBox};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::session::Credentials;
use crate::{
    domain::{
        session::{Password, Session},
        user,
    },
    infra::storage::{Entry, Key, KeyValue},
    Service,
};

use super::Command;

/// [`Command`] for signing in with [`Credentials`].
///
/// Failing to persist the [`Session`] flag is logged and doesn't fail the
/// [`Command`].
#[derive(Clone, Debug)]
pub struct SignIn {
    /// [`user::Email`] of the operator.
    pub email: user::Email,

    /// [`Password`] of the operator.
    pub password: SecretBox<Password>,
}

impl<St: KeyValue> Command<SignIn> for Service<St> {
    type Ok = Session;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: SignIn) -> Result<Self::Ok, Self::Err> {
        let SignIn { email, password } = cmd;

        if !self
            .config()
            .credentials
            .matches(&email, password.expose_secret())
        {
            return Err(tracerr::new!(ExecutionError::InvalidCredentials));
        }

        if let Err(e) = self
            .storage()
            .execute(Insert(Entry::new(Key::SESSION, Session::FLAG)))
        {
            log::warn!("Failed to persist `Session` flag: {e}");
        }

        Ok(Session::SignedIn)
    }
}

/// Error of [`SignIn`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// Provided credentials don't match the configured [`Credentials`].
    #[display("Invalid credentials")]
    InvalidCredentials,
}
