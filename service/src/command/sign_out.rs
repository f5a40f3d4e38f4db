//! [`Command`] for signing out.

use std::convert::Infallible;

use common::operations::Delete;
use tracing as log;

use crate::{
    domain::Session,
    infra::storage::{Key, KeyValue},
    Service,
};

use super::Command;

/// [`Command`] for signing out by removing the [`Session`] flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignOut;

impl<St: KeyValue> Command<SignOut> for Service<St> {
    type Ok = Session;
    type Err = Infallible;

    fn execute(&self, _: SignOut) -> Result<Self::Ok, Self::Err> {
        if let Err(e) = self.storage().execute(Delete(Key::SESSION)) {
            log::warn!("Failed to remove `Session` flag: {e}");
        }
        Ok(Session::SignedOut)
    }
}
