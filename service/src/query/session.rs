//! [`Query`] for checking a [`Session`].

use std::convert::Infallible;

use common::operations::{By, Select};
use tracing as log;

use crate::{
    domain::Session,
    infra::storage::{Key, KeyValue},
    Service,
};

use super::Query;

/// [`Query`] checking whether the [`Session`] is signed in.
///
/// Unreadable [`Session`] flag is treated as [`Session::SignedOut`].
#[derive(Clone, Copy, Debug, Default)]
pub struct IsAuthenticated;

impl<St: KeyValue> Query<IsAuthenticated> for Service<St> {
    type Ok = bool;
    type Err = Infallible;

    fn execute(&self, _: IsAuthenticated) -> Result<Self::Ok, Self::Err> {
        let flag = self
            .storage()
            .execute(Select(By::new(Key::SESSION)))
            .unwrap_or_else(|e| {
                log::warn!("Failed to read `Session` flag: {e}");
                None
            });
        Ok(Session::from_flag(flag.as_deref()).is_signed_in())
    }
}
