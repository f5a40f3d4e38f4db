//! [`Command`] for seeding the stored snapshot.

use std::convert::Infallible;

use common::DateTime;
use tracing as log;

#[cfg(doc)]
use crate::domain::User;
use crate::{
    generator,
    infra::storage::KeyValue,
    snapshot::{self, LoadError},
    Service,
};

use super::Command;

/// [`Command`] for ensuring a valid snapshot of the configured
/// [`snapshot::Version`] is stored, generating it if there is none.
///
/// Storage failures are logged and result in [`Outcome::Skipped`].
#[derive(Clone, Copy, Debug)]
pub struct EnsureSeeded {
    /// [`DateTime`] the joining offsets of the generated [`User`]s are
    /// subtracted from.
    pub anchor: DateTime,
}

impl EnsureSeeded {
    /// Creates a new [`EnsureSeeded`] [`Command`] anchored at the current
    /// [`DateTime`].
    #[must_use]
    pub fn now() -> Self {
        Self {
            anchor: DateTime::now(),
        }
    }
}

/// Outcome of [`EnsureSeeded`] [`Command`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// A new snapshot of the specified number of [`User`]s has been stored.
    Seeded(usize),

    /// A valid snapshot is stored already.
    Unchanged,

    /// Storage failed, so nothing has been stored.
    Skipped,
}

impl<St: KeyValue> Command<EnsureSeeded> for Service<St> {
    type Ok = Outcome;
    type Err = Infallible;

    fn execute(&self, cmd: EnsureSeeded) -> Result<Self::Ok, Self::Err> {
        let version = self.config().schema_version;

        match snapshot::load(self.storage(), version) {
            Ok(_) => return Ok(Outcome::Unchanged),
            Err(e) if matches!(e.as_ref(), LoadError::Storage(_)) => {
                log::warn!("Skipping seeding: {e}");
                return Ok(Outcome::Skipped);
            }
            Err(e) => log::info!("Seeding snapshot v{version}: {e}"),
        }

        let users = generator::generate(self.config().dataset, cmd.anchor);
        if let Err(e) = snapshot::store(self.storage(), version, &users) {
            log::warn!("Failed to store snapshot v{version}: {e}");
            return Ok(Outcome::Skipped);
        }

        log::info!("Stored snapshot v{version} of {} users", users.len());
        Ok(Outcome::Seeded(users.len()))
    }
}
