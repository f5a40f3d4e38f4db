//! Service contains the business logic of the user directory: synthetic
//! dataset generation, snapshot persistence and in-memory querying.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod generator;
pub mod infra;
pub mod query;
pub mod read;
pub mod snapshot;

use tracing as log;

use crate::{
    domain::session::Credentials,
    infra::{storage::KeyValue, Collection},
};

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// [`snapshot::Version`] the stored [`User`]s must have.
    ///
    /// [`User`]: domain::User
    pub schema_version: snapshot::Version,

    /// [`generator::Config`] of seeding.
    pub dataset: generator::Config,

    /// [`Credentials`] allowing to sign in.
    pub credentials: Credentials,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<St> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Storage`] of this [`Service`].
    ///
    /// [`Storage`]: infra::Storage
    storage: St,
}

impl<St> Service<St> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, storage: St) -> Self {
        Self { config, storage }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Storage`] of this [`Service`].
    ///
    /// [`Storage`]: infra::Storage
    #[must_use]
    pub fn storage(&self) -> &St {
        &self.storage
    }
}

impl<St: KeyValue> Service<St> {
    /// Loads the resident [`Collection`] out of the stored snapshot.
    ///
    /// Any failure results in an empty [`Collection`].
    fn collection(&self) -> Collection {
        snapshot::load(&self.storage, self.config.schema_version)
            .map_or_else(
                |e| {
                    log::warn!("Querying empty `Collection`: {e}");
                    Collection::default()
                },
                Collection::new,
            )
    }
}
