//! Key-value [`Storage`] the snapshot lives in.

#[cfg(feature = "file")]
pub mod file;
pub mod memory;

#[cfg(feature = "file")]
use std::io;
use std::string::FromUtf8Error;

use common::operations::{By, Delete, Insert, Select};
use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;

#[cfg(feature = "file")]
pub use self::file::File;
pub use self::memory::Memory;

/// Storage operation.
pub use common::Handler as Storage;

/// Key of a [`Storage`] entry.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub struct Key(&'static str);

impl Key {
    /// [`Key`] of the serialized users collection.
    pub const USERS: Self = Self("users");

    /// [`Key`] of the users collection schema version marker.
    pub const USERS_VERSION: Self = Self("users:v");

    /// [`Key`] of the signed-in session flag.
    pub const SESSION: Self = Self("auth");

    /// Creates a new [`Key`].
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    /// Returns the string representation of this [`Key`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// [`Storage`] entry to be inserted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    /// [`Key`] of this [`Entry`].
    pub key: Key,

    /// Value of this [`Entry`].
    pub value: String,
}

impl Entry {
    /// Creates a new [`Entry`].
    #[must_use]
    pub fn new(key: Key, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// [`Storage`] supporting all the key-value operations.
pub trait KeyValue:
    Storage<
        Select<By<Option<String>, Key>>,
        Ok = Option<String>,
        Err = Traced<Error>,
    > + Storage<Insert<Entry>, Ok = (), Err = Traced<Error>>
    + Storage<Delete<Key>, Ok = (), Err = Traced<Error>>
{
}

impl<T> KeyValue for T where
    T: Storage<
            Select<By<Option<String>, Key>>,
            Ok = Option<String>,
            Err = Traced<Error>,
        > + Storage<Insert<Entry>, Ok = (), Err = Traced<Error>>
        + Storage<Delete<Key>, Ok = (), Err = Traced<Error>>
{
}

/// [`Storage`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`Storage`] is disabled.
    #[display("`Storage` is unavailable")]
    #[from(ignore)]
    Unavailable,

    /// [`Storage`] quota is exceeded.
    #[display("`Storage` quota of {_0} bytes is exceeded")]
    #[from(ignore)]
    QuotaExceeded(#[error(not(source))] usize),

    /// Stored value is not a valid UTF-8 string.
    #[display("Stored value is corrupted: {_0}")]
    Corrupted(FromUtf8Error),

    /// I/O operation failed.
    #[cfg(feature = "file")]
    #[display("I/O operation failed: {_0}")]
    Io(io::Error),
}
