//! Persisted snapshot of the [`User`]s collection.
//!
//! A snapshot consists of the serialized [`User`]s stored under
//! [`Key::USERS`] and the schema [`Version`] marker stored under
//! [`Key::USERS_VERSION`]. It's valid only when the marker equals the
//! expected [`Version`] and the payload parses.

use std::string::FromUtf8Error;

use common::operations::{By, Delete, Insert, Select};
use derive_more::{Display, Error, From};
use smart_default::SmartDefault;
use tracerr::Traced;

use crate::{
    domain::User,
    infra::storage::{self, Entry, Key, KeyValue},
};

/// Schema version of a snapshot.
///
/// Bumping it forces the stored [`User`]s to be regenerated.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, SmartDefault)]
pub struct Version(#[default(5)] u32);

impl Version {
    /// Creates a new [`Version`].
    #[must_use]
    pub const fn new(version: u32) -> Self {
        Self(version)
    }

    /// Returns the numeric value of this [`Version`].
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Checks whether the provided stored marker denotes this [`Version`].
    fn is_marked_by(self, marker: &str) -> bool {
        marker == self.to_string()
    }
}

/// Loads the [`User`]s of the snapshot with the provided [`Version`].
///
/// # Errors
///
/// - If the provided `storage` fails.
/// - If there is no valid snapshot of the provided [`Version`].
pub fn load<St: KeyValue>(
    storage: &St,
    version: Version,
) -> Result<Vec<User>, Traced<LoadError>> {
    use LoadError as E;

    let marker = storage
        .execute(Select(By::new(Key::USERS_VERSION)))
        .map_err(tracerr::map_from_and_wrap!(=> E))?
        .ok_or_else(|| tracerr::new!(E::Missing))?;
    if !version.is_marked_by(&marker) {
        return Err(tracerr::new!(E::VersionMismatch(marker)));
    }

    let payload = storage
        .execute(Select(By::new(Key::USERS)))
        .map_err(tracerr::map_from_and_wrap!(=> E))?
        .ok_or_else(|| tracerr::new!(E::Missing))?;

    serde_json::from_str(&payload).map_err(tracerr::from_and_wrap!(=> E))
}

/// Replaces the snapshot with the provided [`User`]s of the provided
/// [`Version`].
///
/// The marker is removed first and written last, so an interrupted store
/// leaves no valid snapshot behind.
///
/// # Errors
///
/// - If the provided `users` cannot be serialized.
/// - If the provided `storage` fails.
pub fn store<St: KeyValue>(
    storage: &St,
    version: Version,
    users: &[User],
) -> Result<(), Traced<StoreError>> {
    use StoreError as E;

    let payload =
        serde_json::to_string(users).map_err(tracerr::from_and_wrap!(=> E))?;

    storage
        .execute(Delete(Key::USERS_VERSION))
        .map_err(tracerr::map_from_and_wrap!(=> E))?;
    storage
        .execute(Insert(Entry::new(Key::USERS, payload)))
        .map_err(tracerr::map_from_and_wrap!(=> E))?;
    storage
        .execute(Insert(Entry::new(Key::USERS_VERSION, version.to_string())))
        .map_err(tracerr::map_from_and_wrap!(=> E))
}

/// Error of [`load`]ing a snapshot.
#[derive(Debug, Display, Error, From)]
pub enum LoadError {
    /// [`Storage`] error.
    ///
    /// [`Storage`]: storage::Storage
    #[display("`Storage` operation failed: {_0}")]
    #[from(ignore)]
    Storage(storage::Error),

    /// Snapshot is not stored.
    #[display("Snapshot is missing")]
    Missing,

    /// Stored snapshot has another [`Version`].
    #[display("Snapshot has mismatched version `{_0}`")]
    #[from(ignore)]
    VersionMismatch(#[error(not(source))] String),

    /// Stored snapshot cannot be parsed.
    #[display("Snapshot is malformed: {_0}")]
    Malformed(serde_json::Error),

    /// Stored snapshot is not a valid UTF-8 string.
    #[display("Snapshot is corrupted: {_0}")]
    #[from(ignore)]
    Corrupted(FromUtf8Error),
}

impl From<storage::Error> for LoadError {
    fn from(err: storage::Error) -> Self {
        use storage::Error as E;

        match err {
            E::Corrupted(e) => Self::Corrupted(e),
            e @ (E::Unavailable | E::QuotaExceeded(_)) => Self::Storage(e),
            #[cfg(feature = "file")]
            e @ E::Io(_) => Self::Storage(e),
        }
    }
}

/// Error of [`store`]ing a snapshot.
#[derive(Debug, Display, Error, From)]
pub enum StoreError {
    /// [`Storage`] error.
    ///
    /// [`Storage`]: storage::Storage
    #[display("`Storage` operation failed: {_0}")]
    Storage(storage::Error),

    /// [`User`]s cannot be serialized.
    #[display("Failed to serialize `User`s: {_0}")]
    Serialize(serde_json::Error),
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Insert, Select},
        DateTime, Handler as _,
    };

    use crate::{
        generator,
        infra::storage::{Entry, Key, Memory},
    };

    use super::{load, store, LoadError, Version};

    fn users() -> Vec<crate::domain::User> {
        let anchor =
            DateTime::from_rfc3339("2024-06-01T12:00:00.000Z").unwrap();
        generator::generate(
            generator::Config { seed: 7, count: 20 },
            anchor,
        )
    }

    #[test]
    fn stores_and_loads() {
        let storage = Memory::new();
        let users = users();

        store(&storage, Version::default(), &users).unwrap();

        assert_eq!(load(&storage, Version::default()).unwrap(), users);
        assert_eq!(
            storage
                .execute(Select(By::new(Key::USERS_VERSION)))
                .unwrap()
                .as_deref(),
            Some("5"),
        );
    }

    #[test]
    fn persists_documented_layout() {
        let storage = Memory::new();
        store(&storage, Version::default(), &users()).unwrap();

        let payload = storage
            .execute(Select(By::new(Key::USERS)))
            .unwrap()
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&payload).unwrap();
        let first = &json[0];

        assert_eq!(first["id"], 1);
        for field in [
            "organization",
            "username",
            "email",
            "phoneNumber",
            "dateJoined",
            "status",
        ] {
            assert!(first[field].is_string(), "`{field}` is not a string");
        }
    }

    #[test]
    fn rejects_missing_snapshot() {
        let err = load(&Memory::new(), Version::default()).unwrap_err();

        assert!(matches!(err.as_ref(), LoadError::Missing));
    }

    #[test]
    fn rejects_another_version() {
        let storage = Memory::new();
        store(&storage, Version::new(4), &users()).unwrap();

        let err = load(&storage, Version::default()).unwrap_err();

        assert!(
            matches!(err.as_ref(), LoadError::VersionMismatch(v) if v == "4"),
        );
    }

    #[test]
    fn rejects_malformed_payload() {
        let storage = Memory::new();
        store(&storage, Version::default(), &users()).unwrap();
        storage
            .execute(Insert(Entry::new(Key::USERS, "{not json")))
            .unwrap();

        let err = load(&storage, Version::default()).unwrap_err();

        assert!(matches!(err.as_ref(), LoadError::Malformed(_)));
    }

    #[test]
    fn rejects_missing_payload() {
        let storage = Memory::new();
        storage
            .execute(Insert(Entry::new(Key::USERS_VERSION, "5")))
            .unwrap();

        let err = load(&storage, Version::default()).unwrap_err();

        assert!(matches!(err.as_ref(), LoadError::Missing));
    }

    #[test]
    fn fails_on_unavailable_storage() {
        let err = load(&Memory::disabled(), Version::default()).unwrap_err();

        assert!(matches!(err.as_ref(), LoadError::Storage(_)));
    }

    #[test]
    fn treats_corrupted_storage_values_as_corrupted_snapshot() {
        let err = LoadError::from(crate::infra::storage::Error::Corrupted(
            String::from_utf8(vec![0xff]).unwrap_err(),
        ));

        assert!(matches!(err, LoadError::Corrupted(_)));
    }
}
