//! In-process [`Storage`] implementation.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use common::operations::{By, Delete, Insert, Select};
use tracerr::Traced;

use super::{Entry, Error, Key, Storage};

/// In-process [`Storage`].
///
/// Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// Stored entries.
    entries: Rc<RefCell<HashMap<Key, String>>>,

    /// [`Mode`] of this [`Memory`] storage.
    mode: Mode,
}

/// Operation mode of a [`Memory`] storage.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Mode {
    /// No limits.
    #[default]
    Unlimited,

    /// Total size of keys and values is limited to the number of bytes.
    Quota(usize),

    /// Every operation fails.
    Disabled,
}

impl Memory {
    /// Creates a new empty [`Memory`] storage without any limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty [`Memory`] storage limiting the total size of its
    /// keys and values to the provided number of bytes.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: Rc::default(),
            mode: Mode::Quota(bytes),
        }
    }

    /// Creates a new [`Memory`] storage failing every operation.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            entries: Rc::default(),
            mode: Mode::Disabled,
        }
    }

    /// Removes all the entries, as if they were cleared externally.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Fails if this [`Memory`] storage is disabled.
    fn ensure_available(&self) -> Result<(), Traced<Error>> {
        if self.mode == Mode::Disabled {
            return Err(tracerr::new!(Error::Unavailable));
        }
        Ok(())
    }
}

impl Storage<Select<By<Option<String>, Key>>> for Memory {
    type Ok = Option<String>;
    type Err = Traced<Error>;

    fn execute(
        &self,
        Select(by): Select<By<Option<String>, Key>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.ensure_available()?;
        Ok(self.entries.borrow().get(by.inner()).cloned())
    }
}

impl Storage<Insert<Entry>> for Memory {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &self,
        Insert(entry): Insert<Entry>,
    ) -> Result<Self::Ok, Self::Err> {
        self.ensure_available()?;

        let Entry { key, value } = entry;
        let mut entries = self.entries.borrow_mut();
        if let Mode::Quota(quota) = self.mode {
            let used = entries
                .iter()
                .filter(|(k, _)| **k != key)
                .map(|(k, v)| k.as_str().len() + v.len())
                .sum::<usize>();
            if used + key.as_str().len() + value.len() > quota {
                return Err(tracerr::new!(Error::QuotaExceeded(quota)));
            }
        }
        drop(entries.insert(key, value));
        Ok(())
    }
}

impl Storage<Delete<Key>> for Memory {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(&self, Delete(key): Delete<Key>) -> Result<Self::Ok, Self::Err> {
        self.ensure_available()?;
        drop(self.entries.borrow_mut().remove(&key));
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Delete, Insert, Select},
        Handler as _,
    };

    use super::{Entry, Error, Key, Memory};

    const KEY: Key = Key::new("key");

    fn get(storage: &Memory) -> Option<String> {
        storage.execute(Select(By::new(KEY))).unwrap()
    }

    #[test]
    fn inserts_and_deletes() {
        let storage = Memory::new();
        assert_eq!(get(&storage), None);

        storage.execute(Insert(Entry::new(KEY, "value"))).unwrap();
        assert_eq!(get(&storage).as_deref(), Some("value"));

        storage.execute(Insert(Entry::new(KEY, "other"))).unwrap();
        assert_eq!(get(&storage).as_deref(), Some("other"));

        storage.execute(Delete(KEY)).unwrap();
        assert_eq!(get(&storage), None);
        storage.execute(Delete(KEY)).unwrap();
    }

    #[test]
    fn clones_share_entries() {
        let storage = Memory::new();
        let clone = storage.clone();

        storage.execute(Insert(Entry::new(KEY, "value"))).unwrap();
        assert_eq!(get(&clone).as_deref(), Some("value"));

        clone.clear();
        assert_eq!(get(&storage), None);
    }

    #[test]
    fn respects_quota() {
        let storage = Memory::with_quota(10);

        storage.execute(Insert(Entry::new(KEY, "1234567"))).unwrap();
        let err = storage
            .execute(Insert(Entry::new(KEY, "12345678")))
            .unwrap_err();
        assert!(matches!(err.as_ref(), Error::QuotaExceeded(10)));
        assert_eq!(get(&storage).as_deref(), Some("1234567"));
    }

    #[test]
    fn disabled_fails_everything() {
        let storage = Memory::disabled();

        assert!(storage
            .execute(Select(By::<Option<String>, _>::new(KEY)))
            .is_err());
        assert!(storage.execute(Insert(Entry::new(KEY, "v"))).is_err());
        assert!(storage.execute(Delete(KEY)).is_err());
    }
}
