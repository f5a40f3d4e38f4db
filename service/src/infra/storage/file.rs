//! File-system [`Storage`] implementation.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use common::operations::{By, Delete, Insert, Select};
use tracerr::Traced;

use super::{Entry, Error, Key, Storage};

/// [`Storage`] keeping every entry in a separate file of a directory.
///
/// Entries are replaced atomically: a value is written into a temporary
/// file first and then renamed over the previous one.
#[derive(Clone, Debug)]
pub struct File {
    /// Directory the entries are stored in.
    dir: PathBuf,
}

impl File {
    /// Creates a new [`File`] storage in the provided directory.
    ///
    /// The directory is created lazily, on the first insertion.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory of this [`File`] storage.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path of the file storing the provided [`Key`].
    fn path(&self, key: Key) -> PathBuf {
        self.dir.join(
            key.as_str()
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect::<String>(),
        )
    }
}

impl Storage<Select<By<Option<String>, Key>>> for File {
    type Ok = Option<String>;
    type Err = Traced<Error>;

    fn execute(
        &self,
        Select(by): Select<By<Option<String>, Key>>,
    ) -> Result<Self::Ok, Self::Err> {
        let bytes = match fs::read(self.path(by.into_inner())) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(tracerr::new!(Error::Io(e))),
        };
        String::from_utf8(bytes)
            .map(Some)
            .map_err(tracerr::from_and_wrap!(=> Error))
    }
}

impl Storage<Insert<Entry>> for File {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &self,
        Insert(entry): Insert<Entry>,
    ) -> Result<Self::Ok, Self::Err> {
        let Entry { key, value } = entry;

        fs::create_dir_all(&self.dir)
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        let path = self.path(key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value)
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|e| {
                _ = fs::remove_file(&tmp);
                tracerr::new!(Error::Io(e))
            })
    }
}

impl Storage<Delete<Key>> for File {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(&self, Delete(key): Delete<Key>) -> Result<Self::Ok, Self::Err> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(tracerr::new!(Error::Io(e))),
        }
    }
}

#[cfg(test)]
mod spec {
    use std::fs;

    use common::{
        operations::{By, Delete, Insert, Select},
        Handler as _,
    };

    use super::{Entry, Error, File, Key};

    fn get(storage: &File, key: Key) -> Option<String> {
        storage.execute(Select(By::new(key))).unwrap()
    }

    #[test]
    fn persists_entries_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let storage = File::new(dir.path().join("nested"));

        assert_eq!(get(&storage, Key::USERS_VERSION), None);
        storage
            .execute(Insert(Entry::new(Key::USERS_VERSION, "5")))
            .unwrap();

        let reopened = File::new(storage.dir());
        assert_eq!(get(&reopened, Key::USERS_VERSION).as_deref(), Some("5"));
        assert_eq!(get(&reopened, Key::USERS), None);
        assert!(dir.path().join("nested").join("users_v").exists());
    }

    #[test]
    fn deletes_entries() {
        let dir = tempfile::tempdir().unwrap();
        let storage = File::new(dir.path());

        storage.execute(Insert(Entry::new(Key::SESSION, "1"))).unwrap();
        storage.execute(Delete(Key::SESSION)).unwrap();
        assert_eq!(get(&storage, Key::SESSION), None);

        storage.execute(Delete(Key::SESSION)).unwrap();
    }

    #[test]
    fn reports_non_utf8_values_as_corrupted() {
        let dir = tempfile::tempdir().unwrap();
        let storage = File::new(dir.path());
        fs::write(dir.path().join("users"), [0xff, 0xfe, b'[']).unwrap();

        let err = storage.execute(Select(By::new(Key::USERS))).unwrap_err();

        assert!(matches!(err.as_ref(), Error::Corrupted(_)));
    }

    #[test]
    fn cleans_up_after_failed_replacement() {
        let dir = tempfile::tempdir().unwrap();
        let storage = File::new(dir.path());
        fs::create_dir_all(dir.path().join("users").join("occupied")).unwrap();

        let res = storage.execute(Insert(Entry::new(Key::USERS, "[]")));

        assert!(res.is_err());
        assert!(!dir.path().join("users.tmp").exists());
        assert!(dir.path().join("users").is_dir());
    }
}
