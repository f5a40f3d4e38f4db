//! Infrastructure layer.

pub mod collection;
pub mod storage;

#[cfg(feature = "file")]
pub use self::storage::File;
pub use self::{
    collection::Collection,
    storage::{Memory, Storage},
};
