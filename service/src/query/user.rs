//! [`Query`] collection related to a single [`User`].

use common::operations::By;

use crate::domain::{user, User};
#[cfg(doc)]
use crate::Query;

use super::SnapshotQuery;

/// Queries a [`User`] by its [`user::Id`].
pub type ById = SnapshotQuery<By<Option<User>, user::Id>>;
