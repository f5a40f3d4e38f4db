//! [`Query`] collection related to the multiple [`User`]s.

use common::operations::By;

#[cfg(doc)]
use crate::{domain::User, Query};
use crate::read;

use super::SnapshotQuery;

/// Queries a filtered [`read::user::list::Page`] of [`User`]s along with
/// their [`read::user::summary::Counts`].
pub type List =
    SnapshotQuery<By<read::user::list::Listing, read::user::list::Selector>>;

/// Queries [`read::user::summary::Counts`] of all the [`User`]s.
pub type Summary = SnapshotQuery<By<read::user::summary::Counts, ()>>;
