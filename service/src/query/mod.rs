//! [`Query`] definition.

pub mod session;
pub mod user;
pub mod users;

use std::convert::Infallible;

use common::{
    operations::{By, Select},
    Handler,
};

use crate::{
    infra::{storage::KeyValue, Collection},
    Service,
};

pub use self::session::IsAuthenticated;

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a `T`ype from the stored snapshot.
///
/// A missing, outdated or unreadable snapshot is queried as an empty
/// [`Collection`].
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct SnapshotQuery<T>(T);

impl<W, B> SnapshotQuery<By<W, B>> {
    /// Creates a new [`SnapshotQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<St, W, B> Query<SnapshotQuery<By<W, B>>> for Service<St>
where
    St: KeyValue,
    Collection: Handler<Select<By<W, B>>, Ok = W, Err = Infallible>,
{
    type Ok = W;
    type Err = Infallible;

    fn execute(
        &self,
        SnapshotQuery(by): SnapshotQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.collection().execute(Select(by))
    }
}
