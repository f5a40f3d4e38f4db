//! In-memory [`Collection`] of [`User`]s.

use std::convert::Infallible;

use common::{
    operations::{By, Select},
    pagination, Handler,
};

use crate::{
    domain::{user, User},
    read::user::{
        list::{Listing, Selector},
        summary::Counts,
    },
};

/// Resident collection of [`User`]s being queried in memory.
///
/// Every query is recomputed from the whole collection.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Collection(Vec<User>);

impl Collection {
    /// Creates a new [`Collection`] out of the provided [`User`]s.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self(users)
    }

    /// Returns all the [`User`]s of this [`Collection`].
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.0
    }

    /// Returns the number of [`User`]s in this [`Collection`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether this [`Collection`] contains no [`User`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<User>> for Collection {
    fn from(users: Vec<User>) -> Self {
        Self::new(users)
    }
}

impl Handler<Select<By<Listing, Selector>>> for Collection {
    type Ok = Listing;
    type Err = Infallible;

    fn execute(
        &self,
        Select(by): Select<By<Listing, Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let Selector {
            arguments,
            filter,
            status,
        } = by.into_inner();

        let matching = self
            .0
            .iter()
            .filter(|u| filter.matches(u) && status.matches(u.status))
            .cloned()
            .collect();

        Ok(Listing {
            page: pagination::Page::paginate(matching, arguments),
            counts: Counts::of(&self.0),
        })
    }
}

impl Handler<Select<By<Option<User>, user::Id>>> for Collection {
    type Ok = Option<User>;
    type Err = Infallible;

    fn execute(
        &self,
        Select(by): Select<By<Option<User>, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.0.iter().find(|u| u.id == id).cloned())
    }
}

impl Handler<Select<By<Counts, ()>>> for Collection {
    type Ok = Counts;
    type Err = Infallible;

    fn execute(
        &self,
        _: Select<By<Counts, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(Counts::of(&self.0))
    }
}
