//! [`User`] read model definitions.
//!
//! [`User`]: crate::domain::User

pub mod list {
    //! [`User`]s list definitions.

    use std::{fmt, str::FromStr};

    use common::{pagination, Date};

    use crate::domain::{user::Status, User};

    use super::summary::Counts;

    /// A [`pagination::Page`] of [`User`]s.
    pub type Page = pagination::Page<User>;

    /// Arguments for selecting a [`Page`].
    pub type Arguments = pagination::Arguments;

    /// [`Page`] selector.
    #[derive(Clone, Debug, Default)]
    pub struct Selector {
        /// Pagination [`Arguments`].
        pub arguments: Arguments,

        /// [`Filter`] being applied before paginating.
        pub filter: Filter,

        /// [`StatusFilter`] being applied before paginating.
        pub status: StatusFilter,
    }

    /// Result of selecting a [`Page`] of [`User`]s.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct Listing {
        /// Selected [`Page`] of the filtered [`User`]s.
        pub page: Page,

        /// [`Counts`] over all the [`User`]s, regardless of filtering.
        pub counts: Counts,
    }

    /// Field predicates narrowing a list of [`User`]s.
    ///
    /// [`None`] and empty predicates impose no constraint.
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// Text to look for (case-insensitively) in a name, an e-mail or an
        /// organization, or in a phone number.
        pub search: Option<String>,

        /// Part of an organization name, case-insensitive.
        pub organization: Option<String>,

        /// Part of a display name, case-insensitive.
        pub name: Option<String>,

        /// Part of an e-mail, case-insensitive.
        pub email: Option<String>,

        /// Digits of a phone number.
        pub phone: Option<String>,

        /// UTC calendar day of joining.
        pub joined_on: Option<Date>,
    }

    impl Filter {
        /// Checks whether the provided [`User`] satisfies every predicate of
        /// this [`Filter`].
        ///
        /// Predicates are checked in the order: search, organization, name,
        /// e-mail, phone, joining day.
        #[must_use]
        pub fn matches(&self, user: &User) -> bool {
            let Self {
                search,
                organization,
                name,
                email,
                phone,
                joined_on,
            } = self;

            non_empty(search.as_deref().map(str::trim))
                .map_or(true, |q| searches(user, &q.to_lowercase()))
                && non_empty(organization.as_deref())
                    .map_or(true, |q| contains(user.organization.as_ref(), q))
                && non_empty(name.as_deref())
                    .map_or(true, |q| contains(user.name.as_ref(), q))
                && non_empty(email.as_deref())
                    .map_or(true, |q| contains(user.email.as_ref(), q))
                && non_empty(phone.as_deref())
                    .map_or(true, |q| user.phone.as_ref().contains(q))
                && joined_on.map_or(true, |day| user.joined_at.date() == day)
        }
    }

    /// Filters out empty predicates.
    fn non_empty(predicate: Option<&str>) -> Option<&str> {
        predicate.filter(|p| !p.is_empty())
    }

    /// Checks whether the `haystack` contains the `needle`, ignoring case.
    fn contains(haystack: &str, needle: &str) -> bool {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Checks whether the [`User`] matches the lowercased free-text `query`.
    fn searches(user: &User, query: &str) -> bool {
        [
            user.name.as_ref(),
            user.email.as_ref(),
            user.organization.as_ref(),
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(query))
            || user.phone.as_ref().contains(query)
    }

    /// Constraint on a [`User`] [`Status`].
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum StatusFilter {
        /// Any [`Status`] matches.
        #[default]
        All,

        /// Only the specified [`Status`] matches.
        Only(Status),
    }

    impl StatusFilter {
        /// Checks whether the provided [`Status`] satisfies this
        /// [`StatusFilter`].
        #[must_use]
        pub fn matches(self, status: Status) -> bool {
            match self {
                Self::All => true,
                Self::Only(s) => s == status,
            }
        }
    }

    impl From<Status> for StatusFilter {
        fn from(status: Status) -> Self {
            Self::Only(status)
        }
    }

    impl fmt::Display for StatusFilter {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::All => f.write_str("All"),
                Self::Only(s) => write!(f, "{s}"),
            }
        }
    }

    impl FromStr for StatusFilter {
        type Err = &'static str;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            if s == "All" {
                return Ok(Self::All);
            }
            Status::from_str(s)
                .map(Self::Only)
                .map_err(|_| "invalid `StatusFilter`")
        }
    }
}

pub mod summary {
    //! [`User`]s summary definitions.

    use common::Percent;

    use crate::domain::{user::Status, User};

    /// Share of [`User`]s presented as having loans.
    pub const LOANS_SHARE: Percent = Percent::whole(5);

    /// Share of [`User`]s presented as having savings.
    pub const SAVINGS_SHARE: Percent = Percent::whole(40);

    /// Summary counts of all the [`User`]s.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Counts {
        /// Number of all the [`User`]s.
        pub total: usize,

        /// Number of [`Status::Active`] [`User`]s.
        pub active: usize,

        /// Estimated number of [`User`]s with loans.
        ///
        /// Placeholder derived from [`LOANS_SHARE`] of the total, not backed
        /// by any loan data.
        pub with_loans: usize,

        /// Estimated number of [`User`]s with savings.
        ///
        /// Placeholder derived from [`SAVINGS_SHARE`] of the total, not backed
        /// by any savings data.
        pub with_savings: usize,
    }

    impl Counts {
        /// Counts the provided [`User`]s.
        #[must_use]
        pub fn of(users: &[User]) -> Self {
            let total = users.len();
            Self {
                total,
                active: users
                    .iter()
                    .filter(|u| u.status == Status::Active)
                    .count(),
                with_loans: Self::estimate(total, LOANS_SHARE),
                with_savings: Self::estimate(total, SAVINGS_SHARE),
            }
        }

        /// Estimates a metric as a fixed `share` of the `total`, rounded to
        /// the nearest integer.
        #[must_use]
        pub fn estimate(total: usize, share: Percent) -> usize {
            share.of(total)
        }
    }
}
