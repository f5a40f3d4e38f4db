//! [`User`] definitions.

use std::{num::NonZeroU32, str::FromStr, sync::LazyLock};

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Synthetic platform user.
///
/// Field names follow the persisted snapshot layout.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct User {
    /// ID of this [`User`].
    pub id: Id,

    /// [`Organization`] this [`User`] belongs to.
    pub organization: Organization,

    /// Display [`Name`] of this [`User`].
    #[serde(rename = "username")]
    pub name: Name,

    /// [`Email`] of this [`User`].
    pub email: Email,

    /// [`Phone`] of this [`User`].
    #[serde(rename = "phoneNumber")]
    pub phone: Phone,

    /// [`DateTime`] when this [`User`] joined.
    #[serde(rename = "dateJoined")]
    pub joined_at: JoiningDateTime,

    /// [`Status`] of this [`User`].
    pub status: Status,
}

/// ID of a [`User`].
///
/// IDs are assigned sequentially starting from `1`.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(NonZeroU32);

impl Id {
    /// Creates a new [`Id`] out of the provided number.
    ///
    /// [`None`] is returned for `0`.
    #[must_use]
    pub const fn new(id: u32) -> Option<Self> {
        match NonZeroU32::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Returns the numeric value of this [`Id`].
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

/// Name of an organization a [`User`] belongs to.
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str)]
#[serde(transparent)]
pub struct Organization(String);

impl Organization {
    /// Creates a new [`Organization`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Organization`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Name::check(&name).then_some(Self(name))
    }

    /// Returns the e-mail domain of this [`Organization`]: its lowercased
    /// name stripped to ASCII letters and digits, followed by `.com`.
    #[must_use]
    pub fn domain(&self) -> String {
        let slug = self
            .0
            .to_lowercase()
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>();
        format!("{slug}.com")
    }
}

/// Display name of a [`User`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Email address of a [`User`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `address` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex")
        });

        REGEX.is_match(address.as_ref())
    }

    /// Returns this [`Email`] lowercased.
    #[must_use]
    pub fn to_lowercase(&self) -> Self {
        Self(self.0.to_lowercase())
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Phone number of a [`User`]: 11 digits without any separators.
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Creates a new [`Phone`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `number` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Creates a new [`Phone`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`Phone`].
    fn check(number: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Phone`] format.
        static REGEX: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"^\d{11}$").expect("valid regex"));

        REGEX.is_match(number.as_ref())
    }
}

impl FromStr for Phone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Phone`")
    }
}

define_kind! {
    #[doc = "Status of a [`User`]."]
    enum Status {
        #[doc = "User is active."]
        Active = 1,

        #[doc = "User is inactive."]
        Inactive = 2,

        #[doc = "User awaits activation."]
        Pending = 3,

        #[doc = "User is blacklisted."]
        Blacklisted = 4,
    }
}

/// [`DateTime`] when a [`User`] joined.
pub type JoiningDateTime = DateTimeOf<(User, unit::Joining)>;

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::{Email, Id, Name, Organization, Phone, Status};

    #[test]
    fn organization_domain() {
        let org = Organization::new("CrediWave").unwrap();
        assert_eq!(org.domain(), "crediwave.com");

        let org = Organization::new("iPay 2-Go!").unwrap();
        assert_eq!(org.domain(), "ipay2go.com");
    }

    #[test]
    fn ids_are_positive() {
        assert_eq!(Id::new(1).map(Id::get), Some(1));
        assert!(Id::new(0).is_none());
        assert_eq!(Id::from_str("42").unwrap().get(), 42);
        assert!(Id::from_str("0").is_err());
        assert!(Id::from_str("abc").is_err());
    }

    #[test]
    fn validates_formats() {
        assert!(Phone::new("08012345678").is_some());
        assert!(Phone::new("0801234567").is_none());
        assert!(Phone::new("080-1234-567").is_none());

        assert!(Email::new("grace@lendsqr.com").is_some());
        assert!(Email::new("grace@lendsqr").is_none());
        assert!(Email::new("grace lendsqr.com").is_none());

        assert!(Name::new("Grace Effiom").is_some());
        assert!(Name::new(" Grace").is_none());
        assert!(Name::new("").is_none());
    }

    #[test]
    fn statuses_are_ordered() {
        assert_eq!(
            Status::all(),
            [
                Status::Active,
                Status::Inactive,
                Status::Pending,
                Status::Blacklisted,
            ],
        );
        assert_eq!(Status::Blacklisted.to_string(), "Blacklisted");
        assert_eq!(Status::from_str("Pending").unwrap(), Status::Pending);
        assert!(Status::from_str("pending").is_err());
    }
}
