//! [`Session`] definitions.

use std::str::FromStr;

use derive_more::{Display, From};
use secrecy::{zeroize::Zeroize, CloneableSecret, ExposeSecret as _, SecretBox};

use crate::domain::user;

/// Dashboard session of an operator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Session {
    /// Operator has signed in.
    SignedIn,

    /// Operator has not signed in, or has signed out.
    SignedOut,
}

impl Session {
    /// Stored representation of a [`Session::SignedIn`] flag.
    pub const FLAG: &'static str = "1";

    /// Reads a [`Session`] out of its stored flag.
    #[must_use]
    pub fn from_flag(flag: Option<&str>) -> Self {
        if flag == Some(Self::FLAG) {
            Self::SignedIn
        } else {
            Self::SignedOut
        }
    }

    /// Indicates whether this [`Session`] is [`Session::SignedIn`].
    #[must_use]
    pub fn is_signed_in(self) -> bool {
        self == Self::SignedIn
    }
}

/// Credentials allowing an operator to sign in.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// [`user::Email`] of the operator.
    pub email: user::Email,

    /// [`Password`] of the operator.
    pub password: SecretBox<Password>,
}

impl Credentials {
    /// Checks whether the provided `email` and `password` match these
    /// [`Credentials`].
    ///
    /// E-mails are compared case-insensitively.
    #[must_use]
    pub fn matches(&self, email: &user::Email, password: &Password) -> bool {
        email.to_lowercase() == self.email.to_lowercase()
            && password == self.password.expose_secret()
    }
}

/// Password of an operator.
#[derive(Clone, Debug, Display, Eq, From, PartialEq)]
#[from(&str, String)]
pub struct Password(String);

impl Password {
    /// Creates a new [`Password`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `password` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// Creates a new [`Password`] if the given `password` is valid.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Option<Self> {
        let password = password.into();
        Self::check(&password).then_some(Self(password))
    }

    /// Checks whether the given `password` is a valid [`Password`].
    fn check(password: impl AsRef<str>) -> bool {
        let password = password.as_ref();
        password.len() >= 6 && password.len() <= 128
    }
}

impl FromStr for Password {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Password`")
    }
}

impl CloneableSecret for Password {}
impl Zeroize for Password {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod spec {
    use secrecy::SecretBox;

    use super::{Credentials, Password, Session};
    use crate::domain::user;

    fn credentials() -> Credentials {
        Credentials {
            email: user::Email::new("user@lendsqr.com").unwrap(),
            password: SecretBox::new(Box::new(
                Password::new("password").unwrap(),
            )),
        }
    }

    #[test]
    fn matches_case_insensitive_email() {
        let creds = credentials();
        let password = Password::new("password").unwrap();

        assert!(creds.matches(
            &user::Email::new("User@LendSQR.com").unwrap(),
            &password,
        ));
        assert!(!creds.matches(
            &user::Email::new("other@lendsqr.com").unwrap(),
            &password,
        ));
        assert!(!creds.matches(
            &user::Email::new("user@lendsqr.com").unwrap(),
            &Password::new("Password").unwrap(),
        ));
    }

    #[test]
    fn passwords_have_minimum_length() {
        assert!(Password::new("12345").is_none());
        assert!(Password::new("123456").is_some());
    }

    #[test]
    fn reads_flags() {
        assert_eq!(Session::from_flag(Some("1")), Session::SignedIn);
        assert_eq!(Session::from_flag(Some("0")), Session::SignedOut);
        assert_eq!(Session::from_flag(None), Session::SignedOut);
    }
}
