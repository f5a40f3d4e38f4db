//! [`Config`]-related definitions.

use std::path::PathBuf;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error};
use secrecy::SecretBox;
use serde::Deserialize;
use service::{
    domain::{
        session::{Credentials, Password},
        user,
    },
    generator, snapshot,
};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Storage configuration.
    #[serde(default)]
    pub storage: Storage,

    /// Dataset configuration.
    #[serde(default)]
    pub dataset: Dataset,

    /// Authentication configuration.
    #[serde(default)]
    pub auth: Auth,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }

    /// Builds a [`service::Config`] out of this [`Config`].
    ///
    /// # Errors
    ///
    /// If the configured [`Auth`] credentials are malformed.
    pub fn service(&self) -> Result<service::Config, InvalidCredentials> {
        Ok(service::Config {
            schema_version: snapshot::Version::new(
                self.dataset.schema_version,
            ),
            dataset: self.dataset.into(),
            credentials: Credentials::try_from(&self.auth)?,
        })
    }
}

/// Storage configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Storage {
    /// Directory to keep the stored entries in.
    #[default(PathBuf::from(".directory"))]
    pub path: PathBuf,
}

/// Dataset configuration.
///
/// Missing fields default to the [`generator::Config`] and
/// [`snapshot::Version`] defaults.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct Dataset {
    /// Seed of the generated users.
    pub seed: u32,

    /// Number of the generated users.
    pub count: u32,

    /// Schema version of the stored users.
    ///
    /// Bumping it regenerates the stored users.
    pub schema_version: u32,
}

impl Default for Dataset {
    fn default() -> Self {
        let generator::Config { seed, count } = generator::Config::default();
        Self {
            seed,
            count,
            schema_version: snapshot::Version::default().get(),
        }
    }
}

impl From<Dataset> for generator::Config {
    fn from(value: Dataset) -> Self {
        let Dataset {
            seed,
            count,
            schema_version: _,
        } = value;
        Self { seed, count }
    }
}

/// Authentication configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Auth {
    /// E-mail to sign in with.
    #[default("user@lendsqr.com".to_owned())]
    pub email: String,

    /// Password to sign in with.
    #[default("password".to_owned())]
    pub password: String,
}

impl TryFrom<&Auth> for Credentials {
    type Error = InvalidCredentials;

    fn try_from(auth: &Auth) -> Result<Self, Self::Error> {
        let email = user::Email::new(auth.email.trim().to_lowercase())
            .ok_or(InvalidCredentials)?;
        let password =
            Password::new(auth.password.as_str()).ok_or(InvalidCredentials)?;
        Ok(Self {
            email,
            password: SecretBox::new(Box::new(password)),
        })
    }
}

/// Error of malformed [`Auth`] credentials.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("`auth.email` must be an e-mail and `auth.password` must have 6 \
           to 128 characters")]
pub struct InvalidCredentials;

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    Info,

    /// Designates hazardous situations.
    #[default]
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
