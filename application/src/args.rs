//! [`Args`] definitions.

use clap::{Parser, Subcommand};
use common::{
    pagination::{Arguments, Size},
    Date,
};
use service::read::user::list::{Filter, Selector, StatusFilter};

/// Command-line front end of the user directory.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Command`] to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate and store the users, unless they're stored already.
    Seed,

    /// Sign in with the configured credentials.
    Login {
        /// E-mail to sign in with.
        #[arg(long)]
        email: String,

        /// Password to sign in with.
        #[arg(long)]
        password: String,
    },

    /// Sign out.
    Logout,

    /// List a page of the filtered users.
    Users(Users),

    /// Show details of a single user.
    User {
        /// ID of the user.
        id: String,
    },

    /// Show summary counts of all the users.
    Summary,
}

/// Arguments of the [`Command::Users`].
#[derive(Clone, Debug, clap::Args)]
pub struct Users {
    /// Text to look for in names, e-mails, organizations and phones.
    #[arg(long)]
    pub search: Option<String>,

    /// Part of an organization name.
    #[arg(long)]
    pub organization: Option<String>,

    /// Part of a username.
    #[arg(long)]
    pub name: Option<String>,

    /// Part of an e-mail.
    #[arg(long)]
    pub email: Option<String>,

    /// Part of a phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// Day of joining, as `YYYY-MM-DD`.
    #[arg(long)]
    pub joined_on: Option<Date>,

    /// Status to narrow to: `Active`, `Inactive`, `Pending`, `Blacklisted`
    /// or `All`.
    #[arg(long, default_value_t = StatusFilter::All)]
    pub status: StatusFilter,

    /// Page number, starting from 1.
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Page size: 10, 20, 50 or 100.
    #[arg(long, default_value_t = Size::Ten)]
    pub size: Size,
}

impl From<Users> for Selector {
    fn from(args: Users) -> Self {
        let Users {
            search,
            organization,
            name,
            email,
            phone,
            joined_on,
            status,
            page,
            size,
        } = args;

        Self {
            arguments: Arguments::new(page, size),
            filter: Filter {
                search,
                organization,
                name,
                email,
                phone,
                joined_on,
            },
            status,
        }
    }
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;
    use common::pagination::Size;
    use service::{
        domain::user::Status,
        read::user::list::{Selector, StatusFilter},
    };

    use super::{Args, Command};

    #[test]
    fn parses_users_filters() {
        let args = Args::try_parse_from([
            "app",
            "users",
            "--status",
            "Active",
            "--organization",
            "Cash",
            "--joined-on",
            "2024-05-01",
            "--page",
            "3",
            "--size",
            "20",
        ])
        .unwrap();

        let Command::Users(users) = args.command else {
            panic!("expected `users` command");
        };
        let selector = Selector::from(users);

        assert_eq!(selector.status, StatusFilter::Only(Status::Active));
        assert_eq!(selector.filter.organization.as_deref(), Some("Cash"));
        assert_eq!(
            selector.filter.joined_on.map(|d| d.to_string()).as_deref(),
            Some("2024-05-01"),
        );
        assert_eq!(selector.arguments.page().get(), 3);
        assert_eq!(selector.arguments.size(), Size::Twenty);
    }

    #[test]
    fn defaults_users_arguments() {
        let args = Args::try_parse_from(["app", "users"]).unwrap();

        let Command::Users(users) = args.command else {
            panic!("expected `users` command");
        };
        let selector = Selector::from(users);

        assert_eq!(selector.status, StatusFilter::All);
        assert_eq!(selector.arguments.page().get(), 1);
        assert_eq!(selector.arguments.size(), Size::Ten);
        assert_eq!(args.config, "config.toml");
    }

    #[test]
    fn rejects_unsupported_page_size() {
        assert!(
            Args::try_parse_from(["app", "users", "--size", "15"]).is_err()
        );
    }
}
