use std::{io, process::ExitCode, sync::OnceLock};

use application::{args, view, Args, Config, Service};
use secrecy::SecretBox;
use service::{
    command::{EnsureSeeded, SignIn, SignOut},
    domain::{session::Password, user},
    infra::File,
    query::{self, IsAuthenticated},
    Command as _, Query as _,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::WARN)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::WARN)
                                >= *meta.level()
                })),
        )
        .init();

    start().map_or(ExitCode::FAILURE, |()| ExitCode::SUCCESS)
}

fn start() -> Result<(), ()> {
    let Args { config, command } = Args::parse().map_err(|e| {
        if e.use_stderr() {
            log::error!("failed to parse command line arguments: {e}");
        } else {
            _ = e.print();
        }
    })?;

    let config = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(config.log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let service_config = config.service().map_err(|e| {
        log::error!("invalid `Config`: {e}");
    })?;
    let service = Service::new(service_config, File::new(config.storage.path));

    run(&service, command)
}

fn run(service: &Service, command: args::Command) -> Result<(), ()> {
    use args::Command as Cmd;

    match command {
        Cmd::Seed => {
            let outcome = ok(service.execute(EnsureSeeded::now()));
            println!("{}", view::seeded(&outcome));
        }
        Cmd::Login { email, password } => {
            let email = user::Email::new(email.trim().to_lowercase());
            let password = Password::new(password);
            let (Some(email), Some(password)) = (email, password) else {
                log::error!("Invalid email or password");
                return Err(());
            };
            _ = service
                .execute(SignIn {
                    email,
                    password: SecretBox::new(Box::new(password)),
                })
                .map_err(|e| log::error!("Invalid email or password: {e}"))?;
            println!("Signed in");
        }
        Cmd::Logout => {
            _ = ok(service.execute(SignOut));
            println!("Signed out");
        }
        Cmd::Users(args) => {
            authenticated(service)?;
            let listing =
                ok(service.execute(query::users::List::by(args.into())));
            println!("{}", view::users(&listing));
        }
        Cmd::User { id } => {
            authenticated(service)?;
            let user = id.trim().parse::<user::Id>().ok().and_then(|id| {
                ok(service.execute(query::user::ById::by(id)))
            });
            match user {
                Some(user) => println!("{}", view::user(&user)),
                None => {
                    println!("User not found");
                    return Err(());
                }
            }
        }
        Cmd::Summary => {
            authenticated(service)?;
            let counts = ok(service.execute(query::users::Summary::by(())));
            println!("{}", view::summary(&counts));
        }
    }
    Ok(())
}

/// Ensures the operator is signed in and the users are seeded.
fn authenticated(service: &Service) -> Result<(), ()> {
    if !ok(service.execute(IsAuthenticated)) {
        log::error!("not signed in, run `login` first");
        return Err(());
    }
    _ = ok(service.execute(EnsureSeeded::now()));
    Ok(())
}

/// Unwraps an infallible [`Result`].
fn ok<T>(res: Result<T, std::convert::Infallible>) -> T {
    match res {
        Ok(v) => v,
        Err(e) => match e {},
    }
}
