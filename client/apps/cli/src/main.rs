//! CivicConnect Terminal Client
//!
//! Drives the session core from the command line. Each invocation loads the
//! persisted session, runs one command, and reports where navigation landed.
//! Uses `anyhow` for startup errors; command failures are reported as
//! `kernel::error::AppError` with a matching exit code.

use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use auth::application::controller::SessionController;
use auth::domain::gateway::{AuthClient, Navigator};
use auth::{AuthConfig, AuthResult, HistoryNavigator, RouteTable, SessionStore};
use clap::{Parser, Subcommand};
use kernel::error::app_error::AppError;
use platform::storage::{FileStorage, KeyValueStorage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod backend;
mod config;

use backend::Backend;
use config::{CliConfig, ConfigArgs};

/// civic - CivicConnect session client
#[derive(Parser, Debug)]
#[command(name = "civic")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account; a one-time code is mailed afterwards
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Mail a fresh one-time code
    SendOtp {
        #[arg(long)]
        email: String,
    },

    /// Sign in with a one-time code
    VerifyOtp {
        #[arg(long)]
        email: String,
        /// 6-digit code; separators are ignored
        #[arg(long)]
        code: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in identity
    Whoami,

    /// Open a page, following access rules
    Visit { path: String },

    /// List the navigation menu for the current session
    Menu,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file before clap reads the environment
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "civic=info,auth=info,platform=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_args(&cli.config)?;

    tracing::debug!(session_file = %config.session_file.display(), "Opening session");

    let auth_config = Arc::new(AuthConfig::default());
    let store = Arc::new(SessionStore::open(
        FileStorage::new(&config.session_file),
        Arc::clone(&auth_config),
    ));
    let navigator = Arc::new(HistoryNavigator::new());
    let backend = Arc::new(Backend::from_config(&config.backend)?);
    let controller = SessionController::new(backend, store, Arc::clone(&navigator), auth_config);

    let outcome = run(&controller, cli.command).await;

    if let Some(location) = navigator.current() {
        match location.email {
            Some(email) => println!("Now at {} (for {})", location.path, email),
            None => println!("Now at {}", location.path),
        }
    }

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => Ok(report(&AppError::from(err))),
    }
}

/// Print a command failure and pick the exit code for it
fn report(error: &AppError) -> ExitCode {
    eprintln!("{error}");
    if let Some(cause) = error.source() {
        tracing::debug!(%cause, "Underlying cause");
    }
    ExitCode::from(error.exit_code())
}

async fn run<C, S, N>(controller: &SessionController<C, S, N>, command: Command) -> AuthResult<()>
where
    C: AuthClient,
    S: KeyValueStorage,
    N: Navigator,
{
    match command {
        Command::Login { email, password } => {
            let identity = controller.login(&email, &password).await?;
            println!("Signed in as {} ({})", identity.email, identity.role);
        }
        Command::Register {
            name,
            email,
            password,
        } => {
            controller.register(&name, &email, &password).await?;
            println!("Registered. Check your email for a 6-digit code.");
        }
        Command::SendOtp { email } => {
            controller.request_otp(&email).await?;
            println!("Code sent.");
        }
        Command::VerifyOtp { email, code } => {
            let code = auth::models::OtpCode::sanitize(&code);
            let identity = controller.verify_otp(&email, &code).await?;
            println!("Verified. Signed in as {} ({})", identity.email, identity.role);
        }
        Command::Logout => {
            controller.logout();
            println!("Signed out.");
        }
        Command::Whoami => match controller.session().identity() {
            Some(identity) => println!("{} ({})", identity.email, identity.role),
            None => println!("Not signed in."),
        },
        Command::Visit { path } => {
            let decision = controller.visit(&path);
            println!("Access: {decision}");
        }
        Command::Menu => {
            let menu = RouteTable::menu_for(controller.session().role());
            for item in menu {
                println!("{:<16} {}", item.label, item.path);
            }
        }
    }
    Ok(())
}
