// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! user-admin command-line console
//!
//! Each invocation is one console action. The session and local overrides
//! live in the store file between invocations.

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_admin::{
    config::Config,
    error::AppError,
    models::{Credentials, UserFields},
    Console,
};

/// Administration console for the reqres demo user API
#[derive(Parser)]
#[command(name = "user-admin")]
#[command(version)]
struct Cli {
    /// Store file (overrides USER_ADMIN_STORE_PATH)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// API base URL (overrides USER_ADMIN_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the stored session
    Whoami,
    /// List one page of users
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Only show users whose name or email contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a single user
    Show { id: i64 },
    /// Create a user
    Create(UserArgs),
    /// Edit a user
    Update {
        id: i64,
        #[command(flatten)]
        fields: UserArgs,
    },
    /// Delete a user
    Delete { id: i64 },
}

#[derive(Args)]
struct UserArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    /// Profile image URL
    #[arg(long)]
    avatar: String,
}

impl From<UserArgs> for UserFields {
    fn from(args: UserArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            avatar: args.avatar,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url.trim_end_matches('/').to_string();
    }
    tracing::debug!(api = %config.api_url, store = %config.store_path.display(), "Configuration loaded");

    let console = Console::from_config(config)?;

    match cli.command {
        Command::Login { email, password } => {
            let session = console.login(Credentials::new(email, password)).await?;
            print_json(&session)
        }
        Command::Logout => {
            console.session.logout()?;
            Ok(())
        }
        Command::Whoami => print_json(&console.session.require_session()?),
        command => {
            // User management sits behind the login screen.
            console.session.require_session()?;
            run_user_command(&console, command).await
        }
    }
}

async fn run_user_command(console: &Console, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List { page, search } => {
            let result = match search {
                Some(term) => console.users.search(page, &term).await?,
                None => console.users.list(page).await?,
            };
            print_json(&result)
        }
        Command::Show { id } => print_json(&console.users.get(id).await?),
        Command::Create(args) => print_json(&console.create_user(args.into()).await?),
        Command::Update { id, fields } => {
            print_json(&console.update_user(id, fields.into()).await?)
        }
        Command::Delete { id } => print_json(&console.users.delete(id).await?),
        Command::Login { .. } | Command::Logout | Command::Whoami => Ok(()),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an error for the user, one line per invalid field.
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<AppError>() {
        Some(AppError::Validation(fields)) => {
            for (field, messages) in fields {
                for message in messages {
                    eprintln!("{}: {}", field, message);
                }
            }
        }
        Some(app_err) => eprintln!("{}", app_err),
        None => eprintln!("Error: {:#}", err),
    }
}

/// Initialize logging on stderr; JSON when USER_ADMIN_LOG_FORMAT=json.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,user_admin=info"));

    let json = std::env::var("USER_ADMIN_LOG_FORMAT").is_ok_and(|v| v == "json");
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
