//! # Dashboard Client
//!
//! Command line front end for the dashboard data layer. Restores the saved
//! session on startup and runs one command against the backend.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin dashboard -- status
//! cargo run --bin dashboard -- login lan@example.vn --password secret
//! cargo run --bin dashboard -- profile
//! cargo run --bin dashboard -- projects
//! cargo run --bin dashboard -- tasks --project <project-id>
//! cargo run --bin dashboard -- mev
//! cargo run --bin dashboard -- identicon <seed> --size 128
//! cargo run --bin dashboard -- logout
//! ```
//!
//! Configuration comes from the environment, see [`dashboard::config`].

use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use dashboard::config::ClientConfig;
use dashboard::debug::{self, LogConfig};
use dashboard::identicon::Identicon;
use dashboard::query::{MevQueries, QueryCache};
use dashboard::services::api::{ApiClient, HttpTransport};
use dashboard::session::{FileStorage, SessionContext};
use dashboard::stores::{ProjectStore, ResourceStore, TaskStore};
use dashboard::AppError;
use shared::{LoginRequest, ProjectListParams, TaskListParams};

#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(about = "Command line client for the project dashboard API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the restored session
    Status,

    /// Sign in and persist the session
    Login {
        /// Account email
        email: String,

        /// Account password
        #[arg(long, env = "DASHBOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign out and forget the saved session
    Logout,

    /// Refresh and print the signed-in user's profile
    Profile,

    /// List projects
    Projects,

    /// List tasks
    Tasks {
        /// Only tasks of this project
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Print the MEV summary
    Mev,

    /// Print the identicon SVG for a seed
    Identicon {
        /// Seed, usually a user id or username
        seed: String,

        /// Width and height in pixels
        #[arg(short, long, default_value_t = 64, value_parser = clap::value_parser!(u32).range(8..=1024))]
        size: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Status);

    // Identicons need no backend or logging
    if let Command::Identicon { seed, size } = &command {
        println!("{}", Identicon::from_seed(seed).to_svg(*size));
        return Ok(());
    }

    let log_config = LogConfig::from_env();
    let _log_guard = debug::init(&log_config);

    let config = ClientConfig::from_env()?;
    tracing::info!(base_url = %config.base_url, "Starting dashboard client");

    let api = ApiClient::new(Arc::new(HttpTransport::new(&config)?));
    let storage = Arc::new(
        FileStorage::open(&config.storage_path)
            .with_context(|| format!("opening {}", config.storage_path.display()))?,
    );
    let session = SessionContext::init(api.clone(), storage, QueryCache::new());

    // A 401 on login means bad credentials, not an expired session
    let signing_in = matches!(command, Command::Login { .. });
    match run(command, &session, api).await {
        Err(e) if !signing_in && e.downcast_ref::<AppError>().is_some_and(AppError::is_unauthorized) => {
            // The saved token was rejected; drop it so the next run starts clean
            session.logout_user()?;
            bail!("session expired, sign in again with `dashboard login`");
        }
        other => other,
    }
}

async fn run(command: Command, session: &SessionContext, api: ApiClient) -> anyhow::Result<()> {
    match command {
        Command::Status => print_status(session),
        Command::Login { email, password } => {
            let user = session.sign_in(&LoginRequest { email, password }).await?;
            println!("Signed in as {} ({})", user.username, user.role);
            print_status(session);
        }
        Command::Logout => {
            session.sign_out().await?;
            println!("Signed out.");
        }
        Command::Profile => {
            require_session(session)?;
            match session.refresh_profile().await? {
                Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
                None => println!("No profile available."),
            }
        }
        Command::Projects => {
            require_session(session)?;
            let store = ProjectStore::new(api);
            let projects = store.fetch_projects(&ProjectListParams::default()).await?;
            if projects.is_empty() {
                println!("No projects found.");
            }
            for project in &projects {
                let created = project
                    .created_at
                    .map(|at| at.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<26} {:<12} {:>3} members  {}  {}",
                    project.id,
                    format!("{:?}", project.status),
                    project.members.len(),
                    created,
                    project.name
                );
            }
        }
        Command::Tasks { project } => {
            require_session(session)?;
            let store = TaskStore::new(api);
            let params = TaskListParams {
                project,
                ..Default::default()
            };
            store.fetch_tasks(&params).await?;
            for task in store.items() {
                println!("{:<26} {:?} {:>3}%  {}", task.id, task.status, task.progress, task.title);
            }
        }
        Command::Mev => {
            let mev = MevQueries::new(api, session.cache().clone());
            if let Some(summary) = mev.summary().await? {
                println!("Transactions: {}", summary.total_transactions);
                println!("Profit:       {:.4}", summary.total_profit);
                println!("Cost:         {:.4}", summary.total_cost);
                if let Some(block) = summary.latest_block {
                    println!("Latest block: {}", block);
                }
                if !summary.top_mev_types.is_empty() {
                    println!("Top types:    {}", summary.top_mev_types.join(", "));
                }
            }
        }
        Command::Identicon { seed, size } => {
            println!("{}", Identicon::from_seed(&seed).to_svg(size));
        }
    }

    Ok(())
}

fn print_status(session: &SessionContext) {
    match session.user() {
        Some(user) if session.is_authenticated() => {
            println!("Signed in as {} <{}>", user.username, user.email.as_deref().unwrap_or("-"));
            println!("Role: {}", user.role);
            if let Some(profile) = session.profile() {
                println!("Profile cached: {}", profile.id);
            }
        }
        _ => println!("Not signed in."),
    }
}

fn require_session(session: &SessionContext) -> anyhow::Result<()> {
    if !session.is_authenticated() {
        bail!("not signed in, run `dashboard login <email>` first");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_login_and_defaults() {
        let cli = Cli::try_parse_from(["dashboard", "login", "lan@example.vn", "--password", "secret"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Login { ref email, ref password }) if email == "lan@example.vn" && password == "secret"
        ));

        let cli = Cli::try_parse_from(["dashboard"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_identicon_size_is_validated() {
        let cli = Cli::try_parse_from(["dashboard", "identicon", "lan"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Identicon { size: 64, .. })));

        assert!(Cli::try_parse_from(["dashboard", "identicon", "lan", "--size", "big"]).is_err());
        assert!(Cli::try_parse_from(["dashboard", "identicon", "lan", "--size", "4"]).is_err());
    }
}
