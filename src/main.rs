mod auth;
mod cli;
mod config;
mod db;
mod models;
mod plans;
mod progress;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers::{self, PlanFlags};
use config::AppConfig;
use db::migrations::run_migrations;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    // Ensure data directory exists and open DB
    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let conn = Connection::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;

    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // Run migrations on every startup
    run_migrations(&conn)?;
    log::debug!("Database ready at {:?}", db_path);

    match cli.command {
        // Session commands work without a signed-in user
        Some(Commands::Signup { username, name }) => {
            handlers::handle_signup(&conn, &username, name.as_deref())?;
        }
        Some(Commands::Login { username }) => {
            handlers::handle_login(&conn, &username)?;
        }
        Some(Commands::Logout) => {
            handlers::handle_logout(&conn)?;
        }
        Some(Commands::Whoami) => {
            handlers::handle_whoami(&conn)?;
        }
        Some(Commands::Exercises { body_part }) => {
            handlers::handle_exercises(&conn, body_part.as_deref())?;
        }

        Some(cmd) => {
            let user = auth::require_user(&conn)?;
            match cmd {
                Commands::Profile { action } => {
                    handlers::handle_profile(&conn, &user, &action)?;
                }
                Commands::Plan {
                    goal,
                    level,
                    equipment,
                    frequency,
                    preference,
                    save,
                } => {
                    let flags = PlanFlags {
                        goal,
                        level,
                        equipment,
                        frequency,
                        preference,
                        save,
                    };
                    handlers::handle_plan(&conn, &user, &config, &flags)?;
                }
                Commands::Programs { action } => {
                    handlers::handle_programs(&conn, &user, &action)?;
                }
                Commands::Workout { action } => {
                    handlers::handle_workout(&conn, &user, &action)?;
                }
                Commands::Progress { month } => {
                    handlers::handle_progress(&conn, &user, &config, month)?;
                }
                Commands::History { all } => {
                    handlers::handle_history(&conn, &user, &config, all)?;
                }
                Commands::Export => {
                    handlers::handle_export(&conn, &user, &config)?;
                }
                Commands::Signup { .. }
                | Commands::Login { .. }
                | Commands::Logout
                | Commands::Whoami
                | Commands::Exercises { .. } => unreachable!(),
            }
        }

        // No subcommand → launch the dashboard
        None => {
            let user = auth::require_user(&conn)?;
            tui::app::run(conn, config, user)?;
        }
    }

    Ok(())
}
