// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training Tracker command-line client
//!
//! Logs in against the training backend, persists the session token, and
//! prints plans, sessions and reports as JSON.

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use training_tracker::{config::Config, models::ExerciseFilters, App};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "training-tracker",
    about = "Training plan tracker client",
    long_about = "Manage training plans and sessions and read progress reports from the training backend."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account (does not log in)
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Show the current session
    Whoami,
    /// List schedulable days
    Days,
    /// List trainings
    Trainings,
    /// Browse the exercise catalogue
    Exercises {
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "type")]
        exercise_type: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List your training plans
    Plans,
    /// Plans scheduled for today
    Today,
    /// Sessions recorded for a plan
    Sessions { plan_id: u64 },
    /// Whether a plan already has a session this week
    ThisWeek { plan_id: u64 },
    /// Plan adherence report
    Adherence {
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
    },
    /// Exercise progress report for a plan
    Progress {
        plan_id: u64,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
    },
    /// Resolve a route path and show where navigation lands
    Route { path: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(api_url = %config.api_url, "Configuration loaded");

    let app = App::new(config)?;
    run(&app, cli.command).await
}

async fn run(app: &App, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => {
            app.auth.login(&email, &password).await?;
            print_json(&serde_json::json!({ "user_id": app.session.user_id() }))
        }
        Command::Register {
            name,
            email,
            password,
        } => {
            app.auth.register(&name, &email, &password).await?;
            print_json(&serde_json::json!({ "registered": email }))
        }
        Command::Logout => {
            app.auth.logout();
            print_json(&serde_json::json!({ "authenticated": false }))
        }
        Command::Whoami => print_json(&serde_json::json!({
            "authenticated": app.session.is_authenticated(),
            "user_id": app.session.user_id(),
        })),
        Command::Days => print_json(&app.days.get_days().await?),
        Command::Trainings => print_json(&app.trainings.get_trainings().await?),
        Command::Exercises {
            name,
            exercise_type,
            page,
            limit,
        } => {
            let filters = ExerciseFilters {
                page,
                limit,
                name,
                exercise_type,
            };
            print_json(&app.exercises.get_exercises(&filters).await?)
        }
        Command::Plans => {
            let user_id = current_user(app)?;
            print_json(&app.training_plans.get_training_plans(user_id).await?)
        }
        Command::Today => {
            let user_id = current_user(app)?;
            print_json(&app.home.get_today_training(user_id).await?)
        }
        Command::Sessions { plan_id } => {
            print_json(&app.training_sessions.get_sessions_for_plan(plan_id).await?)
        }
        Command::ThisWeek { plan_id } => {
            print_json(&app.training_sessions.get_this_week_session(plan_id).await?)
        }
        Command::Adherence { start, end } => {
            let user_id = current_user(app)?;
            print_json(&app.reports.get_plan_adherence(user_id, start, end).await?)
        }
        Command::Progress {
            plan_id,
            start,
            end,
        } => print_json(&app.reports.get_exercise_progress(plan_id, start, end).await?),
        Command::Route { path } => {
            let landed = app.router.push(path.as_str())?;
            print_json(&serde_json::json!({
                "requested": path,
                "route": landed.name(),
                "path": landed.path,
                "params": landed.params,
            }))
        }
    }
}

fn current_user(app: &App) -> anyhow::Result<u64> {
    app.session
        .user_id()
        .context("Not logged in (run `training-tracker login` first)")
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Initialize structured logging on stderr.
///
/// `LOG_FORMAT=json` selects JSON lines; `RUST_LOG` overrides the filter.
fn init_logging() {
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let (json_layer, text_layer) = if json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .flatten_event(true)
            .with_writer(std::io::stderr);
        (Some(layer), None)
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("training_tracker=info,warn")),
        )
        .with(json_layer)
        .with(text_layer)
        .init();
}
