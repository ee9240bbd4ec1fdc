mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chapterhub_core::{ChapterHubConfig, EventCatalog, EventCategory};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chapterhub")]
#[command(about = "Browse your chapter's events on a month calendar")]
struct Cli {
    /// Event catalog to read (.toml or .json), instead of the configured one
    #[arg(long, global = true)]
    events: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month calendar
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Select a day (YYYY-MM-DD) and list its events
        #[arg(short, long)]
        select: Option<String>,

        /// Step one month back from the chosen month
        #[arg(long, conflicts_with = "next")]
        prev: bool,

        /// Step one month forward from the chosen month
        #[arg(long)]
        next: bool,
    },
    /// List every event on one day
    Day {
        /// Day to show (YYYY-MM-DD)
        date: String,
    },
    /// List events, optionally filtered
    Events {
        /// Case-insensitive search in title, description and location
        #[arg(short, long)]
        search: Option<String>,

        /// Only this category (workshop, meeting, social, deadline)
        #[arg(short, long)]
        category: Option<EventCategory>,

        /// Only events from today on
        #[arg(long)]
        upcoming: bool,

        /// Show at most this many events
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show where configuration and events are read from
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Month {
            month,
            select,
            prev,
            next,
        } => {
            let catalog = load_catalog(cli.events)?;
            let args = commands::month::MonthArgs {
                month: month.as_deref().map(chapterhub_core::YearMonth::parse).transpose()?,
                select: select.as_deref().map(parse_day).transpose()?,
                prev,
                next,
            };
            commands::month::run(&catalog, args, today)
        }
        Commands::Day { date } => {
            let catalog = load_catalog(cli.events)?;
            commands::day::run(&catalog, parse_day(&date)?, today)
        }
        Commands::Events {
            search,
            category,
            upcoming,
            limit,
        } => {
            let catalog = load_catalog(cli.events)?;
            let args = commands::events::EventsArgs {
                search,
                category,
                upcoming,
                limit,
            };
            commands::events::run(&catalog, args, today)
        }
        Commands::Config => commands::config::run(cli.events),
    }
}

fn parse_day(s: &str) -> Result<NaiveDate> {
    Ok(chapterhub_core::month::parse_date(s)?)
}

/// Load the catalog named on the command line, or the configured one.
fn load_catalog(events: Option<PathBuf>) -> Result<EventCatalog> {
    let path = match events {
        Some(path) => path,
        None => ChapterHubConfig::load()?.events_path(),
    };

    if !path.exists() {
        anyhow::bail!(
            "No event catalog found at {}.\n\n\
            Point chapterhub at one with:\n  \
            chapterhub --events <file.toml> month\n\n\
            or set events_file in {}",
            path.display(),
            ChapterHubConfig::config_path()?.display()
        );
    }

    Ok(EventCatalog::load(&path)?)
}
