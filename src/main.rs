mod commands;
mod startup;

use clap::{Parser, Subcommand};
use commands::CommandContext;
use kalenteri::components::calendar::{TimeUnit, ViewKind};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "kalenteri")]
#[command(about = "Personal calendar: day, week, month and year views over your events")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the agenda of a calendar view
    Show {
        /// day, week, month or year (defaults to config/calendar.toml)
        #[arg(short, long)]
        view: Option<ViewKind>,

        /// Any date inside the view (YYYY-MM-DD), today by default
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List events starting on a date
    Day {
        /// YYYY-MM-DD, today by default
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List events in progress
    Now {
        /// Instant (MM/dd/yyyy HH:mm:ss), now by default
        #[arg(long)]
        at: Option<String>,
    },
    /// Show the first event starting in the day or hour of an instant
    Slot {
        /// Instant (MM/dd/yyyy HH:mm:ss), now by default
        #[arg(long)]
        at: Option<String>,

        /// day or hour (defaults to config/calendar.toml)
        #[arg(short, long)]
        unit: Option<TimeUnit>,
    },
    /// Add an event
    Add {
        name: String,

        /// Start (MM/dd/yyyy HH:mm:ss)
        #[arg(short, long)]
        start: String,

        /// End (MM/dd/yyyy HH:mm:ss)
        #[arg(short, long)]
        end: String,
    },
    /// Import events from an .ics file
    Import { file: PathBuf },
    /// Delete one event by id
    Delete { id: u64 },
    /// Delete all of your events
    Clear,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    startup::init_logging()?;

    // Load configuration
    let config = startup::load_config()?;
    let store = startup::open_store(&config)?;
    info!("Calendar of {}", config.user_email);

    let ctx = CommandContext::new(config, store);

    match cli.command {
        Commands::Show { view, date } => commands::calendar::show(&ctx, view, date.as_deref()),
        Commands::Day { date } => commands::calendar::day(&ctx, date.as_deref()),
        Commands::Now { at } => commands::calendar::now(&ctx, at.as_deref()),
        Commands::Slot { at, unit } => commands::calendar::slot(&ctx, at.as_deref(), unit),
        Commands::Add { name, start, end } => commands::manage::add(&ctx, &name, &start, &end),
        Commands::Import { file } => commands::manage::import(&ctx, &file),
        Commands::Delete { id } => commands::manage::delete(&ctx, id),
        Commands::Clear => commands::manage::clear(&ctx),
    }
}
