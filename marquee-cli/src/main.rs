mod client;
mod commands;
mod render;
mod source;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use marquee_core::marquee::Marquee;

use crate::source::EventSource;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Browse and manage your movie release calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month of releases
    Month {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(long)]
        date: Option<String>,

        /// Months to move forward (negative moves back)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
    },
    /// Show a week of releases
    Week {
        /// Date inside the week to show (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Weeks to move forward (negative moves back)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
    },
    /// Show a single day of releases
    Day {
        /// Day to show (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Days to move forward (negative moves back)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
    },
    /// List releases as a table
    List {
        /// Only show releases with this genre
        #[arg(short, long)]
        genre: Option<String>,

        /// Only show releases that haven't happened yet
        #[arg(short, long)]
        upcoming: bool,
    },
    /// Add a release to the calendar
    Add {
        /// Release title (prompted for when omitted)
        title: Option<String>,

        /// Release date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Release time (HH:MM)
        #[arg(short, long)]
        time: Option<String>,

        /// Genre label, e.g. "horror"
        #[arg(short, long)]
        genre: Option<String>,
    },
    /// Show one release in full
    Show { id: i64 },
    /// Delete a release
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Show configuration and where events are stored
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let marquee = Marquee::load()?;
    let source = EventSource::from_marquee(&marquee);

    match cli.command {
        Commands::Month { date, offset } => {
            commands::month::run(&marquee, &source, date.as_deref(), offset).await
        }
        Commands::Week { date, offset } => {
            commands::week::run(&marquee, &source, date.as_deref(), offset).await
        }
        Commands::Day { date, offset } => {
            commands::day::run(&source, date.as_deref(), offset).await
        }
        Commands::List { genre, upcoming } => {
            commands::list::run(&source, genre.as_deref(), upcoming).await
        }
        Commands::Add {
            title,
            date,
            time,
            genre,
        } => commands::add::run(&source, title, date, time, genre).await,
        Commands::Show { id } => commands::show::run(&source, id).await,
        Commands::Delete { id, force } => commands::delete::run(&source, id, force).await,
        Commands::Config => commands::config::run(&marquee),
    }
}
