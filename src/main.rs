mod client;
mod commands;
mod render;
mod request;
mod selection;
mod source;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use nusched_core::config::NuSchedConfig;

use commands::export::ExportOptions;
use source::SourceArgs;

#[derive(Parser)]
#[command(name = "nusched")]
#[command(about = "Turn your PowerCampus class schedule into a recurring-event calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the classes found in the schedule
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Print the meeting records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the schedule as an .ics calendar
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Where to write the calendar (defaults to output_path from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only export these classes (numbers from `nusched list`, e.g. 1,3,4)
        #[arg(long, value_delimiter = ',')]
        only: Vec<usize>,

        /// Leave out these classes (numbers from `nusched list`)
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<usize>,

        /// First week of the semester (YYYY-MM-DD); overrides the derived anchor
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Recurrence end (YYYY-MM-DD) for classes without their own end date
        #[arg(long)]
        until: Option<NaiveDate>,
    },
    /// Fetch the schedule and save the raw response as JSON
    Fetch {
        /// Captured "Copy as fetch" request
        #[arg(short, long)]
        request: PathBuf,

        /// Save to this file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show config paths and effective settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = NuSchedConfig::load()?;

    match cli.command {
        Commands::List { source, json } => {
            let payload = source.load_payload(&config).await?;
            let records = nusched_core::parse_schedule(payload);
            commands::list::run(&records, json)
        }
        Commands::Export {
            source,
            output,
            only,
            exclude,
            start,
            until,
        } => {
            let payload = source.load_payload(&config).await?;
            let records = nusched_core::parse_schedule(payload);
            let options = ExportOptions {
                output,
                only,
                exclude,
                start,
                until,
            };
            commands::export::run(&records, options, &config)
        }
        Commands::Fetch { request, output } => commands::fetch::run(&request, output.as_deref()).await,
        Commands::Config => commands::config::run(&config),
    }
}
