//! schooldesk CLI: practice tests and the notice board from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "schooldesk",
    version,
    about = "Practice tests and notices for the school dashboard"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a practice test and save it
    Generate {
        /// Subject name (e.g. "Mathematics")
        #[arg(long)]
        subject: String,

        /// Chapters (comma-separated, default: every chapter of the subject)
        #[arg(long)]
        chapters: Option<String>,

        /// Number of easy questions
        #[arg(long, default_value = "4")]
        easy: u32,

        /// Number of medium questions
        #[arg(long, default_value = "4")]
        medium: u32,

        /// Number of hard questions
        #[arg(long, default_value = "2")]
        hard: u32,

        /// Time limit in minutes (default from config)
        #[arg(long)]
        time_limit: Option<u32>,

        /// Seed for reproducible question generation
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List saved practice tests
    Tests {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Mark a practice test as in progress
    Start {
        /// Practice test ID
        #[arg(long)]
        id: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Mark a practice test as completed
    Complete {
        /// Practice test ID
        #[arg(long)]
        id: String,

        /// Score achieved
        #[arg(long)]
        score: f64,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show notices, filtered and sorted
    Notices {
        /// Category: all, event, examination, emergency, announcement
        #[arg(long, default_value = "all")]
        category: String,

        /// Case-insensitive text to find in title or description
        #[arg(long, default_value = "")]
        search: String,

        /// Sort order: date, priority
        #[arg(long, default_value = "date")]
        sort: String,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a notices JSON file
    Validate {
        /// Path to notices file
        #[arg(long)]
        file: PathBuf,
    },

    /// List subjects and chapters available for practice tests
    Subjects,

    /// List notice categories and departments
    Categories,

    /// Create a starter config
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("schooldesk=info,schooldesk_core=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            subject,
            chapters,
            easy,
            medium,
            hard,
            time_limit,
            seed,
            config,
        } => commands::generate::execute(
            subject, chapters, easy, medium, hard, time_limit, seed, config,
        ),
        Commands::Tests { format, config } => commands::tests::execute(format, config),
        Commands::Start { id, config } => commands::progress::start(id, config),
        Commands::Complete { id, score, config } => {
            commands::progress::complete(id, score, config)
        }
        Commands::Notices {
            category,
            search,
            sort,
            format,
            config,
        } => commands::notices::execute(category, search, sort, format, config),
        Commands::Validate { file } => commands::validate::execute(file),
        Commands::Subjects => commands::subjects::execute(),
        Commands::Categories => commands::categories::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
