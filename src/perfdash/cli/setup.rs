use clap::{Parser, Subcommand, ValueEnum};
use once_cell::sync::Lazy;
use perfdash::model::{Department, Rating};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    static VERSION_STRING: Lazy<String> = Lazy::new(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    });

    &VERSION_STRING
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "perfdash", bin_name = "perfdash", version = get_version())]
#[command(about = "Employee performance dashboard for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read users from a local JSON file instead of the API
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub source_file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text, help_heading = "Options")]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List employees, optionally filtered
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Match first name, last name, email or department
        #[arg(short, long)]
        search: Option<String>,

        /// Only these departments (repeatable)
        #[arg(short, long = "department", value_name = "DEPT")]
        departments: Vec<Department>,

        /// Only these ratings, 1-5 (repeatable)
        #[arg(short, long = "rating", value_name = "N")]
        ratings: Vec<Rating>,
    },

    /// Team overview: headcount, average rating, top performers
    #[command(display_order = 2)]
    Stats,

    /// Department breakdown and rating distribution
    #[command(display_order = 3)]
    Analytics,

    /// Show one employee in detail
    #[command(alias = "view", display_order = 4)]
    Show { id: String },

    /// Start a promotion for an employee
    #[command(display_order = 5)]
    Promote { id: String },

    /// Interactive session; bookmarks last until it ends
    #[command(display_order = 6)]
    Shell,

    /// Get or set configuration
    #[command(display_order = 7)]
    Config {
        /// Configuration key (base-url, limit, timeout, assign-mode, seed)
        key: Option<String>,
        /// Value to set
        value: Option<String>,
    },
}
