use clap::{Parser, Subcommand};

/// Command-line interface definition for guialocal
/// CLI local business directory: businesses, opening hours, pharmacy rotation
#[derive(Parser)]
#[command(
    name = "guialocal",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple local business directory CLI: browse businesses, opening hours and the pharmacy on duty",
    long_about = None
)]
pub struct Cli {
    /// Override dataset path (useful for tests or custom datasets)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Pin the clock to a fixed timestamp, "YYYY-MM-DD HH:MM" (used by tests)
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration (and optionally a custom dataset file)
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// List businesses
    List {
        /// Filter by category id (see `guialocal categories`)
        #[arg(long, short, help = "Filter by category id")]
        category: Option<String>,

        /// Show only businesses that are open right now
        #[arg(long = "open", help = "Show only businesses open right now")]
        open_only: bool,

        /// Show only featured businesses
        #[arg(long = "featured", help = "Show only featured businesses")]
        featured_only: bool,
    },

    /// Search businesses by name, description or category
    Search {
        /// Search term (case-insensitive)
        term: String,
    },

    /// List categories with business counts
    Categories,

    /// Show the detail view of a single business
    Show {
        /// Business id or (part of its) name
        business: String,
    },

    /// Show the pharmacy on duty
    Pharmacy {
        #[arg(long = "week", help = "Show the full weekly duty calendar")]
        week: bool,
    },

    /// Re-evaluate open/closed state on a fixed interval
    Watch {
        /// Seconds between refreshes (default from config, 60)
        #[arg(long, short, help = "Seconds between refreshes")]
        interval: Option<u64>,

        /// Number of refresh cycles before exiting (0 = run forever)
        #[arg(long, default_value_t = 0, help = "Refresh cycles before exiting (0 = forever)")]
        ticks: u32,
    },
}
