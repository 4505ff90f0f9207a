use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "ccerto", bin_name = "ccerto", version = get_version())]
#[command(about = "Command-line client registry with CPF validation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new client
    #[command(alias = "a")]
    Add {
        /// Client name
        name: String,

        /// Monetary value, typed as digits ("12345" means 123,45)
        value: String,

        /// CPF, with or without punctuation (optional)
        #[arg(long)]
        cpf: Option<String>,
    },

    /// List registered clients
    #[command(alias = "ls")]
    List,

    /// Remove one or more clients by id
    #[command(alias = "rm")]
    Remove {
        /// Ids of the clients (as shown by list)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Remove ALL registered clients
    Purge {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., currency-symbol)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
