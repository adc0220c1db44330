use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234 2024-01-15 14:30" for dev builds
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
#[command(name = "versenote", bin_name = "versenote", version = get_version())]
#[command(about = "Look up Bible verses and keep your interpretations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Interpretations file (overrides config and VERSENOTE_STORE)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a verse and show your interpretation of it
    #[command(alias = "l")]
    Lookup {
        /// Verse reference, e.g. John 3:16
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,

        /// Copy the results to the clipboard
        #[arg(short, long)]
        copy: bool,

        /// Also write the results to a text file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Save an interpretation (creates or replaces)
    #[command(alias = "add")]
    Save {
        /// Verse reference; quote it if it has spaces
        reference: String,

        /// Interpretation text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Replace an existing interpretation
    Update {
        /// Verse reference; quote it if it has spaces
        reference: String,

        /// Interpretation text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete an interpretation
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
    },

    /// Show a saved interpretation without fetching the verse
    Show {
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
    },

    /// List saved interpretations
    #[command(alias = "ls")]
    List,

    /// Run the local web server
    Serve {
        /// Port to listen on (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        bind: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., api-token, port)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
