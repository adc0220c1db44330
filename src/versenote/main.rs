use colored::Colorize;
use versenote::error::VerseError;

mod cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::commands::run().await {
        match e {
            VerseError::InvalidInput(msg) => eprintln!("{} {}", "Warning:".yellow(), msg),
            other => eprintln!("{} {}", "Error:".red(), other),
        }
        std::process::exit(1);
    }
}
