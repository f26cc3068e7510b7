use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contactbook")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
#[command(about = "Interactive address book with plain text storage", long_about = None)]
pub struct Cli {
    /// Contacts file to load at startup and save on exit (overrides config)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
