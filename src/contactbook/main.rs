use clap::Parser;
use contactbook::api::ContactsApi;
use contactbook::config::BookConfig;
use contactbook::error::Result;
use contactbook::session::Session;
use contactbook::store::fs::FileStore;
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::args::Cli;

fn main() {
    if let Err(e) = run() {
        cli::print::print_error(&e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    tracing::debug!(data_file = %config.data_file.display(), "starting session");

    let store = FileStore::new(config.data_file.clone());
    let mut session = Session::new(ContactsApi::new(store));
    session.start()?;

    let stdin = std::io::stdin();
    cli::repl::run(&mut session, stdin.lock(), &config.prompt)
}

// Logs go to stderr so they never mix with command output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<BookConfig> {
    let config_dir = cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "contactbook", "contactbook")
            .map(|dirs| dirs.config_dir().to_path_buf())
    });

    let config = match config_dir {
        Some(dir) => BookConfig::load(dir)?,
        None => BookConfig::default(),
    };

    Ok(match &cli.file {
        Some(path) => config.with_data_file(path.clone()),
        None => config,
    })
}
