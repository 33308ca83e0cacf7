use clap::{Parser, Subcommand};
use studyhub_core::{Config, ConfigError};

mod commands;
mod logging;
mod render;
mod session;

#[derive(Parser)]
#[command(name = "studyhub", version, about = "StudyHub student dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive dashboard
    Shell,
    /// Compute a CGPA from subjects given on the command line
    Gpa(commands::gpa::GpaArgs),
    /// Rank assignments given on the command line by days left
    Deadlines(commands::deadlines::DeadlinesArgs),
    /// Semester notes directory
    Notes {
        #[command(subcommand)]
        action: commands::notes::NotesAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let loaded = Config::load();
    logging::init(loaded.as_ref().ok().map(|c| c.logging.level.as_str()));

    let result = match cli.command {
        Commands::Config { action } => commands::config::run(action),
        Commands::Gpa(args) => commands::gpa::run(args),
        Commands::Deadlines(args) => commands::deadlines::run(args),
        Commands::Shell => with_config(loaded, commands::shell::run),
        Commands::Notes { action } => {
            with_config(loaded, |config| commands::notes::run(action, config))
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn with_config(
    loaded: Result<Config, ConfigError>,
    run: impl FnOnce(&Config) -> Result<(), Box<dyn std::error::Error>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = loaded?;
    run(&config)
}
