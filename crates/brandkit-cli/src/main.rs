mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{colors::ColorsSubcommand, config::ConfigSubcommand, session::SessionSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "brandkit",
    about = "Derive logo prompts from a product mission document and manage logo sessions",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .brandkit/ or .git/)
    #[arg(long, global = true, env = "BRANDKIT_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .brandkit/ with a default config
    Init,

    /// Show the business context extracted from the mission document
    Context,

    /// Show, list or switch the theme colours
    Colors {
        /// List the available accent and base colour families
        #[arg(long)]
        list: bool,

        #[command(subcommand)]
        subcommand: Option<ColorsSubcommand>,
    },

    /// Show the app name from the mission pitch
    AppName,

    /// Print the logo generation prompt
    Prompt {
        /// Print the categorized prompt context instead of the prompt text
        #[arg(long)]
        context_only: bool,
    },

    /// Manage logo generation sessions
    Session {
        #[command(subcommand)]
        subcommand: SessionSubcommand,
    },

    /// Inspect the project configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Context => cmd::context::run(&root, cli.json),
        Commands::Colors { list, subcommand } => {
            cmd::colors::run(&root, list, subcommand, cli.json)
        }
        Commands::AppName => cmd::context::app_name(&root, cli.json),
        Commands::Prompt { context_only } => cmd::prompt::run(&root, context_only, cli.json),
        Commands::Session { subcommand } => cmd::session::run(&root, subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
