use anyhow::Context;
use backdrop::{
    commands::{
        check,
        config::{self, ConfigAction},
        generate::{self, GenerateCommand},
        init::{self, InitCommand},
        list::{self, ListCommand},
    },
    logger, GlobalOpts,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "backdrop")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Registry manifest generator for background components",
    long_about = "Backdrop scans a directory of background components and writes one JSON registry manifest per component."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a manifest for every component
    Generate(GenerateCommand),
    /// Compare committed manifests with the sources without writing
    Check,
    /// Show what would be generated
    List(ListCommand),
    /// Create a backdrop.toml with the default settings
    Init(InitCommand),
    /// Show or change settings
    #[command(subcommand_required = false, arg_required_else_help = false)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let opts = cli.global;
    match cli.command {
        Commands::Generate(cmd) => {
            generate::handle_generate(cmd, &opts).context("Generate command failed")?;
        }
        Commands::Check => {
            check::handle_check(&opts)?;
        }
        Commands::List(cmd) => {
            list::handle_list(cmd, &opts).context("List command failed")?;
        }
        Commands::Init(cmd) => {
            init::handle_init(cmd, &opts)?;
        }
        Commands::Config { action } => {
            config::handle_config(action, &opts)?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_with_verbosity(
        cli.global.verbosity_level(),
        cli.global.quiet,
        !cli.global.no_log_file,
    ) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    if let Err(e) = run(cli) {
        logger::error(&format!("{:#}", e));
        if logger::get_verbosity() > 0 {
            logger::show_log_path();
        }
        std::process::exit(1);
    }
}
