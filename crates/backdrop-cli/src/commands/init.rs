use crate::errors::CommandError;
use crate::logger;
use crate::GlobalOpts;
use backdrop_config::Config;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct InitCommand {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Write a config file with every key set to its default
pub fn handle_init(cmd: InitCommand, opts: &GlobalOpts) -> Result<PathBuf, CommandError> {
    let config_path = opts
        .config
        .clone()
        .unwrap_or_else(|| opts.root.join(backdrop_config::CONFIG_FILE_NAME));

    if config_path.exists() && !cmd.force {
        return Err(CommandError::ConfigExists(config_path));
    }

    Config::with_defaults().save_to(&config_path)?;
    logger::success(&format!("Created {}", config_path.display()));
    Ok(config_path)
}
