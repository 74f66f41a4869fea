use crate::errors::CommandError;
use crate::logger;
use crate::GlobalOpts;
use backdrop_config::Config;
use clap::Subcommand;
use colored::*;

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the effective settings, defaults included
    Show,
    /// Set a key in the config file
    Set { key: String, value: String },
    /// Print the path of the config file in use
    Path,
}

pub fn handle_config(action: Option<ConfigAction>, opts: &GlobalOpts) -> Result<(), CommandError> {
    let config_path = Config::path(&opts.root, opts.config.as_deref());
    logger::debug(&format!("Reading config from: {}", config_path.display()));

    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            let config = Config::load_from(&config_path)?;
            println!("{}", "Configuration:".bold().green());
            for (key, value) in config.values_iter() {
                println!("  {}: {}", key.cyan(), value);
            }
            if !config_path.exists() && opts.verbosity_level() > 0 {
                println!("  {}", "(no config file, using defaults)".yellow());
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_from(&config_path)?;
            config.set(&key, value.clone())?;
            config.save_to(&config_path)?;
            logger::success(&format!("Set {} = {}", key, value));
        }
        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
    }
    Ok(())
}
