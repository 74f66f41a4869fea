//! Common types and utilities shared across commands

use clap::Parser;
use std::path::PathBuf;

/// Global CLI options available to all commands
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = ".",
        help = "Project root the config and directories are resolved against"
    )]
    pub root: PathBuf,

    #[arg(
        long,
        global = true,
        help = "Config file to use instead of <root>/backdrop.toml"
    )]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Suppress progress output")]
    pub quiet: bool,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase verbosity (-v for debug, -vv for trace)")]
    pub verbose: u8,

    #[arg(long, global = true, help = "Do not write the run log file")]
    pub no_log_file: bool,
}

impl GlobalOpts {
    /// Get the effective verbosity level
    /// - 0: quiet/warn only
    /// - 1: debug (-v)
    /// - 2: trace (-vv)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

impl Default for GlobalOpts {
    fn default() -> Self {
        GlobalOpts {
            root: PathBuf::from("."),
            config: None,
            quiet: false,
            verbose: 0,
            no_log_file: true,
        }
    }
}
