pub mod check;
pub mod config;
pub mod context;
pub mod generate;
pub mod init;
pub mod list;

pub use context::ProjectContext;
