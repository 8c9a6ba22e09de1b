//! CLI commands

mod generate;
mod init;

pub use generate::GenerateCommand;
pub use init::InitCommand;
