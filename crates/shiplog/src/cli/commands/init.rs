//! Init command

use std::path::PathBuf;

use clap::Args;
use console::style;
use dialoguer::Confirm;
use tracing::info;

use shiplog_core::config::defaults::{
    DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_TEMPLATE_TOML, DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_YAML,
};

use crate::cli::output::{self, path_style};
use crate::cli::Cli;

/// Write a default shiplog configuration file
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Fail instead of prompting when the file exists
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Write TOML instead of YAML
    #[arg(long)]
    pub toml: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, yes = self.yes, toml = self.toml, "executing init command");
        let cwd = cli.working_dir()?;
        let config_path = self.config_path(&cwd);

        if config_path.exists() && !self.force {
            if self.yes {
                anyhow::bail!(
                    "Configuration file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }

            let overwrite = Confirm::new()
                .with_prompt(format!(
                    "Configuration file already exists at {}. Overwrite?",
                    config_path.display()
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        let content = if self.toml {
            DEFAULT_CONFIG_TEMPLATE_TOML
        } else {
            DEFAULT_CONFIG_TEMPLATE
        };
        std::fs::write(&config_path, content)?;

        if !cli.quiet {
            output::success(&format!(
                "Created configuration at {}",
                path_style().apply_to(config_path.display())
            ));
        }

        Ok(())
    }

    fn config_path(&self, cwd: &std::path::Path) -> PathBuf {
        match &self.output {
            Some(path) => cwd.join(path),
            None if self.toml => cwd.join(DEFAULT_CONFIG_TOML),
            None => cwd.join(DEFAULT_CONFIG_YAML),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use shiplog_core::config::load_config;
    use tempfile::TempDir;

    fn run(dir: &TempDir, extra: &[&str]) -> anyhow::Result<()> {
        let mut args = vec!["shiplog", "init", "-q", "-C", dir.path().to_str().unwrap()];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).unwrap().execute()
    }

    #[test]
    fn test_writes_yaml_by_default() {
        let temp = TempDir::new().unwrap();
        run(&temp, &[]).unwrap();

        let config = load_config(&temp.path().join("shiplog.yaml")).unwrap();
        assert_eq!(config.changelog.title, "Changelog");
    }

    #[test]
    fn test_writes_toml() {
        let temp = TempDir::new().unwrap();
        run(&temp, &["--toml"]).unwrap();

        let config = load_config(&temp.path().join("shiplog.toml")).unwrap();
        assert!(config.changelog.include_hashes);
    }

    #[test]
    fn test_existing_file_with_yes_fails() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("shiplog.yaml"), "changelog: {}\n").unwrap();

        assert!(run(&temp, &["--yes"]).is_err());
        let content = std::fs::read_to_string(temp.path().join("shiplog.yaml")).unwrap();
        assert_eq!(content, "changelog: {}\n");
    }

    #[test]
    fn test_force_overwrites() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("shiplog.yaml"), "changelog: {}\n").unwrap();

        run(&temp, &["--force"]).unwrap();
        let content = std::fs::read_to_string(temp.path().join("shiplog.yaml")).unwrap();
        assert_eq!(content, DEFAULT_CONFIG_TEMPLATE);
    }
}
