//! Default command: add the commits since the last tag to the changelog

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use tracing::info;

use shiplog_changelog::{ChangelogGenerator, UpdateOutcome};
use shiplog_core::config::load_config_or_default;
use shiplog_git::GitRepo;

use crate::cli::output::{self, path_style, tag_style};
use crate::cli::{Cli, OutputFormat};

/// Generate a changelog section from the commits since the last tag
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Changelog file to update (defaults to the configured file)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the new section instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(dry_run = self.dry_run, output = ?self.output, "executing generate command");
        let cwd = cli.working_dir()?;
        let (config, _) = load_config_or_default(&cwd)?;

        let repo = GitRepo::discover(&cwd)?;
        let generator = ChangelogGenerator::new(config.changelog.clone());
        let release = generator.prepare(&repo, Utc::now().date_naive())?;

        if !cli.quiet && cli.format == OutputFormat::Text {
            let tag = match &release.tag {
                Some(tag) => tag_style().apply_to(tag).to_string(),
                None => "None (initial commit)".to_string(),
            };
            output::info(&format!("Last tag: {}", tag));
            output::info(&format!(
                "Found {} commits since last tag",
                release.commit_count()
            ));
        }

        if self.dry_run {
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&release.entry)?);
                }
                OutputFormat::Text => {
                    if !release.entry.is_empty() {
                        print!("{}", generator.format(&release.entry));
                    }
                }
            }
            return Ok(());
        }

        let path = self
            .output
            .clone()
            .unwrap_or_else(|| config.changelog.file.clone());
        let path = cwd.join(path);

        match generator.write(&release, &path)? {
            UpdateOutcome::NothingToUpdate => match cli.format {
                OutputFormat::Json => {
                    let summary = serde_json::json!({
                        "tag": release.tag,
                        "commits": 0,
                        "updated": false,
                    });
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
                OutputFormat::Text => {
                    if !cli.quiet {
                        output::info("No commits found. Nothing to update.");
                    }
                }
            },
            UpdateOutcome::Updated(report) => {
                if report.duplicate && cli.format == OutputFormat::Text {
                    output::warning(&format!(
                        "An entry headed \"{}\" already exists. Please review {} for duplicates.",
                        release.entry.heading(),
                        report.path.display()
                    ));
                }

                match cli.format {
                    OutputFormat::Json => {
                        let summary = serde_json::json!({
                            "tag": release.tag,
                            "commits": release.commit_count(),
                            "updated": true,
                            "path": report.path,
                            "created": report.created,
                            "duplicate": report.duplicate,
                        });
                        println!("{}", serde_json::to_string_pretty(&summary)?);
                    }
                    OutputFormat::Text => {
                        if !cli.quiet {
                            output::success(&format!(
                                "Changelog updated at {}",
                                path_style().apply_to(report.path.display())
                            ));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
