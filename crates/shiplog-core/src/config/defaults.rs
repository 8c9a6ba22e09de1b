//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "shiplog.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "shiplog.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".shiplog.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".shiplog.toml",
    ]
}

/// Default configuration template (YAML)
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# shiplog configuration

changelog:
  file: CHANGELOG.md
  title: Changelog
  description: All notable changes to this project will be documented in this file.
  include_hashes: true
"#;

/// Default configuration template (TOML)
pub const DEFAULT_CONFIG_TEMPLATE_TOML: &str = r#"# shiplog configuration

[changelog]
file = "CHANGELOG.md"
title = "Changelog"
description = "All notable changes to this project will be documented in this file."
include_hashes = true
"#;
