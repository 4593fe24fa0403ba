//! Configuration management for auto-indent.
//!
//! This module provides the [`Config`] struct which controls formatting
//! behavior. Configuration can be loaded from:
//! - TOML files (`auto-indent.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered by searching parent directories from
//! the file being formatted up to the filesystem root, plus the user's
//! home directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::editor::EditorOptions;

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["auto-indent.toml"];

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    // Try HOME environment variable first (works on Unix and some Windows setups)
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

// Serde default functions
fn default_tab_size() -> usize {
    4
}
fn default_true() -> bool {
    true
}

/// Main configuration struct for auto-indent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tab-stop width in columns (default: 4)
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Canonicalize leading whitespace to spaces; false uses tabs with a
    /// space remainder (default: true)
    #[serde(default = "default_true")]
    pub insert_spaces: bool,

    /// Split trailing opening braces onto their own line (default: true)
    #[serde(default = "default_true")]
    pub split_braces: bool,

    /// Insert a blank line before block constructs (default: true)
    #[serde(default = "default_true")]
    pub blank_before_blocks: bool,

    /// Insert a blank line before function declarations (default: true)
    #[serde(default = "default_true")]
    pub blank_before_functions: bool,

    /// Recompute indentation after the rewrite passes (default: true)
    #[serde(default = "default_true")]
    pub reindent: bool,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    pub tab_size: Option<usize>,
    pub insert_spaces: Option<bool>,
    pub split_braces: Option<bool>,
    pub blank_before_blocks: Option<bool>,
    pub blank_before_functions: Option<bool>,
    pub reindent: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tab_size: 4,
            insert_spaces: true,
            split_braces: true,
            blank_before_blocks: true,
            blank_before_functions: true,
            reindent: true,
        }
    }
}

impl Config {
    /// Maximum reasonable tab size
    const MAX_TAB_SIZE: usize = 16;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.tab_size == 0 {
            return Some("tab_size must be at least 1".to_string());
        }
        if self.tab_size > Self::MAX_TAB_SIZE {
            return Some(format!(
                "tab_size {} exceeds maximum of {}",
                self.tab_size,
                Self::MAX_TAB_SIZE
            ));
        }
        None
    }

    /// The editor options this configuration prescribes.
    #[must_use]
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            tab_size: self.tab_size,
            insert_spaces: self.insert_spaces,
        }
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.tab_size {
            self.tab_size = v;
        }
        if let Some(v) = partial.insert_spaces {
            self.insert_spaces = v;
        }
        if let Some(v) = partial.split_braces {
            self.split_braces = v;
        }
        if let Some(v) = partial.blank_before_blocks {
            self.blank_before_blocks = v;
        }
        if let Some(v) = partial.blank_before_functions {
            self.blank_before_functions = v;
        }
        if let Some(v) = partial.reindent {
            self.reindent = v;
        }
    }

    /// Discover config files from parent directories of a given path
    ///
    /// Searches from the file's directory up to the root, then adds home
    /// directory config. Returns list of config file paths in order of
    /// priority (least specific first).
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        // Add home directory config first (lowest priority)
        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        // Start from the file's parent directory (or the path itself if it's a directory)
        let start_dir = if start_path.is_file() {
            start_path.parent().map(Path::to_path_buf)
        } else if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            // Path doesn't exist, use current directory
            std::env::current_dir().ok()
        };

        // Collect config files from parent directories (from root to current)
        if let Some(dir) = start_dir {
            let mut ancestors: Vec<PathBuf> = dir.ancestors().map(Path::to_path_buf).collect();
            // Reverse so we go from root to current (less specific to more specific)
            ancestors.reverse();

            for ancestor in ancestors {
                for config_name in CONFIG_FILE_NAMES {
                    let config_path = ancestor.join(config_name);
                    if config_path.is_file() && !config_files.contains(&config_path) {
                        config_files.push(config_path);
                    }
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Returns default config if no files found.
    #[must_use]
    pub fn from_discovered_files(start_path: &Path) -> Self {
        let config_files = Self::discover_config_files(start_path);

        if config_files.is_empty() {
            return Self::default();
        }

        let mut config = Self::default();
        for path in &config_files {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => config.apply_partial(&partial),
                    Err(e) => eprintln!("Warning: failed to parse {}: {e}", path.display()),
                },
                Err(e) => eprintln!("Warning: failed to read {}: {e}", path.display()),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tab_size, 4);
        assert!(config.insert_spaces);
        assert!(config.split_braces);
        assert!(config.blank_before_blocks);
        assert!(config.blank_before_functions);
        assert!(config.reindent);
    }

    #[test]
    fn test_editor_options_mirror_config() {
        let config = Config {
            tab_size: 2,
            insert_spaces: false,
            ..Default::default()
        };
        let options = config.editor_options();
        assert_eq!(options.tab_size, 2);
        assert!(!options.insert_spaces);
    }

    #[test]
    fn test_config_apply_partial() {
        let mut base = Config::default();
        assert_eq!(base.tab_size, 4);

        // Only set tab_size and reindent, leave others as None
        let partial = PartialConfig {
            tab_size: Some(8),
            reindent: Some(false),
            ..Default::default()
        };

        base.apply_partial(&partial);
        assert_eq!(base.tab_size, 8);
        assert!(!base.reindent);
        // Other fields should remain at defaults
        assert!(base.insert_spaces);
        assert!(base.split_braces);
    }

    #[test]
    fn test_config_apply_partial_preserves_unset() {
        let mut base = Config::default();
        base.tab_size = 2; // Set a non-default value

        // Partial config that only sets insert_spaces
        let partial = PartialConfig {
            insert_spaces: Some(false),
            ..Default::default()
        };

        base.apply_partial(&partial);
        // tab_size should be preserved (not reset to default)
        assert_eq!(base.tab_size, 2);
        assert!(!base.insert_spaces);
    }

    #[test]
    fn test_partial_parses_from_toml() {
        let partial: PartialConfig = toml::from_str("tab_size = 2\nsplit_braces = false\n").unwrap();
        assert_eq!(partial.tab_size, Some(2));
        assert_eq!(partial.split_braces, Some(false));
        assert_eq!(partial.insert_spaces, None);
    }

    #[test]
    fn test_discover_config_files_nonexistent_path() {
        // Discovery from a path that doesn't exist should not panic
        let path = PathBuf::from("/nonexistent/path/file.c");
        let _files = Config::discover_config_files(&path);
    }

    #[test]
    fn test_from_discovered_files_returns_default_when_empty() {
        // When no config files exist, should return default config
        let path = PathBuf::from("/nonexistent/unique/path/file.c");
        let config = Config::from_discovered_files(&path);
        assert_eq!(config.tab_size, 4);
        assert!(config.insert_spaces);
    }

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(
            config.validate().is_none(),
            "Default config should be valid"
        );
    }

    #[test]
    fn test_validate_tab_size_zero() {
        let config = Config {
            tab_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_some());
        assert!(config.validate().unwrap().contains("tab_size"));
    }

    #[test]
    fn test_validate_tab_size_too_large() {
        let config = Config {
            tab_size: 100,
            ..Default::default()
        };
        assert!(config.validate().is_some());
    }
}
