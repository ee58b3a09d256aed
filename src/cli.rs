//! Command-line interface parsing for the Little Lemon client
//!
//! This module handles parsing of CLI arguments using clap: storage and
//! source locations, startup filters, and the profile of the current user.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::data::{Category, FilterState};
use crate::profile::UserProfile;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified category name is not recognized
    #[error("Invalid category: '{0}'. Valid categories: starters, mains, desserts")]
    InvalidCategory(String),
}

/// Little Lemon - browse the restaurant menu from your terminal
#[derive(Parser, Debug)]
#[command(name = "littlelemon")]
#[command(about = "Little Lemon menu browser with a local cache")]
#[command(version)]
pub struct Cli {
    /// Path of the SQLite menu database (":memory:" for a throwaway cache)
    #[arg(long, value_name = "PATH", env = "LITTLE_LEMON_DB")]
    pub db: Option<PathBuf>,

    /// URL of the menu document fetched when the cache is empty
    #[arg(long, value_name = "URL", env = "LITTLE_LEMON_MENU_URL")]
    pub menu_url: Option<String>,

    /// File that receives log output
    #[arg(long, value_name = "PATH", env = "LITTLE_LEMON_LOG")]
    pub log_file: Option<PathBuf>,

    /// Start with this search text applied
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Start with a category selected (repeatable)
    ///
    /// Valid categories: starters, mains, desserts
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// First name shown in the header and profile
    #[arg(long, value_name = "NAME")]
    pub first_name: Option<String>,

    /// Last name shown in the profile
    #[arg(long, value_name = "NAME")]
    pub last_name: Option<String>,

    /// Email shown in the profile
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Filter applied right after the menu loads
    pub initial_filter: FilterState,
    /// Profile of the current user
    pub profile: UserProfile,
}

/// Parses a category string argument into a Category.
///
/// # Returns
/// * `Ok(Category)` if the string matches a known category
/// * `Err(CliError::InvalidCategory)` if the string doesn't match
pub fn parse_category_arg(s: &str) -> Result<Category, CliError> {
    Category::from_str(s).ok_or_else(|| CliError::InvalidCategory(s.to_string()))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with the requested filter and profile
    /// * `Err(CliError)` if an invalid category was specified
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let mut initial_filter = FilterState::new();
        for name in &cli.categories {
            let category = parse_category_arg(name)?;
            // Repeating a category selects it once
            if !initial_filter.is_selected(category) {
                initial_filter.toggle(category);
            }
        }
        if let Some(text) = &cli.search {
            initial_filter.text = text.clone();
        }

        let profile = match (&cli.first_name, &cli.email) {
            (None, None) => UserProfile::default(),
            (first_name, email) => UserProfile::onboarded(
                first_name.clone().unwrap_or_default(),
                cli.last_name.clone().unwrap_or_default(),
                email.clone().unwrap_or_default(),
            ),
        };

        Ok(StartupConfig {
            initial_filter,
            profile,
        })
    }

    /// Whether the startup filter narrows the menu at all
    pub fn has_filter(&self) -> bool {
        self.initial_filter != FilterState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_arg_aliases() {
        assert_eq!(parse_category_arg("starters").unwrap(), Category::Starters);
        assert_eq!(parse_category_arg("Main").unwrap(), Category::Mains);
        assert_eq!(parse_category_arg("DESSERTS").unwrap(), Category::Desserts);
    }

    #[test]
    fn test_parse_category_arg_invalid() {
        let result = parse_category_arg("drinks");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid category"));
        assert!(err.to_string().contains("drinks"));
    }

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert!(!config.has_filter());
        assert!(!config.profile.is_onboarding_complete);
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["littlelemon"]);
        assert!(cli.search.is_none());
        assert!(cli.categories.is_empty());
        assert!(cli.first_name.is_none());
    }

    #[test]
    fn test_cli_parse_repeated_category() {
        let cli = Cli::parse_from(["littlelemon", "--category", "mains", "--category", "desserts"]);
        assert_eq!(cli.categories, ["mains", "desserts"]);
    }

    #[test]
    fn test_cli_parse_paths() {
        let cli = Cli::parse_from([
            "littlelemon",
            "--db",
            "/tmp/menu.db",
            "--menu-url",
            "http://localhost:8080/menu.json",
        ]);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/menu.db")));
        assert_eq!(cli.menu_url.as_deref(), Some("http://localhost:8080/menu.json"));
    }

    #[test]
    fn test_startup_config_from_cli_filters() {
        let cli = Cli::parse_from([
            "littlelemon",
            "--search",
            "Fish",
            "--category",
            "mains",
            "--category",
            "main",
        ]);
        let config = StartupConfig::from_cli(&cli).unwrap();

        assert!(config.has_filter());
        assert_eq!(config.initial_filter.text, "Fish");
        assert_eq!(config.initial_filter.active_categories(), vec![Category::Mains]);
    }

    #[test]
    fn test_startup_config_from_cli_profile() {
        let cli = Cli::parse_from([
            "littlelemon",
            "--first-name",
            "tilly",
            "--last-name",
            "nguyen",
            "--email",
            "tilly@example.com",
        ]);
        let config = StartupConfig::from_cli(&cli).unwrap();

        assert!(config.profile.is_onboarding_complete);
        assert_eq!(config.profile.initials, "TN");
        assert_eq!(config.profile.email, "tilly@example.com");
    }

    #[test]
    fn test_startup_config_from_cli_invalid_category() {
        let cli = Cli::parse_from(["littlelemon", "--category", "drinks"]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }
}
