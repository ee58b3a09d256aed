//! Runtime configuration
//!
//! Resolves where the menu database and the log file live, and which URL the
//! menu is fetched from. Explicit CLI values (or their environment variables)
//! win; otherwise XDG-compliant defaults from `directories` are used.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::cache::MenuCache;
use crate::cli::Cli;
use crate::data::{MenuClient, DEFAULT_MENU_URL};

const DB_FILE_NAME: &str = "little_lemon.db";
const LOG_FILE_NAME: &str = "littlelemon.log";
const MEMORY_DB: &str = ":memory:";

/// Where the menu table is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    /// SQLite database file
    File(PathBuf),
    /// Throwaway database, gone when the process exits
    Memory,
}

/// Resolved configuration for one run of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db: DbLocation,
    pub menu_url: String,
    /// `None` disables logging entirely
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Builds the configuration from parsed CLI arguments
    ///
    /// Uses `~/.local/share/littlelemon/` for the database and
    /// `~/.cache/littlelemon/` for the log on Linux, or the platform
    /// equivalents elsewhere.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(cli, ProjectDirs::from("", "", "littlelemon"))
    }

    fn resolve(cli: &Cli, dirs: Option<ProjectDirs>) -> Self {
        let db = match &cli.db {
            Some(path) if path == Path::new(MEMORY_DB) => DbLocation::Memory,
            Some(path) => DbLocation::File(path.clone()),
            None => dirs
                .as_ref()
                .map(|d| DbLocation::File(d.data_dir().join(DB_FILE_NAME)))
                .unwrap_or(DbLocation::Memory),
        };

        let log_file = cli
            .log_file
            .clone()
            .or_else(|| dirs.as_ref().map(|d| d.cache_dir().join(LOG_FILE_NAME)));

        Self {
            db,
            menu_url: cli
                .menu_url
                .clone()
                .unwrap_or_else(|| DEFAULT_MENU_URL.to_string()),
            log_file,
        }
    }

    /// Opens the menu cache at the configured location
    pub fn open_cache(&self) -> MenuCache {
        match &self.db {
            DbLocation::File(path) => MenuCache::initialize(path),
            DbLocation::Memory => MenuCache::in_memory(),
        }
    }

    /// Creates the remote menu client
    pub fn menu_client(&self) -> MenuClient {
        MenuClient::with_url(self.menu_url.clone())
    }
}
