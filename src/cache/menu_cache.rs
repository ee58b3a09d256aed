//! SQLite-backed menu cache
//!
//! Provides a `MenuCache` that serves the menu from a local `Menu` table,
//! falls back to a `MenuSource` when the table is empty, and answers
//! category/text filter queries against the table.

use std::fs;
use std::path::Path;

use rusqlite::{params, params_from_iter, Connection, Row, Transaction};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::data::{FilterState, MenuItem, MenuSource};
use crate::error::{MenuError, Result};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS Menu(
    Name TEXT,
    Price TEXT,
    Description TEXT,
    Image TEXT,
    Category TEXT
)";

const SELECT_COLUMNS: &str = "SELECT Name, Price, Description, Image, Category FROM Menu";

const INSERT_SQL: &str =
    "INSERT INTO Menu(Name, Price, Description, Image, Category) VALUES (?1, ?2, ?3, ?4, ?5)";

/// Local table of menu items with cache-aside loading
///
/// A cache whose storage could not be opened is still a valid value: it
/// logs the failure once and every later operation is a no-op.
#[derive(Debug)]
pub struct MenuCache {
    /// Open connection, or `None` if storage is unavailable
    conn: Option<Connection>,
}

impl MenuCache {
    /// Opens (creating if needed) the database file at `path` and ensures
    /// the `Menu` table exists.
    ///
    /// Failures are logged, not returned; check `is_ready()` if the caller
    /// cares.
    pub fn initialize(path: &Path) -> Self {
        match Self::open_file(path) {
            Ok(conn) => {
                info!(path = %path.display(), "Database initialized successfully");
                Self { conn: Some(conn) }
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Database initialization error");
                Self::unavailable()
            }
        }
    }

    /// Opens a private in-memory database, used for tests and `--db :memory:`
    pub fn in_memory() -> Self {
        let opened = Connection::open_in_memory()
            .map_err(MenuError::from)
            .and_then(|conn| Self::create_schema(&conn).map(|_| conn));

        match opened {
            Ok(conn) => Self { conn: Some(conn) },
            Err(e) => {
                error!(error = %e, "In-memory database initialization error");
                Self::unavailable()
            }
        }
    }

    /// A cache with no storage behind it
    pub fn unavailable() -> Self {
        Self { conn: None }
    }

    fn open_file(path: &Path) -> Result<Connection> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Self::create_schema(&conn)?;
        Ok(conn)
    }

    fn create_schema(conn: &Connection) -> Result<()> {
        conn.execute(CREATE_TABLE_SQL, [])?;
        Ok(())
    }

    /// Whether storage opened successfully
    pub fn is_ready(&self) -> bool {
        self.conn.is_some()
    }

    /// Reads every row, in insertion order
    pub fn all_items(&self) -> Result<Vec<MenuItem>> {
        let conn = self.conn.as_ref().ok_or(MenuError::Unavailable)?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY rowid"))?;
        let rows = stmt.query_map([], row_to_item)?;
        let items = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    /// Returns the cached menu, fetching and persisting it on a miss.
    ///
    /// # Behavior
    /// - Storage unavailable: returns an empty list
    /// - Table non-empty: returns its rows without touching the source
    /// - Table empty: fetches from `source`; on success the items are
    ///   persisted and returned, on failure an empty list is returned
    ///
    /// No retry is attempted. A failed save does not hide a successful
    /// fetch; the fetched items are still returned.
    pub async fn load<S: MenuSource>(&mut self, source: &S) -> Vec<MenuItem> {
        if !self.is_ready() {
            warn!("Database not ready, skipping menu load");
            return Vec::new();
        }

        match self.all_items() {
            Ok(items) if !items.is_empty() => {
                info!(count = items.len(), "Serving menu from local database");
                return items;
            }
            Ok(_) => info!("No data in database, fetching from remote source"),
            Err(e) => {
                error!(error = %e, "Database error while loading menu");
                return Vec::new();
            }
        }

        match source.fetch_menu().await {
            Ok(items) => {
                if let Err(e) = self.refresh(&items) {
                    error!(error = %e, "Failed to save fetched menu");
                }
                items
            }
            Err(e) => {
                warn!(error = %e, "Menu fetch failed");
                Vec::new()
            }
        }
    }

    /// Replaces the table contents with `items`, in order.
    ///
    /// The delete and every insert run in one transaction. If any statement
    /// fails the transaction is dropped uncommitted and the previous rows
    /// stay in place.
    pub fn refresh(&mut self, items: &[MenuItem]) -> Result<()> {
        let conn = self.conn.as_mut().ok_or(MenuError::Unavailable)?;

        let tx = conn.transaction()?;
        replace_rows(&tx, items)?;
        tx.commit()?;

        info!(count = items.len(), "Menu saved to database");
        Ok(())
    }

    /// Whether the table holds at least one row
    pub fn has_rows(&self) -> bool {
        let Some(conn) = self.conn.as_ref() else {
            return false;
        };
        match conn.query_row("SELECT EXISTS(SELECT 1 FROM Menu)", [], |row| row.get(0)) {
            Ok(exists) => exists,
            Err(e) => {
                warn!(error = %e, "Failed to check menu table");
                false
            }
        }
    }

    /// Refreshes from an untyped JSON value.
    ///
    /// An absent value, a value that is not an array, or an array whose
    /// entries are not menu items leaves the table untouched.
    pub fn refresh_json(&mut self, payload: Option<&Value>) {
        let Some(Value::Array(entries)) = payload else {
            debug!("Ignoring refresh without an item list");
            return;
        };

        let items = match entries
            .iter()
            .map(|entry| serde_json::from_value(entry.clone()))
            .collect::<serde_json::Result<Vec<MenuItem>>>()
        {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "Ignoring refresh with malformed items");
                return;
            }
        };

        if let Err(e) = self.refresh(&items) {
            error!(error = %e, "Failed to save menu");
        }
    }

    /// Runs a filtered query.
    ///
    /// Matches rows whose name contains `filter.text` (SQLite `LIKE`, so
    /// ASCII case-insensitive) and whose category is in the filter's active
    /// set. Returns `None` on any failure so the caller keeps whatever it
    /// was displaying.
    pub fn query(&self, filter: &FilterState) -> Option<Vec<MenuItem>> {
        match self.run_query(filter) {
            Ok(items) => {
                debug!(count = items.len(), text = %filter.text, "Filtered menu query");
                Some(items)
            }
            Err(e) => {
                warn!(error = %e, "Filtered menu query failed");
                None
            }
        }
    }

    fn run_query(&self, filter: &FilterState) -> Result<Vec<MenuItem>> {
        let conn = self.conn.as_ref().ok_or(MenuError::Unavailable)?;

        let categories = filter.active_categories();
        let placeholders = vec!["?"; categories.len()].join(", ");
        let sql = format!(
            "{SELECT_COLUMNS} WHERE Name LIKE ? AND Category IN ({placeholders}) ORDER BY rowid"
        );

        let pattern = format!("%{}%", filter.text);
        let mut values: Vec<&str> = Vec::with_capacity(categories.len() + 1);
        values.push(&pattern);
        values.extend(categories.iter().map(|c| c.key()));

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values), row_to_item)?;
        let items = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }
}

/// Deletes every row and inserts `items` in order, inside the caller's
/// transaction. Nothing is visible to other connections until it commits.
fn replace_rows(tx: &Transaction<'_>, items: &[MenuItem]) -> Result<()> {
    tx.execute("DELETE FROM Menu", [])?;
    let mut insert = tx.prepare(INSERT_SQL)?;
    for item in items {
        insert.execute(params![
            item.name,
            item.price,
            item.description,
            item.image,
            item.category
        ])?;
    }
    Ok(())
}

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<MenuItem> {
    Ok(MenuItem {
        name: row.get(0)?,
        price: row.get(1)?,
        description: row.get(2)?,
        image: row.get(3)?,
        category: row.get(4)?,
    })
}
