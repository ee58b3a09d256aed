//! Local menu cache
//!
//! This module owns the SQLite table that mirrors the remote menu document.
//! The cache is consulted first; on a miss the remote source is fetched and
//! the table is repopulated before the result is returned. Refreshes replace
//! the whole table inside a single transaction.

mod menu_cache;

pub use menu_cache::MenuCache;
