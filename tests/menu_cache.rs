//! Integration tests for the menu cache against an on-disk database
//!
//! These open a second connection to the same file to check what another
//! reader observes.

use littlelemon::cache::MenuCache;
use littlelemon::data::{Category, FilterState, MenuItem};
use rusqlite::Connection;
use tempfile::TempDir;

fn sample_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Greek Salad", "12.99", "Crispy lettuce", "greekSalad.jpg", "starters"),
        MenuItem::new("Grilled Fish", "20.00", "Catch of the day", "grilledFish.jpg", "mains"),
        MenuItem::new("Chicken Pasta", "18.99", "Penne and chicken", "pasta.jpg", "mains"),
        MenuItem::new("Lemon Dessert", "6.99", "Ricotta cake", "lemonDessert.jpg", "desserts"),
    ]
}

fn row_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM Menu", [], |row| row.get(0))
        .expect("Count should succeed")
}

#[test]
fn test_refresh_visible_to_other_connection() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("little_lemon.db");
    let mut cache = MenuCache::initialize(&path);

    cache.refresh(&sample_menu()).expect("Refresh should succeed");

    let reader = Connection::open(&path).unwrap();
    assert_eq!(row_count(&reader), sample_menu().len() as i64);
}

#[test]
fn test_failed_refresh_keeps_rows_for_other_reader() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("little_lemon.db");
    let mut cache = MenuCache::initialize(&path);
    cache.refresh(&sample_menu()).expect("Refresh should succeed");

    let reader = Connection::open(&path).unwrap();
    reader
        .execute_batch(
            "CREATE TRIGGER reject_last BEFORE INSERT ON Menu
             WHEN NEW.Name = 'Broken'
             BEGIN SELECT RAISE(ABORT, 'injected fault'); END;",
        )
        .unwrap();

    let mut next = vec![MenuItem::new("Soup", "5.00", "Hot", "soup.jpg", "starters")];
    next.push(MenuItem::new("Broken", "0.00", "", "", "mains"));

    assert!(cache.refresh(&next).is_err());

    assert_eq!(row_count(&reader), sample_menu().len() as i64);
    assert_eq!(cache.all_items().unwrap(), sample_menu());
}

#[test]
fn test_contents_survive_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("little_lemon.db");
    MenuCache::initialize(&path)
        .refresh(&sample_menu())
        .expect("Refresh should succeed");

    let reopened = MenuCache::initialize(&path);

    assert_eq!(reopened.all_items().unwrap(), sample_menu());
}

#[test]
fn test_chicken_search_across_categories() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut cache = MenuCache::initialize(&temp_dir.path().join("little_lemon.db"));
    cache.refresh(&sample_menu()).unwrap();

    let items = cache.query(&FilterState::new().with_text("chicken")).unwrap();

    assert_eq!(items.len(), 1);
    assert!(items.iter().all(|i| i.name.contains("Chicken")));
}

#[test]
fn test_desserts_flag_only_returns_desserts() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut cache = MenuCache::initialize(&temp_dir.path().join("little_lemon.db"));
    cache.refresh(&sample_menu()).unwrap();

    let items = cache
        .query(&FilterState::new().with_category(Category::Desserts))
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category, "desserts");
}
