//! Remote menu client
//!
//! Fetches the restaurant menu document with a single unauthenticated GET.
//! Any non-success status or a body that is not a menu document counts as a
//! total fetch failure.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use super::MenuItem;
use crate::error::{MenuError, Result};

/// Location of the published menu document
pub const DEFAULT_MENU_URL: &str =
    "https://raw.githubusercontent.com/Meta-Mobile-Developer-PC/Working-With-Data-API/main/capstone.json";

/// Top-level shape of the menu document
#[derive(Debug, Deserialize)]
struct MenuResponse {
    menu: Vec<MenuItem>,
}

/// Anything that can produce the authoritative menu on a cache miss
#[allow(async_fn_in_trait)]
pub trait MenuSource {
    /// Fetches the full menu
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>>;
}

/// HTTP client for the published menu document
#[derive(Debug, Clone)]
pub struct MenuClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Document URL (overridable from the command line)
    url: String,
}

impl MenuClient {
    /// Creates a client for the default menu URL
    pub fn new() -> Self {
        Self::with_url(DEFAULT_MENU_URL)
    }

    /// Creates a client for a custom menu URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            url: url.into(),
        }
    }

    /// The URL this client fetches from
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for MenuClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuSource for MenuClient {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>> {
        info!(url = %self.url, "Fetching menu from remote source");

        let response = self.http_client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MenuError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let items = parse_menu(&body)?;
        debug!(count = items.len(), "Decoded menu document");
        Ok(items)
    }
}

/// Decodes a menu document body into its items
pub fn parse_menu(body: &str) -> Result<Vec<MenuItem>> {
    let response: MenuResponse = serde_json::from_str(body)?;
    Ok(response.menu)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "menu": [
            {
                "name": "Greek Salad",
                "price": "12.99",
                "description": "The famous greek salad of crispy lettuce, peppers, olives.",
                "image": "greekSalad.jpg",
                "category": "starters"
            },
            {
                "name": "Grilled Fish",
                "price": "20.00",
                "description": "Barbequed catch of the day, with red onion, crisp capers.",
                "image": "grilledFish.jpg",
                "category": "mains"
            },
            {
                "name": "Lemon Dessert",
                "price": "6.99",
                "description": "Light and fluffy traditional homemade Italian Lemon and ricotta cake.",
                "image": "lemonDessert.jpg",
                "category": "desserts"
            }
        ]
    }"#;

    #[test]
    fn test_parse_menu_keeps_document_order() {
        let items = parse_menu(SAMPLE).expect("Sample should parse");

        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Greek Salad", "Grilled Fish", "Lemon Dessert"]);
        assert_eq!(items[1].price, "20.00");
        assert_eq!(items[2].category, "desserts");
    }

    #[test]
    fn test_parse_menu_empty_list() {
        let items = parse_menu(r#"{ "menu": [] }"#).expect("Empty menu should parse");
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_menu_missing_field_is_error() {
        let result = parse_menu(r#"{ "items": [] }"#);
        assert!(matches!(result, Err(MenuError::Decode(_))));
    }

    #[test]
    fn test_parse_menu_non_array_is_error() {
        let result = parse_menu(r#"{ "menu": "not a list" }"#);
        assert!(matches!(result, Err(MenuError::Decode(_))));
    }

    #[test]
    fn test_parse_menu_malformed_json_is_error() {
        assert!(parse_menu("<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_default_client_uses_published_url() {
        let client = MenuClient::default();
        assert_eq!(client.url(), DEFAULT_MENU_URL);
    }

    #[tokio::test]
    async fn test_fetch_from_unreachable_host_is_http_error() {
        let client = MenuClient::with_url("http://127.0.0.1:1/capstone.json");

        let result = client.fetch_menu().await;

        assert!(matches!(result, Err(MenuError::Http(_))));
    }
}
