//! Core data models for the Little Lemon client
//!
//! This module contains the menu item type shared by the remote client, the
//! local cache and the UI, together with the fixed category set and the
//! filter state used to query the cache.

pub mod menu;

pub use menu::{MenuClient, MenuSource, DEFAULT_MENU_URL};

use serde::{Deserialize, Deserializer, Serialize};

/// A single dish on the menu
///
/// Field names match both the remote JSON document and the columns of the
/// local `Menu` table. There is no identifier; two identical rows are two
/// entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Dish name
    pub name: String,
    /// Price kept as text, exactly as received (e.g. "12.99")
    #[serde(deserialize_with = "price_as_text")]
    pub price: String,
    /// Short description
    pub description: String,
    /// Image file name, turned into a URL by the display layer
    pub image: String,
    /// Category key, lowercase by convention (e.g. "mains")
    pub category: String,
}

impl MenuItem {
    /// Convenience constructor, mostly for tests and fixtures
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: description.into(),
            image: image.into(),
            category: category.into(),
        }
    }
}

/// Accepts the price as either a JSON string or a JSON number.
fn price_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Price {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Price::deserialize(deserializer)? {
        Price::Text(text) => text,
        Price::Number(number) => number.to_string(),
    })
}

/// The known menu categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Starters,
    Mains,
    Desserts,
}

impl Category {
    /// Number of known categories
    pub const COUNT: usize = 3;

    /// Returns all categories in display order.
    pub fn all() -> &'static [Category; Category::COUNT] {
        &[Category::Starters, Category::Mains, Category::Desserts]
    }

    /// Human-readable label shown on the filter chips
    pub fn label(&self) -> &'static str {
        match self {
            Category::Starters => "Starters",
            Category::Mains => "Mains",
            Category::Desserts => "Desserts",
        }
    }

    /// The value stored in the `Category` column: the lower-cased label
    pub fn key(&self) -> &'static str {
        match self {
            Category::Starters => "starters",
            Category::Mains => "mains",
            Category::Desserts => "desserts",
        }
    }

    /// Position of this category in `all()`
    pub fn index(&self) -> usize {
        match self {
            Category::Starters => 0,
            Category::Mains => 1,
            Category::Desserts => 2,
        }
    }

    /// Parses user input into a Category.
    ///
    /// Matching is case-insensitive and accepts singular forms.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Category> {
        match s.to_lowercase().trim() {
            "starters" | "starter" => Some(Category::Starters),
            "mains" | "main" => Some(Category::Mains),
            "desserts" | "dessert" => Some(Category::Desserts),
            _ => None,
        }
    }
}

/// Category selections plus free-text search
///
/// With every flag cleared the filter means "all categories", never "none".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// One flag per entry of `Category::all()`
    pub selections: [bool; Category::COUNT],
    /// Substring matched against item names
    pub text: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper setting the search text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder-style helper selecting a category
    pub fn with_category(mut self, category: Category) -> Self {
        self.selections[category.index()] = true;
        self
    }

    /// Flips the flag for a category
    pub fn toggle(&mut self, category: Category) {
        let flag = &mut self.selections[category.index()];
        *flag = !*flag;
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.selections[category.index()]
    }

    /// Clears every category flag (back to "all categories")
    pub fn clear_categories(&mut self) {
        self.selections = [false; Category::COUNT];
    }

    /// The categories a query should include.
    ///
    /// All flags false yields every known category; otherwise exactly the
    /// flagged ones, in display order.
    pub fn active_categories(&self) -> Vec<Category> {
        let none_selected = self.selections.iter().all(|selected| !selected);
        Category::all()
            .iter()
            .copied()
            .filter(|category| none_selected || self.is_selected(*category))
            .collect()
    }

    /// In-memory counterpart of the cache query: the item's category is
    /// active and its name contains the text, ignoring ASCII case.
    pub fn matches(&self, item: &MenuItem) -> bool {
        let in_category = self
            .active_categories()
            .iter()
            .any(|category| category.key() == item.category);
        in_category
            && item
                .name
                .to_ascii_lowercase()
                .contains(&self.text.to_ascii_lowercase())
    }
}
