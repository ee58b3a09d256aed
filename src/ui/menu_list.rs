//! Menu screen rendering
//!
//! Renders the home view: a header with the user's initials, the restaurant
//! hero text, the search bar, the category chips and the menu list with
//! prices and image links.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{Category, MenuItem};

/// Where menu images are published; `{image}` is the stored image field
const IMAGE_URL_BASE: &str =
    "https://github.com/Meta-Mobile-Developer-PC/Working-With-Data-API/blob/main/images/";

/// Lines used by one menu entry (name/price, description, image)
const LINES_PER_ITEM: usize = 3;

/// Builds the public URL of a menu item's image
pub fn image_url(image: &str) -> String {
    format!("{}{}?raw=true", IMAGE_URL_BASE, image)
}

/// Formats a stored price for display (e.g. "$12.99")
pub fn format_price(price: &str) -> String {
    format!("${}", price)
}

/// Truncates `text` to at most `width` characters, marking the cut with "…"
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Renders the menu screen
///
/// # Arguments
/// * `frame` - The ratatui Frame to render to
/// * `app` - The application state containing the displayed menu and filters
pub fn render_menu_list(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Navbar + hero
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Category chips
            Constraint::Min(3),    // Menu list
            Constraint::Length(1), // Help text
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_search_bar(frame, app, chunks[1]);
    render_chips(frame, app, chunks[2]);
    render_list(frame, app, chunks[3]);
    render_help(frame, chunks[4], app);
}

/// Renders the navbar line and the hero text
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let initials = if app.profile.initials.is_empty() {
        "--".to_string()
    } else {
        app.profile.initials.clone()
    };

    let title_width = "LITTLE LEMON".len() + initials.len() + 4;
    let gap = (area.width as usize).saturating_sub(title_width);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "LITTLE LEMON",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(gap)),
            Span::styled(
                format!("({})", initials),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Little Lemon",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Salt Lake City",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "We are a family owned Mediterranean restaurant, focused on traditional recipes served with a modern twist.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let block = Block::default().style(Style::default().bg(Color::Rgb(0x49, 0x5E, 0x57)));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the search bar, highlighting it while it has focus
fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.search_active {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let mut spans = vec![Span::styled("/ ", Style::default().fg(Color::Yellow))];
    if app.search_bar_text.is_empty() && !app.search_active {
        spans.push(Span::styled(
            "Search menu...",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            app.search_bar_text.clone(),
            Style::default().fg(Color::White),
        ));
        if app.search_active {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }
    }
    if app.search_pending() {
        spans.push(Span::styled(" …", Style::default().fg(Color::DarkGray)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Renders one chip per category; selected chips are inverted
fn render_chips(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (i, category) in Category::all().iter().enumerate() {
        let style = if app.filter.is_selected(*category) {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Black).bg(Color::Gray)
        };
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, category.label()),
            style,
        ));
        spans.push(Span::raw("  "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the menu entries, scrolled so the selection stays visible
fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Order for Delivery! ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    if app.menu.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No menu available",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_height = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(4) as usize;
    let visible_items = (inner_height / LINES_PER_ITEM).max(1);
    let first = if app.selected_index >= visible_items {
        app.selected_index + 1 - visible_items
    } else {
        0
    };

    let mut lines: Vec<Line> = Vec::with_capacity(visible_items * LINES_PER_ITEM);
    for (index, item) in app.menu.iter().enumerate().skip(first).take(visible_items) {
        lines.extend(item_lines(item, index == app.selected_index, inner_width));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Builds the three lines of one menu entry
fn item_lines(item: &MenuItem, is_selected: bool, width: usize) -> Vec<Line<'static>> {
    let cursor = if is_selected { "\u{25B8} " } else { "  " }; // ▸ or space

    let name_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let price = format_price(&item.price);
    let name_width = width.saturating_sub(price.chars().count() + 3);
    let name_padded = format!("{:<w$}", truncate(&item.name, name_width), w = name_width);

    vec![
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Yellow)),
            Span::styled(name_padded, name_style),
            Span::raw(" "),
            Span::styled(price, Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                truncate(&item.description, width.saturating_sub(2)),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                truncate(&image_url(&item.image), width.saturating_sub(2)),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ]
}

/// Renders the help text at the bottom of the screen with data freshness
fn render_help(frame: &mut Frame, area: Rect, app: &App) {
    let mut help_spans = vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Navigate  "),
        Span::styled("/", Style::default().fg(Color::Yellow)),
        Span::raw(" Search  "),
        Span::styled("1-3", Style::default().fg(Color::Yellow)),
        Span::raw(" Category  "),
        Span::styled("p", Style::default().fg(Color::Yellow)),
        Span::raw(" Profile  "),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::raw(" Help  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ];

    if let Some(last_refresh) = app.last_refresh {
        let elapsed = Local::now() - last_refresh;
        let mins_ago = elapsed.num_minutes();
        let freshness_text = if mins_ago < 1 {
            " │ Menu: just now".to_string()
        } else if mins_ago < 60 {
            format!(" │ Menu: {}m ago", mins_ago)
        } else {
            format!(" │ Menu: {}h ago", elapsed.num_hours())
        };
        help_spans.push(Span::styled(
            freshness_text,
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph =
        Paragraph::new(Line::from(help_spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::cache::MenuCache;
    use crate::cli::StartupConfig;
    use crate::profile::UserProfile;
    use ratatui::{backend::TestBackend, Terminal};

    fn create_test_app(menu: Vec<MenuItem>) -> App {
        let mut app = App::new(MenuCache::in_memory(), StartupConfig::default());
        app.state = AppState::Menu;
        app.menu = menu;
        app
    }

    fn sample_menu() -> Vec<MenuItem> {
        vec![
            MenuItem::new("Greek Salad", "12.99", "Crispy lettuce", "greekSalad.jpg", "starters"),
            MenuItem::new("Lemon Dessert", "6.99", "Ricotta cake", "lemonDessert.jpg", "desserts"),
        ]
    }

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                render_menu_list(frame, app);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_image_url_template() {
        assert_eq!(
            image_url("greekSalad.jpg"),
            "https://github.com/Meta-Mobile-Developer-PC/Working-With-Data-API/blob/main/images/greekSalad.jpg?raw=true"
        );
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("12.99"), "$12.99");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 6), "a lon…");
    }

    #[test]
    fn test_menu_items_are_rendered() {
        let app = create_test_app(sample_menu());
        let content = render_to_string(&app, 100, 30);

        assert!(content.contains("Greek Salad"));
        assert!(content.contains("$12.99"));
        assert!(content.contains("Lemon Dessert"));
        assert!(content.contains("Order for Delivery!"));
    }

    #[test]
    fn test_selected_item_has_cursor() {
        let app = create_test_app(sample_menu());
        let content = render_to_string(&app, 100, 30);

        assert!(content.contains("\u{25B8}"), "Selected item should show a cursor");
    }

    #[test]
    fn test_empty_menu_shows_placeholder() {
        let app = create_test_app(Vec::new());
        let content = render_to_string(&app, 100, 30);

        assert!(content.contains("No menu available"));
    }

    #[test]
    fn test_chips_and_search_placeholder() {
        let app = create_test_app(sample_menu());
        let content = render_to_string(&app, 100, 30);

        assert!(content.contains("Starters"));
        assert!(content.contains("Mains"));
        assert!(content.contains("Desserts"));
        assert!(content.contains("Search menu..."));
    }

    #[test]
    fn test_header_shows_initials() {
        let mut app = create_test_app(sample_menu());
        app.profile = UserProfile::onboarded("Tilly", "Nguyen", "tilly@example.com");
        let content = render_to_string(&app, 100, 30);

        assert!(content.contains("(TN)"));
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let menu: Vec<MenuItem> = (0..20)
            .map(|i| MenuItem::new(format!("Dish {i:02}"), "1.00", "", "dish.jpg", "mains"))
            .collect();
        let mut app = create_test_app(menu);
        app.selected_index = 19;

        let content = render_to_string(&app, 100, 24);

        assert!(content.contains("Dish 19"));
        assert!(!content.contains("Dish 00"));
    }
}
