//! Help overlay listing the keys of the current screen
//!
//! The popup shows the sections that apply where it was opened, followed by
//! the keys that work everywhere.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::AppState;

type Keys = &'static [(&'static str, &'static str)];

const MENU_KEYS: Keys = &[
    ("↑/k ↓/j", "Move selection"),
    ("1 2 3", "Starters, Mains, Desserts"),
    ("0", "Show all categories"),
    ("p", "Open profile"),
    ("Esc", "Quit"),
];

const SEARCH_KEYS: Keys = &[
    ("/", "Focus the search bar"),
    ("Enter/Esc", "Leave the search bar"),
];

const PROFILE_KEYS: Keys = &[
    ("↑/k ↓/j", "Pick a field"),
    ("Enter", "Edit field (Enter/Esc ends)"),
    ("1-4", "Toggle email notifications"),
    ("s / d", "Save / discard changes"),
    ("x", "Log out"),
    ("Esc", "Back to menu"),
];

const GENERAL_KEYS: Keys = &[("?", "Toggle this help"), ("q", "Quit")];

const WIDTH: u16 = 48;

/// Sections shown for a screen, in display order
fn sections(state: &AppState) -> Vec<(&'static str, Keys)> {
    let mut sections = match state {
        AppState::Menu => vec![("Menu", MENU_KEYS), ("Search", SEARCH_KEYS)],
        AppState::Profile => vec![("Profile", PROFILE_KEYS)],
        AppState::Loading | AppState::Onboarding => Vec::new(),
    };
    sections.push(("General", GENERAL_KEYS));
    sections
}

/// Renders the help overlay on top of the view for `state`
pub fn render(frame: &mut Frame, state: &AppState) {
    let mut lines = Vec::new();
    for (title, keys) in sections(state) {
        lines.push(Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(keys.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {:<11}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        }));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Esc or ? closes",
        Style::default().fg(Color::DarkGray),
    )));

    // Borders take one row above and below
    let height = lines.len() as u16 + 2;
    let area = centered(frame.area(), WIDTH, height);

    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// A `width` x `height` rect centered in `area`, clipped to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
