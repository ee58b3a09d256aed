//! Onboarding screen rendering
//!
//! Asks a new user for a first name and an email before the menu is shown.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::profile::OnboardingField;

/// Renders the onboarding form
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Logo
            Constraint::Length(2), // Prompt
            Constraint::Length(3), // First name
            Constraint::Length(3), // Email
            Constraint::Min(1),    // Next
            Constraint::Length(1), // Help text
        ])
        .split(area);

    let logo = Paragraph::new(Line::from(Span::styled(
        "LITTLE LEMON",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(logo, chunks[0]);

    frame.render_widget(
        Paragraph::new("Let us get to know you").alignment(Alignment::Center),
        chunks[1],
    );

    let form = &app.onboarding;
    render_input(
        frame,
        "First Name",
        &form.first_name,
        form.focus == OnboardingField::FirstName,
        chunks[2],
    );
    render_input(
        frame,
        "Email",
        &form.email,
        form.focus == OnboardingField::Email,
        chunks[3],
    );

    let next_style = if form.is_complete() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(" Next ", next_style)).alignment(Alignment::Right),
        chunks[4],
    );

    let help = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Switch field  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[5],
    );
}

fn render_input(frame: &mut Frame, label: &str, value: &str, focused: bool, area: Rect) {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let text = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };

    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    frame.render_widget(Paragraph::new(text).block(block), area);
}
