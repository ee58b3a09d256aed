//! Profile screen rendering
//!
//! Shows the draft of the user's personal information and the email
//! notification checkboxes. Nothing is kept until the draft is saved.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::profile::{Notification, ProfileField, UserProfile};

/// Renders the profile screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Personal information
            Constraint::Min(6),    // Notifications
            Constraint::Length(1), // Help text
        ])
        .split(area);

    render_personal_info(frame, app, chunks[0]);
    render_notifications(frame, &app.draft, chunks[1]);
    render_help(frame, app, chunks[2]);
}

fn field_line(label: &str, value: &str, selected: bool, editing: bool) -> Line<'static> {
    let marker = if selected { "▸ " } else { "  " };
    let mut value = if value.is_empty() && !editing {
        "-".to_string()
    } else {
        value.to_string()
    };
    if editing {
        value.push('_');
    }

    let value_style = if editing {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(format!("{:<14}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, value_style),
    ])
}

fn render_personal_info(frame: &mut Frame, app: &App, area: Rect) {
    let draft = &app.draft;
    let avatar = if draft.profile_image.is_empty() {
        draft.initials.clone()
    } else {
        draft.profile_image.clone()
    };

    let mut lines = vec![Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<14}", "Avatar"), Style::default().fg(Color::Gray)),
        Span::styled(avatar, Style::default().fg(Color::Yellow)),
    ])];
    lines.extend(ProfileField::all().iter().map(|field| {
        let selected = *field == app.selected_field();
        field_line(
            field.label(),
            draft.field(*field),
            selected,
            selected && app.editing,
        )
    }));

    let title = if app.has_unsaved_changes() {
        " Personal Information (unsaved) "
    } else {
        " Personal Information "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_notifications(frame: &mut Frame, profile: &UserProfile, area: Rect) {
    let lines: Vec<Line> = Notification::all()
        .iter()
        .enumerate()
        .map(|(i, notification)| {
            let checked = profile.is_enabled(*notification);
            let (mark, color) = if checked {
                ("[x]", Color::Green)
            } else {
                ("[ ]", Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(format!("  {} ", i + 1), Style::default().fg(Color::Yellow)),
                Span::styled(mark, Style::default().fg(color)),
                Span::raw(" "),
                Span::raw(notification.label()),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Email Notifications ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let keys: &[(&str, &str)] = if app.editing {
        &[("Enter/Esc", " Done editing")]
    } else {
        &[
            ("↑↓", " Field  "),
            ("Enter", " Edit  "),
            ("1-4", " Toggle  "),
            ("s", " Save  "),
            ("d", " Discard  "),
            ("x", " Log out  "),
            ("Esc", " Back"),
        ]
    };

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ]
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
