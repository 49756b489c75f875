mod components;
pub mod layout;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::app::{App, Popup};
use crate::form::Field;
use layout::Element;

/// Horizontal padding around the form column
const FORM_PADDING: u16 = 2;
/// Widest the form column gets on large terminals
const FORM_MAX_WIDTH: u16 = 56;

/// Rows left for the scrolling form once the info line and footer are drawn
pub fn viewport_height(total: u16) -> u16 {
    total.saturating_sub(2)
}

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info line
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Footer
        ])
        .split(area);

    draw_info_line(f, app, chunks[0]);
    draw_form(f, app, chunks[1]);
    draw_footer(f, app, chunks[2]);

    if app.popup == Popup::Help {
        draw_help_popup(f, app);
    }
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::Password => "Password",
        Field::ConfirmPassword => "Confirm password",
        Field::AgreedToTerms => "Terms",
    }
}

fn draw_info_line(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let dim = Style::default().fg(theme.placeholder);

    let line = match app.focused_input() {
        Some(input) if app.config.show_input_hints => {
            let mut spans = vec![Span::styled(
                field_label(input.field),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )];
            for hint in input.traits.hints() {
                spans.push(Span::styled(" │ ", dim));
                spans.push(Span::styled(hint, dim));
            }
            Line::from(spans)
        }
        _ => Line::from(Span::styled("", dim)),
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn form_column(area: Rect) -> Rect {
    let width = area
        .width
        .saturating_sub(FORM_PADDING * 2)
        .min(FORM_MAX_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Scrolling container. Elements that don't fit entirely in the viewport are
/// skipped; the app keeps the focused one in view.
fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let column = form_column(area);
    let max_scroll = app.layout.max_scroll(area.height);
    let scroll = app.scroll.min(max_scroll);
    let mut cursor = None;

    for p in app.layout.placements() {
        if p.top < scroll || p.bottom() > scroll + area.height {
            continue;
        }
        let rect = Rect {
            x: column.x,
            y: area.y + p.top - scroll,
            width: column.width,
            height: p.height,
        };
        let focused = app.focus == p.element;

        match p.element {
            Element::Title => {
                let title = Paragraph::new(Span::styled(
                    "Create account",
                    Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center);
                f.render_widget(title, rect);
            }
            Element::Input(field) => {
                if let (Some(input), Some(value)) = (app.input(field), app.form.text(field)) {
                    let pos = components::input_row(
                        f,
                        rect,
                        input,
                        value,
                        focused,
                        theme,
                        app.config.icons,
                        app.config.mask_char,
                    );
                    cursor = cursor.or(pos);
                }
            }
            Element::Terms => components::terms_row(
                f,
                rect,
                app.form.agreed_to_terms,
                focused,
                theme,
                app.config.icons,
            ),
            Element::CreateButton => components::create_button(f, rect, focused, theme),
            Element::SocialIcons => components::social_icons(f, rect, theme, app.config.icons),
            Element::LogIn => components::login_footer(f, rect, focused, theme),
        }
    }

    if let Some(pos) = cursor {
        if app.popup == Popup::None {
            f.set_cursor_position(pos);
        }
    }

    if max_scroll > 0 {
        let mut state = ScrollbarState::new(max_scroll as usize).position(scroll as usize);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(theme.placeholder)),
            area,
            &mut state,
        );
    }
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut hints: Vec<(&str, &str)> = vec![("Tab", "Next"), ("S-Tab", "Prev")];
    match app.focus {
        Element::Input(_) => hints.push(("Ctrl+U", "Clear")),
        Element::Terms => hints.push(("Space", "Toggle")),
        _ => {}
    }
    hints.extend([("PgUp/PgDn", "Scroll"), ("F1", "Help"), ("Esc", "Quit")]);

    // Responsive: show fewer hints on narrow terminals
    let max_hints = if area.width < 50 { 3 } else if area.width < 70 { 4 } else { hints.len() };

    let hint_spans: Vec<Span> = hints
        .iter()
        .take(max_hints)
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let sep = if i == 0 { "" } else { " │ " };
            vec![
                Span::styled(sep, Style::default().fg(theme.placeholder)),
                Span::styled(*key, Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {}", action), Style::default().fg(theme.placeholder)),
            ]
        })
        .collect();

    f.render_widget(
        Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_help_popup(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 80 { 95 } else { 60 },
        if area.height < 30 { 95 } else { 70 },
        area,
    );

    f.render_widget(Clear, popup_area);

    let heading = Style::default().fg(theme.title).add_modifier(Modifier::BOLD);
    let key = Style::default().fg(theme.focus);
    let entry = |k: &'static str, what: &'static str| {
        Line::from(vec![Span::styled(k, key), Span::styled(what, Style::default().fg(theme.text))])
    };

    let help_text = vec![
        Line::from(Span::styled("═══ Navigation ═══", heading)),
        entry("  Tab / ↓      ", "Next field"),
        entry("  S-Tab / ↑    ", "Previous field"),
        entry("  Enter        ", "Next field (from an input)"),
        entry("  PgUp / PgDn  ", "Scroll the form"),
        Line::from(""),
        Line::from(Span::styled("═══ Editing ═══", heading)),
        entry("  ← / →        ", "Move cursor"),
        entry("  Home / End   ", "Start / end of field (also Ctrl+A / Ctrl+E)"),
        entry("  Backspace    ", "Delete before cursor"),
        entry("  Delete       ", "Delete at cursor"),
        entry("  Ctrl+W       ", "Delete previous word"),
        entry("  Ctrl+U       ", "Clear field"),
        Line::from(""),
        Line::from(Span::styled("═══ General ═══", heading)),
        entry("  F1           ", "Toggle this help"),
        entry("  Esc / Ctrl+C ", "Quit"),
    ];

    let help = Paragraph::new(help_text)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .title(Span::styled(" Help ", heading))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.focus)),
        );

    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
