//! Widgets for the individual rows of the account screen

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::config::IconSet;
use crate::form::{Field, TextInput};
use crate::theme::Theme;

/// Widest the submit button gets
const BUTTON_MAX_WIDTH: u16 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    User,
    Mail,
    Lock,
    Facebook,
    Google,
    Apple,
    Checked,
    Unchecked,
    Clear,
}

impl Icon {
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::Name => Icon::User,
            Field::Email => Icon::Mail,
            Field::Password | Field::ConfirmPassword => Icon::Lock,
            Field::AgreedToTerms => Icon::Unchecked,
        }
    }

    pub fn glyph(self, set: IconSet) -> &'static str {
        match set {
            IconSet::NerdFont => match self {
                Icon::User => "\u{f007}",
                Icon::Mail => "\u{f0e0}",
                Icon::Lock => "\u{f023}",
                Icon::Facebook => "\u{f09a}",
                Icon::Google => "\u{f1a0}",
                Icon::Apple => "\u{f179}",
                Icon::Checked => "\u{f14a}",
                Icon::Unchecked => "\u{f096}",
                Icon::Clear => "\u{f00d}",
            },
            IconSet::Ascii => match self {
                Icon::User => "U",
                Icon::Mail => "@",
                Icon::Lock => "#",
                Icon::Facebook => "f",
                Icon::Google => "G",
                Icon::Apple => "A",
                Icon::Checked => "[x]",
                Icon::Unchecked => "[ ]",
                Icon::Clear => "x",
            },
        }
    }
}

/// Bordered input row: icon, value (or placeholder), clear button.
/// Returns where the terminal cursor belongs when the row is focused.
#[allow(clippy::too_many_arguments)]
pub fn input_row(
    f: &mut Frame,
    area: Rect,
    input: &TextInput,
    value: &str,
    focused: bool,
    theme: &Theme,
    icons: IconSet,
    mask: char,
) -> Option<(u16, u16)> {
    let border_color = if focused { theme.focus } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let clear = input.shows_clear_button(value, focused);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3), // Icon
            Constraint::Min(1), // Text
            Constraint::Length(if clear { 2 } else { 0 }), // Clear button
        ])
        .split(inner);

    let icon = Paragraph::new(Span::styled(
        Icon::for_field(input.field).glyph(icons),
        Style::default().fg(theme.text),
    ));
    f.render_widget(icon, chunks[0]);

    let text_area = chunks[1];
    let (line, cursor_col) = if value.is_empty() {
        let placeholder = Span::styled(input.placeholder, Style::default().fg(theme.placeholder));
        (Line::from(placeholder), 0)
    } else {
        let (visible, col) = input.view(value, mask, text_area.width as usize);
        (Line::from(Span::styled(visible, Style::default().fg(theme.text))), col)
    };
    f.render_widget(Paragraph::new(line), text_area);

    if clear {
        let button = Paragraph::new(Span::styled(
            Icon::Clear.glyph(icons),
            Style::default().fg(theme.placeholder),
        ))
        .alignment(Alignment::Right);
        f.render_widget(button, chunks[2]);
    }

    focused.then(|| (text_area.x + cursor_col as u16, text_area.y))
}

pub fn create_button(f: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
    let width = BUTTON_MAX_WIDTH.min(area.width);
    let button_area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let border_color = if focused { theme.focus } else { theme.button_bg };
    let mut label_style = Style::default().fg(theme.button_fg).bg(theme.button_bg);
    if focused {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }

    let button = Paragraph::new(Span::styled("Create Account", label_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color).bg(theme.button_bg))
                .style(Style::default().bg(theme.button_bg)),
        );
    f.render_widget(button, button_area);
}

pub fn terms_row(
    f: &mut Frame,
    area: Rect,
    checked: bool,
    focused: bool,
    theme: &Theme,
    icons: IconSet,
) {
    let box_icon = if checked { Icon::Checked } else { Icon::Unchecked };
    let box_style = if focused {
        Style::default().fg(theme.focus).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };

    let line = Line::from(vec![
        Span::styled(box_icon.glyph(icons), box_style),
        Span::styled(" I agree with notable's ", Style::default().fg(theme.placeholder)),
        Span::styled(
            "Terms and Conditions",
            Style::default().fg(theme.link).add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled(".", Style::default().fg(theme.placeholder)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

pub fn social_icons(f: &mut Frame, area: Rect, theme: &Theme, icons: IconSet) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let brands = [
        (Icon::Facebook, theme.facebook),
        (Icon::Google, theme.google),
        (Icon::Apple, theme.apple),
    ];
    for ((icon, color), cell) in brands.into_iter().zip(cells.iter()) {
        let glyph = Paragraph::new(Span::styled(
            icon.glyph(icons),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(glyph, *cell);
    }
}

pub fn login_footer(f: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
    let mut link_style = Style::default().fg(theme.text).add_modifier(Modifier::UNDERLINED);
    if focused {
        link_style = link_style.fg(theme.focus).add_modifier(Modifier::BOLD);
    }

    let line = Line::from(vec![
        Span::styled("Already have an account? ", Style::default().fg(theme.text)),
        Span::styled("Log in", link_style),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
