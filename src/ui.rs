//! Terminal UI rendering for the banking card.
//!
//! - Minimal chrome: whitespace and one separator line create structure
//! - Grayscale text, color only for the focused field, buttons and toasts
//! - The card is centered; the toast and keymap own the bottom two lines
//!
//! This module renders from RenderState (immutable snapshot) - it never
//! mutates application state.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::notify::{Severity, Toast};
use crate::render::RenderState;
use crate::tea::Field;

// Color tokens
const COLOR_TEXT_DIMMED: Color = Color::Gray;
const COLOR_TEXT_MUTED: Color = Color::DarkGray;
const COLOR_SEPARATOR: Color = Color::White;
const COLOR_FOCUS: Color = Color::Cyan;
const COLOR_DEPOSIT: Color = Color::Green;
const COLOR_WITHDRAW: Color = Color::Yellow;
const COLOR_BALANCE: Color = Color::White;

// Layout constants
const CARD_WIDTH: u16 = 44;
const CARD_HEIGHT: u16 = 13;
const PLACEHOLDER: &str = "0.00";

/// A single keybinding entry for display.
struct Keybinding(&'static str, &'static str);

fn keybindings(focus: Field) -> Vec<Keybinding> {
    let submit = match focus {
        Field::Deposit => "deposit",
        Field::Withdraw => "withdraw",
    };
    vec![
        Keybinding("Enter", submit),
        Keybinding("Tab", "switch"),
        Keybinding("Esc", "quit"),
    ]
}

/// Main render function - entry point for all UI drawing.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    if area.height < 3 {
        render_balance_only(frame, state, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_card(frame, state, centered(chunks[0], CARD_WIDTH, CARD_HEIGHT));
    if let Some(ref toast) = state.toast {
        render_toast(frame, toast, chunks[1]);
    }
    render_statusbar(frame, state, chunks[2]);
}

/// Center a `width` x `height` box inside `area`, shrinking it if needed.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_card(frame: &mut Frame, state: &RenderState, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(1), // subtitle
        Constraint::Length(1),
        Constraint::Length(2), // deposit
        Constraint::Length(1),
        Constraint::Length(2), // withdraw
        Constraint::Length(1),
        Constraint::Length(1), // separator
        Constraint::Length(3), // balance
    ])
    .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Banking Portal",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        "Manage your finances securely",
        Style::default().fg(COLOR_TEXT_MUTED),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, rows[1]);

    render_field(frame, state, Field::Deposit, rows[3]);
    render_field(frame, state, Field::Withdraw, rows[5]);
    render_separator(frame, rows[7]);
    render_balance(frame, state, rows[8]);
}

/// Render a labelled input with its button on the right.
fn render_field(frame: &mut Frame, state: &RenderState, field: Field, area: Rect) {
    let focused = state.focus == field;
    let label_style = if focused {
        Style::default().fg(COLOR_FOCUS).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(field.label(), label_style)),
        input_line(state, field, area.width),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Build the input row: `› <text>_` padded, then the button.
fn input_line(state: &RenderState, field: Field, width: u16) -> Line<'static> {
    let focused = state.focus == field;
    let text = state.input(field);

    let button = button_label(field);
    let button_style = if state.enabled(field) {
        let color = match field {
            Field::Deposit => COLOR_DEPOSIT,
            Field::Withdraw => COLOR_WITHDRAW,
        };
        Style::default().fg(Color::Black).bg(color)
    } else {
        Style::default().fg(COLOR_TEXT_MUTED)
    };

    let mut spans: Vec<Span> = Vec::new();
    if focused {
        spans.push(Span::styled("› ", Style::default().fg(COLOR_FOCUS)));
    } else {
        spans.push(Span::raw("  "));
    }

    if text.is_empty() {
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(COLOR_TEXT_MUTED)));
    } else {
        spans.push(Span::styled(text.to_string(), Style::default().fg(Color::White)));
    }
    if focused {
        spans.push(Span::styled(
            "_",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    // Right-align the button
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let spacer_width = (width as usize)
        .saturating_sub(content_width)
        .saturating_sub(button.chars().count());
    if spacer_width > 0 {
        spans.push(Span::raw(" ".repeat(spacer_width)));
    }
    spans.push(Span::styled(button, button_style));

    Line::from(spans)
}

fn button_label(field: Field) -> String {
    let sign = match field {
        Field::Deposit => '+',
        Field::Withdraw => '-',
    };
    format!(" {} {} ", sign, field.button())
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let solid = "─".repeat(area.width as usize);
    let line = Line::from(Span::styled(solid, Style::default().fg(COLOR_SEPARATOR)));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_balance(frame: &mut Frame, state: &RenderState, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Available Balance",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.balance.clone(),
            Style::default()
                .fg(COLOR_BALANCE)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Current Balance",
            Style::default().fg(COLOR_TEXT_DIMMED),
        ))
        .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Tiny terminals only get the balance.
fn render_balance_only(frame: &mut Frame, state: &RenderState, area: Rect) {
    let line = Line::from(Span::styled(
        state.balance.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the toast on a single line.
///
/// The title is bold, the description follows; both use the severity color:
/// - Destructive: red
/// - Success: green
/// - Warning: yellow
fn render_toast(frame: &mut Frame, toast: &Toast, area: Rect) {
    frame.render_widget(Clear, area);

    let color = severity_color(toast.severity);
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", toast.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(toast.description.clone(), Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Destructive => Color::Red,
        Severity::Success => COLOR_DEPOSIT,
        Severity::Warning => COLOR_WITHDRAW,
    }
}

/// Render the keymap line.
/// When show_keymap is false: shows just "?" (grayed out)
/// When show_keymap is true: shows "? │ <keymap legend>" with bright "?"
fn render_statusbar(frame: &mut Frame, state: &RenderState, area: Rect) {
    frame.render_widget(Paragraph::new(keymap_line(state)), area);
}

fn keymap_line(state: &RenderState) -> Line<'static> {
    let key_style = Style::default().fg(COLOR_TEXT_DIMMED);
    let desc_style = Style::default().fg(COLOR_TEXT_MUTED);
    let sep_style = Style::default().fg(COLOR_TEXT_MUTED);

    let help_style = if state.show_keymap {
        Style::default()
    } else {
        Style::default().fg(COLOR_TEXT_MUTED)
    };
    let mut spans = vec![Span::styled("?", help_style)];

    if state.show_keymap {
        spans.push(Span::styled(" │ ", sep_style));
        for (idx, keybinding) in keybindings(state.focus).iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" • ", sep_style));
            }
            spans.push(Span::styled(keybinding.0, key_style));
            spans.push(Span::styled(format!(" {}", keybinding.1), desc_style));
        }
    }

    Line::from(spans)
}
