use std::str::FromStr;

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};
use swatch_types::Color as SwatchColor;
use swatch_util::truncate_to_width;

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style for a push button. Disabled buttons are muted regardless of focus.
pub fn button_style<T: Theme + ?Sized>(theme: &T, enabled: bool, focused: bool) -> Style {
    if !enabled {
        return theme.text_muted_style().add_modifier(Modifier::CROSSED_OUT);
    }
    if focused {
        return theme.selection_style().add_modifier(Modifier::BOLD);
    }
    theme.accent_emphasis_style()
}

/// Lighten an RGB color toward white by `factor` (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub fn lighten_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let lift = |channel: u8| (channel as f32 + (255.0 - channel as f32) * f).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(lift(r), lift(g), lift(b))
        }
        other => other,
    }
}

/// Columns a token may occupy inside a chip it cannot paint.
const CHIP_LABEL_WIDTH: usize = 8;

fn parse_color(color: &SwatchColor) -> Option<Color> {
    Color::from_str(color.as_str().trim()).ok()
}

/// Interpret a palette color for painting. Hex (`#RRGGBB`) and named colors
/// are understood; anything else paints with the terminal default.
pub fn paint_color(color: &SwatchColor) -> Color {
    parse_color(color).unwrap_or(Color::Reset)
}

/// Text inside a swatch chip. Paintable colors get a blank chip (with a check
/// mark when selected); tokens that can't be painted show their own text so
/// they stay distinguishable.
pub fn swatch_chip(color: &SwatchColor, selected: bool) -> String {
    let mark = if selected { "✓" } else { " " };
    if parse_color(color).is_some() {
        return format!(" {mark}  ");
    }
    format!("{mark}{} ", truncate_to_width(color.as_str().trim(), CHIP_LABEL_WIDTH))
}

/// Foreground that stays readable on top of `background`.
pub fn readable_text_on(background: Color) -> Color {
    match background {
        Color::Rgb(r, g, b) => {
            let luminance = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
            if luminance > 150.0 { Color::Black } else { Color::White }
        }
        Color::White | Color::Yellow | Color::LightYellow | Color::LightCyan | Color::LightGreen | Color::Gray => {
            Color::Black
        }
        _ => Color::White,
    }
}

/// Background style for a creative or swatch painted in `color`.
pub fn swatch_style(color: &SwatchColor) -> Style {
    let background = paint_color(color);
    Style::default().bg(background).fg(readable_text_on(background))
}

/// Build key hint spans: the key in accent, the description muted.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}
