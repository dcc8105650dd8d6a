//! The "Creative Creation" drawer.
//!
//! Title and subtitle edits are written straight into the store's draft so
//! the Done control reflects validity on every keystroke. Closing the drawer
//! keeps the draft; a successful submit clears it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use swatch_engine::PaletteStatus;
use swatch_types::Effect;
use tracing::{debug, info};

use super::state::EditorField;
use crate::app::App;
use crate::ui::components::common::TextInputState;
use crate::ui::components::component::Component;
use crate::ui::theme::{Theme, theme_helpers as th};

#[derive(Debug, Default)]
pub struct EditorComponent;

impl EditorComponent {
    fn pick_color(&self, app: &mut App) {
        let Some(color) = app.board.store.palette().get(app.editor.swatch_cursor()).cloned() else {
            return;
        };
        if let Err(error) = app.board.store.set_draft_color(color) {
            debug!(%error, "color pick rejected");
        }
    }

    fn submit(&self, app: &mut App) -> Vec<Effect> {
        match app.board.submit() {
            Ok(creative) => {
                info!(title = %creative.title, color = %creative.color, "creative added");
                app.editor.reset();
                vec![Effect::CloseModal]
            }
            Err(error) => {
                debug!(%error, "done pressed while disabled");
                Vec::new()
            }
        }
    }

    fn render_input(frame: &mut Frame, area: Rect, theme: &dyn Theme, label: &str, input: &TextInputState, focused: bool) {
        let block = th::block(theme, Some(label), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content = if input.input().is_empty() {
            Span::styled("Enter text", theme.text_muted_style())
        } else {
            Span::styled(input.input(), theme.text_primary_style())
        };
        frame.render_widget(Paragraph::new(Line::from(content)), inner);

        if focused {
            let column = (input.cursor_columns() as u16).min(inner.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(inner.x + column, inner.y));
        }
    }

    fn render_colors(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let focused = app.editor.focus == EditorField::Colors;
        let block = th::block(theme, Some(" Background Color "), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let palette = app.board.store.palette();
        match app.board.palette_status {
            PaletteStatus::Pending => {
                let message = Span::styled(format!("{} Loading palette", app.throbber()), theme.text_muted_style());
                frame.render_widget(Paragraph::new(message), inner);
                return;
            }
            PaletteStatus::Failed => {
                let message = Span::styled("No colors available", theme.status_warning());
                frame.render_widget(Paragraph::new(message), inner);
                return;
            }
            PaletteStatus::Loaded => {}
        }

        let chosen = app.board.store.draft().color.as_ref();
        let mut spans = Vec::with_capacity(palette.len() * 3);
        for (index, color) in palette.colors().iter().enumerate() {
            let marker = if focused && index == app.editor.swatch_cursor() { "▸" } else { " " };
            let chip = th::swatch_chip(color, chosen == Some(color));
            spans.push(Span::styled(marker, theme.accent_emphasis_style()));
            spans.push(Span::styled(chip, th::swatch_style(color)));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }

    fn status_line<'a>(theme: &dyn Theme, app: &App) -> Line<'a> {
        let store = &app.board.store;
        if store.is_full() {
            Line::from(Span::styled("The list is full", theme.status_warning()))
        } else if !store.is_draft_valid() {
            Line::from(Span::styled("Title, subtitle and a color are required", theme.text_muted_style()))
        } else {
            Line::from(Span::styled("Ready to add", theme.status_success()))
        }
    }
}

impl Component for EditorComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => {
                app.board.close_editor();
                return vec![Effect::CloseModal];
            }
            KeyCode::Tab => {
                app.editor.focus = app.editor.focus.next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                app.editor.focus = app.editor.focus.prev();
                return Vec::new();
            }
            _ => {}
        }

        match app.editor.focus {
            EditorField::Title => {
                if key.code == KeyCode::Enter {
                    app.editor.focus = EditorField::Subtitle;
                } else if app.editor.title.handle_edit_key(key) {
                    app.board.store.set_draft_title(app.editor.title.input());
                }
            }
            EditorField::Subtitle => {
                if key.code == KeyCode::Enter {
                    app.editor.focus = EditorField::Colors;
                } else if app.editor.subtitle.handle_edit_key(key) {
                    app.board.store.set_draft_subtitle(app.editor.subtitle.input());
                }
            }
            EditorField::Colors => {
                let palette_len = app.board.store.palette().len();
                match key.code {
                    KeyCode::Left | KeyCode::Char('h') => app.editor.move_swatch_cursor(-1, palette_len),
                    KeyCode::Right | KeyCode::Char('l') => app.editor.move_swatch_cursor(1, palette_len),
                    KeyCode::Enter | KeyCode::Char(' ') => self.pick_color(app),
                    _ => {}
                }
            }
            EditorField::Done => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    return self.submit(app);
                }
            }
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        frame.render_widget(Clear, rect);
        let drawer = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(true))
            .style(theme.modal_background_style())
            .title(Span::styled(" Creative Creation ", theme.accent_emphasis_style()));
        let inner = drawer.inner(rect);
        frame.render_widget(drawer, rect);

        let [title, subtitle, colors, _, done, status, _] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let focus = app.editor.focus;
        Self::render_input(frame, title, theme, " Title ", &app.editor.title, focus == EditorField::Title);
        Self::render_input(frame, subtitle, theme, " Subtitle ", &app.editor.subtitle, focus == EditorField::Subtitle);
        self.render_colors(frame, colors, app);

        let done_style = th::button_style(theme, app.board.store.can_submit(), focus == EditorField::Done);
        frame.render_widget(Paragraph::new(Line::from(Span::styled("[ Done ]", done_style))), done);
        frame.render_widget(Paragraph::new(Self::status_line(theme, app)), status);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        match app.editor.focus {
            EditorField::Colors => th::build_hint_spans(
                theme,
                &[(" ←/→", " Choose  "), ("Enter", " Pick  "), ("Tab", " Next  "), ("Esc", " Close")],
            ),
            EditorField::Done => th::build_hint_spans(theme, &[(" Enter", " Add  "), ("Tab", " Next  "), ("Esc", " Close")]),
            _ => th::build_hint_spans(theme, &[(" Type", " Edit  "), ("Tab", " Next  "), ("Esc", " Close")]),
        }
    }
}
