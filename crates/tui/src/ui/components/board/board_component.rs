//! The board screen: color filters, search, progress, the add button, and
//! the live preview list.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Gauge, List, ListItem, Paragraph},
};
use swatch_engine::PaletteStatus;
use swatch_types::{Effect, Modal};
use swatch_util::truncate_to_width;
use tracing::debug;

use super::state::BoardFocus;
use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::layout::MainLayout;
use crate::ui::theme::{Theme, theme_helpers as th};

const SEARCH_PLACEHOLDER: &str = "Search title or subtitle";

#[derive(Debug, Default)]
pub struct BoardComponent;

impl BoardComponent {
    fn open_editor(&self, app: &mut App) -> Vec<Effect> {
        if app.board.open_editor() {
            vec![Effect::ShowModal(Modal::Editor)]
        } else {
            debug!(full = app.board.store.is_full(), "add creative is disabled");
            Vec::new()
        }
    }

    fn handle_search_key(&self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let search = &mut app.board_view.search;
        let changed = if key.code == KeyCode::Esc {
            let had_text = !search.input().is_empty();
            search.clear();
            had_text
        } else {
            search.handle_edit_key(key)
        };
        if changed {
            app.board.filter.set_query(search.input());
        }
        Vec::new()
    }

    fn handle_filter_key(&self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let palette_len = app.board.store.palette().len();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => app.board_view.move_filter_cursor(-1, palette_len),
            KeyCode::Right | KeyCode::Char('l') => app.board_view.move_filter_cursor(1, palette_len),
            KeyCode::Enter | KeyCode::Char(' ') => match app.board_view.filter_target(app.board.store.palette()) {
                Some(color) => app.board.filter.toggle_filter(color),
                None => app.board.filter.set_filter(None),
            },
            KeyCode::Esc => app.board.filter.set_filter(None),
            _ => {}
        }
        Vec::new()
    }

    fn render_filters(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let focused = app.board_view.focus == BoardFocus::Filters;
        let block = th::block(theme, Some(" Filter By: Color "), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let line = match app.board.palette_status {
            PaletteStatus::Pending => Line::from(Span::styled(
                format!("{} Loading palette", app.throbber()),
                theme.text_muted_style(),
            )),
            PaletteStatus::Failed => Line::from(Span::styled("No colors available", theme.status_warning())),
            PaletteStatus::Loaded => filter_swatches(theme, app, focused),
        };
        frame.render_widget(Paragraph::new(line), inner);
    }

    fn render_search(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let focused = app.board_view.focus == BoardFocus::Search;
        let block = th::block(theme, Some(" Search "), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let search = &app.board_view.search;
        let content = if search.input().is_empty() {
            Span::styled(SEARCH_PLACEHOLDER, theme.text_muted_style())
        } else {
            Span::styled(search.input(), theme.text_primary_style())
        };
        frame.render_widget(Paragraph::new(Line::from(content)), inner);

        if focused {
            let column = (search.cursor_columns() as u16).min(inner.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(inner.x + column, inner.y));
        }
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let roles = theme.roles();
        let gauge = Gauge::default()
            .block(th::block(theme, None, false))
            .gauge_style(Style::default().fg(roles.gauge_fill).bg(roles.surface_muted))
            .percent(app.board.store.progress_percent())
            .label(Span::styled(
                app.board.counter_label(),
                theme.text_primary_style().add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(gauge, area);
    }

    fn render_add_button(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let focused = app.board_view.focus == BoardFocus::AddButton;
        let style = th::button_style(theme, app.board.can_open_editor(), focused);
        frame.render_widget(Paragraph::new(Line::from(Span::styled("[ + Add Creative ]", style))), area);
    }

    fn render_preview(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some(" Creatives "), false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if app.board.store.is_empty() {
            let message = Span::styled("No creatives yet. Press + to add one.", theme.text_muted_style());
            frame.render_widget(Paragraph::new(message), inner);
            return;
        }

        let visible = app.board.visible();
        if visible.is_empty() {
            let message = Span::styled("Nothing matches the current filter.", theme.text_muted_style());
            frame.render_widget(Paragraph::new(message), inner);
            return;
        }

        let text_width = inner.width.saturating_sub(2) as usize;
        let mut items = Vec::with_capacity(visible.len() * 2);
        for (index, creative) in visible.iter().enumerate() {
            if index > 0 {
                items.push(ListItem::new(""));
            }
            let text = Text::from(vec![
                Line::from(Span::styled(
                    format!(" {}", truncate_to_width(&creative.title, text_width)),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(format!(" {}", truncate_to_width(&creative.subtitle, text_width))),
            ]);
            items.push(ListItem::new(text).style(th::swatch_style(&creative.color)));
        }
        frame.render_widget(List::new(items), inner);
    }
}

/// "All" followed by one painted chip per palette color. The active filter
/// carries a check mark; the cursor is shown while the row has focus.
fn filter_swatches<'a>(theme: &dyn Theme, app: &'a App, focused: bool) -> Line<'a> {
    let cursor = app.board_view.filter_cursor();
    let selection = app.board.filter.selection();
    let marker = |index: usize| {
        let text = if focused && cursor == index { "▸" } else { " " };
        Span::styled(text, theme.accent_emphasis_style())
    };

    let all_style = if selection.is_none() {
        theme.selection_style()
    } else {
        theme.text_primary_style()
    };
    let mut spans = vec![marker(0), Span::styled(" All ", all_style), Span::raw(" ")];
    for (index, color) in app.board.store.palette().colors().iter().enumerate() {
        let chip = th::swatch_chip(color, selection == Some(color));
        spans.push(marker(index + 1));
        spans.push(Span::styled(chip, th::swatch_style(color)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

impl Component for BoardComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Tab => {
                app.board_view.focus = app.board_view.focus.next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                app.board_view.focus = app.board_view.focus.prev();
                return Vec::new();
            }
            _ => {}
        }

        if app.board_view.focus == BoardFocus::Search {
            return self.handle_search_key(app, key);
        }

        match key.code {
            KeyCode::Char('q') => vec![Effect::Quit],
            KeyCode::Char('+') | KeyCode::Char('a') => self.open_editor(app),
            _ => match app.board_view.focus {
                BoardFocus::Filters => self.handle_filter_key(app, key),
                BoardFocus::AddButton if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) => self.open_editor(app),
                _ => Vec::new(),
            },
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let [filters, search, progress, add_button, preview] = MainLayout::board_sections(rect);
        self.render_filters(frame, filters, app);
        self.render_search(frame, search, app);
        self.render_progress(frame, progress, app);
        self.render_add_button(frame, add_button, app);
        self.render_preview(frame, preview, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        match app.board_view.focus {
            BoardFocus::Filters => th::build_hint_spans(
                theme,
                &[
                    (" ←/→", " Move  "),
                    ("Enter", " Filter  "),
                    ("Esc", " Show all  "),
                    ("+", " Add  "),
                    ("Tab", " Next  "),
                    ("q", " Quit"),
                ],
            ),
            BoardFocus::Search => th::build_hint_spans(theme, &[(" Type", " Search  "), ("Esc", " Clear  "), ("Tab", " Next")]),
            BoardFocus::AddButton => {
                th::build_hint_spans(theme, &[(" Enter", " Add creative  "), ("Tab", " Next  "), ("q", " Quit")])
            }
        }
    }
}
