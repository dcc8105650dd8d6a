use crossterm::event::KeyEvent;
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};
use swatch_types::{Effect, Modal, Msg};

use super::components::{BoardComponent, Component, EditorComponent};
use super::layout::MainLayout;
use crate::app::App;

/// Places a modal relative to the body area.
pub struct ModalLayout(Box<dyn Fn(Rect) -> Rect>);

impl std::fmt::Debug for ModalLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ModalLayout")
    }
}

type ModalView = (Box<dyn Component>, ModalLayout);

/// Root view: the board underneath, an optional modal on top, and the hint
/// strip along the bottom edge.
#[derive(Default)]
pub struct MainView {
    pub content_view: BoardComponent,
    /// Currently open modal component
    pub modal_view: Option<ModalView>,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the open modal kind (use None to clear).
    pub fn set_open_modal_kind(&mut self, app: &mut App, modal: Option<Modal>) {
        match modal {
            Some(Modal::Editor) => {
                app.editor.sync_from_draft(app.board.store.draft(), app.board.store.palette());
                self.modal_view = Some((Box::new(EditorComponent), ModalLayout(Box::new(MainLayout::drawer))));
            }
            None => {
                app.board.close_editor();
                self.modal_view = None;
            }
        }
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match self.modal_view.as_mut() {
            Some((modal, _)) => modal.handle_key_events(app, key),
            None => self.content_view.handle_key_events(app, key),
        }
    }

    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        let mut effects = app.update(&msg);
        effects.extend(self.content_view.handle_message(app, &msg));
        if let Some((modal, _)) = self.modal_view.as_mut() {
            effects.extend(modal.handle_message(app, &msg));
        }
        effects
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let background = Style::default().bg(app.ctx.theme.roles().background);
        frame.render_widget(Block::default().style(background), area);

        let [body, hints] = MainLayout::screen(area);
        self.content_view.render(frame, body, app);
        if let Some((modal, layout)) = self.modal_view.as_mut() {
            let rect = (layout.0)(body);
            modal.render(frame, rect, app);
        }

        let spans = match self.modal_view.as_ref() {
            Some((modal, _)) => modal.get_hint_spans(app),
            None => self.content_view.get_hint_spans(app),
        };
        frame.render_widget(Paragraph::new(Line::from(spans)).style(background), hints);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};
    use swatch_api::{PaletteFetchError, PaletteSource};
    use swatch_engine::PaletteStatus;
    use swatch_types::{Color, ExecOutcome};

    use super::*;
    use crate::ui::components::board::state::BoardFocus;
    use crate::ui::components::editor::state::EditorField;

    struct NeverCalled;

    #[async_trait]
    impl PaletteSource for NeverCalled {
        async fn fetch_palette(&self) -> Result<Vec<Color>, PaletteFetchError> {
            Err(PaletteFetchError::Malformed("not used in view tests".into()))
        }
    }

    fn red() -> Color {
        Color::from("#FF0000")
    }

    fn green() -> Color {
        Color::from("#00FF00")
    }

    fn loaded() -> (App, MainView) {
        let mut app = App::new(Arc::new(NeverCalled));
        let mut view = MainView::new();
        let outcome = ExecOutcome::PaletteFetched(Ok(vec![red(), green()]));
        view.handle_message(&mut app, Msg::ExecCompleted(Box::new(outcome)));
        assert_eq!(app.board.palette_status, PaletteStatus::Loaded);
        (app, view)
    }

    /// Feed a key and apply modal effects the way the runtime does.
    fn press(app: &mut App, view: &mut MainView, code: KeyCode) -> Vec<Effect> {
        let effects = view.handle_key_events(app, KeyEvent::new(code, KeyModifiers::NONE));
        for effect in &effects {
            match effect {
                Effect::ShowModal(modal) => view.set_open_modal_kind(app, Some(*modal)),
                Effect::CloseModal => view.set_open_modal_kind(app, None),
                _ => {}
            }
        }
        effects
    }

    fn type_text(app: &mut App, view: &mut MainView, text: &str) {
        for ch in text.chars() {
            press(app, view, KeyCode::Char(ch));
        }
    }

    fn add_creative(app: &mut App, view: &mut MainView, title: &str, subtitle: &str, swatch_index: usize) {
        press(app, view, KeyCode::Char('+'));
        assert!(view.modal_view.is_some());
        type_text(app, view, title);
        press(app, view, KeyCode::Enter);
        type_text(app, view, subtitle);
        press(app, view, KeyCode::Enter);
        for _ in 0..swatch_index {
            press(app, view, KeyCode::Right);
        }
        press(app, view, KeyCode::Enter);
        press(app, view, KeyCode::Tab);
        assert_eq!(app.editor.focus, EditorField::Done);
        press(app, view, KeyCode::Enter);
    }

    fn screen_text(app: &mut App, view: &mut MainView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 30)).unwrap();
        terminal.draw(|frame| view.render(frame, frame.area(), app)).unwrap();
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn editor_flow_adds_creative_and_closes_drawer() {
        let (mut app, mut view) = loaded();
        add_creative(&mut app, &mut view, "Launch", "Spring sale", 1);

        assert!(view.modal_view.is_none());
        assert!(!app.board.editor_open);
        let creatives = app.board.store.creatives();
        assert_eq!(creatives.len(), 1);
        assert_eq!(creatives[0].title, "Launch");
        assert_eq!(creatives[0].subtitle, "Spring sale");
        assert_eq!(creatives[0].color, green());
        assert!(app.board.store.draft().is_empty());
    }

    #[test]
    fn done_is_inert_until_draft_is_valid() {
        let (mut app, mut view) = loaded();
        press(&mut app, &mut view, KeyCode::Char('a'));
        type_text(&mut app, &mut view, "Only a title");
        app.editor.focus = EditorField::Done;
        let effects = press(&mut app, &mut view, KeyCode::Enter);
        assert!(effects.is_empty());
        assert!(view.modal_view.is_some());
        assert!(app.board.store.is_empty());
    }

    #[test]
    fn escape_keeps_draft_for_next_open() {
        let (mut app, mut view) = loaded();
        press(&mut app, &mut view, KeyCode::Char('+'));
        type_text(&mut app, &mut view, "Half");
        press(&mut app, &mut view, KeyCode::Esc);
        assert!(view.modal_view.is_none());
        assert!(!app.board.editor_open);

        press(&mut app, &mut view, KeyCode::Char('+'));
        assert_eq!(app.editor.title.input(), "Half");
        assert_eq!(app.board.store.draft().title, "Half");
    }

    #[test]
    fn add_is_disabled_when_list_is_full() {
        let (mut app, mut view) = loaded();
        for index in 0..5 {
            add_creative(&mut app, &mut view, &format!("C{index}"), "sub", index % 2);
        }
        assert_eq!(app.board.store.progress_percent(), 100);
        let effects = press(&mut app, &mut view, KeyCode::Char('+'));
        assert!(effects.is_empty());
        assert!(view.modal_view.is_none());
    }

    #[test]
    fn filter_row_toggles_color() {
        let (mut app, mut view) = loaded();
        add_creative(&mut app, &mut view, "Red one", "x", 0);
        add_creative(&mut app, &mut view, "Green one", "x", 1);

        assert_eq!(app.board_view.focus, BoardFocus::Filters);
        press(&mut app, &mut view, KeyCode::Right);
        press(&mut app, &mut view, KeyCode::Enter);
        assert_eq!(app.board.filter.selection(), Some(&red()));
        assert_eq!(app.board.visible().len(), 1);

        press(&mut app, &mut view, KeyCode::Enter);
        assert_eq!(app.board.filter.selection(), None);
        assert_eq!(app.board.visible().len(), 2);
    }

    #[test]
    fn search_box_narrows_preview() {
        let (mut app, mut view) = loaded();
        add_creative(&mut app, &mut view, "Launch", "spring", 0);
        add_creative(&mut app, &mut view, "Holiday", "winter", 1);

        press(&mut app, &mut view, KeyCode::Tab);
        assert_eq!(app.board_view.focus, BoardFocus::Search);
        type_text(&mut app, &mut view, "WINT");
        let titles: Vec<&str> = app.board.visible().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Holiday"]);

        // 'q' is text while searching.
        let effects = press(&mut app, &mut view, KeyCode::Char('q'));
        assert!(effects.is_empty());

        press(&mut app, &mut view, KeyCode::Esc);
        assert_eq!(app.board.filter.query(), "");
        assert_eq!(app.board.visible().len(), 2);
    }

    #[test]
    fn quit_from_board() {
        let (mut app, mut view) = loaded();
        assert_eq!(press(&mut app, &mut view, KeyCode::Char('q')), vec![Effect::Quit]);
    }

    #[test]
    fn renders_counter_and_preview() {
        let (mut app, mut view) = loaded();
        let empty = screen_text(&mut app, &mut view);
        assert!(empty.contains("0 / 5 Creatives"));
        assert!(empty.contains("+ Add Creative"));

        add_creative(&mut app, &mut view, "Launch", "Spring sale", 0);
        let filled = screen_text(&mut app, &mut view);
        assert!(filled.contains("1 / 5 Creatives"));
        assert!(filled.contains("Launch"));
        assert!(filled.contains("Spring sale"));

        press(&mut app, &mut view, KeyCode::Char('+'));
        assert!(screen_text(&mut app, &mut view).contains("Creative Creation"));
    }

    #[test]
    fn drawer_shows_loading_while_palette_is_pending() {
        let mut app = App::new(Arc::new(NeverCalled));
        let mut view = MainView::new();
        press(&mut app, &mut view, KeyCode::Char('+'));
        assert!(view.modal_view.is_some());
        assert_eq!(app.board.palette_status, PaletteStatus::Pending);

        let screen = screen_text(&mut app, &mut view);
        assert!(screen.contains("Loading palette"));
        assert!(!screen.contains("No colors available"));
    }

    #[test]
    fn drawer_reports_failed_palette() {
        let mut app = App::new(Arc::new(NeverCalled));
        let mut view = MainView::new();
        let outcome = ExecOutcome::PaletteFetched(Err("offline".into()));
        view.handle_message(&mut app, Msg::ExecCompleted(Box::new(outcome)));
        press(&mut app, &mut view, KeyCode::Char('+'));
        let screen = screen_text(&mut app, &mut view);
        assert!(screen.contains("No colors available"));
        assert!(!screen.contains("Loading palette"));
    }

    #[test]
    fn search_cursor_follows_display_width() {
        let (mut app, mut view) = loaded();
        press(&mut app, &mut view, KeyCode::Tab);
        type_text(&mut app, &mut view, "日本");

        let mut terminal = Terminal::new(TestBackend::new(110, 30)).unwrap();
        terminal.draw(|frame| view.render(frame, frame.area(), &mut app)).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor.x, 5);
    }

    #[test]
    fn failed_palette_is_reported_on_board() {
        let mut app = App::new(Arc::new(NeverCalled));
        let mut view = MainView::new();
        let outcome = ExecOutcome::PaletteFetched(Err("offline".into()));
        view.handle_message(&mut app, Msg::ExecCompleted(Box::new(outcome)));
        assert!(screen_text(&mut app, &mut view).contains("No colors available"));
    }
}
