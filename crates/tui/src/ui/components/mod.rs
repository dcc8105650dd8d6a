//! UI components: the board screen, the editor drawer, and shared widgets.

pub mod board;
pub mod common;
pub mod component;
pub mod editor;

pub use board::BoardComponent;
pub(crate) use component::Component;
pub use editor::EditorComponent;
