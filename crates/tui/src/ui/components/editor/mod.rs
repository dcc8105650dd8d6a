mod editor_component;
pub mod state;

pub use editor_component::EditorComponent;
pub use state::EditorState;
