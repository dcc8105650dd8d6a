mod board_component;
pub mod state;

pub use board_component::BoardComponent;
pub use state::BoardViewState;
