pub mod direction;
pub mod handler;

pub use handler::{handle_input, handle_mouse};
