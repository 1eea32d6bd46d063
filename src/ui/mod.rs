pub mod renderer;

pub use renderer::{board_area, cell_at, ui};
