// Default puzzle settings
pub const DEFAULT_NROWS: usize = 3;
pub const DEFAULT_NCOLS: usize = 3;
pub const DEFAULT_CHANCE_LIGHT_STARTS_ON: f64 = 0.4;

// Each cell is drawn CELL_WIDTH columns wide and CELL_HEIGHT rows tall
pub const CELL_WIDTH: u16 = 4;
pub const CELL_HEIGHT: u16 = 2;

// Width of the side info panel
pub const INFO_PANEL_WIDTH: u16 = 18;

// Event poll interval for the main loop (milliseconds)
pub const POLL_INTERVAL: u64 = 50;
