pub mod dashboard;
pub mod palette;
pub mod progress;
pub mod table_renderer;

pub use dashboard::{render_dashboard, DashboardView};
pub use palette::{palette_for, PlainPalette, StatusPalette, TerminalPalette};
