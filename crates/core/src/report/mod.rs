//! Rendering analysis results for display

pub mod recommendations;
pub mod renderer;

pub use recommendations::recommendations;
pub use renderer::{render_all, render_text, ReportPeriods};
