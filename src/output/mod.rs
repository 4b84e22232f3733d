//! Terminal output formatting
//!
//! Feedback rows, palettes and report printing.

pub mod display;
pub mod formatters;

pub use display::print_letter_stats;
pub use formatters::{Palette, RenderStyle, Theme, render_feedback};
