//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first, with mouse support for tabs and
//! suggestions.

pub mod background;
pub mod cards;
pub mod hero;
pub mod layout;
pub mod render;
pub mod theme;

pub use render::render_ui;
pub use theme::Theme;
