//! Terminal front-end: pure menu logic plus the interactive loop.

pub mod menu;
pub mod repl;

pub use menu::{render_menu, MenuChoice, MenuMode};
pub use repl::Repl;
