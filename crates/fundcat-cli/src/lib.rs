//! Library half of the `fundcat` command-line catalog browser.

pub mod browse;
pub mod logging;
pub mod render;
pub mod settings;
