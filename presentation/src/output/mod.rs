//! Output formatting.

pub mod console;

pub use console::ConsoleFormatter;
