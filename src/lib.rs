//! freestyle-trainer: random prompt words with rhyme lookup in the terminal.

pub mod ports;
pub mod session;
pub mod store;
pub mod tui;
pub mod types;
