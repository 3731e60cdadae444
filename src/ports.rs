//! Display and input ports: the seams between the session core and the
//! terminal frontend.
//!
//! The session issues intent-level render requests only. Presentation
//! details — centering, colors, the flash animation, how long a notice
//! stays on screen — belong entirely to the implementor. All methods block
//! until the request has been fully presented or the input is complete.

use std::io;

use crate::session::Action;

/// Abstract sink for everything the session wants shown.
pub trait DisplayPort {
    /// Show the current prompt word. Owns any reveal animation.
    fn render_word(&mut self, word: &str) -> io::Result<()>;

    /// Show a full rhyme group with `highlighted` visually distinguished.
    /// `highlighted` is always a member of `words`.
    fn render_rhyme_set(&mut self, words: &[String], highlighted: &str) -> io::Result<()>;

    /// Show a transient notice (add-word feedback).
    fn render_notice(&mut self, text: &str) -> io::Result<()>;

    /// Show a fatal error. Used once, at startup, on load failure.
    fn render_error(&mut self, text: &str) -> io::Result<()>;
}

/// Abstract source of discrete user actions.
pub trait InputPort {
    /// Block until the user issues the next recognized action.
    fn next_action(&mut self) -> io::Result<Action>;

    /// Block until the user submits a line of text for `prompt`.
    /// A cancelled entry comes back as an empty string.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}
