//! TUI color semantics and style constants.
//!
//! Pure data — consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - White on blue: the settled prompt word
//! - Flash sequence: the word's fade-in reveal
//! - Cyan: the current word inside its rhyme group
//! - Dim: keybinding help
//! - Red: fatal startup errors

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// WORD STYLES
// ============================================================================

/// Fade-in sequence for a freshly revealed word, in frame order.
pub const FLASH_SEQUENCE: [Style; 5] = [
    Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
    Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
];

/// Final resting style for the prompt word.
pub const STYLE_WORD: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Blue)
    .add_modifier(Modifier::BOLD);

/// The current word when shown inside its rhyme group.
pub const STYLE_HIGHLIGHT: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Keybinding help lines.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Transient notices (add-word feedback).
pub const STYLE_NOTICE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Input prompt label.
pub const STYLE_PROMPT: Style = Style::new().add_modifier(Modifier::BOLD);

/// Fatal startup errors.
pub const STYLE_ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_sequence_settles_on_white() {
        assert_eq!(FLASH_SEQUENCE.last().unwrap().fg, Some(Color::White));
    }

    #[test]
    fn flash_frames_are_all_bold() {
        for style in FLASH_SEQUENCE {
            assert!(style.add_modifier.contains(Modifier::BOLD));
        }
    }

    #[test]
    fn word_and_highlight_styles_have_backgrounds() {
        assert_eq!(STYLE_WORD.bg, Some(Color::Blue));
        assert_eq!(STYLE_HIGHLIGHT.bg, Some(Color::Cyan));
    }

    #[test]
    fn error_style_is_red() {
        assert_eq!(STYLE_ERROR.fg, Some(Color::Red));
    }
}
