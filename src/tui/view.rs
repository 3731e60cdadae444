//! Pure rendering: map session display requests to ratatui widget trees.
//!
//! Line builders are pure (state in, lines out) so highlight placement and
//! help content are testable without a terminal. The only effect is
//! `Frame::render_widget()` writing to the terminal buffer.
//!
//! Screen anatomy: title + keybinding help at the top, the prompt word
//! centered in the remaining space, one footer line at the bottom for
//! notices and the add-word input.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::theme;

/// App title shown on every screen.
pub const TITLE: &str = "FREESTYLE TRAINER";

// ============================================================================
// LINE BUILDERS (pure)
// ============================================================================

/// Keybinding help shown under the title.
pub fn help_lines() -> [&'static str; 4] {
    [
        "SPACE: New Word",
        "R: Rhyme Help",
        "A: Add Word",
        "Q: Quit",
    ]
}

/// Header block: title plus help, all centered.
fn header_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(TITLE, theme::STYLE_TITLE)),
        Line::from(""),
    ];
    lines.extend(
        help_lines()
            .into_iter()
            .map(|h| Line::from(Span::styled(h, theme::STYLE_HELP))),
    );
    lines
}

/// The rhyme-group view: a title line, a gap, then every word in the group
/// with the current one highlighted.
pub fn rhyme_lines<'a>(words: &'a [String], highlighted: &str) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Rhymes for: {}", highlighted),
            theme::STYLE_TITLE,
        )),
        Line::from(""),
    ];
    for word in words {
        let style = if word == highlighted {
            theme::STYLE_HIGHLIGHT
        } else {
            Style::new()
        };
        lines.push(Line::from(Span::styled(word.as_str(), style)));
    }
    lines
}

// ============================================================================
// FOOTER
// ============================================================================

/// Bottom-line content for the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footer<'a> {
    None,
    /// Transient add-word feedback.
    Notice(&'a str),
    /// Input prompt with the text typed so far.
    Prompt { label: &'a str, buffer: &'a str },
}

fn footer_line(footer: Footer<'_>) -> Line<'_> {
    match footer {
        Footer::None => Line::from(""),
        Footer::Notice(text) => Line::from(Span::styled(text, theme::STYLE_NOTICE)),
        Footer::Prompt { label, buffer } => Line::from(vec![
            Span::styled(label, theme::STYLE_PROMPT),
            Span::raw(" "),
            Span::raw(buffer),
            Span::styled("_", theme::STYLE_PROMPT),
        ]),
    }
}

// ============================================================================
// SCREENS
// ============================================================================

/// Split the frame into header / content / footer areas.
fn screen_areas(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(6), // title + gap + 4 help lines
        Constraint::Min(1),    // content
        Constraint::Length(1), // footer
    ])
    .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Vertically center `height` rows inside `area`.
fn centered(area: Rect, height: u16) -> Rect {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);
    chunks[1]
}

/// The main screen: header, optionally the prompt word (with the style of
/// the current flash frame), and the footer.
pub fn render_main(frame: &mut Frame, word: Option<(&str, Style)>, footer: Footer<'_>) {
    let (header, content, bottom) = screen_areas(frame.area());

    frame.render_widget(
        Paragraph::new(header_lines()).alignment(Alignment::Center),
        header,
    );

    if let Some((word, style)) = word {
        let line = Line::from(Span::styled(word, style));
        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Center),
            centered(content, 1),
        );
    }

    frame.render_widget(
        Paragraph::new(footer_line(footer)).alignment(Alignment::Left),
        bottom,
    );
}

/// The rhyme-group screen, replacing the word in the content area.
pub fn render_rhymes(frame: &mut Frame, words: &[String], highlighted: &str) {
    let (header, content, _) = screen_areas(frame.area());

    frame.render_widget(
        Paragraph::new(header_lines()).alignment(Alignment::Center),
        header,
    );

    let lines = rhyme_lines(words, highlighted);
    let height = lines.len() as u16;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered(content, height),
    );
}

/// Startup failure screen: the error plus the acknowledgment hint.
pub fn render_error(frame: &mut Frame, message: &str) {
    let lines = vec![
        Line::from(Span::styled(message.to_string(), theme::STYLE_ERROR)),
        Line::from(""),
        Line::from(Span::styled("Press any key to exit.", theme::STYLE_HELP)),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered(frame.area(), 3),
    );
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_mentions_every_action() {
        let help = help_lines().join(" ");
        assert!(help.contains("New Word"));
        assert!(help.contains("Rhyme"));
        assert!(help.contains("Add Word"));
        assert!(help.contains("Quit"));
    }

    #[test]
    fn rhyme_lines_highlight_exactly_the_current_word() {
        let words: Vec<String> = ["cat", "hat", "bat"].map(String::from).to_vec();
        let lines = rhyme_lines(&words, "hat");

        // title + gap + 3 words
        assert_eq!(lines.len(), 5);

        let styles: Vec<Style> = lines[2..]
            .iter()
            .map(|l| l.spans[0].style)
            .collect();
        assert_eq!(styles[0], Style::new());
        assert_eq!(styles[1], theme::STYLE_HIGHLIGHT);
        assert_eq!(styles[2], Style::new());
    }

    #[test]
    fn rhyme_lines_title_names_the_word() {
        let words: Vec<String> = vec!["sun".to_string()];
        let lines = rhyme_lines(&words, "sun");
        assert_eq!(lines[0].spans[0].content, "Rhymes for: sun");
    }

    #[test]
    fn footer_prompt_shows_label_and_buffer() {
        let line = footer_line(Footer::Prompt {
            label: "Enter word to add:",
            buffer: "bu",
        });
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Enter word to add: bu_");
    }

    #[test]
    fn footer_notice_is_styled() {
        let line = footer_line(Footer::Notice("Added 'bun' to group!"));
        assert_eq!(line.spans[0].style, theme::STYLE_NOTICE);
    }
}
