//! TUI effects boundary: terminal lifecycle, key mapping, host loop.
//!
//! This is the only module with side effects. It implements the session's
//! display/input ports on top of crossterm and ratatui and owns all timing:
//! the word flash animation, the rhyme-view hold, and the notice hold are
//! fixed blocking sleeps here, invisible to the session core.

use std::io;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::ports::{DisplayPort, InputPort};
use crate::session::{Action, Flow, Session};
use crate::store::Store;

use super::theme;
use super::view::{self, Footer};

/// Delay between flash animation frames.
const FLASH_FRAME: Duration = Duration::from_millis(50);

/// How long the rhyme group stays on screen.
const RHYME_HOLD: Duration = Duration::from_secs(2);

/// How long an add-word notice stays on screen.
const NOTICE_HOLD: Duration = Duration::from_secs(1);

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char(' ') => Some(Action::NewWord),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::ShowRhymes),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::AddWord),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// PORT IMPLEMENTATION
// ============================================================================

/// Terminal frontend implementing both session ports.
///
/// Remembers the last rendered word so footer updates (notices, the
/// add-word prompt) can redraw the full screen around it.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    word: Option<String>,
}

impl Tui {
    fn new(terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Self {
        Tui {
            terminal,
            word: None,
        }
    }

    /// Draw the main screen: header, the settled word if any, one footer.
    fn draw_base(&mut self, footer: Footer<'_>) -> io::Result<()> {
        let word = self.word.clone();
        self.terminal.draw(|frame| {
            view::render_main(
                frame,
                word.as_deref().map(|w| (w, theme::STYLE_WORD)),
                footer,
            )
        })?;
        Ok(())
    }

    /// Block until any key is pressed. Startup-error acknowledgment.
    fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(_) = event::read()? {
                return Ok(());
            }
        }
    }
}

impl DisplayPort for Tui {
    /// Flash the word through the fade-in sequence, then settle it.
    fn render_word(&mut self, word: &str) -> io::Result<()> {
        self.word = Some(word.to_string());

        for style in theme::FLASH_SEQUENCE {
            self.terminal.draw(|frame| {
                view::render_main(frame, Some((word, style)), Footer::None)
            })?;
            thread::sleep(FLASH_FRAME);
        }

        self.draw_base(Footer::None)
    }

    fn render_rhyme_set(&mut self, words: &[String], highlighted: &str) -> io::Result<()> {
        self.terminal
            .draw(|frame| view::render_rhymes(frame, words, highlighted))?;
        thread::sleep(RHYME_HOLD);
        Ok(())
    }

    fn render_notice(&mut self, text: &str) -> io::Result<()> {
        self.draw_base(Footer::Notice(text))?;
        thread::sleep(NOTICE_HOLD);
        self.draw_base(Footer::None)
    }

    fn render_error(&mut self, text: &str) -> io::Result<()> {
        self.terminal
            .draw(|frame| view::render_error(frame, text))?;
        Ok(())
    }
}

impl InputPort for Tui {
    /// Block until a mapped key arrives. Unmapped keys are ignored.
    fn next_action(&mut self) -> io::Result<Action> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = map_key(key) {
                    return Ok(action);
                }
            }
        }
    }

    /// Line editor on the footer: printable keys echo, Backspace deletes,
    /// Enter submits, Esc cancels (empty string).
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let mut buffer = String::new();

        loop {
            self.draw_base(Footer::Prompt {
                label: prompt,
                buffer: &buffer,
            })?;

            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Enter => break,
                    KeyCode::Esc => {
                        buffer.clear();
                        break;
                    }
                    KeyCode::Backspace => {
                        buffer.pop();
                    }
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        buffer.push(c);
                    }
                    _ => {}
                }
            }
        }

        self.draw_base(Footer::None)?;
        Ok(buffer)
    }
}

// ============================================================================
// HOST LOOP
// ============================================================================

/// Seed for unseeded sessions: wall clock nanoseconds.
fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Run one interactive session from load to quit.
///
/// On load failure the error is shown once and the program leaves after a
/// single acknowledgment key, never entering the loop. `seed` pins the
/// random word sequence for reproducible sessions.
pub fn run(store: Store, seed: Option<u64>) -> io::Result<()> {
    install_panic_hook();
    let terminal = setup_terminal()?;
    let mut tui = Tui::new(terminal);

    let dict = match store.load() {
        Ok(dict) => dict,
        Err(e) => {
            tui.render_error(&e.to_string())?;
            tui.wait_for_key()?;
            restore_terminal()?;
            return Ok(());
        }
    };

    let seed = seed.unwrap_or_else(seed_from_clock);
    let mut session = Session::new(dict, store, Pcg32::seed_from_u64(seed));

    tui.draw_base(Footer::None)?;

    let result = event_loop(&mut session, &mut tui);
    restore_terminal()?;
    result
}

/// One action per iteration, fully processed before the next is read.
fn event_loop(session: &mut Session<Pcg32>, tui: &mut Tui) -> io::Result<()> {
    loop {
        let action = tui.next_action()?;
        match session.apply(action, tui)? {
            Flow::Continue => {}
            Flow::Quit => return Ok(()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_maps_to_new_word() {
        let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(map_key(key), Some(Action::NewWord));
    }

    #[test]
    fn r_maps_to_show_rhymes_both_cases() {
        let lower = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        let upper = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(map_key(lower), Some(Action::ShowRhymes));
        assert_eq!(map_key(upper), Some(Action::ShowRhymes));
    }

    #[test]
    fn a_maps_to_add_word() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(map_key(key), Some(Action::AddWord));
    }

    #[test]
    fn q_and_ctrl_c_map_to_quit() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(q), Some(Action::Quit));
        assert_eq!(map_key(ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn unmapped_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(map_key(key), None);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(esc), None);
    }

    #[test]
    fn clock_seed_is_nonzero() {
        assert_ne!(seed_from_clock(), 0);
    }
}
