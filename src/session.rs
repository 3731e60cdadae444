//! Session state machine: one action in, zero or more render requests out.
//!
//! The session is the only owner of the dictionary for the process
//! lifetime. It is deliberately terminal-free: all effects go through the
//! [`DisplayPort`]/[`InputPort`] seams, and randomness comes from an
//! injected generator, so every transition is testable with a fake port and
//! a seeded RNG.
//!
//! Two states: Idle (no word selected yet) and Prompted (a group and a word
//! from it are selected, always together). Every action is accepted in both
//! states; actions that need a selection are no-ops while Idle.

use std::io;

use rand::Rng;

use crate::ports::{DisplayPort, InputPort};
use crate::store::Store;
use crate::types::{AddRejection, Dictionary};

// ============================================================================
// ACTIONS & FLOW
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The input port maps key presses to these; the session decides what each
/// one means in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pick a fresh random group and word, show the word.
    NewWord,
    /// Show the full rhyme group for the current word, then restore it.
    ShowRhymes,
    /// Prompt for a word and add it to the current group.
    AddWord,
    /// End the session.
    Quit,
}

/// What the host loop should do after an action has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

// ============================================================================
// SESSION
// ============================================================================

/// The currently selected group and word.
///
/// Kept as one value so a word can never exist without its group: the
/// session is Idle exactly when this is `None`. `word` is always a member
/// of `dict.groups[group]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Index into the dictionary's group list.
    pub group: usize,
    /// The selected word, cloned out of the group.
    pub word: String,
}

/// Interactive session over one loaded dictionary.
///
/// Generic over the random source so tests can seed it.
#[derive(Debug)]
pub struct Session<R: Rng> {
    dict: Dictionary,
    store: Store,
    rng: R,
    current: Option<Selection>,
}

impl<R: Rng> Session<R> {
    /// Start a session in the Idle state.
    ///
    /// `dict` must be non-empty — guaranteed by a successful
    /// [`Store::load`], which is the only production path here.
    pub fn new(dict: Dictionary, store: Store, rng: R) -> Self {
        debug_assert!(!dict.is_empty());
        Session {
            dict,
            store,
            rng,
            current: None,
        }
    }

    /// Current selection, if any. `None` means Idle.
    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Process one user action to completion.
    ///
    /// Blocking: AddWord waits on the input port for the word text before
    /// returning. Errors here are terminal I/O failures from the port, not
    /// domain failures — those are all reported as notices and recovered.
    pub fn apply<P>(&mut self, action: Action, port: &mut P) -> io::Result<Flow>
    where
        P: DisplayPort + InputPort,
    {
        match action {
            Action::NewWord => self.new_word(port)?,
            Action::ShowRhymes => self.show_rhymes(port)?,
            Action::AddWord => self.add_word(port)?,
            Action::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Two-stage uniform draw: first a group, then a word within it.
    ///
    /// Deliberately not a flat draw over all words — small groups get the
    /// same exposure as large ones.
    fn new_word<P: DisplayPort>(&mut self, port: &mut P) -> io::Result<()> {
        let group = self.rng.random_range(0..self.dict.len());
        let words = &self.dict.groups[group].words;
        let word = words[self.rng.random_range(0..words.len())].clone();

        port.render_word(&word)?;
        self.current = Some(Selection { group, word });
        Ok(())
    }

    /// Show the current group with the current word highlighted, then
    /// restore the plain word view. No-op while Idle.
    fn show_rhymes<P: DisplayPort>(&mut self, port: &mut P) -> io::Result<()> {
        let Some(sel) = &self.current else {
            return Ok(());
        };

        let words = &self.dict.groups[sel.group].words;
        port.render_rhyme_set(words, &sel.word)?;
        port.render_word(&sel.word)
    }

    /// Prompt for a word and append it to the current group. No-op while
    /// Idle; silent no-op on empty input.
    ///
    /// The in-memory append commits before the file write is attempted; a
    /// failed write leaves memory ahead of disk and says so in the notice
    /// rather than rolling back.
    fn add_word<P: DisplayPort + InputPort>(&mut self, port: &mut P) -> io::Result<()> {
        let Some(sel) = &self.current else {
            return Ok(());
        };
        let group = sel.group;

        let line = port.read_line("Enter word to add:")?;
        let word = line.trim().to_string();
        if word.is_empty() {
            return Ok(());
        }

        match self.dict.add_word(group, &word) {
            Ok(()) => match self.store.save(&self.dict) {
                Ok(()) => port.render_notice(&format!("Added '{}' to group!", word)),
                Err(e) => port.render_notice(&format!(
                    "Added '{}', but saving failed: {}",
                    word, e
                )),
            },
            Err(AddRejection::AlreadyPresent) => {
                port.render_notice(&format!("'{}' already exists!", word))
            }
            // Unreachable through this path (input was trimmed above), but
            // the library-level guard still maps to a user-visible notice.
            Err(AddRejection::EmptyWord) => Ok(()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
