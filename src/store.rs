//! Dictionary persistence: the flat-file word-group format.
//!
//! Format (plain text, UTF-8): one word per line; groups separated by a
//! blank line; the file ends with a trailing blank line after the last
//! group. No header, no metadata.
//!
//! Structure:
//! - Pure functions: parse, serialize (round-trip idempotent)
//! - Effect functions: Store load/save (full-file rewrite)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::{Dictionary, DictError, RhymeGroup};

/// Default dictionary filename, looked up in the working directory first.
pub const DICTIONARY_FILENAME: &str = "dictionary.txt";

// ============================================================================
// PURE FUNCTIONS (Format)
// ============================================================================

/// Parse raw dictionary text into groups.
///
/// Consecutive non-empty trimmed lines form one group; a blank line closes
/// the current group. Consecutive blank lines collapse — empty groups are
/// never produced. A trailing group without a final blank line is still
/// closed. Duplicate words within a group are preserved as found.
///
/// Fails with [`DictError::NoGroups`] if nothing remains (empty or
/// all-blank input).
pub fn parse(raw: &str) -> Result<Dictionary, DictError> {
    let mut groups = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if !line.is_empty() {
            current.push(line.to_string());
        } else if !current.is_empty() {
            groups.push(RhymeGroup { words: std::mem::take(&mut current) });
        }
    }
    if !current.is_empty() {
        groups.push(RhymeGroup { words: current });
    }

    if groups.is_empty() {
        return Err(DictError::NoGroups);
    }

    Ok(Dictionary { groups })
}

/// Render a dictionary back to its file form.
///
/// Each group is its words joined by newlines, followed by one blank line.
/// `parse(serialize(d)) == d` for any dictionary that upholds the type
/// invariants (non-empty groups of non-empty trimmed words).
pub fn serialize(dict: &Dictionary) -> String {
    let mut out = String::new();
    for group in &dict.groups {
        out.push_str(&group.words.join("\n"));
        out.push_str("\n\n");
    }
    out
}

/// Returns the default dictionary location in the platform data directory.
///
/// Falls back to the working directory if no data directory is known.
pub fn default_dictionary_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("freestyle-trainer")
        .join(DICTIONARY_FILENAME)
}

/// A small starter dictionary, used by `init` to seed a fresh install.
pub fn starter_dictionary() -> Dictionary {
    Dictionary {
        groups: vec![
            RhymeGroup::from_words(["sun", "fun", "run", "done"]),
            RhymeGroup::from_words(["flow", "glow", "show", "know"]),
            RhymeGroup::from_words(["beat", "heat", "street", "complete"]),
            RhymeGroup::from_words(["mind", "find", "grind", "behind"]),
        ],
    }
}

// ============================================================================
// EFFECT FUNCTIONS (File I/O)
// ============================================================================

/// File-backed dictionary store.
///
/// `save` is a full-file rewrite of the serialized dictionary, never an
/// incremental append.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and parse the dictionary file.
    ///
    /// A missing file is reported distinctly ([`DictError::SourceMissing`])
    /// from a present-but-unreadable one ([`DictError::Read`]) and from a
    /// readable-but-empty one ([`DictError::NoGroups`]).
    pub fn load(&self) -> Result<Dictionary, DictError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DictError::SourceMissing {
                path: self.path.clone(),
            },
            _ => DictError::Read {
                path: self.path.clone(),
                message: e.to_string(),
            },
        })?;

        parse(&raw)
    }

    /// Rewrite the dictionary file with the serialized form of `dict`.
    ///
    /// Creates parent directories as needed (first save of a default-located
    /// dictionary).
    pub fn save(&self, dict: &Dictionary) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serialize(dict))
    }
}

// ============================================================================
// TESTS
// ============================================================================
