//! Domain types for freestyle-trainer.
//!
//! Structure:
//! - Core data: RhymeGroup, Dictionary (ordered, load-order preserving)
//! - Outcomes: AddRejection (recoverable), DictError (fatal at startup)

use std::path::PathBuf;

// ============================================================================
// CORE DATA
// ============================================================================

/// An ordered sequence of words that rhyme with one another.
///
/// Non-empty after a successful parse. Word order is append order and is
/// preserved across save/load cycles. `Dictionary::add_word` enforces
/// uniqueness; duplicates already present in a loaded file are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RhymeGroup {
    /// The words, in file/append order.
    pub words: Vec<String>,
}

impl RhymeGroup {
    /// Build a group from anything yielding string-likes.
    /// Parser plumbing and test convenience — does not trim or validate.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RhymeGroup {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// The full ordered collection of rhyme groups loaded from one file.
///
/// Non-empty after a successful load (the parser rejects empty input).
/// Group order mirrors file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    /// All groups, in file order.
    pub groups: Vec<RhymeGroup>,
}

impl Dictionary {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Append `word` to the group at `group_index`.
    ///
    /// Trims the word first. Rejects without mutating if the trimmed word is
    /// empty or already present in the group (exact match). The caller is
    /// responsible for persisting the dictionary after a successful append.
    ///
    /// Panics if `group_index` is out of range. Groups are never removed,
    /// so any index obtained from this dictionary stays valid.
    pub fn add_word(&mut self, group_index: usize, word: &str) -> Result<(), AddRejection> {
        let word = word.trim();
        if word.is_empty() {
            return Err(AddRejection::EmptyWord);
        }

        let group = &mut self.groups[group_index];
        if group.contains(word) {
            return Err(AddRejection::AlreadyPresent);
        }

        group.words.push(word.to_string());
        Ok(())
    }
}

// ============================================================================
// OUTCOMES
// ============================================================================

/// Why an add-word request was refused. Recoverable — the dictionary is
/// untouched and the session continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddRejection {
    /// Word was empty after trimming.
    EmptyWord,
    /// Word already exists in the target group.
    AlreadyPresent,
}

/// Fatal dictionary load failure. Reported once at startup; the interactive
/// loop is never entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictError {
    /// The dictionary file does not exist.
    SourceMissing { path: PathBuf },

    /// The file was read but contained no word groups (empty or all-blank).
    NoGroups,

    /// The file exists but could not be read.
    Read { path: PathBuf, message: String },
}

impl std::fmt::Display for DictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictError::SourceMissing { path } => {
                write!(f, "dictionary not found: {}", path.display())
            }
            DictError::NoGroups => {
                write!(f, "no valid word groups in dictionary")
            }
            DictError::Read { path, message } => {
                write!(f, "failed to read {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for DictError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn two_group_dict() -> Dictionary {
        Dictionary {
            groups: vec![
                RhymeGroup::from_words(["cat", "hat"]),
                RhymeGroup::from_words(["dog", "log"]),
            ],
        }
    }

    #[test]
    fn contains_is_exact_and_case_sensitive() {
        let group = RhymeGroup::from_words(["cat", "hat"]);
        assert!(group.contains("cat"));
        assert!(!group.contains("Cat"));
        assert!(!group.contains("ca"));
    }

    #[test]
    fn add_word_appends_at_end() {
        let mut dict = two_group_dict();
        dict.add_word(0, "bat").unwrap();

        assert_eq!(dict.groups[0].words, vec!["cat", "hat", "bat"]);
        // Other group untouched
        assert_eq!(dict.groups[1].words, vec!["dog", "log"]);
    }

    #[test]
    fn add_word_trims_before_appending() {
        let mut dict = two_group_dict();
        dict.add_word(0, "  bat \n").unwrap();
        assert_eq!(dict.groups[0].words.last().unwrap(), "bat");
    }

    #[test]
    fn add_word_rejects_duplicate_without_mutation() {
        let mut dict = two_group_dict();
        let before = dict.clone();

        assert_eq!(dict.add_word(0, "cat"), Err(AddRejection::AlreadyPresent));
        assert_eq!(dict, before);
    }

    #[test]
    fn add_word_rejects_empty_and_whitespace() {
        let mut dict = two_group_dict();
        let before = dict.clone();

        assert_eq!(dict.add_word(0, ""), Err(AddRejection::EmptyWord));
        assert_eq!(dict.add_word(0, "   \t "), Err(AddRejection::EmptyWord));
        assert_eq!(dict, before);
    }

    #[test]
    fn duplicate_is_scoped_to_the_target_group() {
        let mut dict = two_group_dict();
        // "cat" lives in group 0, so group 1 accepts it
        dict.add_word(1, "cat").unwrap();
        assert_eq!(dict.groups[1].words, vec!["dog", "log", "cat"]);
    }

    #[test]
    #[should_panic]
    fn add_word_panics_on_out_of_range_group() {
        let mut dict = two_group_dict();
        let _ = dict.add_word(2, "bat");
    }

    #[test]
    fn dict_error_messages_name_the_condition() {
        let missing = DictError::SourceMissing {
            path: PathBuf::from("/tmp/dictionary.txt"),
        };
        assert!(missing.to_string().contains("not found"));
        assert!(missing.to_string().contains("/tmp/dictionary.txt"));

        assert!(DictError::NoGroups.to_string().contains("no valid word groups"));
    }
}
