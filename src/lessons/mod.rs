//! Lessons: word/chord file pairs and their generation
//!
//! # Components
//! - `writer.rs`: Writes one `.les`/`.chd` pair
//! - `reader.rs`: Reads a pair back and checks the pairing
//! - `driver.rs`: Walks the curriculum, emitting group and review lessons
//! - `lint.rs`: Post-hoc check for chords missing from the mapping table

pub mod driver;
pub mod lint;
pub mod reader;
pub mod writer;

pub use driver::{generate, MissingPolicy};
pub use lint::lint;
pub use reader::verify;
pub use writer::write_lesson;

// These are only used internally or their fields are accessed directly
#[allow(unused_imports)]
pub use driver::{GenerationSummary, WrittenLesson};
#[allow(unused_imports)]
pub use lint::LintReport;
#[allow(unused_imports)]
pub use reader::read_lesson;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Extension of the word file
pub const WORDS_EXT: &str = "les";
/// Extension of the chord file
pub const CHORDS_EXT: &str = "chd";
/// Field name recorded in the word file header
pub const WORD_FIELD: &str = "word";

/// Errors raised while writing or reading lessons
#[derive(Debug, thiserror::Error)]
pub enum LessonError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("chord {chord:?} in group {group} has no pseudo-steno entry")]
    MissingChord { group: String, chord: String },

    #[error("bad lesson header {0:?}")]
    BadHeader(String),

    #[error("lesson {name} is unpaired: {words} words vs {chords} chords")]
    Unpaired {
        name: String,
        words: usize,
        chords: usize,
    },

    #[error("lesson {name} read back with {found} entries, expected {expected}")]
    Mismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("lesson {name} read back in {found} mode, expected {expected}")]
    ModeMismatch {
        name: String,
        expected: PresentationMode,
        found: PresentationMode,
    },

    #[error("lesson {lesson}: entry {value:?} contains a line break")]
    LineBreak { lesson: String, value: String },
}

/// How the consumer presents a lesson
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationMode {
    /// Sequential introduction
    Spaced,
    /// Shuffled review
    Randomized,
}

impl PresentationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentationMode::Spaced => "spaced",
            PresentationMode::Randomized => "randomized",
        }
    }

    /// Word file header line, e.g. `<spaced, word>`
    pub fn header(&self) -> String {
        format!("<{}, {}>", self.as_str(), WORD_FIELD)
    }

    /// Parse a `<mode, word>` header line
    pub fn from_header(line: &str) -> Result<Self, LessonError> {
        let bad = || LessonError::BadHeader(line.to_string());
        let inner = line
            .trim()
            .strip_prefix('<')
            .and_then(|s| s.strip_suffix('>'))
            .ok_or_else(bad)?;
        let (mode, field) = inner.split_once(',').ok_or_else(bad)?;
        if field.trim() != WORD_FIELD {
            return Err(bad());
        }
        mode.trim().parse().map_err(|_| bad())
    }
}

impl fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresentationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spaced" => Ok(PresentationMode::Spaced),
            "randomized" => Ok(PresentationMode::Randomized),
            other => Err(format!("unknown presentation mode {other:?}")),
        }
    }
}

/// A target word paired with the chord that produces it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub chord: String,
}

impl Entry {
    pub fn new(word: impl Into<String>, chord: impl Into<String>) -> Self {
        Entry {
            word: word.into(),
            chord: chord.into(),
        }
    }
}

/// A named lesson ready to be written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub name: String,
    pub mode: PresentationMode,
    pub entries: Vec<Entry>,
}

impl Lesson {
    pub fn new(name: impl Into<String>, mode: PresentationMode, entries: Vec<Entry>) -> Self {
        Lesson {
            name: name.into(),
            mode,
            entries,
        }
    }
}
