//! Consistency lint
//!
//! Detects:
//! - Chords in pseudo-notation groups that have no mapping-table entry
//!
//! Findings are diagnostics only. Steno-notation groups display the chord
//! itself and never consult the table, so they cannot have gaps.

use std::fmt;

use super::driver::lesson_name;
use crate::curriculum::{Curriculum, Notation};

/// A chord referenced by a group but absent from the mapping table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingChord {
    /// Lesson name of the group, e.g. `3_pseudo`
    pub group: String,
    pub chord: String,
}

impl fmt::Display for MissingChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "warning: no pseudo-steno entry for chord {:?} (group {})",
            self.chord, self.group
        )
    }
}

/// All gaps found, in introduction order
#[derive(Clone, Debug, Default)]
pub struct LintReport {
    pub missing: Vec<MissingChord>,
    /// Chords checked against the table
    pub checked: usize,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }

    /// One warning line per missing chord
    pub fn lines(&self) -> Vec<String> {
        self.missing.iter().map(|m| m.to_string()).collect()
    }
}

/// Check every pseudo-notation chord against the mapping table
pub fn lint(curriculum: &Curriculum) -> LintReport {
    let mut report = LintReport::default();

    for (idx, group) in curriculum.groups.iter().enumerate() {
        if group.notation != Notation::Pseudo {
            continue;
        }
        for chord in &group.chords {
            report.checked += 1;
            if !curriculum.mapping.contains(chord) {
                let missing = MissingChord {
                    group: lesson_name(idx + 1, group),
                    chord: chord.clone(),
                };
                tracing::warn!(group = %missing.group, chord = %missing.chord, "chord missing from mapping table");
                report.missing.push(missing);
            }
        }
    }

    report
}
