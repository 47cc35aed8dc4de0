//! Pseudo-steno mapping table
//!
//! Handles:
//! - Chord identifier → pseudo-steno display form lookup
//! - Insertion-ordered iteration (display order of the table)

use rustc_hash::FxHashMap;

use super::CurriculumError;

/// Ordered chord → pseudo-steno table
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MappingTable {
    /// (chord, notation) pairs in insertion order
    entries: Vec<(String, String)>,
    /// Chord → position in `entries`
    index: FxHashMap<String, usize>,
}

impl MappingTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (chord, notation) pairs, rejecting duplicate chords
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, CurriculumError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (chord, notation) in pairs {
            table.insert(chord.into(), notation.into())?;
        }
        Ok(table)
    }

    /// Add an entry at the end of the table
    pub fn insert(&mut self, chord: String, notation: String) -> Result<(), CurriculumError> {
        if self.index.contains_key(&chord) {
            return Err(CurriculumError::DuplicateChord(chord));
        }
        self.index.insert(chord.clone(), self.entries.len());
        self.entries.push((chord, notation));
        Ok(())
    }

    /// Pseudo-steno form for a chord
    pub fn get(&self, chord: &str) -> Option<&str> {
        self.index
            .get(chord)
            .map(|&idx| self.entries[idx].1.as_str())
    }

    pub fn contains(&self, chord: &str) -> bool {
        self.index.contains_key(chord)
    }

    /// Iterate (chord, notation) in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, n)| (c.as_str(), n.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
