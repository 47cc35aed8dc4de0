//! Curriculum: mapping table plus the ordered introduction groups
//!
//! # Components
//! - `mapping.rs`: Ordered chord → pseudo-steno table
//! - `builtin.rs`: The compiled-in pseudo-steno track
//!
//! A curriculum can also be loaded from (and dumped to) JSON:
//!
//! ```json
//! { "mapping": [["S-", "S"]],
//!   "groups": [{ "name": "single", "notation": "pseudo", "chords": ["S-"] }] }
//! ```

pub mod builtin;
pub mod mapping;

pub use mapping::MappingTable;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while building or loading a curriculum
#[derive(Debug, thiserror::Error)]
pub enum CurriculumError {
    #[error("chord {0:?} appears more than once in the mapping table")]
    DuplicateChord(String),

    #[error("curriculum file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed curriculum JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} {value:?} contains a line break")]
    LineBreak { field: &'static str, value: String },

    #[error("group name {0:?} is not a plain file name")]
    BadGroupName(String),
}

fn has_line_break(value: &str) -> bool {
    value.contains(['\n', '\r'])
}

fn check_single_line(field: &'static str, value: &str) -> Result<(), CurriculumError> {
    if has_line_break(value) {
        return Err(CurriculumError::LineBreak {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Group names become lesson file names; no separators or parent steps
fn check_group_name(name: &str) -> Result<(), CurriculumError> {
    if name.is_empty()
        || name.contains(['/', '\\'])
        || name.contains("..")
        || has_line_break(name)
    {
        return Err(CurriculumError::BadGroupName(name.to_string()));
    }
    Ok(())
}

/// How a group's words are displayed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Word is the mapping-table value for the chord
    #[default]
    Pseudo,
    /// Word is the raw chord itself
    Steno,
}

/// One step of the introduction order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub notation: Notation,
    pub chords: Vec<String>,
}

impl Group {
    pub fn new(name: impl Into<String>, notation: Notation, chords: &[&str]) -> Self {
        Group {
            name: name.into(),
            notation,
            chords: chords.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Mapping table and ordered groups
#[derive(Clone, Debug, PartialEq)]
pub struct Curriculum {
    pub mapping: MappingTable,
    pub groups: Vec<Group>,
}

/// On-disk shape; `mapping` is a pair list so file order is display order
#[derive(Serialize, Deserialize)]
struct CurriculumFile {
    mapping: Vec<(String, String)>,
    groups: Vec<Group>,
}

impl Curriculum {
    pub fn new(mapping: MappingTable, groups: Vec<Group>) -> Self {
        Curriculum { mapping, groups }
    }

    /// Parse a curriculum from JSON text
    pub fn from_json(content: &str) -> Result<Self, CurriculumError> {
        let file: CurriculumFile = serde_json::from_str(content)?;
        let mapping = MappingTable::from_pairs(file.mapping)?;
        let curriculum = Curriculum::new(mapping, file.groups);
        curriculum.validate()?;
        Ok(curriculum)
    }

    /// Every value must fit on one line of a lesson file, and every group
    /// name must stay inside the output directory
    pub fn validate(&self) -> Result<(), CurriculumError> {
        for (chord, notation) in self.mapping.iter() {
            check_single_line("mapping chord", chord)?;
            check_single_line("mapping value", notation)?;
        }
        for group in &self.groups {
            check_group_name(&group.name)?;
            for chord in &group.chords {
                check_single_line("group chord", chord)?;
            }
        }
        Ok(())
    }

    /// Load a curriculum from a JSON file
    pub fn load(path: &Path) -> Result<Self, CurriculumError> {
        let content = fs::read_to_string(path).map_err(|source| CurriculumError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Render as pretty JSON
    pub fn to_json(&self) -> Result<String, CurriculumError> {
        let file = CurriculumFile {
            mapping: self
                .mapping
                .iter()
                .map(|(c, n)| (c.to_string(), n.to_string()))
                .collect(),
            groups: self.groups.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Write as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), CurriculumError> {
        let json = self.to_json()?;
        fs::write(path, json + "\n").map_err(|source| CurriculumError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Total number of chord entries across all groups
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.chords.len()).sum()
    }
}
