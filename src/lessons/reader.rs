//! Lesson file reader
//!
//! Parses a written `.les`/`.chd` pair back into a [`Lesson`]. Pairing is
//! positional, so blank word lines (unresolved chords) are kept rather
//! than skipped.

use std::fs;
use std::path::Path;

use super::driver::WrittenLesson;
use super::writer::lesson_paths;
use super::{Entry, Lesson, LessonError, PresentationMode};

fn read(path: &Path) -> Result<String, LessonError> {
    fs::read_to_string(path).map_err(|source| LessonError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the lesson `name` from `dir`
pub fn read_lesson(dir: &Path, name: &str) -> Result<Lesson, LessonError> {
    let (words_path, chords_path) = lesson_paths(dir, name);
    let words_text = read(&words_path)?;
    let chords_text = read(&chords_path)?;

    let mut words = words_text.lines();
    let header = words.next().unwrap_or_default();
    let mode = PresentationMode::from_header(header)?;

    let mut chords = chords_text.lines();
    match chords.next() {
        Some(line) if line.trim().is_empty() => {}
        other => return Err(LessonError::BadHeader(other.unwrap_or_default().to_string())),
    }

    let words: Vec<&str> = words.collect();
    let chords: Vec<&str> = chords.collect();
    if words.len() != chords.len() {
        return Err(LessonError::Unpaired {
            name: name.to_string(),
            words: words.len(),
            chords: chords.len(),
        });
    }

    let entries = words
        .into_iter()
        .zip(chords)
        .map(|(word, chord)| Entry::new(word, chord))
        .collect();

    Ok(Lesson::new(name, mode, entries))
}

/// Re-read every written lesson and check it matches what was written.
/// Returns the number of blank words, which the lesson player skips.
pub fn verify(dir: &Path, written: &[WrittenLesson]) -> Result<usize, LessonError> {
    let mut blank_words = 0;
    for expected in written {
        let lesson = read_lesson(dir, &expected.name)?;
        if lesson.mode != expected.mode {
            return Err(LessonError::ModeMismatch {
                name: expected.name.clone(),
                expected: expected.mode,
                found: lesson.mode,
            });
        }
        if lesson.entries.len() != expected.entries {
            return Err(LessonError::Mismatch {
                name: expected.name.clone(),
                expected: expected.entries,
                found: lesson.entries.len(),
            });
        }
        blank_words += lesson.entries.iter().filter(|e| e.word.is_empty()).count();
    }
    Ok(blank_words)
}
