//! Lesson file writer
//!
//! Writes `<name>.les` (header + one word per line) and `<name>.chd`
//! (blank line + one chord per line). Line i of both files after the
//! header is a matched pair. Existing files are overwritten.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{Lesson, LessonError, CHORDS_EXT, WORDS_EXT};

/// Paths of the word and chord files for a lesson name
pub fn lesson_paths(dir: &Path, name: &str) -> (PathBuf, PathBuf) {
    (
        dir.join(format!("{name}.{WORDS_EXT}")),
        dir.join(format!("{name}.{CHORDS_EXT}")),
    )
}

fn create(path: &Path) -> Result<BufWriter<File>, LessonError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> LessonError {
    LessonError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Every word and chord must occupy exactly one line
fn check_single_lines(lesson: &Lesson) -> Result<(), LessonError> {
    let broken = lesson
        .entries
        .iter()
        .flat_map(|e| [&e.word, &e.chord])
        .find(|v| v.contains(['\n', '\r']));
    match broken {
        Some(value) => Err(LessonError::LineBreak {
            lesson: lesson.name.clone(),
            value: value.clone(),
        }),
        None => Ok(()),
    }
}

/// Write one lesson pair into `dir`
pub fn write_lesson(dir: &Path, lesson: &Lesson) -> Result<(), LessonError> {
    check_single_lines(lesson)?;

    let (words_path, chords_path) = lesson_paths(dir, &lesson.name);
    let mut words = create(&words_path)?;
    let mut chords = create(&chords_path)?;

    writeln!(words, "{}", lesson.mode.header()).map_err(|e| io_error(&words_path, e))?;
    writeln!(chords).map_err(|e| io_error(&chords_path, e))?;

    for entry in &lesson.entries {
        writeln!(words, "{}", entry.word).map_err(|e| io_error(&words_path, e))?;
        writeln!(chords, "{}", entry.chord).map_err(|e| io_error(&chords_path, e))?;
    }

    // BufWriter swallows errors on drop
    words.flush().map_err(|e| io_error(&words_path, e))?;
    chords.flush().map_err(|e| io_error(&chords_path, e))?;

    tracing::debug!(
        lesson = %lesson.name,
        entries = lesson.entries.len(),
        "wrote {} and {}",
        words_path.display(),
        chords_path.display()
    );
    Ok(())
}
