//! Curriculum → lesson driver
//!
//! For group i named n, writes `<i>_<n>` (spaced, the group's own entries)
//! and `<i>_<n>_review` (randomized, every entry of groups 1..=i in
//! introduction order, duplicates kept). Groups are numbered from 1.

use std::path::Path;

use super::{write_lesson, Entry, Lesson, LessonError, PresentationMode};
use crate::curriculum::{Curriculum, Group, MappingTable, Notation};

/// What to do with a chord that has no mapping-table entry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Write an empty word line and leave reporting to the lint
    #[default]
    Lenient,
    /// Abort at the point of lookup
    Strict,
}

/// One lesson pair that was written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenLesson {
    pub name: String,
    pub mode: PresentationMode,
    pub entries: usize,
}

/// Result of a generation run
#[derive(Clone, Debug, Default)]
pub struct GenerationSummary {
    /// Lessons in the order they were written
    pub lessons: Vec<WrittenLesson>,
    /// Chords written with an empty word (lenient policy only)
    pub unresolved: usize,
}

/// Lesson name for the i-th group (1-based)
pub fn lesson_name(number: usize, group: &Group) -> String {
    format!("{}_{}", number, group.name)
}

/// Review lesson name for the i-th group (1-based)
pub fn review_name(number: usize, group: &Group) -> String {
    format!("{}_review", lesson_name(number, group))
}

/// Resolve a chord to its (word, chord) entry; `None` if unmapped
fn resolve(mapping: &MappingTable, notation: Notation, chord: &str) -> Option<Entry> {
    match notation {
        Notation::Steno => Some(Entry::new(chord, chord)),
        Notation::Pseudo => mapping.get(chord).map(|word| Entry::new(word, chord)),
    }
}

/// Write every group and review lesson of `curriculum` into `dir`
pub fn generate(
    curriculum: &Curriculum,
    policy: MissingPolicy,
    dir: &Path,
) -> Result<GenerationSummary, LessonError> {
    let mut summary = GenerationSummary::default();
    let mut review: Vec<Entry> = Vec::with_capacity(curriculum.entry_count());

    for (idx, group) in curriculum.groups.iter().enumerate() {
        let number = idx + 1;
        let mut entries = Vec::with_capacity(group.chords.len());

        for chord in &group.chords {
            match resolve(&curriculum.mapping, group.notation, chord) {
                Some(entry) => entries.push(entry),
                None if policy == MissingPolicy::Strict => {
                    return Err(LessonError::MissingChord {
                        group: lesson_name(number, group),
                        chord: chord.clone(),
                    });
                }
                None => {
                    tracing::debug!(group = %group.name, chord = %chord, "unmapped chord, writing empty word");
                    summary.unresolved += 1;
                    entries.push(Entry::new("", chord.as_str()));
                }
            }
        }

        review.extend(entries.iter().cloned());

        let lesson = Lesson::new(lesson_name(number, group), PresentationMode::Spaced, entries);
        let review_lesson = Lesson::new(
            review_name(number, group),
            PresentationMode::Randomized,
            review.clone(),
        );

        for lesson in [lesson, review_lesson] {
            write_lesson(dir, &lesson)?;
            tracing::info!(
                lesson = %lesson.name,
                mode = %lesson.mode,
                entries = lesson.entries.len(),
                "lesson written"
            );
            summary.lessons.push(WrittenLesson {
                name: lesson.name,
                mode: lesson.mode,
                entries: lesson.entries.len(),
            });
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::builtin;
    use crate::lessons::read_lesson;
    use std::fs;

    fn sample() -> Curriculum {
        let mapping = MappingTable::from_pairs([("S-", "S"), ("TK", "D"), ("PW", "B")]).unwrap();
        let groups = vec![
            Group::new("single", Notation::Pseudo, &["S-"]),
            Group::new("pairs", Notation::Pseudo, &["TK", "PW", "S-"]),
            Group::new("raw", Notation::Steno, &["TK"]),
        ];
        Curriculum::new(mapping, groups)
    }

    #[test]
    fn test_single_group_example() {
        let dir = tempfile::tempdir().unwrap();
        let mapping = MappingTable::from_pairs([("S-", "S")]).unwrap();
        let curriculum = Curriculum::new(
            mapping,
            vec![Group::new("single", Notation::Pseudo, &["S-"])],
        );
        generate(&curriculum, MissingPolicy::Lenient, dir.path()).unwrap();

        let les = fs::read_to_string(dir.path().join("1_single.les")).unwrap();
        let chd = fs::read_to_string(dir.path().join("1_single.chd")).unwrap();
        assert_eq!(les, "<spaced, word>\nS\n");
        assert_eq!(chd, "\nS-\n");

        let review = fs::read_to_string(dir.path().join("1_single_review.les")).unwrap();
        assert_eq!(review, "<randomized, word>\nS\n");
    }

    #[test]
    fn test_writes_two_lessons_per_group() {
        let dir = tempfile::tempdir().unwrap();
        let summary = generate(&sample(), MissingPolicy::Lenient, dir.path()).unwrap();

        let names: Vec<&str> = summary.lessons.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "1_single",
                "1_single_review",
                "2_pairs",
                "2_pairs_review",
                "3_raw",
                "3_raw_review"
            ]
        );
        assert_eq!(summary.unresolved, 0);
    }

    #[test]
    fn test_review_accumulates_with_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let summary = generate(&sample(), MissingPolicy::Lenient, dir.path()).unwrap();

        let review_sizes: Vec<usize> = summary
            .lessons
            .iter()
            .filter(|l| l.mode == PresentationMode::Randomized)
            .map(|l| l.entries)
            .collect();
        assert_eq!(review_sizes, vec![1, 4, 5]);

        let review = read_lesson(dir.path(), "3_raw_review").unwrap();
        let chords: Vec<&str> = review.entries.iter().map(|e| e.chord.as_str()).collect();
        assert_eq!(chords, vec!["S-", "TK", "PW", "S-", "TK"]);
        let words: Vec<&str> = review.entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["S", "D", "B", "S", "TK"]);
    }

    #[test]
    fn test_pseudo_words_come_from_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let curriculum = sample();
        generate(&curriculum, MissingPolicy::Lenient, dir.path()).unwrap();

        let lesson = read_lesson(dir.path(), "2_pairs").unwrap();
        assert_eq!(lesson.mode, PresentationMode::Spaced);
        for entry in &lesson.entries {
            assert_eq!(Some(entry.word.as_str()), curriculum.mapping.get(&entry.chord));
        }
    }

    #[test]
    fn test_lenient_writes_empty_word_for_missing_chord() {
        let dir = tempfile::tempdir().unwrap();
        let mut curriculum = sample();
        curriculum.groups[0].chords.push("KWR".to_string());

        let summary = generate(&curriculum, MissingPolicy::Lenient, dir.path()).unwrap();
        assert_eq!(summary.unresolved, 1);
        assert_eq!(summary.lessons.len(), 6);

        let lesson = read_lesson(dir.path(), "1_single").unwrap();
        assert_eq!(lesson.entries, vec![Entry::new("S", "S-"), Entry::new("", "KWR")]);
    }

    #[test]
    fn test_strict_aborts_on_missing_chord() {
        let dir = tempfile::tempdir().unwrap();
        let mut curriculum = sample();
        curriculum.groups[1].chords.push("KWR".to_string());

        let err = generate(&curriculum, MissingPolicy::Strict, dir.path()).unwrap_err();
        match err {
            LessonError::MissingChord { group, chord } => {
                assert_eq!(group, "2_pairs");
                assert_eq!(chord, "KWR");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(dir.path().join("1_single.les").exists());
        assert!(!dir.path().join("2_pairs.les").exists());
    }

    #[test]
    fn test_multi_line_mapping_value_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let mapping = MappingTable::from_pairs([("S-", "S\nT")]).unwrap();
        let curriculum = Curriculum::new(
            mapping,
            vec![Group::new("single", Notation::Pseudo, &["S-"])],
        );

        let err = generate(&curriculum, MissingPolicy::Strict, dir.path()).unwrap_err();
        assert!(matches!(err, LessonError::LineBreak { ref lesson, .. } if lesson == "1_single"));
        assert!(!dir.path().join("1_single.les").exists());
    }

    #[test]
    fn test_empty_group_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let mapping = MappingTable::new();
        let curriculum = Curriculum::new(mapping, vec![Group::new("empty", Notation::Pseudo, &[])]);
        generate(&curriculum, MissingPolicy::Strict, dir.path()).unwrap();

        let les = fs::read_to_string(dir.path().join("1_empty.les")).unwrap();
        assert_eq!(les, "<spaced, word>\n");
    }

    #[test]
    fn test_generation_is_idempotent() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let curriculum = builtin::curriculum().unwrap();

        let summary = generate(&curriculum, MissingPolicy::Lenient, first.path()).unwrap();
        generate(&curriculum, MissingPolicy::Lenient, second.path()).unwrap();
        // Regenerating over existing output must not change it either
        generate(&curriculum, MissingPolicy::Lenient, second.path()).unwrap();

        for written in &summary.lessons {
            for ext in ["les", "chd"] {
                let file = format!("{}.{}", written.name, ext);
                let a = fs::read(first.path().join(&file)).unwrap();
                let b = fs::read(second.path().join(&file)).unwrap();
                assert_eq!(a, b, "{file} differs between runs");
            }
        }
    }

    #[test]
    fn test_builtin_lesson_names() {
        let dir = tempfile::tempdir().unwrap();
        let summary =
            generate(&builtin::curriculum().unwrap(), MissingPolicy::Strict, dir.path()).unwrap();

        assert_eq!(summary.lessons.len(), 8);
        assert_eq!(summary.lessons[4].name, "3_pseudo");
        assert_eq!(summary.lessons[4].entries, 60);
        // single keys + pseudo table
        assert_eq!(summary.lessons[7].name, "4_multi_pseudo_review");
        assert_eq!(summary.lessons[7].entries, 94);
    }
}
