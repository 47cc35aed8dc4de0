//! Steno Lessons - pseudo-steno lesson file generator
//!
//! Single-run, stateless batch tool. Walks the curriculum's introduction
//! groups and writes a `.les`/`.chd` pair per group plus a cumulative
//! review pair, then lints the mapping table for gaps.

mod curriculum;
mod lessons;

use anyhow::{Context, Result};
use clap::Parser;
use curriculum::{builtin, Curriculum};
use lessons::{generate, lint, verify, MissingPolicy};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "steno-lessons")]
#[command(about = "Generate pseudo-steno lesson and chord files")]
struct Args {
    /// Directory to write lesson files into
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Curriculum JSON file (defaults to the built-in track)
    #[arg(short, long)]
    curriculum: Option<PathBuf>,

    /// Fail on the first chord missing from the mapping table
    #[arg(long)]
    strict: bool,

    /// Write the active curriculum as JSON to this path and exit
    #[arg(long, value_name = "FILE")]
    dump_curriculum: Option<PathBuf>,

    /// Read the generated lessons back and check word/chord pairing
    #[arg(long)]
    verify: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn init_tracing(debug: bool) -> Result<()> {
    let level = if debug { "debug" } else { "info" };
    let directive: tracing_subscriber::filter::Directive =
        format!("steno_lessons={level}").parse()?;
    // Logs go to stderr; stdout carries the lint lines
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn load_curriculum(path: Option<&PathBuf>) -> Result<Curriculum> {
    match path {
        Some(path) => Curriculum::load(path)
            .with_context(|| format!("loading curriculum from {}", path.display())),
        None => builtin::curriculum().context("building built-in curriculum"),
    }
}

/// What a run did
#[derive(Debug, PartialEq)]
enum Outcome {
    /// `--dump-curriculum`: the curriculum was written, no lessons
    Dumped(PathBuf),
    Generated {
        lessons: usize,
        missing: usize,
        /// Blank word lines found by `--verify`, if it ran
        blank_words: Option<usize>,
    },
}

fn run(args: &Args) -> Result<Outcome> {
    let curriculum = load_curriculum(args.curriculum.as_ref())?;
    tracing::debug!(
        mapping = curriculum.mapping.len(),
        groups = curriculum.groups.len(),
        "curriculum loaded"
    );

    if let Some(path) = &args.dump_curriculum {
        curriculum
            .save(path)
            .with_context(|| format!("writing curriculum to {}", path.display()))?;
        println!("📝 Curriculum written to {}", path.display());
        return Ok(Outcome::Dumped(path.clone()));
    }

    println!("⌨️  Steno Lessons v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "Groups: {} | Chords: {} | Output: {}",
        curriculum.groups.len(),
        curriculum.entry_count(),
        args.output.display()
    );

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating output directory {}", args.output.display()))?;

    let policy = if args.strict {
        MissingPolicy::Strict
    } else {
        MissingPolicy::Lenient
    };
    let summary = generate(&curriculum, policy, &args.output).context("generating lessons")?;

    if summary.unresolved > 0 {
        println!("⚠️  {} chords written without a pseudo-steno word", summary.unresolved);
    }

    let report = lint(&curriculum);
    if !report.is_clean() {
        for line in report.lines() {
            println!("{line}");
        }
    }

    let blank_words = if args.verify {
        let blank = verify(&args.output, &summary.lessons).context("verifying lessons")?;
        println!("✓ Verified {} lessons", summary.lessons.len());
        if blank > 0 {
            println!("⚠️  {blank} word lines are blank and will be skipped by the lesson player");
        }
        Some(blank)
    } else {
        None
    };

    println!(
        "\n✅ Wrote {} lesson pairs ({} chords checked, {} missing)",
        summary.lessons.len(),
        report.checked,
        report.missing.len()
    );

    Ok(Outcome::Generated {
        lessons: summary.lessons.len(),
        missing: report.missing.len(),
        blank_words,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug)?;
    run(&args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("steno-lessons").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_dump_curriculum_writes_no_lessons() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let dump = dir.path().join("curriculum.json");
        let args = args(&[
            "--output",
            out.to_str().unwrap(),
            "--dump-curriculum",
            dump.to_str().unwrap(),
        ]);

        assert_eq!(run(&args).unwrap(), Outcome::Dumped(dump.clone()));
        assert!(!out.exists());
        assert_eq!(
            Curriculum::load(&dump).unwrap(),
            builtin::curriculum().unwrap()
        );
    }

    #[test]
    fn test_verify_runs_after_generation() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("lessons");
        let args = args(&["-o", out.to_str().unwrap(), "--verify", "--strict"]);

        let outcome = run(&args).unwrap();
        assert_eq!(
            outcome,
            Outcome::Generated {
                lessons: 8,
                missing: 0,
                blank_words: Some(0),
            }
        );
        assert!(out.join("3_pseudo.les").exists());
    }

    #[test]
    fn test_verify_counts_blank_words_from_loaded_curriculum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.json");
        fs::write(
            &path,
            r#"{"mapping": [["S-", "S"]], "groups": [{"name": "mixed", "chords": ["S-", "ZZ"]}]}"#,
        )
        .unwrap();
        let out = dir.path().join("lessons");
        let args = args(&[
            "-o",
            out.to_str().unwrap(),
            "-c",
            path.to_str().unwrap(),
            "--verify",
        ]);

        // the blank word appears in both the group and its review
        assert_eq!(
            run(&args).unwrap(),
            Outcome::Generated {
                lessons: 2,
                missing: 1,
                blank_words: Some(2),
            }
        );
    }

    #[test]
    fn test_without_verify_skips_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(&["-o", dir.path().to_str().unwrap()]);

        match run(&args).unwrap() {
            Outcome::Generated { blank_words, .. } => assert_eq!(blank_words, None),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_escaping_group_name_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.json");
        fs::write(
            &path,
            r#"{"mapping": [], "groups": [{"name": "x/../../escaped", "chords": []}]}"#,
        )
        .unwrap();
        let out = dir.path().join("root").join("out");
        let args = args(&["-o", out.to_str().unwrap(), "-c", path.to_str().unwrap()]);

        assert!(run(&args).is_err());
        assert!(!dir.path().join("root").join("escaped.les").exists());
        assert!(!dir.path().join("escaped.les").exists());
    }
}
