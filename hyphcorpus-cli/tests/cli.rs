use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const BOOK: &str = "Die Silbentrennung ist schwierig. Die Silbentrennung braucht Muster, \
und Muster brauchen Wörterbücher. Wörterbücher sind dick; Wörterbücher sind teuer.\n";

fn write_input(dir: &Path) -> PathBuf {
    let path = dir.join("buch.txt");
    fs::write(&path, BOOK).unwrap();
    path
}

fn data_lines(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

#[test]
fn generates_corpus_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("corpus.txt");

    let mut cmd = cargo_bin_cmd!("hyphcorpus");
    cmd.arg(&input)
        .arg(&output)
        .arg("--max-words")
        .arg("3")
        .arg("--quiet");
    cmd.assert().success().stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("# Hyphenation Test Data\n# Source: buch.txt\n# Language: de_DE\n"));
    assert!(written.contains("# Total words: 3\n"));

    let lines = data_lines(&written);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Wörterbücher|"));
    assert!(lines[0].ends_with("|3"));
    assert!(lines[1].starts_with("Muster|"));
    assert!(lines[2].starts_with("Silbentrennung|"));

    for line in lines {
        let fields: Vec<&str> = line.split('|').collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1].replace('=', ""), fields[0]);
    }
}

#[test]
fn prints_statistics_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("corpus.txt");

    let mut cmd = cargo_bin_cmd!("hyphcorpus");
    cmd.arg(&input).arg(&output);
    cmd.assert().success().stdout(
        predicate::str::contains("=== Statistics ===")
            .and(predicate::str::contains("Total unique words extracted: 12"))
            .and(predicate::str::contains("(appears 3x)")),
    );
}

#[test]
fn unsupported_language_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("corpus.txt");

    let mut cmd = cargo_bin_cmd!("hyphcorpus");
    cmd.arg(&input).arg(&output).arg("--language").arg("xx_YY");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'xx_YY'"));

    assert!(!output.exists());
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("corpus.txt");

    let mut cmd = cargo_bin_cmd!("hyphcorpus");
    cmd.arg(dir.path().join("nope.txt")).arg(&output);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: Input error"));

    assert!(!output.exists());
}

#[test]
fn config_file_sets_defaults_and_flags_win() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("corpus.txt");
    let config = dir.path().join("settings.toml");
    fs::write(
        &config,
        "[hyphenation]\nmin_prefix = 3\n\n[selection]\nmin_length = 12\nmax_words = 0\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("hyphcorpus");
    cmd.arg(&input)
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .arg("--min-suffix")
        .arg("4")
        .arg("-q");
    cmd.assert().success();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("# Min prefix: 3\n"));
    assert!(written.contains("# Min suffix: 4\n"));

    let words: Vec<&str> = data_lines(&written)
        .iter()
        .map(|line| line.split('|').next().unwrap())
        .collect();
    assert_eq!(words, vec!["Wörterbücher", "Silbentrennung"]);
}

#[test]
fn lists_languages() {
    let mut cmd = cargo_bin_cmd!("hyphcorpus");
    cmd.arg("--list-languages");
    cmd.assert().success().stdout(
        predicate::str::contains("Languages supported by 'patterns' (Knuth-Liang")
            .and(predicate::str::contains("  de_DE\n"))
            .and(predicate::str::contains("  ru_RU\n")),
    );
}

#[test]
fn unknown_backend_is_reported() {
    let mut cmd = cargo_bin_cmd!("hyphcorpus");
    cmd.arg("--list-languages").arg("--backend").arg("pyphen");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("backend 'pyphen' not found"));
}
