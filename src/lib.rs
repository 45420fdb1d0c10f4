use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;

pub mod grid;
mod order;
pub mod parse;
pub mod puzzle;
pub mod render;
pub mod solver;

pub use crate::grid::{Direction, Grid};
pub use crate::parse::Slot;
pub use crate::puzzle::Puzzle;
pub use crate::solver::{Assignment, Solver};

/// Solve a puzzle in one call. Returns the first complete consistent
/// assignment, or None when no assignment exists.
pub fn solve(puzzle: &Puzzle) -> Option<Assignment> {
    Solver::new(puzzle).solve()
}

/// Read a word list from disk. A file starting with `[` is parsed as a
/// JSON array of strings; anything else is treated as one word per line.
pub fn load_words(path: &Path) -> Result<Vec<String>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read word list {}: {}", path.display(), err))?;
    parse_word_list(&contents)
}

/// Normalize a raw word list: uppercase every entry, drop blanks, keep the
/// first occurrence of duplicates.
pub fn parse_word_list(contents: &str) -> Result<Vec<String>, String> {
    let raw: Vec<String> = if contents.trim_start().starts_with('[') {
        serde_json::from_str(contents)
            .map_err(|err| format!("Failed to parse JSON word list: {}", err))?
    } else {
        contents.lines().map(str::to_owned).collect()
    };

    let mut seen = FxHashSet::default();
    let mut words = Vec::with_capacity(raw.len());
    for word in raw {
        let word = word.trim().to_uppercase();
        if word.is_empty() {
            continue;
        }
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::parse_word_list;

    #[test]
    fn parse_word_list_handles_plain_lines() {
        let words = parse_word_list("cat\ndog\n\nant\n").unwrap();

        assert_eq!(
            vec![
                String::from("CAT"),
                String::from("DOG"),
                String::from("ANT")
            ],
            words
        );
    }

    #[test]
    fn parse_word_list_handles_json_arrays() {
        let words = parse_word_list(r#"["cat", "Dog"]"#).unwrap();

        assert_eq!(vec![String::from("CAT"), String::from("DOG")], words);
    }

    #[test]
    fn parse_word_list_deduplicates() {
        let words = parse_word_list("cat\nCAT\ndog\n").unwrap();

        assert_eq!(vec![String::from("CAT"), String::from("DOG")], words);
    }

    #[test]
    fn parse_word_list_rejects_bad_json() {
        assert!(parse_word_list("[1, 2]").is_err());
    }
}
