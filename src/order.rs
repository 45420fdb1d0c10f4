use core::cmp::Ordering;

use rustc_hash::FxHashSet;

/// Ranking key for variable selection: minimum remaining values first,
/// ties broken by degree.
#[derive(Eq, PartialEq, Debug)]
pub(crate) struct SlotScore {
    remaining: usize,
    degree: usize,
}

impl SlotScore {
    pub(crate) fn new(remaining: usize, degree: usize) -> SlotScore {
        SlotScore { remaining, degree }
    }
}

impl PartialOrd for SlotScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlotScore {
    fn cmp(&self, other: &Self) -> Ordering {
        // fewer remaining candidates wins
        if self.remaining != other.remaining {
            return self.remaining.cmp(&other.remaining);
        }
        // more neighbors wins
        other.degree.cmp(&self.degree)
    }
}

/// How many words of `neighbor_domain` disagree with `word` at the shared
/// cell, where `word` contributes character `i` and the neighbor
/// contributes character `j`.
pub(crate) fn conflict_count(
    word: &str,
    i: usize,
    neighbor_domain: &FxHashSet<String>,
    j: usize,
) -> usize {
    let letter = match word.as_bytes().get(i) {
        Some(letter) => *letter,
        None => return neighbor_domain.len(),
    };

    neighbor_domain
        .iter()
        .filter(|other| other.as_bytes().get(j) != Some(&letter))
        .count()
}
