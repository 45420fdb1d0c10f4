use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::order::{conflict_count, SlotScore};
use crate::parse::Slot;
use crate::puzzle::Puzzle;
use crate::solver::cache::ConflictCache;

mod cache;

pub type Assignment = FxHashMap<Slot, String>;

/// Fills a puzzle by constraint propagation and backtracking search. Owns
/// the mutable per-slot domains; the puzzle itself is read-only.
pub struct Solver<'p> {
    puzzle: &'p Puzzle,
    domains: FxHashMap<Slot, FxHashSet<String>>,
    conflict_cache: ConflictCache,
    nodes: usize,
}

impl<'p> Solver<'p> {
    /// Every slot starts with its own copy of the full vocabulary.
    pub fn new(puzzle: &'p Puzzle) -> Solver<'p> {
        let domains = puzzle
            .slots()
            .iter()
            .map(|slot| (*slot, puzzle.words().iter().cloned().collect()))
            .collect();

        Solver {
            puzzle,
            domains,
            conflict_cache: ConflictCache::new(),
            nodes: 0,
        }
    }

    /// Enforce node and arc consistency, then search. Returns the first
    /// complete consistent assignment found, or None if none exists.
    pub fn solve(&mut self) -> Option<Assignment> {
        self.enforce_node_consistency();
        if self.domains.values().any(|domain| domain.is_empty()) {
            return None;
        }
        if !self.ac3(None) {
            return None;
        }

        self.nodes = 0;
        let mut assignment = Assignment::default();
        self.backtrack(&mut assignment)
    }

    /// Drop every word whose length does not match its slot.
    pub fn enforce_node_consistency(&mut self) {
        for (slot, domain) in self.domains.iter_mut() {
            domain.retain(|word| word.len() == slot.length);
        }
        self.conflict_cache.reset();
    }

    /// Make `x` arc consistent with `y`: remove from `x`'s domain every
    /// word with no counterpart in `y`'s domain agreeing at the shared
    /// cell. Returns whether `x`'s domain changed. `y`'s domain is never
    /// touched.
    pub fn revise(&mut self, x: &Slot, y: &Slot) -> bool {
        let (i, j) = match self.puzzle.overlap(x, y) {
            Some(offsets) => offsets,
            None => return false,
        };

        let supported: FxHashSet<u8> = self.domains[y]
            .iter()
            .filter_map(|word| word.as_bytes().get(j).copied())
            .collect();

        let domain = self
            .domains
            .get_mut(x)
            .expect("slot is not part of this puzzle");
        let before = domain.len();
        domain.retain(|word| {
            word.as_bytes()
                .get(i)
                .map_or(false, |letter| supported.contains(letter))
        });

        let revised = domain.len() != before;
        if revised {
            self.conflict_cache.reset();
        }
        revised
    }

    /// Worklist propagation to a pairwise arc-consistent fixpoint. `arcs`
    /// defaults to every ordered slot pair with an overlap. Returns false
    /// as soon as a domain is revised down to empty.
    pub fn ac3(&mut self, arcs: Option<VecDeque<(Slot, Slot)>>) -> bool {
        let mut queue = arcs.unwrap_or_else(|| self.puzzle.arcs());

        while let Some((x, y)) = queue.pop_front() {
            if self.revise(&x, &y) {
                if self.domains[&x].is_empty() {
                    return false;
                }
                // narrowing x may break support established for its neighbors
                for z in self.puzzle.neighbors(&x) {
                    if *z != x {
                        queue.push_back((*z, x));
                    }
                }
            }
        }

        true
    }

    /// Is the (possibly partial) assignment structurally valid? Checks
    /// word lengths and letter agreement on every assigned crossing.
    /// Duplicate words across slots are allowed.
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        for (slot, word) in assignment.iter() {
            if word.len() != slot.length {
                return false;
            }
        }

        for (slot, word) in assignment.iter() {
            for neighbor in self.puzzle.neighbors(slot) {
                if let Some(other) = assignment.get(neighbor) {
                    let (i, j) = self
                        .puzzle
                        .overlap(slot, neighbor)
                        .expect("neighbors always overlap");
                    if word.as_bytes()[i] != other.as_bytes()[j] {
                        return false;
                    }
                }
            }
        }

        true
    }

    pub fn assignment_complete(&self, assignment: &Assignment) -> bool {
        self.domains.keys().all(|slot| assignment.contains_key(slot))
    }

    /// Least-constraining-value ordering: candidates ascend by the number
    /// of options they rule out across unassigned neighbors. Ties keep the
    /// stored domain order.
    pub fn order_domain_values(&mut self, var: &Slot, assignment: &Assignment) -> Vec<String> {
        let Solver {
            puzzle,
            domains,
            conflict_cache,
            ..
        } = self;

        let unassigned: Vec<Slot> = puzzle
            .neighbors(var)
            .iter()
            .filter(|neighbor| !assignment.contains_key(*neighbor))
            .copied()
            .collect();

        let candidates: Vec<String> = domains[var].iter().cloned().collect();
        let mut scored: Vec<(usize, String)> = candidates
            .into_iter()
            .map(|word| {
                let ruled_out = unassigned
                    .iter()
                    .map(|neighbor| {
                        let (i, j) = puzzle
                            .overlap(var, neighbor)
                            .expect("neighbors always overlap");
                        conflict_cache.conflicts(var, &word, neighbor, || {
                            conflict_count(&word, i, &domains[neighbor], j)
                        })
                    })
                    .sum();
                (ruled_out, word)
            })
            .collect();

        scored.sort_by_key(|(ruled_out, _)| *ruled_out);
        scored.into_iter().map(|(_, word)| word).collect()
    }

    /// Minimum-remaining-values selection, ties broken by highest degree,
    /// then by domain iteration order. None once every slot is assigned.
    pub fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<Slot> {
        self.domains
            .iter()
            .filter(|&(slot, _)| !assignment.contains_key(slot))
            .min_by_key(|&(slot, domain)| {
                SlotScore::new(domain.len(), self.puzzle.neighbors(slot).len())
            })
            .map(|(slot, _)| *slot)
    }

    /// Depth-first search with chronological backtracking. The assignment
    /// is extended in place and rolled back on every failed branch.
    pub fn backtrack(&mut self, assignment: &mut Assignment) -> Option<Assignment> {
        self.nodes += 1;
        if self.nodes % 10_000 == 0 {
            println!("Evaluated {} candidates", self.nodes);
        }

        if !self.consistent(assignment) {
            return None;
        }
        if self.assignment_complete(assignment) {
            return Some(assignment.clone());
        }

        let var = match self.select_unassigned_variable(assignment) {
            Some(var) => var,
            None => return None,
        };

        for word in self.order_domain_values(&var, assignment) {
            assignment.insert(var, word);
            if let Some(solution) = self.backtrack(assignment) {
                return Some(solution);
            }
            assignment.remove(&var);
        }

        None
    }
}
