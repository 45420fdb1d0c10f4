use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::grid::Grid;
use crate::parse::{parse_slots, Slot};

/// Immutable puzzle geometry plus the candidate vocabulary. Overlaps are
/// stored for both orderings of a slot pair; two distinct slots share at
/// most one cell.
pub struct Puzzle {
    grid: Grid,
    words: Vec<String>,
    slots: Vec<Slot>,
    overlaps: FxHashMap<(Slot, Slot), (usize, usize)>,
    neighbors: FxHashMap<Slot, Vec<Slot>>,
}

impl Puzzle {
    pub fn new(grid: Grid, words: Vec<String>) -> Puzzle {
        let slots = parse_slots(&grid);

        let mut overlaps = FxHashMap::default();
        let mut neighbors: FxHashMap<Slot, Vec<Slot>> =
            slots.iter().map(|slot| (*slot, Vec::new())).collect();

        for a in 0..slots.len() {
            for b in (a + 1)..slots.len() {
                if let Some((i, j)) = crossing(&slots[a], &slots[b]) {
                    overlaps.insert((slots[a], slots[b]), (i, j));
                    overlaps.insert((slots[b], slots[a]), (j, i));
                    neighbors.get_mut(&slots[a]).unwrap().push(slots[b]);
                    neighbors.get_mut(&slots[b]).unwrap().push(slots[a]);
                }
            }
        }

        Puzzle {
            grid,
            words,
            slots,
            overlaps,
            neighbors,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Shared-cell offsets for an ordered pair: character `i` of `x`'s word
    /// must equal character `j` of `y`'s word.
    pub fn overlap(&self, x: &Slot, y: &Slot) -> Option<(usize, usize)> {
        self.overlaps.get(&(*x, *y)).copied()
    }

    /// Every slot sharing a cell with `slot`.
    pub fn neighbors(&self, slot: &Slot) -> &[Slot] {
        self.neighbors.get(slot).map_or(&[], Vec::as_slice)
    }

    /// All ordered slot pairs with a defined overlap.
    pub fn arcs(&self) -> VecDeque<(Slot, Slot)> {
        let mut arcs = VecDeque::new();
        for x in &self.slots {
            for y in self.neighbors(x) {
                arcs.push_back((*x, *y));
            }
        }
        arcs
    }
}

fn crossing(a: &Slot, b: &Slot) -> Option<(usize, usize)> {
    for i in 0..a.length {
        for j in 0..b.length {
            if a.cell(i) == b.cell(j) {
                return Some((i, j));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::Puzzle;
    use crate::grid::{Direction, Grid};
    use crate::parse::Slot;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|word| String::from(*word)).collect()
    }

    fn across(start_row: usize, start_col: usize, length: usize) -> Slot {
        Slot {
            start_row,
            start_col,
            length,
            direction: Direction::Across,
        }
    }

    fn down(start_row: usize, start_col: usize, length: usize) -> Slot {
        Slot {
            start_row,
            start_col,
            length,
            direction: Direction::Down,
        }
    }

    #[test]
    fn overlap_offsets_depend_on_ordering() {
        let grid = Grid::parse(
            "
___
#_#
#_#
",
        )
        .unwrap();
        let puzzle = Puzzle::new(grid, words(&["CAT"]));

        let a = across(0, 0, 3);
        let d = down(0, 1, 3);

        assert_eq!(Some((1, 0)), puzzle.overlap(&a, &d));
        assert_eq!(Some((0, 1)), puzzle.overlap(&d, &a));
    }

    #[test]
    fn overlap_is_none_for_disjoint_slots() {
        let grid = Grid::parse(
            "
___#
####
____
",
        )
        .unwrap();
        let puzzle = Puzzle::new(grid, words(&[]));

        let top = across(0, 0, 3);
        let bottom = across(2, 0, 4);

        assert_eq!(None, puzzle.overlap(&top, &bottom));
        assert_eq!(None, puzzle.overlap(&top, &top));
        assert!(puzzle.neighbors(&top).is_empty());
    }

    #[test]
    fn neighbors_works() {
        let grid = Grid::parse(
            "
___
#_#
___
",
        )
        .unwrap();
        let puzzle = Puzzle::new(grid, words(&[]));

        let middle = down(0, 1, 3);
        let top = across(0, 0, 3);
        let bottom = across(2, 0, 3);

        assert_eq!(2, puzzle.neighbors(&middle).len());
        assert_eq!(vec![middle], puzzle.neighbors(&top).to_vec());
        assert_eq!(vec![middle], puzzle.neighbors(&bottom).to_vec());
    }

    #[test]
    fn arcs_lists_both_orderings() {
        let grid = Grid::parse(
            "
___
#_#
#_#
",
        )
        .unwrap();
        let puzzle = Puzzle::new(grid, words(&[]));

        let arcs = puzzle.arcs();

        assert_eq!(2, arcs.len());
        let a = across(0, 0, 3);
        let d = down(0, 1, 3);
        assert!(arcs.contains(&(a, d)));
        assert!(arcs.contains(&(d, a)));
    }
}
