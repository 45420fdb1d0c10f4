use crate::grid::{Direction, Grid};

/// A word position in the grid. Slots are compared and hashed structurally
/// so they can key the domain and assignment maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Slot {
    pub start_row: usize,
    pub start_col: usize,
    pub length: usize,
    pub direction: Direction,
}

impl Slot {
    /// Grid coordinates of the cell holding character `index` of this
    /// slot's word.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.start_row, self.start_col + index),
            Direction::Down => (self.start_row + index, self.start_col),
        }
    }
}

/// Scan rows, then columns, for maximal runs of open cells. Runs of a
/// single cell belong to the crossing word only and do not become slots.
pub(crate) fn parse_slots(grid: &Grid) -> Vec<Slot> {
    let mut result = vec![];

    for row in 0..grid.height() {
        let mut run_start = None;
        let mut length = 0;
        for col in 0..grid.width() {
            if grid.is_open(row, col) {
                if run_start.is_none() {
                    run_start = Some(col);
                }
                length += 1;
            } else {
                if let Some(start_col) = run_start {
                    if length > 1 {
                        result.push(Slot {
                            start_row: row,
                            start_col,
                            length,
                            direction: Direction::Across,
                        });
                    }
                }
                run_start = None;
                length = 0;
            }
        }
        if let Some(start_col) = run_start {
            if length > 1 {
                result.push(Slot {
                    start_row: row,
                    start_col,
                    length,
                    direction: Direction::Across,
                });
            }
        }
    }

    for col in 0..grid.width() {
        let mut run_start = None;
        let mut length = 0;
        for row in 0..grid.height() {
            if grid.is_open(row, col) {
                if run_start.is_none() {
                    run_start = Some(row);
                }
                length += 1;
            } else {
                if let Some(start_row) = run_start {
                    if length > 1 {
                        result.push(Slot {
                            start_row,
                            start_col: col,
                            length,
                            direction: Direction::Down,
                        });
                    }
                }
                run_start = None;
                length = 0;
            }
        }
        if let Some(start_row) = run_start {
            if length > 1 {
                result.push(Slot {
                    start_row,
                    start_col: col,
                    length,
                    direction: Direction::Down,
                });
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::{parse_slots, Slot};
    use crate::grid::{Direction, Grid};

    #[test]
    fn parse_slots_works() {
        let grid = Grid::parse(
            "
___
___
___
",
        )
        .unwrap();

        let result = parse_slots(&grid);

        assert_eq!(result.len(), 6);
        assert_eq!(
            result[0],
            Slot {
                start_row: 0,
                start_col: 0,
                length: 3,
                direction: Direction::Across,
            }
        );
        assert_eq!(
            result[1],
            Slot {
                start_row: 1,
                start_col: 0,
                length: 3,
                direction: Direction::Across,
            }
        );
        assert_eq!(
            result[3],
            Slot {
                start_row: 0,
                start_col: 0,
                length: 3,
                direction: Direction::Down,
            }
        );
    }

    #[test]
    fn parse_slots_splits_runs_at_blocked_cells() {
        let grid = Grid::parse("__#___").unwrap();

        let result = parse_slots(&grid);

        assert_eq!(
            result,
            vec![
                Slot {
                    start_row: 0,
                    start_col: 0,
                    length: 2,
                    direction: Direction::Across,
                },
                Slot {
                    start_row: 0,
                    start_col: 3,
                    length: 3,
                    direction: Direction::Across,
                },
            ]
        );
    }

    #[test]
    fn parse_slots_skips_single_cells() {
        let grid = Grid::parse("_#_").unwrap();

        assert!(parse_slots(&grid).is_empty());
    }

    #[test]
    fn parse_slots_finds_down_runs() {
        let grid = Grid::parse(
            "
_#
_#
##
_#
",
        )
        .unwrap();

        let result = parse_slots(&grid);

        assert_eq!(
            result,
            vec![Slot {
                start_row: 0,
                start_col: 0,
                length: 2,
                direction: Direction::Down,
            }]
        );
    }

    #[test]
    fn cell_follows_direction() {
        let across = Slot {
            start_row: 2,
            start_col: 1,
            length: 3,
            direction: Direction::Across,
        };
        let down = Slot {
            start_row: 2,
            start_col: 1,
            length: 3,
            direction: Direction::Down,
        };

        assert_eq!((2, 3), across.cell(2));
        assert_eq!((4, 1), down.cell(2));
    }
}
