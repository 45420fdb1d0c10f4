use std::fmt;

use crate::puzzle::Puzzle;
use crate::solver::Assignment;

/// Place every assigned word into a height x width array of letters,
/// following each slot's orientation from its starting cell.
pub fn letter_grid(puzzle: &Puzzle, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let grid = puzzle.grid();
    let mut letters = vec![vec![None; grid.width()]; grid.height()];

    for (slot, word) in assignment.iter() {
        for (index, letter) in word.bytes().take(slot.length).enumerate() {
            let (row, col) = slot.cell(index);
            letters[row][col] = Some(letter as char);
        }
    }

    letters
}

/// Text rendering of an assignment laid over its grid.
pub struct Rendered<'a> {
    puzzle: &'a Puzzle,
    assignment: &'a Assignment,
}

impl<'a> Rendered<'a> {
    pub fn new(puzzle: &'a Puzzle, assignment: &'a Assignment) -> Rendered<'a> {
        Rendered { puzzle, assignment }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = letter_grid(self.puzzle, self.assignment);
        let grid = self.puzzle.grid();

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                if grid.is_open(row, col) {
                    write!(f, "{}", letters[row][col].unwrap_or(' '))?;
                } else {
                    write!(f, "█")?;
                }
            }
            if row != grid.height() - 1 {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}
