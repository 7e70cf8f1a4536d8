use std::{
    fmt::{self, Display, Write},
    str::FromStr,
};

use crate::error::{LifeError, Result};

pub const ALIVE: char = '#';
pub const DEAD: char = '\'';

/// A fixed-size toroidal board of alive/dead cells plus the number of the
/// generation it holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    generation: u64,
}

impl Grid {
    /// An all-dead grid at generation 0.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidConfiguration(format!(
                "grid must be at least 1x1, got {width}x{height}"
            )));
        }

        let too_large = || {
            LifeError::InvalidConfiguration(format!(
                "grid of {width}x{height} cells is too large"
            ))
        };
        let len = width.checked_mul(height).ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, false);

        Ok(Grid {
            width,
            height,
            cells,
            generation: 0,
        })
    }

    /// Builds a grid by asking `f(row, column)` for every cell in row-major order.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut grid = Self::new(width, height)?;
        for row in 0..height {
            for column in 0..width {
                let i = grid.index(row, column);
                grid.cells[i] = f(row, column);
            }
        }
        Ok(grid)
    }

    /// Same shape as `self`, every cell dead, one generation further on.
    pub(crate) fn successor(&self) -> Self {
        let mut next = Grid {
            width: self.width,
            height: self.height,
            cells: vec![false; self.cells.len()],
            generation: self.generation,
        };
        next.advance_generation();
        next
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Bumps the generation counter. Cells are left untouched.
    #[inline]
    pub fn advance_generation(&mut self) {
        self.generation += 1;
    }

    pub fn get(&self, row: usize, column: usize) -> Result<bool> {
        self.check(row, column)?;
        Ok(self.cells[self.index(row, column)])
    }

    pub fn set(&mut self, row: usize, column: usize, value: bool) -> Result<()> {
        self.check(row, column)?;
        let i = self.index(row, column);
        self.cells[i] = value;
        Ok(())
    }

    /// Live cells among the eight surrounding positions, wrapping at every edge.
    ///
    /// Offsets are taken modulo the dimension, so on a grid one cell wide the
    /// left and right neighbors are the cell's own column.
    pub fn living_neighbor_count(&self, row: usize, column: usize) -> Result<u8> {
        self.check(row, column)?;
        Ok(self.neighbors(row, column))
    }

    /// Calls `visitor(row, column)` once per cell, row 0 first, columns left to right.
    pub fn for_each_cell<F>(&self, mut visitor: F)
    where
        F: FnMut(usize, usize),
    {
        for row in 0..self.height {
            for column in 0..self.width {
                visitor(row, column);
            }
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// Unchecked read for coordinates already known to be in range.
    #[inline]
    pub(crate) fn cell(&self, row: usize, column: usize) -> bool {
        self.cells[self.index(row, column)]
    }

    #[inline]
    pub(crate) fn put(&mut self, row: usize, column: usize, value: bool) {
        let i = self.index(row, column);
        self.cells[i] = value;
    }

    pub(crate) fn neighbors(&self, row: usize, column: usize) -> u8 {
        let (h, w) = (self.height as isize, self.width as isize);
        let mut count = 0;
        for dy in -1..=1isize {
            for dx in -1..=1isize {
                if dy == 0 && dx == 0 {
                    continue;
                }
                let r = (row as isize + dy).rem_euclid(h) as usize;
                let c = (column as isize + dx).rem_euclid(w) as usize;
                if self.cell(r, c) {
                    count += 1;
                }
            }
        }
        count
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> usize {
        row * self.width + column
    }

    fn check(&self, row: usize, column: usize) -> Result<()> {
        if row >= self.height || column >= self.width {
            Err(LifeError::OutOfRange {
                row,
                column,
                height: self.height,
                width: self.width,
            })
        } else {
            Ok(())
        }
    }
}

impl FromStr for Grid {
    type Err = LifeError;

    /// One line per row. `#`, `o`, `O`, `*`, `1` and `X` are alive; `.`, `'`,
    /// `0`, `-` and space are dead. Empty lines are skipped.
    fn from_str(s: &str) -> Result<Self> {
        let mut rows: Vec<Vec<bool>> = vec![];

        for line in s.lines() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let mut r = Vec::with_capacity(line.len());
            for c in line.chars() {
                let b = match c {
                    '#' | 'o' | 'O' | '*' | '1' | 'X' => true,
                    '.' | '\'' | '0' | '-' | ' ' => false,
                    _ => {
                        return Err(LifeError::InvalidConfiguration(format!(
                            "unexpected character {c:?} in pattern"
                        )))
                    }
                };
                r.push(b);
            }
            rows.push(r);
        }

        let width = rows.first().map_or(0, Vec::len);
        if !rows.iter().all(|r| r.len() == width) {
            return Err(LifeError::InvalidConfiguration(
                "all rows of a pattern must be the same length".into(),
            ));
        }

        Self::from_fn(width, rows.len(), |row, column| rows[row][column])
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                f.write_char('\n')?;
            }
            for column in 0..self.width {
                f.write_char(if self.cell(row, column) { ALIVE } else { DEAD })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Grid::new(0, 3),
            Err(LifeError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Grid::new(3, 0),
            Err(LifeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_huge_dimensions_rejected() {
        assert!(matches!(
            Grid::new(usize::MAX, 2),
            Err(LifeError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Grid::new(1 << 32, 1 << 32),
            Err(LifeError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Grid::new(usize::MAX, 1),
            Err(LifeError::InvalidConfiguration(_))
        ));
        assert!(Grid::from_fn(usize::MAX, 2, |_, _| true).is_err());
    }

    #[test]
    fn test_get_set() {
        let mut g = Grid::new(4, 3).unwrap();
        assert!(!g.get(2, 3).unwrap());
        g.set(2, 3, true).unwrap();
        assert!(g.get(2, 3).unwrap());
        assert!(g.get(2, 3).unwrap());
        assert_eq!(g.population(), 1);
    }

    #[test]
    fn test_out_of_range() {
        let mut g = Grid::new(4, 3).unwrap();
        assert!(matches!(
            g.get(3, 0),
            Err(LifeError::OutOfRange { row: 3, column: 0, height: 3, width: 4 })
        ));
        assert!(matches!(g.set(0, 4, true), Err(LifeError::OutOfRange { .. })));
        assert!(matches!(
            g.living_neighbor_count(5, 5),
            Err(LifeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_diagonal_wrap() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set(0, 0, true).unwrap();
        assert_eq!(g.living_neighbor_count(2, 2).unwrap(), 1);
        assert_eq!(g.living_neighbor_count(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_edge_wrap() {
        let g = grid(
            "#....\n\
             .....\n\
             .....\n\
             .....\n",
        );
        assert_eq!(g.living_neighbor_count(0, 4).unwrap(), 1);
        assert_eq!(g.living_neighbor_count(3, 0).unwrap(), 1);
        assert_eq!(g.living_neighbor_count(3, 4).unwrap(), 1);
        assert_eq!(g.living_neighbor_count(2, 2).unwrap(), 0);
    }

    #[test]
    fn test_tiny_grids_wrap_onto_themselves() {
        let g = grid("#");
        assert_eq!(g.living_neighbor_count(0, 0).unwrap(), 8);

        // Horizontal neighbors of a one-wide column are the column itself.
        let g = grid("#\n.\n.");
        assert_eq!(g.living_neighbor_count(0, 0).unwrap(), 2);
        assert_eq!(g.living_neighbor_count(1, 0).unwrap(), 3);
        assert_eq!(g.living_neighbor_count(2, 0).unwrap(), 3);
    }

    #[test]
    fn test_neighbor_count_bounds() {
        let g = Grid::from_fn(5, 4, |_, _| true).unwrap();
        g.for_each_cell(|row, column| {
            assert_eq!(g.living_neighbor_count(row, column).unwrap(), 8);
        });

        let g = Grid::from_fn(6, 5, |row, column| (row * 7 + column * 3) % 4 == 0).unwrap();
        g.for_each_cell(|row, column| {
            let n = g.living_neighbor_count(row, column).unwrap();
            assert!(n <= 8);
        });
    }

    #[test]
    fn test_self_not_counted() {
        let g = grid(
            ".....\n\
             .....\n\
             ..#..\n\
             .....\n\
             .....",
        );
        assert_eq!(g.living_neighbor_count(2, 2).unwrap(), 0);
        assert_eq!(g.living_neighbor_count(1, 1).unwrap(), 1);
    }

    #[test]
    fn test_row_major_order() {
        let g = Grid::new(3, 2).unwrap();
        let mut seen = vec![];
        g.for_each_cell(|row, column| seen.push((row, column)));
        assert_eq!(seen, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_generation_counter() {
        let mut g = grid("#.\n.#");
        assert_eq!(g.generation(), 0);
        g.advance_generation();
        g.advance_generation();
        assert_eq!(g.generation(), 2);
        assert_eq!(g.to_string(), "#'\n'#");
    }

    #[test]
    fn test_parse_and_display() {
        let g = grid("\n.#.\n#O*\n");
        assert_eq!((g.width(), g.height()), (3, 2));
        assert_eq!(g.population(), 4);
        assert_eq!(g.to_string(), "'#'\n###");
        assert_eq!(g.to_string().parse::<Grid>().unwrap(), g);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "##\n#".parse::<Grid>(),
            Err(LifeError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            "#?".parse::<Grid>(),
            Err(LifeError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            "\n\n".parse::<Grid>(),
            Err(LifeError::InvalidConfiguration(_))
        ));
    }
}
