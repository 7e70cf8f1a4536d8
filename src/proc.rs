use std::{io, thread, time::Duration};

use log::{debug, trace};

use crate::{error::Result, grid::Grid, rule};

/// Receives every generation the runner produces, generation 0 included.
///
/// Implementors get a shared borrow and cannot touch the runner's grid.
pub trait Observer {
    fn on_generation(&mut self, grid: &Grid) -> io::Result<()>;
}

impl<F> Observer for F
where
    F: FnMut(&Grid) -> io::Result<()>,
{
    fn on_generation(&mut self, grid: &Grid) -> io::Result<()> {
        self(grid)
    }
}

/// Computes the next generation of `current` into a fresh grid.
///
/// Every cell is derived from `current` alone, which is never written to.
pub fn advance(current: &Grid) -> Grid {
    let mut next = current.successor();
    current.for_each_cell(|row, column| {
        let alive = rule::next_state(current.cell(row, column), current.neighbors(row, column));
        next.put(row, column, alive);
    });
    next
}

/// Owns the current grid and drives it forward one generation at a time.
pub struct Runner {
    grid: Grid,
    delay: Duration,
}

impl Runner {
    #[inline]
    pub fn new(grid: Grid) -> Self {
        Runner {
            grid,
            delay: Duration::ZERO,
        }
    }

    /// Pause taken before each advancement. Zero disables it.
    #[inline]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Replaces the held grid with its successor.
    pub fn step(&mut self) {
        self.grid = advance(&self.grid);
        trace!(
            "generation {}: {} alive",
            self.grid.generation(),
            self.grid.population()
        );
    }

    /// Notifies `observer` about the current grid, then advances `generations`
    /// times, notifying after each step.
    ///
    /// Without an observer the run is headless. An observer error stops the
    /// run and is returned as is.
    pub fn run(
        &mut self,
        generations: u64,
        mut observer: Option<&mut dyn Observer>,
    ) -> Result<&Grid> {
        debug!(
            "running {generations} generations from generation {} ({}x{}, delay {:?})",
            self.grid.generation(),
            self.grid.width(),
            self.grid.height(),
            self.delay
        );

        if let Some(o) = &mut observer {
            o.on_generation(&self.grid)?;
        }

        for _ in 0..generations {
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }

            self.step();

            if let Some(o) = &mut observer {
                o.on_generation(&self.grid)?;
            }
        }

        Ok(&self.grid)
    }
}
