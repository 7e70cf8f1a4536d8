use rand::Rng;

use crate::{
    error::{LifeError, Result},
    grid::Grid,
};

/// Percent chance, 1 to 100, that a freshly seeded cell starts alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Density(u8);

impl Density {
    pub fn new(percent: u8) -> Result<Self> {
        if (1..=100).contains(&percent) {
            Ok(Density(percent))
        } else {
            Err(LifeError::InvalidConfiguration(format!(
                "density must be between 1 and 100, got {percent}"
            )))
        }
    }

    #[inline]
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Rolls a hundred-sided die; the cell lives when the roll is at most the density.
    #[inline]
    pub fn roll<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        rng.gen_range(1..=100u8) <= self.0
    }
}

/// A generation-0 grid with each cell independently alive with probability `density`.
pub fn random_grid<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    density: Density,
    rng: &mut R,
) -> Result<Grid> {
    Grid::from_fn(width, height, |_, _| density.roll(&mut *rng))
}
