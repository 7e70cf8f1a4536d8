pub mod config;
pub mod draw;
pub mod error;
pub mod grid;
pub mod proc;
pub mod rule;
pub mod seed;

pub use error::{LifeError, Result};
pub use grid::Grid;
pub use proc::{advance, Observer, Runner};
