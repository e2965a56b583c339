//! **mazes** generates perfect mazes with a randomized depth first search and draws them
//! onto any canvas style drawing surface.

pub mod cells;
pub mod config;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod renderers;
pub mod surfaces;
pub mod units;

use crate::config::MazeConfig;
use crate::generators::RandomSource;
use crate::grid::Grid;
use crate::renderers::DrawingSurface;

/// Throw away whatever was drawn before, generate a new maze and draw it.
///
/// The returned grid is the one now on the surface.
pub fn regenerate<R, S>(config: &MazeConfig, rng: &mut R, surface: &mut S) -> Grid
    where R: RandomSource + ?Sized,
          S: DrawingSurface + ?Sized
{
    let grid = generators::recursive_backtracker(config.dimensions(), rng);
    renderers::render(&grid, config, surface);
    grid
}
