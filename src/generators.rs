use log::{debug, trace};
use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::grid::Grid;
use crate::grid_dimensions::RectGridDimensions;


/// Where maze generation gets its randomness from.
///
/// Implementations return an index uniformly distributed over `0..upper`. `upper` is never zero.
pub trait RandomSource {
    fn index_below(&mut self, upper: usize) -> usize;
}

impl RandomSource for ThreadRng {
    fn index_below(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

impl RandomSource for StdRng {
    fn index_below(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// Adapts any `FnMut(upper) -> index` closure into a `RandomSource`.
pub struct FnSource<F: FnMut(usize) -> usize>(pub F);

impl<F: FnMut(usize) -> usize> RandomSource for FnSource<F> {
    fn index_below(&mut self, upper: usize) -> usize {
        (self.0)(upper)
    }
}

/// Replays a fixed list of choices, cycling back to the start when it runs out.
/// Each choice is reduced modulo the number of candidates so any list is usable.
#[derive(Debug, Clone)]
pub struct ScriptedChoices {
    choices: Vec<usize>,
    position: usize,
}

impl ScriptedChoices {
    pub fn new(choices: Vec<usize>) -> ScriptedChoices {
        ScriptedChoices {
            choices,
            position: 0,
        }
    }
}

impl RandomSource for ScriptedChoices {
    fn index_below(&mut self, upper: usize) -> usize {
        if self.choices.is_empty() {
            return 0;
        }
        let choice = self.choices[self.position % self.choices.len()];
        self.position += 1;
        choice % upper
    }
}

/// Randomized depth first search over a fully walled grid, one stack pop at a time.
///
/// The stack always holds the current carving path from the entrance cell: each entry is
/// adjacent to, and has a passage to, the entry below it. A cell with no unvisited neighbours
/// left is simply not pushed back, which is the backtrack.
pub struct BacktrackingCarver<'r, R: RandomSource + ?Sized> {
    grid: Grid,
    stack: Vec<GridCoordinate>,
    rng: &'r mut R,
    steps: usize,
    deepest_stack: usize,
}

impl<'r, R: RandomSource + ?Sized> BacktrackingCarver<'r, R> {
    pub fn new(dimensions: RectGridDimensions, rng: &'r mut R) -> BacktrackingCarver<'r, R> {
        let mut grid = Grid::new(dimensions);
        let start = dimensions.entrance();
        grid.mark_visited(start);

        BacktrackingCarver {
            grid,
            stack: vec![start],
            rng,
            steps: 0,
            deepest_stack: 1,
        }
    }

    /// Pop the top of the stack and either carve onwards from it or drop it.
    /// Returns false without doing anything once the stack is empty.
    pub fn step(&mut self) -> bool {
        let current = match self.stack.pop() {
            Some(coord) => coord,
            None => return false,
        };
        self.steps += 1;

        let candidates = self.grid.unvisited_neighbours(current);
        if candidates.is_empty() {
            trace!("backtrack from {:?}", current);
            return true;
        }

        // modulo keeps a misbehaving source in bounds
        let next = candidates[self.rng.index_below(candidates.len()) % candidates.len()];

        self.stack.push(current);
        let carved = self.grid.remove_wall_between(current, next);
        debug_assert_eq!(carved, Ok(()));
        self.grid.mark_visited(next);
        self.stack.push(next);

        if self.stack.len() > self.deepest_stack {
            self.deepest_stack = self.stack.len();
        }
        trace!("carve {:?} -> {:?}", current, next);
        true
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.stack.is_empty()
    }

    /// Bottom to top, the path currently being explored.
    #[inline]
    pub fn stack(&self) -> &[GridCoordinate] {
        &self.stack
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Stack pops performed so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Run any remaining steps, then open the entrance and exit.
    pub fn finish(mut self) -> Grid {
        while self.step() {}

        carve_entrance_and_exit(&mut self.grid);

        debug!("carved {}x{} maze: {} passages, {} steps, deepest stack {}",
               self.grid.rows().0,
               self.grid.columns().0,
               self.grid.passages_count().0,
               self.steps,
               self.deepest_stack);
        self.grid
    }
}

/// Generate a perfect maze with the recursive backtracker algorithm, randomness from `rng`.
///
/// Despite the name no recursion is involved, an explicit stack is used so very large
/// grids cannot overflow the call stack.
pub fn recursive_backtracker<R>(dimensions: RectGridDimensions, rng: &mut R) -> Grid
    where R: RandomSource + ?Sized
{
    BacktrackingCarver::new(dimensions, rng).finish()
}

/// Generate a fresh perfect maze using the thread local random number generator.
pub fn generate(dimensions: RectGridDimensions) -> Grid {
    let mut rng = rand::thread_rng();
    recursive_backtracker(dimensions, &mut rng)
}

/// Open the left wall of the top left cell and the right wall of the bottom right cell.
pub fn carve_entrance_and_exit(grid: &mut Grid) {
    let entrance = grid.dimensions().entrance();
    let exit = grid.dimensions().exit();

    if let Some(cell) = grid.cell_mut(entrance) {
        cell.remove_wall(CompassPrimary::West);
    }
    if let Some(cell) = grid.cell_mut(exit) {
        cell.remove_wall(CompassPrimary::East);
    }
}
