use smallvec::SmallVec;

/// Position of a cell in a rectangular grid. `row` grows downwards, `col` grows rightwards.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub col: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate { row, col }
    }

    /// The coordinate one step away in `dir`.
    /// Returns None if that would go below zero; the upper bounds are the grid's business.
    pub fn offset(self, dir: CompassPrimary) -> Option<GridCoordinate> {
        let GridCoordinate { row, col } = self;
        match dir {
            CompassPrimary::North => {
                if row > 0 {
                    Some(GridCoordinate { row: row - 1, col })
                } else {
                    None
                }
            }
            CompassPrimary::East => Some(GridCoordinate { row, col: col + 1 }),
            CompassPrimary::South => Some(GridCoordinate { row: row + 1, col }),
            CompassPrimary::West => {
                if col > 0 {
                    Some(GridCoordinate { row, col: col - 1 })
                } else {
                    None
                }
            }
        }
    }

    /// Direction from `self` to an orthogonally adjacent `other`, None if they are not adjacent.
    pub fn direction_to(self, other: GridCoordinate) -> Option<CompassPrimary> {
        CompassPrimary::ALL
            .iter()
            .cloned()
            .find(|dir| self.offset(*dir) == Some(other))
    }
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

/// The four sides of a square cell, declared in wall index order: top, right, bottom, left.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::East,
                                          CompassPrimary::South,
                                          CompassPrimary::West];

    #[inline]
    pub fn wall_index(self) -> usize {
        match self {
            CompassPrimary::North => 0,
            CompassPrimary::East => 1,
            CompassPrimary::South => 2,
            CompassPrimary::West => 3,
        }
    }

    #[inline]
    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
        }
    }
}

/// One unit of the grid: four boundary walls plus the generation bookkeeping flag.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    walls: [bool; 4],
    visited: bool,
}

impl Default for Cell {
    fn default() -> Cell {
        Cell {
            walls: [true; 4],
            visited: false,
        }
    }
}

impl Cell {
    /// Wall flags in [top, right, bottom, left] order, `true` meaning the wall stands.
    #[inline]
    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    #[inline]
    pub fn has_wall(&self, dir: CompassPrimary) -> bool {
        self.walls[dir.wall_index()]
    }

    #[inline]
    pub fn remove_wall(&mut self, dir: CompassPrimary) {
        self.walls[dir.wall_index()] = false;
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&present| present).count()
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    #[inline]
    pub fn mark_visited(&mut self) {
        self.visited = true;
    }
}
