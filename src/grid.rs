use std::fmt;

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use smallvec::SmallVec;

use crate::cells::{Cell, CompassPrimary, CoordinateSmallVec, GridCoordinate};
use crate::grid_dimensions::RectGridDimensions;
use crate::grid_iterators::CellIter;
use crate::units::{ColumnsCount, EdgesCount, RowsCount};


/// A rows × columns block of cells stored row major.
///
/// Cells never refer to each other, adjacency is always worked out from coordinates.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    dimensions: RectGridDimensions,
    cells: Vec<Cell>,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum WallRemovalError {
    InvalidGridCoordinate,
    NotAdjacent,
}

impl fmt::Display for WallRemovalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            WallRemovalError::InvalidGridCoordinate => write!(f, "coordinate outside of the grid"),
            WallRemovalError::NotAdjacent => write!(f, "cells do not share a wall"),
        }
    }
}

impl std::error::Error for WallRemovalError {}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: rows: {:?}, columns: {:?}, passages: {:?}",
               self.rows(), self.columns(), self.passages_count())
    }
}

impl Grid {
    /// Every cell starts with all four walls up and unvisited.
    pub fn new(dimensions: RectGridDimensions) -> Grid {
        Grid {
            dimensions,
            cells: vec![Cell::default(); dimensions.size().0],
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &RectGridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.dimensions.rows()
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.dimensions.columns()
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        self.dimensions.is_valid_coordinate(coord)
    }

    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        self.dimensions.grid_coordinate_to_index(coord)
    }

    pub fn cell(&self, coord: GridCoordinate) -> Option<&Cell> {
        self.grid_coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    pub(crate) fn cell_mut(&mut self, coord: GridCoordinate) -> Option<&mut Cell> {
        match self.grid_coordinate_to_index(coord) {
            Some(index) => Some(&mut self.cells[index]),
            None => None,
        }
    }

    pub fn is_visited(&self, coord: GridCoordinate) -> bool {
        self.cell(coord).map_or(false, Cell::is_visited)
    }

    /// Returns false if the coordinate is outside the grid.
    pub fn mark_visited(&mut self, coord: GridCoordinate) -> bool {
        if let Some(cell) = self.cell_mut(coord) {
            cell.mark_visited();
            true
        } else {
            false
        }
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<GridCoordinate> {
        coord.offset(direction).filter(|neighbour| self.is_valid_coordinate(*neighbour))
    }

    /// Cells up, right, down and left of a cell (in that order) that are inside the grid,
    /// whether or not a wall separates them.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    /// The subset of `neighbours` not yet reached by maze generation.
    pub fn unvisited_neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .filter(|neighbour| !self.is_visited(*neighbour))
            .collect()
    }

    /// Knock down the wall shared by two adjacent cells, clearing it on both sides.
    pub fn remove_wall_between(&mut self,
                               a: GridCoordinate,
                               b: GridCoordinate)
                               -> Result<(), WallRemovalError> {
        if !self.is_valid_coordinate(a) || !self.is_valid_coordinate(b) {
            return Err(WallRemovalError::InvalidGridCoordinate);
        }
        let dir = a.direction_to(b).ok_or(WallRemovalError::NotAdjacent)?;

        if let Some(cell) = self.cell_mut(a) {
            cell.remove_wall(dir);
        }
        if let Some(cell) = self.cell_mut(b) {
            cell.remove_wall(dir.opposite());
        }
        Ok(())
    }

    /// Is there a passage from `coord` to its neighbour in `direction`?
    /// Walls on the outer boundary never lead anywhere, so this is false for them even when
    /// they are removed.
    pub fn is_open(&self, coord: GridCoordinate, direction: CompassPrimary) -> bool {
        match (self.cell(coord), self.neighbour_at_direction(coord, direction)) {
            (Some(cell), Some(neighbour_coord)) => {
                let neighbour_open = self.cell(neighbour_coord)
                    .map_or(false, |n| !n.has_wall(direction.opposite()));
                !cell.has_wall(direction) && neighbour_open
            }
            _ => false,
        }
    }

    /// Every carved passage between two cells, each listed once as (west/north cell, east/south cell).
    pub fn passages(&self) -> impl Iterator<Item = (GridCoordinate, GridCoordinate)> + '_ {
        self.iter().flat_map(move |coord| {
            let east_and_south: SmallVec<[(GridCoordinate, GridCoordinate); 2]> =
                [CompassPrimary::East, CompassPrimary::South]
                    .iter()
                    .filter(|dir| self.is_open(coord, **dir))
                    .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
                    .map(|neighbour| (coord, neighbour))
                    .collect();
            east_and_south.into_iter()
        })
    }

    #[inline]
    pub fn passages_count(&self) -> EdgesCount {
        EdgesCount(self.passages().count())
    }

    /// The maze as an undirected graph, one node per cell (in row major order) and one edge
    /// per passage.
    pub fn passage_graph(&self) -> UnGraph<GridCoordinate, ()> {
        let mut graph = UnGraph::with_capacity(self.size(), self.dimensions.internal_walls().0);
        for coord in self.iter() {
            let _ = graph.add_node(coord);
        }
        for (a, b) in self.passages() {
            if let (Some(a_index), Some(b_index)) = (self.grid_coordinate_to_index(a),
                                                     self.grid_coordinate_to_index(b)) {
                let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
            }
        }
        graph
    }

    /// A perfect maze links every cell with exactly one route between any two of them:
    /// the passages form a single connected component with one fewer edge than cells.
    pub fn is_perfect(&self) -> bool {
        let graph = self.passage_graph();
        connected_components(&graph) == 1 &&
        graph.edge_count() == self.dimensions.spanning_tree_edges().0
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.dimensions)
    }

    /// Cells alongside their coordinates, row major.
    pub fn iter_cells(&self) -> impl Iterator<Item = (GridCoordinate, &Cell)> + '_ {
        self.iter().zip(self.cells.iter())
    }
}
