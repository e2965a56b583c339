use crate::cells::GridCoordinate;
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};


/// Validated rows × columns extent of a rectangular grid. Both sides are at least 1.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct RectGridDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl RectGridDimensions {
    /// Returns None if either side is zero.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Option<RectGridDimensions> {
        if rows.0 == 0 || columns.0 == 0 {
            None
        } else {
            Some(RectGridDimensions { rows, columns })
        }
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.rows.0 * self.columns.0)
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// Number of internal walls: every horizontally or vertically adjacent cell pair.
    pub fn internal_walls(&self) -> EdgesCount {
        let (RowsCount(rows), ColumnsCount(cols)) = (self.rows, self.columns);
        EdgesCount(rows * (cols - 1) + cols * (rows - 1))
    }

    /// Number of passages a spanning tree over every cell has.
    #[inline]
    pub fn spanning_tree_edges(&self) -> EdgesCount {
        EdgesCount(self.size().0 - 1)
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.row < self.rows.0 && coord.col < self.columns.0
    }

    /// Convert a grid coordinate to a one dimensional row major index in the range 0..size.
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.columns.0 + coord.col)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_grid_coordinate(&self, index: usize) -> GridCoordinate {
        GridCoordinate::new(index / self.columns.0, index % self.columns.0)
    }

    /// The fixed start cell of every maze.
    #[inline]
    pub fn entrance(&self) -> GridCoordinate {
        GridCoordinate::new(0, 0)
    }

    /// The fixed end cell of every maze.
    #[inline]
    pub fn exit(&self) -> GridCoordinate {
        GridCoordinate::new(self.rows.0 - 1, self.columns.0 - 1)
    }
}
