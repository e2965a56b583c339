use crate::grid_dimensions::RectGridDimensions;
use crate::units::{ColumnsCount, Height, RowsCount, Width};

pub const DEFAULT_ROWS: RowsCount = RowsCount(20);
pub const DEFAULT_COLUMNS: ColumnsCount = ColumnsCount(20);
pub const DEFAULT_CANVAS_WIDTH: Width = Width(400);
pub const DEFAULT_CANVAS_HEIGHT: Height = Height(400);

/// Everything a generate-and-draw run needs to know up front.
///
/// The canvas size is what hosts create their surfaces with. The cell size is not stored,
/// the renderer shares the surface width out between the columns.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MazeConfig {
    dimensions: RectGridDimensions,
    canvas_width: Width,
    canvas_height: Height,
}

impl MazeConfig {
    /// Returns None for a zero sized grid or canvas.
    pub fn new(rows: RowsCount,
               columns: ColumnsCount,
               canvas_width: Width,
               canvas_height: Height)
               -> Option<MazeConfig> {
        if canvas_width.0 == 0 || canvas_height.0 == 0 {
            return None;
        }
        RectGridDimensions::new(rows, columns).map(|dimensions| {
            MazeConfig {
                dimensions,
                canvas_width,
                canvas_height,
            }
        })
    }

    #[inline]
    pub fn dimensions(&self) -> RectGridDimensions {
        self.dimensions
    }

    #[inline]
    pub fn canvas_width(&self) -> Width {
        self.canvas_width
    }

    #[inline]
    pub fn canvas_height(&self) -> Height {
        self.canvas_height
    }
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            dimensions: RectGridDimensions::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
                .unwrap_or_else(|| unreachable!("default grid dimensions are non zero")),
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

/// Side length of one cell when `columns` cells span `width` pixels.
#[inline]
pub fn cell_size_for(width: f64, columns: ColumnsCount) -> f64 {
    width / columns.0 as f64
}
