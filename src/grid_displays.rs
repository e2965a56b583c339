use std::fmt;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::grid::Grid;
use crate::units::{ColumnsCount, RowsCount};

const WALL_L: &str = "╴";
const WALL_R: &str = "╶";
const WALL_U: &str = "╵";
const WALL_D: &str = "╷";
const WALL_LR_3: &str = "───";
const WALL_LR: &str = "─";
const WALL_UD: &str = "│";
const WALL_LD: &str = "┐";
const WALL_RU: &str = "└";
const WALL_LU: &str = "┘";
const WALL_RD: &str = "┌";
const WALL_LRU: &str = "┴";
const WALL_LRD: &str = "┬";
const WALL_LRUD: &str = "┼";
const WALL_RUD: &str = "├";
const WALL_LUD: &str = "┤";
const CELL_BODY: &str = "   ";

fn has_wall(grid: &Grid, row: usize, col: usize, dir: CompassPrimary) -> bool {
    grid.cell(GridCoordinate::new(row, col)).map_or(false, |cell| cell.has_wall(dir))
}

/// Is the vertical wall on column line `line` (0..=columns) standing alongside `row`?
/// Either cell touching it counts.
fn vertical_wall(grid: &Grid, row: usize, line: usize) -> bool {
    let ColumnsCount(columns) = grid.columns();
    (line < columns && has_wall(grid, row, line, CompassPrimary::West)) ||
    (line > 0 && has_wall(grid, row, line - 1, CompassPrimary::East))
}

/// Is the horizontal wall on row line `line` (0..=rows) standing above/below `col`?
fn horizontal_wall(grid: &Grid, line: usize, col: usize) -> bool {
    let RowsCount(rows) = grid.rows();
    (line < rows && has_wall(grid, line, col, CompassPrimary::North)) ||
    (line > 0 && has_wall(grid, line - 1, col, CompassPrimary::South))
}

/// Glyph for the point where row line `line_row` meets column line `line_col`.
fn corner(grid: &Grid, line_row: usize, line_col: usize) -> &'static str {
    let (RowsCount(rows), ColumnsCount(columns)) = (grid.rows(), grid.columns());

    let left = line_col > 0 && horizontal_wall(grid, line_row, line_col - 1);
    let right = line_col < columns && horizontal_wall(grid, line_row, line_col);
    let up = line_row > 0 && vertical_wall(grid, line_row - 1, line_col);
    let down = line_row < rows && vertical_wall(grid, line_row, line_col);

    match (left, right, up, down) {
        (true, true, true, true) => WALL_LRUD,
        (true, true, true, false) => WALL_LRU,
        (true, true, false, true) => WALL_LRD,
        (true, false, true, true) => WALL_LUD,
        (false, true, true, true) => WALL_RUD,
        (true, true, false, false) => WALL_LR,
        (false, false, true, true) => WALL_UD,
        (false, true, true, false) => WALL_RU,
        (true, false, false, true) => WALL_LD,
        (true, false, true, false) => WALL_LU,
        (false, true, false, true) => WALL_RD,
        (true, false, false, false) => WALL_L,
        (false, true, false, false) => WALL_R,
        (false, false, true, false) => WALL_U,
        (false, false, false, true) => WALL_D,
        (false, false, false, false) => " ",
    }
}

/// Text rendering of the maze with box drawing characters, three glyphs per cell body.
/// Entrance and exit show as gaps in the outer boundary.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (RowsCount(rows), ColumnsCount(columns)) = (self.rows(), self.columns());
        let mut output = String::new();

        for line_row in 0..=rows {

            // The wall line above row `line_row` (or below the last row).
            for line_col in 0..=columns {
                output.push_str(corner(self, line_row, line_col));
                if line_col < columns {
                    if horizontal_wall(self, line_row, line_col) {
                        output.push_str(WALL_LR_3);
                    } else {
                        output.push_str(CELL_BODY);
                    }
                }
            }
            output.push('\n');

            if line_row == rows {
                break;
            }

            // The cell bodies and the vertical walls between them.
            for line_col in 0..=columns {
                if vertical_wall(self, line_row, line_col) {
                    output.push_str(WALL_UD);
                } else {
                    output.push(' ');
                }
                if line_col < columns {
                    output.push_str(CELL_BODY);
                }
            }
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

#[cfg(test)]
mod tests {

    use crate::generators::{recursive_backtracker, ScriptedChoices};
    use crate::grid::Grid;
    use crate::grid_dimensions::RectGridDimensions;
    use crate::units::{ColumnsCount, RowsCount};

    fn dims(rows: usize, cols: usize) -> RectGridDimensions {
        RectGridDimensions::new(RowsCount(rows), ColumnsCount(cols)).unwrap()
    }

    #[test]
    fn fully_walled_grid() {
        let grid = Grid::new(dims(2, 2));
        let expected = ["┌───┬───┐",
                        "│   │   │",
                        "├───┼───┤",
                        "│   │   │",
                        "└───┴───┘"].join("\n") + "\n";
        assert_eq!(format!("{}", grid), expected);
    }

    #[test]
    fn single_cell_maze_is_open_both_sides() {
        let grid = recursive_backtracker(dims(1, 1), &mut ScriptedChoices::new(vec![0]));
        assert_eq!(grid.to_string(), "╶───╴\n     \n╶───╴\n");
    }

    #[test]
    fn scripted_maze_text() {
        let grid = recursive_backtracker(dims(2, 2), &mut ScriptedChoices::new(vec![0]));
        // (0,0) -> (0,1) -> (1,1) -> (1,0)
        let expected = ["╶───────┐",
                        "        │",
                        "┌───╴   ╵",
                        "│        ",
                        "└───────╴"].join("\n") + "\n";
        assert_eq!(grid.to_string(), expected);
    }
}
