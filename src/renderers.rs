use log::debug;

use crate::cells::CompassPrimary;
use crate::config::{cell_size_for, MazeConfig};
use crate::grid::Grid;


/// A 2D drawing context in the style of an HTML canvas: paths are built from move/line
/// operations and only appear when stroked.
pub trait DrawingSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

/// A straight wall line from `start` to `end`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// The segment a cell's wall occupies, given the cell's top left corner and side length.
pub fn wall_segment(origin: Point, cell_size: f64, wall: CompassPrimary) -> Segment {
    let (x, y, s) = (origin.x, origin.y, cell_size);
    let (start, end) = match wall {
        CompassPrimary::North => (Point::new(x, y), Point::new(x + s, y)),
        CompassPrimary::East => (Point::new(x + s, y), Point::new(x + s, y + s)),
        CompassPrimary::South => (Point::new(x, y + s), Point::new(x + s, y + s)),
        CompassPrimary::West => (Point::new(x, y), Point::new(x, y + s)),
    };
    Segment { start, end }
}

/// Every standing wall of every cell, row major then in wall index order.
///
/// An internal wall belongs to both its cells so it appears twice; both copies cover the
/// same pixels.
pub fn wall_segments(grid: &Grid, cell_size: f64) -> Vec<Segment> {
    grid.iter_cells()
        .flat_map(|(coord, cell)| {
            let origin = Point::new(coord.col as f64 * cell_size, coord.row as f64 * cell_size);
            CompassPrimary::ALL
                .into_iter()
                .filter(move |wall| cell.has_wall(*wall))
                .map(move |wall| wall_segment(origin, cell_size, wall))
        })
        .collect()
}

/// Wipe the surface and draw the maze's walls on it, one stroked path per cell.
///
/// Cells are sized so the configured columns span the whole surface width.
pub fn render<S>(grid: &Grid, config: &MazeConfig, surface: &mut S)
    where S: DrawingSurface + ?Sized
{
    let (width, height) = (surface.width(), surface.height());
    let cell_size = cell_size_for(width, config.dimensions().columns());
    surface.clear_rect(0.0, 0.0, width, height);

    let mut lines = 0;
    for (coord, cell) in grid.iter_cells() {
        let origin = Point::new(coord.col as f64 * cell_size, coord.row as f64 * cell_size);

        surface.begin_path();
        for wall in CompassPrimary::ALL.iter().filter(|wall| cell.has_wall(**wall)) {
            let segment = wall_segment(origin, cell_size, *wall);
            surface.move_to(segment.start.x, segment.start.y);
            surface.line_to(segment.end.x, segment.end.y);
            lines += 1;
        }
        surface.stroke();
    }

    debug!("rendered {} cells as {} wall lines at {} pixels per cell",
           grid.size(),
           lines,
           cell_size);
}

/// One call made on a `RecordingSurface`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Stroke,
}

/// Headless surface that remembers the calls made on it.
///
/// Clearing the whole surface forgets everything recorded before the clear, so one surface
/// can be redrawn indefinitely.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> RecordingSurface {
        RecordingSurface {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The segments made visible so far: move/line pairs of paths that were stroked after
    /// the most recent clear.
    pub fn stroked_segments(&self) -> Vec<Segment> {
        let mut stroked = Vec::new();
        let mut path = Vec::new();
        let mut pen: Option<Point> = None;

        for command in &self.commands {
            match *command {
                DrawCommand::ClearRect { .. } => {
                    stroked.clear();
                    path.clear();
                    pen = None;
                }
                DrawCommand::BeginPath => path.clear(),
                DrawCommand::MoveTo(p) => pen = Some(p),
                DrawCommand::LineTo(p) => {
                    if let Some(start) = pen {
                        path.push(Segment { start, end: p });
                    }
                    pen = Some(p);
                }
                DrawCommand::Stroke => stroked.extend(path.iter().cloned()),
            }
        }
        stroked
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let covers_everything = x <= 0.0 && y <= 0.0 && x + width >= self.width &&
                                y + height >= self.height;
        if covers_everything {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo(Point::new(x, y)));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}

#[cfg(test)]
mod tests {

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::generators::{recursive_backtracker, ScriptedChoices};
    use crate::grid_dimensions::RectGridDimensions;
    use crate::units::{ColumnsCount, Height, RowsCount, Width};

    fn config(rows: usize, cols: usize, width: u32) -> MazeConfig {
        MazeConfig::new(RowsCount(rows), ColumnsCount(cols), Width(width), Height(width))
            .expect("valid config")
    }

    fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        }
    }

    #[test]
    fn wall_geometry() {
        let origin = Point::new(20.0, 40.0);
        assert_eq!(wall_segment(origin, 10.0, CompassPrimary::North),
                   segment(20.0, 40.0, 30.0, 40.0));
        assert_eq!(wall_segment(origin, 10.0, CompassPrimary::East),
                   segment(30.0, 40.0, 30.0, 50.0));
        assert_eq!(wall_segment(origin, 10.0, CompassPrimary::South),
                   segment(20.0, 50.0, 30.0, 50.0));
        assert_eq!(wall_segment(origin, 10.0, CompassPrimary::West),
                   segment(20.0, 40.0, 20.0, 50.0));
    }

    #[test]
    fn unmodified_grid_draws_every_wall() {
        let dimensions = RectGridDimensions::new(RowsCount(2), ColumnsCount(3)).unwrap();
        let grid = Grid::new(dimensions);
        assert_eq!(wall_segments(&grid, 5.0).len(), 2 * 3 * 4);
    }

    #[test]
    fn render_clears_then_strokes_each_cell() {
        let config = config(2, 2, 40);
        let grid = recursive_backtracker(config.dimensions(), &mut ScriptedChoices::new(vec![0]));
        let mut surface = RecordingSurface::new(40.0, 40.0);
        render(&grid, &config, &mut surface);

        let commands = surface.commands();
        assert_eq!(commands[0],
                   DrawCommand::ClearRect { x: 0.0, y: 0.0, width: 40.0, height: 40.0 });
        let begins = commands.iter().filter(|c| **c == DrawCommand::BeginPath).count();
        let strokes = commands.iter().filter(|c| **c == DrawCommand::Stroke).count();
        assert_eq!(begins, 4);
        assert_eq!(strokes, 4);

        // scripted layout: 2 + 2 + 3 + 1 walls standing
        let expected = wall_segments(&grid, 20.0);
        assert_eq!(expected.len(), 8);
        assert_eq!(surface.stroked_segments(), expected);

        // the top left cell keeps its top and bottom walls, the entrance is open
        assert_eq!(&expected[..2],
                   &[segment(0.0, 0.0, 20.0, 0.0), segment(0.0, 20.0, 20.0, 20.0)]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let config = config(8, 8, 160);
        let mut rng = StdRng::seed_from_u64(99);
        let grid = recursive_backtracker(config.dimensions(), &mut rng);

        let mut first = RecordingSurface::new(160.0, 160.0);
        let mut second = RecordingSurface::new(160.0, 160.0);
        render(&grid, &config, &mut first);
        render(&grid, &config, &mut second);
        assert_eq!(first, second);

        // drawing over an existing picture only leaves the latest one visible
        render(&grid, &config, &mut first);
        assert_eq!(first.stroked_segments(), second.stroked_segments());
    }

    #[test]
    fn full_clear_forgets_earlier_drawings() {
        let config = config(6, 6, 120);
        let mut rng = StdRng::seed_from_u64(3);
        let mut surface = RecordingSurface::new(120.0, 120.0);
        for _ in 0..5 {
            let grid = recursive_backtracker(config.dimensions(), &mut rng);
            render(&grid, &config, &mut surface);
        }
        let strokes = surface.commands().iter().filter(|c| **c == DrawCommand::Stroke).count();
        assert_eq!(strokes, 36);

        // a partial clear is only recorded
        surface.clear_rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(surface.commands().iter().filter(|c| **c == DrawCommand::Stroke).count(), 36);
        assert!(surface.stroked_segments().is_empty());
    }

    #[test]
    fn unstroked_paths_are_not_visible() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.begin_path();
        surface.move_to(0.0, 0.0);
        surface.line_to(5.0, 0.0);
        assert!(surface.stroked_segments().is_empty());
        surface.stroke();
        assert_eq!(surface.stroked_segments(), vec![segment(0.0, 0.0, 5.0, 0.0)]);
    }
}
