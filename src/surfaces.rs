//! Concrete drawing surfaces for maze output: an in-memory raster that can be saved as a
//! PNG and an SVG document builder.

use std::fmt::Write;
use std::path::Path;

use image::{ImageFormat, ImageResult, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use itertools::Itertools;

use crate::renderers::{DrawingSurface, Point};
use crate::units::{Height, Width};

pub const WHITE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 0xff]);


/// RGBA pixel buffer. Stroked lines are one pixel wide.
///
/// Coordinates on the far right or bottom edge (x == width, y == height) are pulled in by
/// one pixel so the outer maze boundary stays visible. A zero sized image draws nothing.
#[derive(Debug, Clone)]
pub struct ImageSurface {
    image: RgbaImage,
    background: Rgba<u8>,
    stroke_colour: Rgba<u8>,
    pen: Option<Point>,
    path: Vec<(Point, Point)>,
}

impl ImageSurface {
    pub fn new(width: Width, height: Height) -> ImageSurface {
        ImageSurface::with_colours(width, height, WHITE, BLACK)
    }

    pub fn with_colours(width: Width,
                        height: Height,
                        background: Rgba<u8>,
                        stroke_colour: Rgba<u8>)
                        -> ImageSurface {
        ImageSurface {
            image: RgbaImage::from_pixel(width.0, height.0, background),
            background,
            stroke_colour,
            pen: None,
            path: Vec::new(),
        }
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Write the image out as PNG whatever the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        self.image.save_with_format(path, ImageFormat::Png)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.image.width() == 0 || self.image.height() == 0
    }

    fn to_pixel(&self, p: Point) -> (f32, f32) {
        let max_x = f64::from(self.image.width()) - 1.0;
        let max_y = f64::from(self.image.height()) - 1.0;
        let x = p.x.round().min(max_x).max(0.0);
        let y = p.y.round().min(max_y).max(0.0);
        (x as f32, y as f32)
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        if self.is_empty() {
            return;
        }
        let (start, end) = (self.to_pixel(from), self.to_pixel(to));
        draw_line_segment_mut(&mut self.image, start, end, self.stroke_colour);
    }
}

impl DrawingSurface for ImageSurface {
    fn width(&self) -> f64 {
        f64::from(self.image.width())
    }

    fn height(&self) -> f64 {
        f64::from(self.image.height())
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (x0, y0) = (x.max(0.0) as u32, y.max(0.0) as u32);
        let x1 = ((x + width).max(0.0) as u32).min(self.image.width());
        let y1 = ((y + height).max(0.0) as u32).min(self.image.height());
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let area = Rect::at(x0 as i32, y0 as i32).of_size(x1 - x0, y1 - y0);
        draw_filled_rect_mut(&mut self.image, area, self.background);
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.pen = None;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.pen = Some(Point::new(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let to = Point::new(x, y);
        if let Some(from) = self.pen {
            self.path.push((from, to));
        }
        self.pen = Some(to);
    }

    fn stroke(&mut self) {
        let path = std::mem::take(&mut self.path);
        for (from, to) in &path {
            self.draw_line(*from, *to);
        }
        self.path = path;
    }
}

/// Accumulates stroked paths as an SVG document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    elements: Vec<String>,
    path_data: String,
}

impl SvgSurface {
    pub fn new(width: Width, height: Height) -> SvgSurface {
        SvgSurface {
            width: f64::from(width.0),
            height: f64::from(height.0),
            elements: Vec::new(),
            path_data: String::new(),
        }
    }

    pub fn to_svg_string(&self) -> String {
        let mut svg = String::new();
        let _ = writeln!(svg,
                         r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
                         self.width,
                         self.height,
                         self.width,
                         self.height);
        let _ = writeln!(svg,
                         r#"<rect width="{}" height="{}" fill="white"/>"#,
                         self.width,
                         self.height);
        if !self.elements.is_empty() {
            svg.push_str(&self.elements.iter().join("\n"));
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl DrawingSurface for SvgSurface {
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
            self.elements.clear();
        } else {
            self.elements.push(format!(r#"<rect x="{}" y="{}" width="{}" height="{}" fill="white"/>"#,
                                       x,
                                       y,
                                       width,
                                       height));
        }
    }

    fn begin_path(&mut self) {
        self.path_data.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.path_data, "M{} {} ", x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.path_data, "L{} {} ", x, y);
    }

    fn stroke(&mut self) {
        let data = self.path_data.trim_end();
        if data.contains('L') {
            self.elements.push(format!(r#"<path d="{}" stroke="black" fill="none"/>"#, data));
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::config::MazeConfig;
    use crate::generators::{recursive_backtracker, ScriptedChoices};
    use crate::renderers::render;
    use crate::units::{ColumnsCount, RowsCount};

    fn scripted_two_by_two() -> (MazeConfig, crate::grid::Grid) {
        let config = MazeConfig::new(RowsCount(2), ColumnsCount(2), Width(40), Height(40))
            .expect("valid config");
        let grid = recursive_backtracker(config.dimensions(), &mut ScriptedChoices::new(vec![0]));
        (config, grid)
    }

    #[test]
    fn image_surface_draws_standing_walls_only() {
        let (config, grid) = scripted_two_by_two();
        let mut surface = ImageSurface::new(Width(40), Height(40));
        render(&grid, &config, &mut surface);
        let image = surface.image();

        // top wall of (0,0)
        assert_eq!(*image.get_pixel(10, 0), BLACK);
        // entrance, left of (0,0)
        assert_eq!(*image.get_pixel(0, 10), WHITE);
        // passage (0,0) -> (0,1)
        assert_eq!(*image.get_pixel(20, 10), WHITE);
        // outer right wall of (0,1), pulled in to the last pixel column
        assert_eq!(*image.get_pixel(39, 10), BLACK);
        // exit, right of (1,1)
        assert_eq!(*image.get_pixel(39, 30), WHITE);
        // cell interiors stay clear
        assert_eq!(*image.get_pixel(30, 30), WHITE);
    }

    #[test]
    fn clearing_wipes_previous_drawing() {
        let (config, grid) = scripted_two_by_two();
        let mut surface = ImageSurface::new(Width(40), Height(40));
        render(&grid, &config, &mut surface);
        surface.clear_rect(0.0, 0.0, 40.0, 40.0);
        assert!(surface.image().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn partial_clear_leaves_the_rest() {
        let (config, grid) = scripted_two_by_two();
        let mut surface = ImageSurface::new(Width(40), Height(40));
        render(&grid, &config, &mut surface);
        surface.clear_rect(0.0, 0.0, 20.0, 5.0);
        assert_eq!(*surface.image().get_pixel(10, 0), WHITE);
        assert_eq!(*surface.image().get_pixel(30, 0), BLACK);
    }

    #[test]
    fn zero_sized_image_draws_nothing() {
        let mut surface = ImageSurface::new(Width(0), Height(10));
        surface.clear_rect(0.0, 0.0, 0.0, 10.0);
        surface.begin_path();
        surface.move_to(0.0, 0.0);
        surface.line_to(0.0, 10.0);
        surface.stroke();
        assert_eq!(surface.image().dimensions(), (0, 10));
    }

    #[test]
    fn saves_png_whatever_the_extension() {
        let (config, grid) = scripted_two_by_two();
        let mut surface = ImageSurface::new(Width(40), Height(40));
        render(&grid, &config, &mut surface);

        let path = std::env::temp_dir().join(format!("mazes_png_{}", std::process::id()));
        surface.save(&path).expect("png written");
        let bytes = std::fs::read(&path).expect("png read back");
        let _ = std::fs::remove_file(&path);
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let reloaded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .expect("valid png")
            .to_rgba8();
        assert_eq!(&reloaded, surface.image());
    }

    #[test]
    fn svg_surface_emits_one_path_per_walled_cell() {
        let (config, grid) = scripted_two_by_two();
        let mut surface = SvgSurface::new(Width(40), Height(40));
        render(&grid, &config, &mut surface);
        let svg = surface.to_svg_string();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<path").count(), 4);
        assert!(svg.contains(r#"<path d="M0 0 L20 0 M0 20 L20 20" stroke="black" fill="none"/>"#));

        // rendering again replaces rather than appends
        render(&grid, &config, &mut surface);
        assert_eq!(surface.to_svg_string(), svg);
    }
}
