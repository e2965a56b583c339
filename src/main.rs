use std::{
    fs::File,
    io,
    io::prelude::*,
};

use docopt::Docopt;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_derive::Deserialize;

use mazes::{
    config::MazeConfig,
    renderers,
    surfaces::{ImageSurface, SvgSurface},
};

const USAGE: &str = "Mazes

Generates a 20x20 perfect maze, entrance top left and exit bottom right.

Usage:
    mazes_driver -h | --help
    mazes_driver [--seed=<n>] [--text] [--text-out=<path>] [--image-out=<path>] [--svg-out=<path>]

Options:
    -h --help              Show this screen.
    --seed=<n>             Seed the random number generator so the same maze comes out every time.
    --text                 Print the maze as text. The default when no output file is given.
    --text-out=<path>      Output file path for a textual rendering of the maze.
    --image-out=<path>     Output file path for an image rendering of the maze. Always PNG format.
    --svg-out=<path>       Output file path for an SVG rendering of the maze.

Set RUST_LOG=mazes=debug (or trace) to see what the generator is doing.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_seed: Option<u64>,
    flag_text: bool,
    flag_text_out: String,
    flag_image_out: String,
    flag_svg_out: String,
}

mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
    // ResultExt adds the `chain_err` trait method.
    use error_chain::*;
    error_chain! {

        foreign_links {
            ImageSaveError(::image::ImageError);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let config = MazeConfig::default();
    let mut rng = match args.flag_seed {
        Some(seed) => {
            info!("seeding maze generation with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let any_file_output = !args.flag_text_out.is_empty() || !args.flag_image_out.is_empty() ||
                          !args.flag_svg_out.is_empty();

    let mut image_surface = ImageSurface::new(config.canvas_width(), config.canvas_height());
    let maze_grid = mazes::regenerate(&config, &mut rng, &mut image_surface);

    if !args.flag_image_out.is_empty() {
        image_surface.save(&args.flag_image_out)
            .chain_err(|| format!("Failed to write maze image {}", args.flag_image_out))?;
        info!("wrote maze image to {}", args.flag_image_out);
    }

    if !args.flag_svg_out.is_empty() {
        let mut svg_surface = SvgSurface::new(config.canvas_width(), config.canvas_height());
        renderers::render(&maze_grid, &config, &mut svg_surface);
        write_text_to_file(&svg_surface.to_svg_string(), &args.flag_svg_out)
            .chain_err(|| format!("Failed to write maze svg {}", args.flag_svg_out))?;
        info!("wrote maze svg to {}", args.flag_svg_out);
    }

    if !args.flag_text_out.is_empty() {
        write_text_to_file(&maze_grid.to_string(), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
        info!("wrote maze text to {}", args.flag_text_out);
    }

    if args.flag_text || !any_file_output {
        print!("{}", maze_grid);
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
