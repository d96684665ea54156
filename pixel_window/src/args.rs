use flo_edge_raster::geometry::*;

use clap::{Parser};

use std::path::{PathBuf};

///
/// Command-line options for the `pixel_window` binary
///
/// Each `--click` is delivered to the scene as a mouse-down before the first frame is drawn.
///
#[derive(Parser, Clone, Debug)]
#[command(name = "pixel_window", version, about = "Render frames of the edge rasterizer demo scene as PNG files")]
pub struct PixelWindowArgs {
    /// Width of each frame in pixels
    #[arg(long, default_value = "511")]
    pub width: usize,

    /// Height of each frame in pixels
    #[arg(long, default_value = "512")]
    pub height: usize,

    /// Number of frames to render
    #[arg(long, default_value = "60")]
    pub frames: usize,

    /// Real time between frames, in milliseconds
    #[arg(long, default_value = "16")]
    pub frame_ms: u64,

    /// A mouse click at `x,y` (may be repeated)
    #[arg(long = "click", value_parser = parse_click, value_name = "X,Y")]
    pub clicks: Vec<Point>,

    /// Directory that the `frame_NNNN.png` files are written to
    #[arg(long, default_value = ".")]
    pub output: PathBuf,
}

///
/// Parses a click position in the form `x,y`
///
pub fn parse_click(s: &str) -> Result<Point, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| "click must be X,Y (e.g., 120,80)".to_string())?;

    let x = x.trim().parse::<f32>().map_err(|_| "invalid x coordinate")?;
    let y = y.trim().parse::<f32>().map_err(|_| "invalid y coordinate")?;

    if !x.is_finite() || !y.is_finite() {
        return Err("click coordinates must be finite".to_string());
    }

    Ok(Point::new(x, y))
}
