use thiserror::Error;

///
/// Errors that can stop the demo from writing its frames
///
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("could not write frame: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature="render_png")]
    #[error(transparent)]
    Png(#[from] flo_edge_raster::render::PngOutputError),

    #[error(transparent)]
    Frame(#[from] flo_edge_raster::FrameError),
}
