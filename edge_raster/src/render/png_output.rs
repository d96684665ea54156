use super::render_target_trait::*;

use thiserror::Error;

use std::io::{Write, BufWriter};

///
/// Errors that can occur while writing a frame as a PNG file
///
#[derive(Error, Debug)]
pub enum PngOutputError {
    #[error("frame of {width}x{height} pixels is too large for a PNG file")]
    FrameTooLarge { width: usize, height: usize },

    #[error("could not encode PNG: {0}")]
    Encoding(#[from] png::EncodingError),
}

///
/// Writes the contents of a render target to a stream as an 8-bit RGBA PNG file
///
/// PNG stores colour components before alpha, so the pixels are re-ordered from ARGB as they are written.
///
pub fn write_png(source: &impl RenderTarget, target: impl Write) -> Result<(), PngOutputError> {
    let size = source.size();

    let (width, height) = match (u32::try_from(size.width), u32::try_from(size.height)) {
        (Ok(width), Ok(height)) => (width, height),
        _                       => return Err(PngOutputError::FrameTooLarge { width: size.width, height: size.height }),
    };

    let mut encoder = png::Encoder::new(BufWriter::new(target), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    // Convert the rows into a single RGBA buffer
    let mut pixel_data = Vec::with_capacity(size.width*size.height*4);
    for y in 0..size.height {
        pixel_data.extend(source.row(y).iter().flat_map(|pixel| pixel.to_rgba_components()));
    }

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixel_data)?;
    writer.finish()?;

    Ok(())
}
