use flo_pixel_window::*;
use flo_edge_raster::render::*;

use clap::{Parser};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter};

use std::fs::{self, File};
use std::time::{Duration};

///
/// Renders the demo scene as a sequence of PNG files
///
/// Set `RUST_LOG=flo_pixel_window=debug` to see each frame as it is written.
///
fn main() -> Result<(), DemoError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args        = PixelWindowArgs::parse();
    let scene       = DemoScene::default();
    let frame_step  = Duration::from_millis(args.frame_ms);

    // Deliver the clicks, then record the state for every frame
    let mut state = FrameState::new();
    for click in args.clicks.iter() {
        state.mouse_down(click.x, click.y);
    }

    let states = (0..args.frames)
        .map(|_| {
            let frame_state = state.clone();
            state.advance(frame_step);
            frame_state
        })
        .collect::<Vec<_>>();

    fs::create_dir_all(&args.output)?;

    // The background and pie slice of every frame are rendered as one batch
    let pie_edges   = states.iter().map(|state| scene.pie_edges(state)).collect::<Vec<_>>();
    let mut buffers = states.iter().map(|_| vec![scene.background; args.width * args.height]).collect::<Vec<_>>();

    let mut jobs = vec![];
    for (buffer, edges) in buffers.iter_mut().zip(pie_edges.iter()) {
        jobs.push((ArgbFrame::from_pixels(args.width, args.height, args.width, buffer)?, edges));
    }

    render_frames(&mut jobs);

    // Everything else is drawn over the top, then the frames are written out
    for (idx, ((frame, _), state)) in jobs.iter_mut().zip(states.iter()).enumerate() {
        scene.paint_overlays(state, frame);

        let path = args.output.join(format!("frame_{:04}.png", idx));
        write_png(&*frame, File::create(&path)?)?;

        debug!(frame = idx, time = state.time, path = %path.display(), "Wrote frame");
    }

    info!(frames = args.frames, width = args.width, height = args.height, "Rendered demo scene");

    Ok(())
}
