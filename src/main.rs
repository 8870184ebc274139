// SPDX-License-Identifier: MPL-2.0
//! Headless driver: load an image, apply edits through the editor state
//! machine, save the result.

use photo_canvas::config;
use photo_canvas::editor::{CropBox, EditorSettings, Event, Message, SidebarMessage, State};
use photo_canvas::error::{Error, Result};
use photo_canvas::media;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;

const HELP: &str = "\
photo-canvas: apply canvas edits to an image without a UI

USAGE:
  photo-canvas [OPTIONS] INPUT OUTPUT

OPTIONS:
  --config-dir DIR      Read settings.toml from DIR
  --crop X,Y,W,H        Crop rectangle in image pixels (clamped to the image)
  --rotate left|right   Rotate by 90 degrees
  --flip h|v            Flip horizontally or vertically
  -h, --help            Print this help

Logging is controlled with RUST_LOG (default: info).
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rotation {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flip {
    Horizontal,
    Vertical,
}

#[derive(Debug)]
struct Args {
    config_dir: Option<PathBuf>,
    crop: Option<CropBox>,
    rotate: Option<Rotation>,
    flip: Option<Flip>,
    input: PathBuf,
    output: PathBuf,
}

fn main() -> ExitCode {
    init_logging();

    let mut pargs = pico_args::Arguments::from_env();
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }
    let args = match parse_args(pargs) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "photo-canvas failed");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_args(mut pargs: pico_args::Arguments) -> std::result::Result<Args, pico_args::Error> {
    let args = Args {
        config_dir: pargs.opt_value_from_str("--config-dir")?,
        crop: pargs.opt_value_from_fn("--crop", parse_crop)?,
        rotate: pargs.opt_value_from_fn("--rotate", parse_rotation)?,
        flip: pargs.opt_value_from_fn("--flip", parse_flip)?,
        input: pargs.free_from_str()?,
        output: pargs.free_from_str()?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unused arguments");
    }
    Ok(args)
}

fn parse_crop(value: &str) -> std::result::Result<CropBox, String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|err| format!("invalid crop value: {err}"))?;
    match parts.as_slice() {
        [x, y, width, height] => Ok(CropBox::new(*x, *y, *width, *height)),
        _ => Err("expected X,Y,W,H".to_string()),
    }
}

fn parse_rotation(value: &str) -> std::result::Result<Rotation, &'static str> {
    match value {
        "left" => Ok(Rotation::Left),
        "right" => Ok(Rotation::Right),
        _ => Err("expected left or right"),
    }
}

fn parse_flip(value: &str) -> std::result::Result<Flip, &'static str> {
    match value {
        "h" | "horizontal" => Ok(Flip::Horizontal),
        "v" | "vertical" => Ok(Flip::Vertical),
        _ => Err("expected h or v"),
    }
}

fn run(args: Args) -> Result<()> {
    let (config, warning) = config::load_with_override(args.config_dir.clone());
    if let Some(key) = warning {
        tracing::warn!(key, "falling back to default settings");
    }
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let mut state = State::new(EditorSettings::from(&config));
    state.update(Message::LoadImage(media::load_image(&args.input)?));

    if let Some(rect) = args.crop {
        state.update(SidebarMessage::StartCrop.into());
        state.update(SidebarMessage::SetCropRect(rect).into());
        let event = state.update(SidebarMessage::ApplyCrop.into());
        dispatch(&mut state, event, &runtime)?;
    }
    if let Some(rotation) = args.rotate {
        let message = match rotation {
            Rotation::Left => SidebarMessage::RotateLeft,
            Rotation::Right => SidebarMessage::RotateRight,
        };
        let event = state.update(message.into());
        dispatch(&mut state, event, &runtime)?;
    }
    if let Some(flip) = args.flip {
        let message = match flip {
            Flip::Horizontal => SidebarMessage::FlipHorizontal,
            Flip::Vertical => SidebarMessage::FlipVertical,
        };
        let event = state.update(message.into());
        dispatch(&mut state, event, &runtime)?;
    }

    let image = state
        .current_image()
        .ok_or_else(|| Error::Raster("no image to save".to_string()))?;
    media::save_image(image, &args.output)?;
    tracing::info!(
        edits = state.history().cursor(),
        output = %args.output.display(),
        "done"
    );
    Ok(())
}

/// Performs the side effect an event asks for and feeds the answer back
/// until the editor has nothing left to do.
fn dispatch(state: &mut State, event: Event, runtime: &Runtime) -> Result<()> {
    let mut event = event;
    loop {
        event = match event {
            Event::None => return Ok(()),
            Event::CropRequested {
                ticket,
                source,
                rect,
            } => {
                let result = runtime.block_on(media::tasks::rasterize_crop(source, rect));
                state.update(Message::CropRasterized { ticket, result })
            }
            Event::ScheduleFit { .. } => state.update(Message::LayoutSettled),
            Event::GenerativeEditRequested { .. } => {
                tracing::warn!("no generative editor is configured");
                return Ok(());
            }
            Event::Notice(text) => {
                tracing::info!(%text, "notice");
                return Ok(());
            }
            Event::OperationFailed(reason) => return Err(Error::Raster(reason)),
        };
    }
}
