use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use indicatif::{MultiProgress, ProgressBar, ProgressIterator, ProgressStyle};
use log::{LevelFilter, info};
use raycaster::{
    demo::DemoKind,
    render::{canvas::ImageFormat, display::DisplaySurface, raytracer::Raytracer, recorder::FrameRecorder},
    scene::camera::{PerspectiveCamera, PerspectiveCameraBuilder},
    shading::integrator::Integrator,
};

const DEFAULT_WIDTH: usize = 320;
const DEFAULT_HEIGHT: usize = 240;
const DEFAULT_FRAMES: usize = 24;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Gif,
    Png,
    Ppm,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Interactive raytracer demos
/// Renders an animated demo scene frame by frame, the camera orbits the scene between frames
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// The demo scene to render
    #[clap(short, long, default_value = "spheres")]
    demo: DemoKind,

    /// Width (in pixels) of each frame
    #[clap(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Height (in pixels) of each frame
    #[clap(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Vertical field of view of the camera in degrees
    #[clap(long, default_value_t = PerspectiveCamera::DEFAULT_FIELD_OF_VIEW)]
    fov: f64,

    /// Maximum number of times a ray can bounce off a reflective surface
    #[clap(short, long, default_value_t = Integrator::DEFAULT_RAY_DEPTH_LIMIT)]
    ray_depth_limit: usize,

    /// Number of frames to render
    #[clap(short = 'n', long, default_value_t = DEFAULT_FRAMES)]
    frames: usize,

    /// gif writes one animation, png and ppm write one file per frame
    #[clap(short = 'f', long, default_value = "gif")]
    format: OutputFormat,

    /// The output path.
    /// By default it's `./<demo>.gif`, or the `./<demo>` directory for png and ppm
    #[clap(short, long)]
    output: Option<PathBuf>,

    #[clap(long, default_value = "info")]
    log_level: LogLevel,
}

/// RUST_LOG still takes precedence over the given level
fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn progress_style(template: &str) -> Result<ProgressStyle, String> {
    ProgressStyle::with_template(template).map_err(|e| format!("Invalid progress template: {}", e))
}

fn create_recorder(args: &Args) -> Result<(FrameRecorder, PathBuf), String> {
    let output = args.output.clone().unwrap_or_else(|| match args.format {
        OutputFormat::Gif => PathBuf::from(format!("{}.gif", args.demo)),
        OutputFormat::Png | OutputFormat::Ppm => PathBuf::from(args.demo.to_string()),
    });
    let recorder = match args.format {
        OutputFormat::Gif => FrameRecorder::gif(&output, args.width, args.height),
        OutputFormat::Png => {
            FrameRecorder::images(&output, args.width, args.height, ImageFormat::Png)
        }
        OutputFormat::Ppm => {
            FrameRecorder::images(&output, args.width, args.height, ImageFormat::Ppm)
        }
    }
    .map_err(|e| format!("Failed to create output: {}", e))?;
    Ok((recorder, output))
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    if args.width == 0 || args.height == 0 {
        return Err("Width and height must be positive".to_string());
    }
    let camera = PerspectiveCameraBuilder::default()
        .field_of_view(args.fov)
        .aspect_ratio(args.width as f64 / args.height as f64)
        .build()
        .map_err(|e| format!("Invalid camera: {}", raycaster::Error::from(e)))?;
    let (recorder, output) = create_recorder(&args)?;

    let mut demo = args.demo.create();
    let mut raytracer = Raytracer::new(recorder);
    raytracer.set_camera(camera);
    raytracer.set_ray_depth_limit(args.ray_depth_limit);
    raytracer.set_scene(demo.build_scene());
    info!(
        "rendering {} demo: {} frames of {}x{} pixels",
        args.demo, args.frames, args.width, args.height
    );

    let multi_bar = MultiProgress::new();
    let main_bar = multi_bar.add(ProgressBar::new(args.frames as u64).with_style(progress_style(
        "[{elapsed_precise}] {wide_bar:.cyan/blue} rendering frame: {human_pos}/{human_len} {percent}% ({eta})",
    )?));
    let frame_bar = multi_bar.add(
        ProgressBar::new((args.width * args.height) as u64).with_style(
            progress_style(
                "[{elapsed_precise}] {bar:.cyan/blue} pixels shaded: {human_pos}/{human_len} {percent}% ({eta})",
            )?
            .progress_chars("=>-"),
        ),
    );

    for _ in (0..args.frames).progress_with(main_bar) {
        let (scene, camera) = raytracer.scene_and_camera_mut();
        demo.update(scene, camera);

        raytracer.render_with_progress(frame_bar.clone());
        frame_bar.reset();
        raytracer
            .display_mut()
            .present()
            .map_err(|e| format!("Failed to save frame: {}", e))?;
    }
    frame_bar.finish_and_clear();

    info!(
        "saved {} frames to {:?}",
        raytracer.display().frames_presented(),
        output
    );
    Ok(())
}
