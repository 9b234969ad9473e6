use std::path::PathBuf;
use std::process;

use clap::Parser;

use colormap_core::color_map::domain::frame_reducer::MeanColorReducer;
use colormap_core::pipeline::create_color_map_use_case::CreateColorMapUseCase;
use colormap_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use colormap_core::shared::color_map_config::ColorMapConfig;
use colormap_core::shared::color_map_error::ColorMapError;
use colormap_core::shared::constants::{
    DEFAULT_BAR_THICKNESS, DEFAULT_INTERVAL, DEFAULT_OUTPUT, DEFAULT_PROGRESS_EVERY, DEFAULT_SIZE,
};
use colormap_core::video::infrastructure::ffmpeg_reader::FfmpegReader;
use colormap_core::video::infrastructure::image_file_writer::ImageFileWriter;

/// Render the mean color of every Nth frame of a video as a barcode image.
#[derive(Parser, Debug)]
#[command(name = "colormap")]
struct Cli {
    /// Input video file.
    input: PathBuf,

    /// Output image; the format follows the extension (png, jpg, bmp, ...).
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Bar length in pixels (image height, or width with --vertical).
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Width of each bar in pixels.
    #[arg(long, default_value_t = DEFAULT_BAR_THICKNESS)]
    bar_thickness: usize,

    /// Rotate the result so bars run horizontally, top to bottom.
    #[arg(long)]
    vertical: bool,

    /// Sample one frame out of every N.
    #[arg(long, default_value_t = DEFAULT_INTERVAL)]
    interval: usize,

    /// Frames between progress lines.
    #[arg(long, default_value_t = DEFAULT_PROGRESS_EVERY)]
    progress_every: usize,

    /// Log progress and a timing summary.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> Result<(), ColorMapError> {
    let config = build_config(&cli);
    config.validate()?;
    if !config.source().exists() {
        return Err(ColorMapError::SourceUnavailable {
            path: config.source().to_path_buf(),
            reason: "file not found".into(),
        });
    }

    let mut use_case = CreateColorMapUseCase::new(
        Box::new(FfmpegReader::new()),
        Box::new(MeanColorReducer),
        Box::new(ImageFileWriter::new()),
        Box::new(StdoutPipelineLogger::new(cli.progress_every)),
        config,
    );

    let image = use_case.compute()?;
    use_case.save(&image, &cli.output)?;
    log::info!("Output written to {}", cli.output.display());
    use_case.summary();
    Ok(())
}

fn build_config(cli: &Cli) -> ColorMapConfig {
    ColorMapConfig::new(&cli.input)
        .with_size(cli.size)
        .with_bar_thickness(cli.bar_thickness)
        .with_vertical(cli.vertical)
        .with_interval(cli.interval)
}
