use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use datamorph::{
    CancelToken, DEFAULTS, DataLoader, DataSource, RunConfig, RunnerOpts, ShapeRegistry, ShapeRun,
    morph_all,
};

#[derive(Parser, Debug)]
#[command(name = "datamorph", version)]
#[command(about = "Morph a point cloud into target shapes without changing its summary statistics")]
struct Cli {
    /// Start shape: a built-in dataset name (e.g. `dino`) or a path to a
    /// JSON point file (an array of [x, y] pairs).
    start_shape: String,

    /// Target shapes to morph toward (default: every registered shape).
    #[arg(long = "target-shape", num_args = 1..)]
    target_shape: Vec<String>,

    /// Decimal places the preserved statistics are rounded to.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=9), default_value_t = DEFAULTS.decimals)]
    decimals: u8,

    /// Number of perturbation iterations per shape.
    #[arg(long, default_value_t = DEFAULTS.iterations)]
    iterations: usize,

    /// Trailing iterations during which the dataset is held still.
    #[arg(long, default_value_t = DEFAULTS.freeze_for)]
    freeze: usize,

    /// Ease the perturbation magnitude in at the start of the run.
    #[arg(long = "ramp-in")]
    ramp_in: bool,

    /// Ease the perturbation magnitude out before the freeze period.
    #[arg(long = "ramp-out")]
    ramp_out: bool,

    /// Keep only the forward frame sequence (no reverse loop pass).
    #[arg(long = "forward-only")]
    forward_only: bool,

    /// RNG seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of recorded animation frames per shape.
    #[arg(long = "num-frames", default_value_t = DEFAULTS.num_frames)]
    num_frames: usize,

    /// Write the final morphed dataset of each shape as JSON.
    #[arg(long = "write-data")]
    write_data: bool,

    /// Keep every sampled frame of each shape as a JSON file.
    #[arg(long = "keep-frames")]
    keep_frames: bool,

    /// Run independent shape morphs in parallel.
    #[arg(long)]
    parallel: bool,

    /// Symmetric bounds: MIN MAX applied to both axes.
    #[arg(
        long,
        num_args = 2,
        value_names = ["MIN", "MAX"],
        allow_negative_numbers = true,
        conflicts_with = "xy_bounds"
    )]
    bounds: Option<Vec<f64>>,

    /// Separate bounds per axis: XMIN XMAX YMIN YMAX.
    #[arg(
        long = "xy-bounds",
        num_args = 4,
        value_names = ["XMIN", "XMAX", "YMIN", "YMAX"],
        allow_negative_numbers = true
    )]
    xy_bounds: Option<Vec<f64>>,

    /// Output directory for --write-data / --keep-frames.
    #[arg(long = "output-dir", default_value = DEFAULTS.output_dir)]
    output_dir: PathBuf,
}

impl Cli {
    fn axis_bounds(&self) -> (Option<(f64, f64)>, Option<(f64, f64)>) {
        if let Some(b) = &self.bounds {
            let range = (b[0], b[1]);
            (Some(range), Some(range))
        } else if let Some(b) = &self.xy_bounds {
            (Some((b[0], b[1])), Some((b[2], b[3])))
        } else {
            (None, None)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = RunConfig {
        iterations: cli.iterations,
        decimals: cli.decimals,
        freeze_for: cli.freeze,
        ramp_in: cli.ramp_in,
        ramp_out: cli.ramp_out,
        forward_only: cli.forward_only,
        num_frames: cli.num_frames,
        seed: cli.seed,
    };
    config.validate()?;

    let (x_bounds, y_bounds) = cli.axis_bounds();
    let source = DataSource::resolve(&cli.start_shape);
    let start = DataLoader::load(&source, x_bounds, y_bounds)?;

    let registry = ShapeRegistry::with_builtin_shapes();
    let opts = RunnerOpts {
        parallel: cli.parallel,
    };

    let runs = morph_all(
        &start,
        &cli.target_shape,
        &registry,
        &config,
        &opts,
        &CancelToken::new(),
        |i, n| eprintln!("Morphing shape {i} of {n}"),
    )?;

    if cli.write_data || cli.keep_frames {
        std::fs::create_dir_all(&cli.output_dir)
            .with_context(|| format!("create output dir '{}'", cli.output_dir.display()))?;
        for run in &runs {
            persist_run(&cli, &start.name, run)?;
        }
    }

    Ok(())
}

fn persist_run(cli: &Cli, start_name: &str, run: &ShapeRun) -> anyhow::Result<()> {
    let stem = format!("{start_name}-to-{}", run.shape_name);

    if cli.write_data {
        let path = cli.output_dir.join(format!("{stem}-data.json"));
        write_json(&path, &run.output.dataset)?;
        eprintln!("wrote {}", path.display());
    }

    if cli.keep_frames {
        let frames_dir = cli.output_dir.join(format!("{stem}-frames"));
        std::fs::create_dir_all(&frames_dir)
            .with_context(|| format!("create frames dir '{}'", frames_dir.display()))?;
        for (seq, frame) in run.output.frames.iter().enumerate() {
            write_json(&frames_dir.join(format!("frame-{seq:04}.json")), frame)?;
        }
        eprintln!(
            "wrote {} frames to {}",
            run.output.frames.len(),
            frames_dir.display()
        );
    }

    Ok(())
}

fn write_json<T: serde::Serialize>(path: &std::path::Path, value: &T) -> anyhow::Result<()> {
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), value)
        .with_context(|| format!("serialize '{}'", path.display()))?;
    Ok(())
}
