use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use pathmorph::{
    BlendOptions, Ease, MorphSequence, MorphThreading, Shape, TimePolicy, ViewBox, first_path_data,
    interpolate, parse_path, render, render_parallel, resolve, serialize_shape, wrap_document,
};

#[derive(Parser, Debug)]
#[command(name = "pathmorph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a full morph sequence as numbered SVG files.
    Morph(MorphArgs),
    /// Print a single interpolated path string to stdout.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct MorphArgs {
    /// Source SVG document (the first <path> element is used).
    #[arg(long)]
    source: PathBuf,

    /// Target SVG document (the first <path> element is used).
    #[arg(long)]
    target: PathBuf,

    /// Output directory for morph_frame_{i}.svg files (created if missing).
    #[arg(long)]
    out_dir: PathBuf,

    /// Total frame count, endpoints inclusive.
    #[arg(long, default_value_t = 21)]
    frames: u32,

    /// Easing applied to t before blending.
    #[arg(long, value_enum, default_value_t = EaseChoice::Linear)]
    ease: EaseChoice,

    /// Handling of t values outside [0, 1].
    #[arg(long, value_enum, default_value_t = PolicyChoice::Clamp)]
    policy: PolicyChoice,

    /// Sequence configuration JSON; overrides --frames/--ease/--policy.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render frames on a rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker thread count for --parallel (rayon decides when unset).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Source SVG document (the first <path> element is used).
    #[arg(long)]
    source: PathBuf,

    /// Target SVG document (the first <path> element is used).
    #[arg(long)]
    target: PathBuf,

    /// Blend parameter.
    #[arg(long)]
    t: f64,

    /// Easing applied to t before blending.
    #[arg(long, value_enum, default_value_t = EaseChoice::Linear)]
    ease: EaseChoice,

    /// Handling of t values outside [0, 1].
    #[arg(long, value_enum, default_value_t = PolicyChoice::Clamp)]
    policy: PolicyChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EaseChoice {
    Linear,
    SmoothStep,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
}

impl From<EaseChoice> for Ease {
    fn from(c: EaseChoice) -> Self {
        match c {
            EaseChoice::Linear => Ease::Linear,
            EaseChoice::SmoothStep => Ease::SmoothStep,
            EaseChoice::InQuad => Ease::InQuad,
            EaseChoice::OutQuad => Ease::OutQuad,
            EaseChoice::InOutQuad => Ease::InOutQuad,
            EaseChoice::InCubic => Ease::InCubic,
            EaseChoice::OutCubic => Ease::OutCubic,
            EaseChoice::InOutCubic => Ease::InOutCubic,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyChoice {
    Clamp,
    Reject,
    Extrapolate,
}

impl From<PolicyChoice> for TimePolicy {
    fn from(c: PolicyChoice) -> Self {
        match c {
            PolicyChoice::Clamp => TimePolicy::Clamp,
            PolicyChoice::Reject => TimePolicy::Reject,
            PolicyChoice::Extrapolate => TimePolicy::Extrapolate,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Morph(args) => cmd_morph(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn load_first_path(path: &Path) -> anyhow::Result<Shape> {
    let svg = fs::read_to_string(path)
        .with_context(|| format!("read svg document '{}'", path.display()))?;
    let d = first_path_data(&svg)
        .with_context(|| format!("extract path data from '{}'", path.display()))?;
    Ok(Shape::new(parse_path(&d)?))
}

fn cmd_morph(args: MorphArgs) -> anyhow::Result<()> {
    let seq = match &args.config {
        Some(cfg_path) => {
            let text = fs::read_to_string(cfg_path)
                .with_context(|| format!("read sequence config '{}'", cfg_path.display()))?;
            serde_json::from_str::<MorphSequence>(&text)
                .with_context(|| format!("parse sequence config '{}'", cfg_path.display()))?
        }
        None => MorphSequence {
            frames: args.frames,
            times: None,
            policy: args.policy.into(),
            ease: args.ease.into(),
        },
    };

    let source = load_first_path(&args.source)?;
    let target = load_first_path(&args.target)?;
    let map = resolve(&source, &target)?;
    tracing::debug!(
        source_points = source.point_count(),
        target_points = target.point_count(),
        resolved_points = map.point_count(),
        "correspondence resolved"
    );

    let frames = if args.parallel {
        let threading = MorphThreading {
            threads: args.threads,
        };
        render_parallel(&map, &seq, &threading)?
    } else {
        render(&map, &seq)?
    };

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output directory '{}'", args.out_dir.display()))?;
    let view_box = ViewBox::default();
    for (i, d) in frames.iter().enumerate() {
        let file = args.out_dir.join(format!("morph_frame_{i}.svg"));
        fs::write(&file, wrap_document(d, view_box))
            .with_context(|| format!("write frame '{}'", file.display()))?;
        println!("wrote {}", file.display());
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let source = load_first_path(&args.source)?;
    let target = load_first_path(&args.target)?;
    let map = resolve(&source, &target)?;
    let opts = BlendOptions {
        policy: args.policy.into(),
        ease: args.ease.into(),
    };
    let shape = interpolate(&map, args.t, &opts)?;
    println!("{}", serialize_shape(&shape));
    Ok(())
}
