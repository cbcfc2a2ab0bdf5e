use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "glyphcycle", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a glyph's Fourier coefficients and print them for reuse.
    Coeffs(CoeffsArgs),
    /// Render one frame of the epicycle animation as an SVG document.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct CoeffsArgs {
    /// Input SVG file (the first path element's `d` attribute is used).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Desired resample count (rounded up to a power of two).
    #[arg(long, default_value_t = 256)]
    points: usize,

    /// Keep only the strongest N coefficients (all when omitted).
    #[arg(long)]
    top: Option<usize>,

    /// Decimal places kept on real/imag/magnitude.
    #[arg(long, default_value_t = 3)]
    precision: u32,

    /// Skip normalization and keep raw path coordinates.
    #[arg(long)]
    no_normalize: bool,

    /// Sample by uniform arc length instead of fixed parameter steps.
    #[arg(long)]
    arc_length: bool,

    /// Print JSON instead of a Rust literal.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input SVG file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Cycle fraction in [0, 1) to render at.
    #[arg(long, default_value_t = 0.25)]
    t: f64,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Display scale applied to coefficient magnitudes.
    #[arg(long, default_value_t = 100.0)]
    scale: f64,

    /// Strongest coefficients to animate.
    #[arg(long, default_value_t = 20)]
    top: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Coeffs(args) => cmd_coeffs(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn cmd_coeffs(args: CoeffsArgs) -> anyhow::Result<()> {
    let options = glyphcycle::GlyphOptions {
        target_points: args.points,
        precision: args.precision,
        normalize: !args.no_normalize,
        strategy: if args.arc_length {
            glyphcycle::SampleStrategy::ArcLength
        } else {
            glyphcycle::SampleStrategy::FixedSteps
        },
    };

    let glyph = glyphcycle::process_svg_file(&args.in_path, &options)
        .with_context(|| format!("process '{}'", args.in_path.display()))?;

    let coefficients = match args.top {
        Some(k) => glyphcycle::select_top_k(&glyph.coefficients, k),
        None => glyph.coefficients,
    };

    if args.json {
        println!(
            "{}",
            glyphcycle::coefficients_json(&coefficients, args.precision)?
        );
    } else {
        println!(
            "{}",
            glyphcycle::coefficients_rust_literal(&coefficients, args.precision)
        );
    }

    eprintln!(
        "{} points sampled, {} resampled, {} coefficients kept",
        glyph.metadata.original_point_count,
        glyph.metadata.resampled_point_count,
        coefficients.len(),
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let viewport = glyphcycle::Viewport::new(args.width, args.height)?;
    let options = glyphcycle::AnimatorOptions {
        scale: args.scale,
        coefficients_used: args.top,
        ..glyphcycle::AnimatorOptions::default()
    };

    let mut driver = glyphcycle::CompositionDriver::new(viewport, options)?;
    driver.load_svg_file(
        "glyph",
        viewport.center(),
        &args.in_path,
        &glyphcycle::GlyphOptions::default(),
    )?;
    if let Some((id, err)) = driver.failed_glyphs().first() {
        anyhow::bail!("glyph '{id}' failed to load: {err}");
    }
    driver.start()?;

    let elapsed = Duration::from_secs_f64(args.t.rem_euclid(1.0) * options.period.as_secs_f64());
    let scene = driver.tick(elapsed)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, scene.to_svg())
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
