// File: crates/demo/src/main.rs
// Summary: Demo loads balance series (JSON/CSV) and renders hourly/daily/monthly charts to PNGs.

mod input;

use anyhow::{Context, Result};
use balance_chart_core::{BucketMode, ChartRenderer, RenderOptions};
use balance_chart_skia::SkiaSurface;
use clap::Parser;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "balance-chart", version, about = "Render electricity balance trend charts to PNG")]
struct Args {
    /// Series file: .json (rows or {hourly, daily, monthly}) or .csv (label,value)
    input: PathBuf,

    /// Bucket mode to render (hourly, daily, monthly)
    #[arg(long, default_value_t = BucketMode::Daily)]
    mode: BucketMode,

    /// Render every mode that has data instead of just --mode
    #[arg(long)]
    all: bool,

    /// Chart title; defaults to the mode's title
    #[arg(long)]
    title: Option<String>,

    /// Logical width
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Logical height
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// TOML file with render options (margin, theme, accent, ...)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme preset, overrides the config file
    #[arg(long)]
    theme: Option<String>,

    /// Output directory
    #[arg(long, default_value = "target/out")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut opts = match &args.config {
        Some(path) => load_options(path)?,
        None => RenderOptions::default(),
    };
    if let Some(theme) = &args.theme {
        opts.theme = theme.clone();
    }
    let renderer = ChartRenderer::new(opts);

    let set = input::load_chart_set(&args.input, args.mode)
        .with_context(|| format!("failed to load '{}'", args.input.display()))?;

    let modes: Vec<BucketMode> = if args.all { BucketMode::ALL.to_vec() } else { vec![args.mode] };

    // one surface per mode, keyed by the dashboard's surface ids
    let mut host: HashMap<String, SkiaSurface> = HashMap::new();
    for mode in &modes {
        host.insert(mode.default_target().to_string(), SkiaSurface::new(args.width, args.height)?);
    }

    for mode in modes {
        let mut spec = set.spec_for(mode);
        if spec.series.is_empty() {
            info!(%mode, "no data; skipped");
            continue;
        }
        if let Some(title) = &args.title {
            spec.title = title.clone();
        }
        renderer.render_spec(&mut host, &spec);

        let surface = host
            .get_mut(&spec.target)
            .with_context(|| format!("surface '{}' disappeared", spec.target))?;
        let out = out_name_with(&args.out, &args.input, mode.as_str());
        surface.save_png(&out).with_context(|| format!("writing {}", out.display()))?;
        let (w, h) = surface.pixel_size();
        info!(points = spec.series.len(), width = w, height = h, "Wrote {}", out.display());
    }

    Ok(())
}

fn load_options(path: &Path) -> Result<RenderOptions> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Produce output file name like <dir>/chart_<stem>_<suffix>.png
fn out_name_with(dir: &Path, input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    if stem.is_empty() {
        dir.join(format!("chart_{}.png", suffix))
    } else {
        dir.join(format!("chart_{}_{}.png", stem, suffix))
    }
}
