//! boxflow - lay out a scene file and print the boxes.
//!
//! Run with: cargo run -- scene.json --draw
//!
//! Set `RUST_LOG=boxflow=debug` to see which sizing branch a layout took.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use boxflow::{
    detect_preview_size, render_layout, write_grid, BoxLayoutOutput, Rect, Scale, Scene,
};

#[derive(Debug, Parser)]
#[command(name = "boxflow", version, about = "Lay out an hbox/vbox scene")]
struct Cli {
    /// Scene file (JSON).
    scene: PathBuf,

    /// Print the result as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Draw a terminal preview after the boxes.
    #[arg(long)]
    draw: bool,

    /// Pixels per terminal column in the preview.
    #[arg(long, default_value_t = 10)]
    scale: u16,

    /// Disable colour in the preview.
    #[arg(long)]
    no_color: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    inner: Rect,
    max_cross: i32,
    shortfall: i32,
    flags: Vec<&'static str>,
    boxes: Vec<ReportBox<'a>>,
}

#[derive(Serialize)]
struct ReportBox<'a> {
    label: &'a str,
    #[serde(flatten)]
    rect: Rect,
}

fn report<'a>(output: &BoxLayoutOutput, labels: &'a [String]) -> Report<'a> {
    Report {
        inner: output.inner,
        max_cross: output.meta.max_cross,
        shortfall: output.meta.shortfall,
        flags: output.meta.flags.iter_names().map(|(name, _)| name).collect(),
        boxes: labels
            .iter()
            .zip(&output.rects)
            .map(|(label, rect)| ReportBox { label, rect: *rect })
            .collect(),
    }
}

fn print_table<W: Write>(out: &mut W, report: &Report<'_>) -> io::Result<()> {
    writeln!(out, "{:<12} {:>6} {:>6} {:>6} {:>6}", "item", "x", "y", "width", "height")?;
    for b in &report.boxes {
        writeln!(
            out,
            "{:<12} {:>6} {:>6} {:>6} {:>6}",
            b.label, b.rect.x, b.rect.y, b.rect.width, b.rect.height
        )?;
    }
    writeln!(
        out,
        "inner {}x{}  max cross {}  flags [{}]",
        report.inner.width,
        report.inner.height,
        report.max_cross,
        report.flags.join(", ")
    )
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let scene = Scene::load(&cli.scene)
        .with_context(|| format!("loading scene {}", cli.scene.display()))?;
    let output = scene.layout();
    let labels = scene.labels();
    let report = report(&output, &labels);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        print_table(&mut out, &report)?;
    }

    if cli.draw {
        writeln!(out)?;
        let bounds = detect_preview_size();
        let grid = render_layout(&output, &labels, Scale::uniform(cli.scale), bounds);
        write_grid(&mut out, &grid, !cli.no_color)?;
    }

    Ok(())
}
