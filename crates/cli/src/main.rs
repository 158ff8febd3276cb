//! Shoremap CLI - static survey maps on a satellite basemap

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use shoremap_core::{BoundingBox, PointTable};
use shoremap_imagery::{blocking::fetch_basemap_blocking, FetchOptions, ImageryService};
use shoremap_render::{Color, Corner, MapRenderer, MapStyle, ScaleUnits};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "shoremap")]
#[command(author, version, about = "Render static survey maps on a satellite basemap", long_about = None)]
struct Cli {
    /// Output image path (format from extension: .png, .jpg, ...)
    output: PathBuf,

    /// Legend label for the filled region series
    map_label: String,

    /// Legend label for the point marker series
    points_label: String,

    /// South latitude of the map extent
    south: f64,

    /// West longitude of the map extent
    west: f64,

    /// North latitude of the map extent
    north: f64,

    /// East longitude of the map extent
    east: f64,

    /// Input data files (CSV or XML with lon/lat columns), one per site
    #[arg(required = true, num_args = 1..)]
    inputs: Vec<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Canvas width in pixels
    #[arg(long, default_value = "1500")]
    width: u32,

    /// Basemap service: satellite, topo, or street
    #[arg(long, default_value = "satellite")]
    service: ImageryService,

    /// Fill color for site polygons (name or #rrggbb)
    #[arg(long, default_value = "green")]
    bed_color: Color,

    /// Fill opacity in 0..1
    #[arg(long, default_value = "0.5")]
    bed_alpha: f32,

    /// Marker color (name or #rrggbb)
    #[arg(long, default_value = "white")]
    point_color: Color,

    /// Marker opacity in 0..1
    #[arg(long, default_value = "0.9")]
    point_alpha: f32,

    /// Marker radius in pixels
    #[arg(long, default_value = "3")]
    point_size: f32,

    /// Scale-bar ground length, in --scale-units
    #[arg(long, default_value = "200")]
    scale_length: f64,

    /// Scale-bar units: m or km
    #[arg(long, default_value = "m")]
    scale_units: ScaleUnits,

    /// Legend corner: lower-right, lower-left, upper-right, upper-left
    #[arg(long, default_value = "lower-right")]
    legend_loc: Corner,

    /// TTF font for labels (default: probe common system locations)
    #[arg(long)]
    font: Option<PathBuf>,
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn style_from(cli: &Cli) -> MapStyle {
    MapStyle {
        width_px: cli.width,
        bed_color: cli.bed_color,
        bed_alpha: cli.bed_alpha,
        point_color: cli.point_color,
        point_alpha: cli.point_alpha,
        point_size: cli.point_size,
        scale_length: cli.scale_length,
        scale_units: cli.scale_units,
        legend_loc: cli.legend_loc,
        font_path: cli.font.clone(),
        ..MapStyle::default()
    }
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let start = Instant::now();

    // Inputs are loaded before any network or drawing work, so a bad path
    // fails fast.
    let mut tables = Vec::with_capacity(cli.inputs.len());
    for path in &cli.inputs {
        let table = PointTable::load(path).context("Failed to load input table")?;
        info!("{}: {} coordinate rows", path.display(), table.len());
        tables.push(table);
    }

    let bbox = BoundingBox::new(cli.south, cli.west, cli.north, cli.east);
    let mut renderer =
        MapRenderer::new(bbox, style_from(&cli)).context("Failed to set up render context")?;
    info!(
        "canvas: {} x {}",
        renderer.projection().width(),
        renderer.projection().height()
    );

    let pb = spinner("Fetching basemap imagery...");
    let options = FetchOptions {
        service: cli.service,
        ..FetchOptions::default()
    };
    let basemap = fetch_basemap_blocking(renderer.projection(), &options)
        .context("Failed to fetch basemap imagery")?;
    pb.finish_and_clear();
    renderer.set_background(basemap);

    renderer
        .draw_layers(&tables, &cli.map_label, &cli.points_label)
        .context("Failed to draw site layers")?;
    renderer.draw_scale_bar();
    renderer.draw_north_arrow();
    renderer.draw_legend();

    let pb = spinner("Writing output...");
    renderer.save(&cli.output).context("Failed to save map")?;
    pb.finish_and_clear();

    println!("Map saved to: {}", cli.output.display());
    println!("  Processing time: {:.2?}", start.elapsed());

    Ok(())
}
