//! CLI commands implementation.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use url::Url;

use crate::config::{
    GeocoderConfig, DEFAULT_DESTINATION, DEFAULT_ENDPOINT, DEFAULT_REQUEST_DELAY_SECS,
    DEFAULT_SITE_COUNT,
};
use crate::dataset::read_dataset;
use crate::geo::Position;
use crate::geocode::{Geocoder, NominatimProvider, RequestGate};
use crate::map::{is_html_destination, render_map};
use crate::pipeline::nearest_filming_sites;

#[derive(Parser)]
#[command(name = "movienear")]
#[command(about = "Maps the filming locations of a year's movies nearest to you")]
#[command(version)]
pub struct Cli {
    /// Release year to look up.
    year: i32,

    /// Origin latitude in degrees.
    #[arg(allow_negative_numbers = true)]
    latitude: f64,

    /// Origin longitude in degrees.
    #[arg(allow_negative_numbers = true)]
    longitude: f64,

    /// Path to the films dataset.
    dataset: PathBuf,

    /// Map destination path (must end in .html).
    #[arg(long, default_value = DEFAULT_DESTINATION)]
    destination: PathBuf,

    /// How many nearest filming sites to keep.
    #[arg(short = 'n', long, default_value_t = DEFAULT_SITE_COUNT)]
    count: usize,

    /// Geocoding service search endpoint.
    #[arg(long, env = "MOVIENEAR_GEOCODER_URL", default_value = DEFAULT_ENDPOINT)]
    geocoder_url: Url,

    /// Minimum delay between geocoding requests, in seconds.
    #[arg(long, env = "MOVIENEAR_REQUEST_DELAY", default_value_t = DEFAULT_REQUEST_DELAY_SECS)]
    request_delay: f64,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !cli.dataset.is_file() || !is_html_destination(&cli.destination) {
        println!("Error: invalid paths");
        return Ok(());
    }

    let origin = Position::new(cli.latitude, cli.longitude);

    let index = read_dataset(&cli.dataset);
    // Lookup is by exact string match against the parser's year text.
    let locations: Vec<String> = index
        .get(&cli.year.to_string())
        .map(|set| set.iter().cloned().collect())
        .unwrap_or_default();
    info!(year = cli.year, locations = locations.len(), "dataset read");

    let config = GeocoderConfig {
        endpoint: cli.geocoder_url.clone(),
        min_interval: Duration::from_secs_f64(cli.request_delay.max(0.0)),
        ..GeocoderConfig::default()
    };
    let geocoder = Geocoder::new(
        NominatimProvider::new(&config),
        RequestGate::new(config.min_interval),
    );

    let progress = ProgressBar::new(locations.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );
    progress.set_message("Resolving locations...");

    let mut rng = rand::rng();
    let points = nearest_filming_sites(
        &geocoder,
        origin,
        &locations,
        cli.count,
        &mut rng,
        |location| {
            progress.set_message(location.to_string());
            progress.inc(1);
        },
    )
    .await;
    progress.finish_and_clear();

    render_map(&cli.destination, origin, &points)?;
    println!(
        "{} Map with {} filming sites written to {}",
        style("✓").green(),
        points.len(),
        style(cli.destination.display()).cyan()
    );

    Ok(())
}
