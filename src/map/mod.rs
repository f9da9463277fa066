//! Renders the origin and selected filming sites onto a self-contained
//! Leaflet HTML page.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::geo::{haversine_m, Position};

/// Errors from writing the map artifact.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("invalid destination path: {0}")]
    InvalidDestination(String),

    #[error("failed to write map: {0}")]
    Io(#[from] std::io::Error),
}

/// Whether a destination is acceptable for the map artifact: non-empty
/// with an `.html` extension.
pub fn is_html_destination(dest: &Path) -> bool {
    if dest.as_os_str().is_empty() {
        return false;
    }
    dest.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
}

/// Write the map page to `dest`: one marker per site, an origin marker,
/// and a circle around the origin reaching the farthest site.
///
/// An invalid destination reports a diagnostic and writes nothing.
pub fn render_map(dest: &Path, origin: Position, points: &[Position]) -> Result<(), MapError> {
    if !is_html_destination(dest) {
        println!("Error: invalid destination path");
        return Err(MapError::InvalidDestination(dest.display().to_string()));
    }

    fs::write(dest, map_page(origin, points))?;
    info!(dest = %dest.display(), sites = points.len(), "map written");
    Ok(())
}

/// Build the Leaflet page. Tiles come from the public OSM tile server;
/// everything else is inline.
fn map_page(origin: Position, points: &[Position]) -> String {
    let radius_m = points
        .iter()
        .map(|point| haversine_m(origin, *point))
        .fold(0.0_f64, f64::max);

    let mut markers = String::new();
    for point in points {
        markers.push_str(&format!(
            "        L.marker([{:.6}, {:.6}]).addTo(sites);\n",
            point.latitude, point.longitude
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Filming locations</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <style>
        html, body {{ height: 100%; margin: 0; }}
        #map {{ height: 100%; }}
    </style>
</head>
<body>
    <div id="map"></div>
    <script>
        var map = L.map('map').setView([{origin_lat:.6}, {origin_lon:.6}], 10);
        L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
            maxZoom: 19,
            attribution: '&copy; OpenStreetMap contributors'
        }}).addTo(map);

        var sites = L.featureGroup().addTo(map);
{markers}
        L.marker([{origin_lat:.6}, {origin_lon:.6}])
            .bindPopup('You are here')
            .addTo(map);
        L.circle([{origin_lat:.6}, {origin_lon:.6}], {{
            radius: {radius_m:.1},
            color: '#3388ff',
            fillOpacity: 0.05
        }}).addTo(map);

        if (sites.getLayers().length > 0) {{
            map.fitBounds(sites.getBounds().pad(0.2));
        }}
    </script>
</body>
</html>
"#,
        origin_lat = origin.latitude,
        origin_lon = origin.longitude,
        markers = markers,
        radius_m = radius_m,
    )
}
