//! Point-marker map of a trail.
//!
//! [`create_map`] places one marker per location point, in input order, on a
//! blank map. The map has no centre or zoom of its own; showing it is up to
//! the caller, either as a standalone Leaflet page ([`MarkerMap::to_html`]) or
//! as GeoJSON (`geojson` feature).

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, TrailError};
use crate::extract;
use crate::records::LocationPoint;

const LEAFLET_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css";
const LEAFLET_JS: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js";
const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// A single map marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
}

/// A map holding markers in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerMap {
    markers: Vec<Marker>,
}

impl MarkerMap {
    /// A blank map without markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a marker at `(latitude, longitude)`.
    pub fn add_marker(&mut self, latitude: f64, longitude: f64) {
        self.markers.push(Marker {
            latitude,
            longitude,
        });
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Render the map as a standalone HTML page using Leaflet.
    ///
    /// The view fits the markers; a map without markers shows the whole world.
    pub fn to_html(&self) -> String {
        let positions: Vec<[f64; 2]> = self
            .markers
            .iter()
            .map(|m| [m.latitude, m.longitude])
            .collect();
        // Serializing a Vec<[f64; 2]> cannot fail; non-finite values become null.
        let positions = serde_json::to_string(&positions).unwrap_or_else(|_| "[]".to_string());

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Trail map</title>
  <link rel="stylesheet" href="{css}" crossorigin="anonymous" referrerpolicy="no-referrer" />
  <script src="{js}" crossorigin="anonymous" referrerpolicy="no-referrer"></script>
  <style>
    html, body, #map {{ height: 100%; margin: 0; }}
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
    const map = L.map('map');
    L.tileLayer('{tiles}', {{
      maxZoom: 19,
      attribution: '&copy; OpenStreetMap contributors'
    }}).addTo(map);

    const markers = {positions};
    markers.forEach(function (p) {{ L.marker(p).addTo(map); }});

    if (markers.length > 0) {{
      map.fitBounds(markers, {{ maxZoom: 16, padding: [20, 20] }});
    }} else {{
      map.setView([0, 0], 1);
    }}
  </script>
</body>
</html>
"#,
            css = LEAFLET_CSS,
            js = LEAFLET_JS,
            tiles = TILE_URL,
            positions = positions,
        )
    }

    /// Write the HTML page to `path`.
    pub fn save_html<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_html())?;
        Ok(())
    }

    /// The markers as a GeoJSON `FeatureCollection` of `Point` features.
    ///
    /// Coordinates are in GeoJSON order `[longitude, latitude]`; each feature
    /// carries its marker position in the `index` property.
    #[cfg(feature = "geojson")]
    pub fn to_geojson(&self) -> geojson::FeatureCollection {
        use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};

        let features = self
            .markers
            .iter()
            .enumerate()
            .map(|(index, m)| {
                let mut properties = JsonObject::new();
                properties.insert("index".to_string(), index.into());
                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::Point(vec![m.longitude, m.latitude]))),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

impl fmt::Display for MarkerMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MarkerMap with {} markers", self.markers.len())
    }
}

/// Build a map with one marker per location point, in input order.
///
/// # Errors
///
/// Returns [`TrailError::MissingCoordinate`] for the first point without a
/// latitude or longitude.
pub fn create_map(points: &[LocationPoint]) -> Result<MarkerMap> {
    let mut map = MarkerMap::new();
    for (index, pair) in extract::coordinates(points).into_iter().enumerate() {
        match pair {
            (Some(lat), Some(lon)) => map.add_marker(lat, lon),
            _ => return Err(TrailError::MissingCoordinate { index }),
        }
    }
    tracing::debug!(markers = map.len(), "Map created");
    Ok(map)
}
