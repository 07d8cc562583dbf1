//! Trail scatter plot.
//!
//! [`plot_trail`] draws every location point of a trail at
//! `(longitude, latitude)`, coloured by elevation on the warm "Sunsetdark"
//! sequential scale, and titles the chart with the trail name of the first
//! point. Output is an SVG document rendered in memory.

use std::path::Path;

use plotters::prelude::*;

use crate::error::{Result, TrailError};
use crate::extract;
use crate::records::LocationPoint;

/// Chart size in pixels.
pub const PLOT_SIZE: (u32, u32) = (1000, 700);

/// Sunsetdark colour stops, lowest elevation first.
const SUNSET_DARK: [(u8, u8, u8); 7] = [
    (252, 222, 156),
    (250, 164, 118),
    (240, 116, 110),
    (227, 79, 111),
    (220, 57, 119),
    (185, 37, 122),
    (124, 29, 111),
];

/// Colour of points without an elevation.
const MISSING_ELEVATION: RGBColor = RGBColor(160, 160, 160);

const MARKER_RADIUS: i32 = 5;
const COLORBAR_MARGIN: i32 = 120;
const COLORBAR_STEPS: i32 = 64;

/// A rendered trail scatter plot.
#[derive(Debug, Clone)]
pub struct TrailPlot {
    title: Option<String>,
    svg: String,
    markers: usize,
    elevation_range: Option<(f64, f64)>,
}

impl TrailPlot {
    /// Chart title: the trail name of the first point.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The SVG document.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Number of points drawn. Points without a position are left out.
    pub fn len(&self) -> usize {
        self.markers
    }

    /// `true` if no point had a position.
    pub fn is_empty(&self) -> bool {
        self.markers == 0
    }

    /// Lowest and highest elevation among the points, if any had one.
    pub fn elevation_range(&self) -> Option<(f64, f64)> {
        self.elevation_range
    }

    /// Write the SVG document to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, &self.svg)?;
        Ok(())
    }
}

/// Plot a trail as a longitude/latitude scatter coloured by elevation.
///
/// # Errors
///
/// Returns [`TrailError::EmptyTrail`] if `points` is empty, and
/// [`TrailError::Plot`] if the drawing backend fails.
///
/// # Example
///
/// ```ignore
/// let points = client.get_trail_points("Combe Martin Circular")?;
/// let plot = trails::plot::plot_trail(&points)?;
/// plot.save("combe_martin.svg")?;
/// ```
pub fn plot_trail(points: &[LocationPoint]) -> Result<TrailPlot> {
    let first = points.first().ok_or(TrailError::EmptyTrail)?;
    let title = first.trail_name.clone();

    let elevations = extract::elevations(points);
    let (lats, lons) = extract::lat_longs(points);
    let elevation_range = value_range(elevations.iter().flatten().copied());

    let markers: Vec<(f64, f64, RGBColor)> = lons
        .iter()
        .zip(&lats)
        .zip(&elevations)
        .filter_map(|((lon, lat), elevation)| {
            let color = match (elevation, elevation_range) {
                (Some(e), Some((min, max))) => sunset_dark(normalize(*e, min, max)),
                _ => MISSING_ELEVATION,
            };
            Some(((*lon)?, (*lat)?, color))
        })
        .collect();

    tracing::debug!(
        points = points.len(),
        drawn = markers.len(),
        title = title.as_deref().unwrap_or(""),
        "Plotting trail"
    );

    let svg = render_svg(title.as_deref(), &markers, elevation_range)?;

    Ok(TrailPlot {
        title,
        svg,
        markers: markers.len(),
        elevation_range,
    })
}

/// Colour for `t` in `[0, 1]` on the Sunsetdark scale.
///
/// Values outside the interval are clamped.
pub fn sunset_dark(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (SUNSET_DARK.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(SUNSET_DARK.len() - 2);
    let frac = scaled - lower as f64;

    let (r0, g0, b0) = SUNSET_DARK[lower];
    let (r1, g1, b1) = SUNSET_DARK[lower + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;

    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        (value - min) / (max - min)
    } else {
        0.0
    }
}

fn value_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |range, v| match range {
        None => Some((v, v)),
        Some((min, max)) => Some((min.min(v), max.max(v))),
    })
}

/// Axis range with a little padding so edge markers are not clipped.
fn padded(range: Option<(f64, f64)>) -> std::ops::Range<f64> {
    let (min, max) = range.unwrap_or((0.0, 1.0));
    let span = max - min;
    let pad = if span > 0.0 { span * 0.05 } else { 0.001 };
    (min - pad)..(max + pad)
}

fn plot_err<E: std::fmt::Display>(e: E) -> TrailError {
    TrailError::Plot(e.to_string())
}

fn render_svg(
    title: Option<&str>,
    markers: &[(f64, f64, RGBColor)],
    elevation_range: Option<(f64, f64)>,
) -> Result<String> {
    let x_range = padded(value_range(markers.iter().map(|m| m.0)));
    let y_range = padded(value_range(markers.iter().map(|m| m.1)));

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, PLOT_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(20)
            .margin_right(COLORBAR_MARGIN)
            .x_label_area_size(50)
            .y_label_area_size(70);
        if let Some(title) = title {
            builder.caption(title, ("sans-serif", 24).into_font());
        }

        let mut chart = builder
            .build_cartesian_2d(x_range, y_range)
            .map_err(plot_err)?;

        chart
            .configure_mesh()
            .x_desc("Longitude")
            .y_desc("Latitude")
            .x_label_formatter(&|v| format!("{:.3}", v))
            .y_label_formatter(&|v| format!("{:.3}", v))
            .draw()
            .map_err(plot_err)?;

        chart
            .draw_series(
                markers
                    .iter()
                    .map(|&(x, y, color)| Circle::new((x, y), MARKER_RADIUS, color.filled())),
            )
            .map_err(plot_err)?;

        if let Some((min, max)) = elevation_range {
            draw_colorbar(&root, min, max)?;
        }

        root.present().map_err(plot_err)?;
    }

    Ok(svg)
}

fn draw_colorbar<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    min: f64,
    max: f64,
) -> Result<()> {
    let (width, height) = root.dim_in_pixel();
    let (width, height) = (width as i32, height as i32);

    let left = width - COLORBAR_MARGIN + 30;
    let right = left + 20;
    let top = 70;
    let bottom = height - 70;
    let step = ((bottom - top) / COLORBAR_STEPS).max(1);

    // Highest elevation at the top.
    for i in 0..COLORBAR_STEPS {
        let y0 = bottom - (i + 1) * step;
        let t = (i as f64 + 0.5) / COLORBAR_STEPS as f64;
        root.draw(&Rectangle::new(
            [(left, y0), (right, y0 + step)],
            sunset_dark(t).filled(),
        ))
        .map_err(plot_err)?;
    }

    let bar_top = bottom - COLORBAR_STEPS * step;
    let font = ("sans-serif", 14).into_font();
    root.draw(&Text::new("elevation", (left - 10, bar_top - 24), font.clone()))
        .map_err(plot_err)?;
    root.draw(&Text::new(
        format!("{:.0}", max),
        (right + 6, bar_top - 6),
        font.clone(),
    ))
    .map_err(plot_err)?;
    root.draw(&Text::new(
        format!("{:.0}", min),
        (right + 6, bottom - 10),
        font,
    ))
    .map_err(plot_err)?;

    Ok(())
}
