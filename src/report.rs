//! SVG reports of a solver run.
//!
//! Two charts are produced: a tour plot (closed route, city markers, the
//! start city highlighted, visiting positions as labels) and a line chart
//! of the best distance per generation. Both are plain SVG text.

use crate::city::City;
use crate::error::TspResult;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 640.0;
const MARGIN: f64 = 48.0;

/// Maps data coordinates into the drawing area, y axis pointing up.
#[derive(Debug, Clone, Copy)]
struct Frame {
    min_x: f64,
    min_y: f64,
    scale_x: f64,
    scale_y: f64,
}

impl Frame {
    fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64, equal_aspect: bool) -> Self {
        let span_x = (max_x - min_x).max(1e-9);
        let span_y = (max_y - min_y).max(1e-9);
        let mut scale_x = (WIDTH - 2.0 * MARGIN) / span_x;
        let mut scale_y = (HEIGHT - 2.0 * MARGIN) / span_y;
        if equal_aspect {
            let s = scale_x.min(scale_y);
            scale_x = s;
            scale_y = s;
        }
        Self {
            min_x,
            min_y,
            scale_x,
            scale_y,
        }
    }

    fn px(&self, x: f64) -> f64 {
        MARGIN + (x - self.min_x) * self.scale_x
    }

    fn py(&self, y: f64) -> f64 {
        HEIGHT - MARGIN - (y - self.min_y) * self.scale_y
    }
}

fn header(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(
        f,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    )?;
    writeln!(f, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
    writeln!(
        f,
        r#"<text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="16" text-anchor="middle">{}</text>"#,
        WIDTH / 2.0,
        MARGIN / 2.0,
        escape(title)
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Writes `points` as a blue polyline in frame coordinates.
fn polyline<I>(f: &mut fmt::Formatter<'_>, frame: &Frame, points: I) -> fmt::Result
where
    I: IntoIterator<Item = (f64, f64)>,
{
    f.write_str(r#"<polyline points=""#)?;
    for (i, (x, y)) in points.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{:.2},{:.2}", frame.px(x), frame.py(y))?;
    }
    writeln!(f, r#"" fill="none" stroke="blue" stroke-width="1.5"/>"#)
}

struct TourPlot<'c> {
    cities: &'c [City],
    title: &'c str,
}

impl fmt::Display for TourPlot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        header(f, self.title)?;
        let cities = self.cities;
        if let Some(first) = cities.first() {
            let (min_x, max_x, min_y, max_y) = cities.iter().fold(
                (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
                |(a, b, c, d), city| (a.min(city.x()), b.max(city.x()), c.min(city.y()), d.max(city.y())),
            );
            let frame = Frame::new(min_x, max_x, min_y, max_y, true);

            let closed = cities.iter().chain(std::iter::once(first));
            polyline(f, &frame, closed.map(|c| (c.x(), c.y())))?;

            for (pos, city) in cities.iter().enumerate() {
                let (cx, cy) = (frame.px(city.x()), frame.py(city.y()));
                let (r, fill) = if pos == 0 { (7.0, "green") } else { (4.0, "red") };
                writeln!(f, r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r}" fill="{fill}"/>"#)?;
                writeln!(
                    f,
                    r#"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="10">{pos}</text>"#,
                    cx + 5.0,
                    cy - 5.0
                )?;
            }
        }
        writeln!(f, "</svg>")
    }
}

struct HistoryChart<'d> {
    distances: &'d [f64],
    title: &'d str,
}

impl fmt::Display for HistoryChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        header(f, self.title)?;
        let distances = self.distances;
        if !distances.is_empty() {
            let (lo, hi) = distances
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &d| (lo.min(d), hi.max(d)));
            let last = (distances.len() - 1).max(1) as f64;
            let frame = Frame::new(0.0, last, lo, hi, false);

            writeln!(
                f,
                r#"<line x1="{m}" y1="{b}" x2="{r}" y2="{b}" stroke="black"/><line x1="{m}" y1="{m}" x2="{m}" y2="{b}" stroke="black"/>"#,
                m = MARGIN,
                b = HEIGHT - MARGIN,
                r = WIDTH - MARGIN,
            )?;
            writeln!(
                f,
                r#"<text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="10">{hi:.2}</text><text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="10">{lo:.2}</text>"#,
                4.0,
                MARGIN,
                4.0,
                HEIGHT - MARGIN,
            )?;
            let points = distances.iter().enumerate().map(|(g, &d)| (g as f64, d));
            polyline(f, &frame, points)?;
        }
        writeln!(f, "</svg>")
    }
}

/// Renders a closed tour through `cities` in the given order.
///
/// The first city is drawn as a larger green marker; the others are red.
/// Each city is labelled with its position in the tour.
pub fn tour_svg(cities: &[City], title: &str) -> String {
    TourPlot { cities, title }.to_string()
}

/// Renders best distance per generation as a line chart.
pub fn history_svg(distances: &[f64], title: &str) -> String {
    HistoryChart { distances, title }.to_string()
}

/// Paths of the files written by [`write_report`].
#[derive(Debug, Clone)]
pub struct ReportFiles {
    /// Plot of the initial best tour.
    pub initial_tour: PathBuf,
    /// Plot of the refined tour.
    pub optimized_tour: PathBuf,
    /// Best-distance history chart.
    pub distance: PathBuf,
}

/// Writes `initial_tour.svg`, `optimized_tour.svg` and `distance.svg` into
/// `dir`, creating it if needed.
///
/// # Errors
/// Returns [`TspError::Io`](crate::error::TspError::Io) on any file system
/// failure.
pub fn write_report(
    dir: &Path,
    initial: &[City],
    refined: &[City],
    history: &[f64],
) -> TspResult<ReportFiles> {
    fs::create_dir_all(dir)?;
    let files = ReportFiles {
        initial_tour: dir.join("initial_tour.svg"),
        optimized_tour: dir.join("optimized_tour.svg"),
        distance: dir.join("distance.svg"),
    };
    fs::write(&files.initial_tour, tour_svg(initial, "Initial tour"))?;
    fs::write(&files.optimized_tour, tour_svg(refined, "Optimized tour"))?;
    fs::write(&files.distance, history_svg(history, "Best distance per generation"))?;
    log::info!("report written to {}", dir.display());
    Ok(files)
}
