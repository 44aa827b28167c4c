//! Chart data and inline-SVG geometry for Overview and Analytics.
//!
//! All series are fixed sample data. Geometry functions return SVG path
//! strings in a caller-chosen viewBox so the views stay declarative.

use std::f64::consts::PI;

// =============================================================================
// Data
// =============================================================================

/// Monthly point of the Growth Trends chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPoint {
    pub month: &'static str,
    pub streams: u32,
    pub views: u32,
}

pub const GROWTH: [GrowthPoint; 7] = [
    GrowthPoint { month: "Jan", streams: 4000, views: 1200 },
    GrowthPoint { month: "Feb", streams: 5000, views: 1800 },
    GrowthPoint { month: "Mar", streams: 3500, views: 1400 },
    GrowthPoint { month: "Apr", streams: 7800, views: 2100 },
    GrowthPoint { month: "May", streams: 6200, views: 3200 },
    GrowthPoint { month: "Jun", streams: 8900, views: 4100 },
    GrowthPoint { month: "Jul", streams: 12400, views: 5600 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCount {
    pub name: &'static str,
    pub count: u32,
}

pub const TOP_COUNTRIES: [CountryCount; 5] = [
    CountryCount { name: "Bangladesh", count: 8500 },
    CountryCount { name: "India", count: 4200 },
    CountryCount { name: "USA", count: 1200 },
    CountryCount { name: "UK", count: 800 },
    CountryCount { name: "Others", count: 500 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformShare {
    pub name: &'static str,
    pub percent: u32,
    pub color: &'static str,
}

pub const PLATFORM_SHARES: [PlatformShare; 4] = [
    PlatformShare { name: "Spotify", percent: 45, color: "#1DB954" },
    PlatformShare { name: "Apple Music", percent: 25, color: "#FA243C" },
    PlatformShare { name: "YouTube Music", percent: 20, color: "#FF0000" },
    PlatformShare { name: "Others", percent: 10, color: "#6366f1" },
];

/// Label/value tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: &'static str,
}

pub const AUDIENCE_STATS: [StatTile; 4] = [
    StatTile { label: "Avg. Listen Time", value: "3:15 min" },
    StatTile { label: "Save Rate", value: "18.4%" },
    StatTile { label: "Playlist Adds", value: "4,520" },
    StatTile { label: "Unique Listeners", value: "8,900" },
];

// =============================================================================
// Geometry
// =============================================================================

/// Line and closed-area paths for one series.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaPath {
    pub line: String,
    pub area: String,
}

/// Plot `values` across a `width` x `height` box scaled against `max`.
///
/// The first value sits on the left edge, the last on the right edge.
pub fn area_path(values: &[u32], max: u32, width: f64, height: f64) -> AreaPath {
    if values.is_empty() || max == 0 {
        let baseline = format!("M0,{h:.1} L{w:.1},{h:.1}", h = height, w = width);
        return AreaPath { line: baseline.clone(), area: baseline };
    }

    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };

    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = height - (f64::from(*v) / f64::from(max)).min(1.0) * height;
            (i as f64 * step, y)
        })
        .collect();

    let line = points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| format!("{}{:.1},{:.1}", if i == 0 { "M" } else { "L" }, x, y))
        .collect::<Vec<_>>()
        .join(" ");

    let last_x = points.last().map(|(x, _)| *x).unwrap_or(0.0);
    let area = format!("{} L{:.1},{:.1} L0,{:.1} Z", line, last_x, height, height);

    AreaPath { line, area }
}

/// Round `value` up to a tidy axis maximum (1, 2, 2.5 or 5 times a power of ten).
pub fn nice_ceiling(value: u32) -> u32 {
    if value == 0 {
        return 1;
    }
    let magnitude = 10f64.powi((f64::from(value)).log10().floor() as i32);
    let ratio = f64::from(value) / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|s| ratio <= *s)
        .unwrap_or(10.0);
    (step * magnitude).round() as u32
}

/// Horizontal bar length as a percentage of the largest count.
pub fn bar_percent(count: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (f64::from(count) / f64::from(max) * 100.0).min(100.0)
}

/// Donut segment paths for `shares`, clockwise from 12 o'clock.
///
/// `pad_degrees` is left empty between neighbouring segments.
pub fn donut_segments(
    shares: &[u32],
    center: (f64, f64),
    inner: f64,
    outer: f64,
    pad_degrees: f64,
) -> Vec<String> {
    let total: u32 = shares.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let pad = if shares.len() > 1 { pad_degrees } else { 0.0 };
    let available = 360.0 - pad * shares.len() as f64;
    let mut start = 0.0;

    shares
        .iter()
        .map(|share| {
            let sweep = available * f64::from(*share) / f64::from(total);
            let path = annular_sector(center, inner, outer, start, start + sweep);
            start += sweep + pad;
            path
        })
        .collect()
}

fn polar((cx, cy): (f64, f64), radius: f64, degrees: f64) -> (f64, f64) {
    let radians = (degrees - 90.0) * PI / 180.0;
    (cx + radius * radians.cos(), cy + radius * radians.sin())
}

fn annular_sector(center: (f64, f64), inner: f64, outer: f64, from: f64, to: f64) -> String {
    if to - from >= 360.0 - f64::EPSILON {
        return full_ring(center, inner, outer, from);
    }
    let large_arc = if to - from > 180.0 { 1 } else { 0 };
    let (ox1, oy1) = polar(center, outer, from);
    let (ox2, oy2) = polar(center, outer, to);
    let (ix2, iy2) = polar(center, inner, to);
    let (ix1, iy1) = polar(center, inner, from);

    format!(
        "M{:.2},{:.2} A{},{} 0 {} 1 {:.2},{:.2} L{:.2},{:.2} A{},{} 0 {} 0 {:.2},{:.2} Z",
        ox1, oy1, outer, outer, large_arc, ox2, oy2, ix2, iy2, inner, inner, large_arc, ix1, iy1
    )
}

/// A whole ring, each edge drawn as two half-turn arcs.
fn full_ring(center: (f64, f64), inner: f64, outer: f64, from: f64) -> String {
    let (ox1, oy1) = polar(center, outer, from);
    let (ox2, oy2) = polar(center, outer, from + 180.0);
    let (ix1, iy1) = polar(center, inner, from);
    let (ix2, iy2) = polar(center, inner, from + 180.0);

    format!(
        "M{:.2},{:.2} A{},{} 0 0 1 {:.2},{:.2} A{},{} 0 0 1 {:.2},{:.2} Z \
         M{:.2},{:.2} A{},{} 0 0 0 {:.2},{:.2} A{},{} 0 0 0 {:.2},{:.2} Z",
        ox1, oy1, outer, outer, ox2, oy2, outer, outer, ox1, oy1,
        ix1, iy1, inner, inner, ix2, iy2, inner, inner, ix1, iy1
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_path_endpoints() {
        let path = area_path(&[0, 50, 100], 100, 300.0, 100.0);
        assert_eq!(path.line, "M0.0,100.0 L150.0,50.0 L300.0,0.0");
        assert!(path.area.ends_with("L300.0,100.0 L0,100.0 Z"));
    }

    #[test]
    fn test_area_path_degenerate() {
        let path = area_path(&[], 100, 300.0, 100.0);
        assert_eq!(path.line, "M0,100.0 L300.0,100.0");
        let single = area_path(&[50], 100, 300.0, 100.0);
        assert_eq!(single.line, "M0.0,50.0");
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(12400), 20000);
        assert_eq!(nice_ceiling(8500), 10000);
        assert_eq!(nice_ceiling(2100), 2500);
        assert_eq!(nice_ceiling(0), 1);
    }

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(8500, 8500), 100.0);
        assert!((bar_percent(4250, 8500) - 50.0).abs() < 1e-9);
        assert_eq!(bar_percent(1, 0), 0.0);
    }

    #[test]
    fn test_donut_segments_cover_shares() {
        let shares: Vec<u32> = PLATFORM_SHARES.iter().map(|s| s.percent).collect();
        let segments = donut_segments(&shares, (100.0, 100.0), 60.0, 100.0, 5.0);
        assert_eq!(segments.len(), 4);
        assert!(segments.iter().all(|s| s.starts_with('M') && s.ends_with('Z')));
        // Spotify starts at 12 o'clock on the outer ring
        assert!(segments[0].starts_with("M100.00,0.00"));
        assert!(donut_segments(&[], (0.0, 0.0), 1.0, 2.0, 0.0).is_empty());
    }

    #[test]
    fn test_shares_total_hundred() {
        assert_eq!(PLATFORM_SHARES.iter().map(|s| s.percent).sum::<u32>(), 100);
        assert_eq!(GROWTH.iter().map(|p| p.streams).max(), Some(12400));
    }

    #[test]
    fn test_single_share_draws_full_ring() {
        let segments = donut_segments(&[100], (100.0, 100.0), 60.0, 100.0, 5.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(
            segments[0],
            "M100.00,0.00 A100,100 0 0 1 100.00,200.00 A100,100 0 0 1 100.00,0.00 Z \
             M100.00,40.00 A60,60 0 0 0 100.00,160.00 A60,60 0 0 0 100.00,40.00 Z"
        );
    }
}
