//! Pure geometry behind the chart component.
//!
//! Everything here is plain math over the value/label arrays so it can be
//! exercised off the browser. The component in `mod.rs` only turns these
//! numbers into SVG.

pub const DEFAULT_LINE_COLOR: &str = "#3b82f6";
pub const DEFAULT_BAR_COLOR: &str = "#3b82f6";
pub const DEFAULT_PIE_PALETTE: [&str; 5] = ["#3b82f6", "#f87171", "#34d399", "#fbbf24", "#a78bfa"];

/// Vertical headroom above the observed maximum so the tallest point does
/// not touch the chart edge.
const HEADROOM: f64 = 1.1;

/// Clamps mismatched `data`/`labels` to the shorter of the two.
pub fn truncate_series<'a>(data: &'a [f64], labels: &'a [String]) -> (&'a [f64], &'a [String]) {
    let n = data.len().min(labels.len());
    (&data[..n], &labels[..n])
}

/// Top of the vertical scale: 110% of the observed maximum, or 1.0 when
/// the series is empty or non-positive so later divisions stay finite.
pub fn scale_max(data: &[f64]) -> f64 {
    let max = data.iter().fold(0.0_f64, |acc, &v| acc.max(v));
    if max > 0.0 {
        max * HEADROOM
    } else {
        1.0
    }
}

/// Horizontal positions for n points across `width`. A single point sits
/// in the middle instead of dividing by n-1 = 0.
pub fn x_positions(n: usize, width: f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![width / 2.0],
        _ => {
            let step = width / (n - 1) as f64;
            (0..n).map(|i| i as f64 * step).collect()
        }
    }
}

/// Maps a value into plot coordinates (y grows downward).
pub fn y_position(value: f64, max: f64, height: f64) -> f64 {
    height - (value / max) * height
}

/// `points` attribute for the line polyline.
pub fn line_points(data: &[f64], width: f64, height: f64) -> String {
    let max = scale_max(data);
    x_positions(data.len(), width)
        .into_iter()
        .zip(data)
        .map(|(x, &v)| format!("{:.2},{:.2}", x, y_position(v, max, height)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One bar of a bar chart, in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bar layout: each value gets an equal slot, the bar fills 60% of it.
/// Negative values collapse to zero-height bars.
pub fn bar_rects(data: &[f64], width: f64, height: f64) -> Vec<Bar> {
    if data.is_empty() {
        return Vec::new();
    }
    let max = scale_max(data);
    let slot = width / data.len() as f64;
    data.iter()
        .enumerate()
        .map(|(i, &v)| {
            let h = ((v / max) * height).max(0.0);
            Bar {
                x: i as f64 * slot + slot * 0.2,
                y: height - h,
                width: slot * 0.6,
                height: h,
            }
        })
        .collect()
}

/// One pie slice: start angle and sweep, in radians. Angles start at
/// 12 o'clock and run clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub start_angle: f64,
    pub sweep: f64,
}

/// Slice sweeps normalized to each value's share of the total.
///
/// Every input index produces a slice (non-positive values get a zero
/// sweep) so slice indices stay aligned with labels and palette colors.
/// A non-positive total yields no slices at all.
pub fn pie_slices(data: &[f64]) -> Vec<PieSlice> {
    let total: f64 = data.iter().map(|&v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angle = -std::f64::consts::FRAC_PI_2;
    data.iter()
        .map(|&v| {
            let sweep = (v.max(0.0) / total) * std::f64::consts::TAU;
            let slice = PieSlice {
                start_angle: angle,
                sweep,
            };
            angle += sweep;
            slice
        })
        .collect()
}

/// SVG path for a pie slice. A sweep covering the full circle is drawn as
/// two half arcs, since a single arc with identical endpoints collapses.
pub fn pie_slice_path(cx: f64, cy: f64, r: f64, slice: &PieSlice) -> String {
    let x1 = cx + r * slice.start_angle.cos();
    let y1 = cy + r * slice.start_angle.sin();
    if slice.sweep >= std::f64::consts::TAU - 1e-9 {
        let x2 = 2.0 * cx - x1;
        let y2 = 2.0 * cy - y1;
        return format!(
            "M {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 1 1 {x2:.2} {y2:.2} A {r:.2} {r:.2} 0 1 1 {x1:.2} {y1:.2} Z"
        );
    }
    let end = slice.start_angle + slice.sweep;
    let x2 = cx + r * end.cos();
    let y2 = cy + r * end.sin();
    let large_arc = if slice.sweep > std::f64::consts::PI { 1 } else { 0 };
    format!("M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z")
}

/// Per-slice color by index modulo palette length. Wraparound is
/// intentional when the series outgrows the palette.
pub fn palette_color(palette: &[String], index: usize) -> &str {
    if palette.is_empty() {
        return "#888888";
    }
    &palette[index % palette.len()]
}

/// Evenly spaced tick values from 0 to `max`, inclusive.
pub fn y_ticks(max: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    (0..=count).map(|i| max * i as f64 / count as f64).collect()
}

/// Compact tick label: thousands collapse to `k`.
pub fn format_tick(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else if value == value.trunc() {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn strings(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_point_does_not_divide_by_zero() {
        let xs = x_positions(1, 600.0);
        assert_eq!(xs, vec![300.0]);
        let points = line_points(&[42.0], 600.0, 200.0);
        assert!(!points.contains("NaN"));
        assert!(!points.contains("inf"));
    }

    #[test]
    fn empty_series_produces_nothing() {
        assert!(x_positions(0, 600.0).is_empty());
        assert!(bar_rects(&[], 600.0, 200.0).is_empty());
        assert!(pie_slices(&[]).is_empty());
        assert_eq!(scale_max(&[]), 1.0);
        assert_eq!(line_points(&[], 600.0, 200.0), "");
    }

    #[test]
    fn scale_leaves_ten_percent_headroom() {
        assert!((scale_max(&[100.0]) - 110.0).abs() < 1e-9);
        assert!((scale_max(&[20.0, 80.0, 40.0]) - 88.0).abs() < 1e-9);
        // All-zero data still yields a usable scale.
        assert_eq!(scale_max(&[0.0, 0.0]), 1.0);
    }

    #[test]
    fn max_value_stays_inside_the_plot() {
        let max = scale_max(&[100.0]);
        let y = y_position(100.0, max, 200.0);
        assert!(y > 0.0 && y < 200.0);
    }

    #[test]
    fn palette_colors_cycle() {
        let palette: Vec<String> = DEFAULT_PIE_PALETTE.iter().map(|c| c.to_string()).collect();
        let p = palette.len();
        for i in 0..p {
            assert_eq!(palette_color(&palette, i), palette_color(&palette, i + p));
            assert_eq!(palette_color(&palette, i), palette_color(&palette, i + 2 * p));
        }
        assert_eq!(palette_color(&[], 3), "#888888");
    }

    #[test]
    fn pie_sweeps_normalize_to_full_circle() {
        let slices = pie_slices(&[1.0, 2.0, 1.0]);
        let total: f64 = slices.iter().map(|s| s.sweep).sum();
        assert!((total - TAU).abs() < 1e-9);
        assert!((slices[1].sweep - TAU / 2.0).abs() < 1e-9);
    }

    #[test]
    fn pie_keeps_index_alignment_for_non_positive_values() {
        let slices = pie_slices(&[1.0, -5.0, 1.0]);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[1].sweep, 0.0);
        let total: f64 = slices.iter().map(|s| s.sweep).sum();
        assert!((total - TAU).abs() < 1e-9);
    }

    #[test]
    fn pie_with_non_positive_total_renders_nothing() {
        assert!(pie_slices(&[0.0, -1.0]).is_empty());
    }

    #[test]
    fn full_circle_slice_has_a_valid_path() {
        let slices = pie_slices(&[7.0]);
        let path = pie_slice_path(100.0, 100.0, 80.0, &slices[0]);
        assert!(path.starts_with('M'));
        assert!(!path.contains("NaN"));
        // Two arc segments, not one collapsed arc.
        assert_eq!(path.matches('A').count(), 2);
    }

    #[test]
    fn mismatched_lengths_truncate_to_the_shorter() {
        let data = [1.0, 2.0, 3.0];
        let labels = strings(&["a", "b"]);
        let (d, l) = truncate_series(&data, &labels);
        assert_eq!(d.len(), 2);
        assert_eq!(l.len(), 2);

        let labels = strings(&["a", "b", "c", "d"]);
        let (d, l) = truncate_series(&data, &labels);
        assert_eq!(d.len(), 3);
        assert_eq!(l.len(), 3);
    }

    #[test]
    fn bars_fill_their_slot_evenly() {
        let bars = bar_rects(&[10.0, 20.0], 200.0, 100.0);
        assert_eq!(bars.len(), 2);
        assert!((bars[0].width - 60.0).abs() < 1e-9);
        assert!((bars[1].x - 120.0).abs() < 1e-9);
        assert!(bars[1].height > bars[0].height);
        // Negative values must not produce negative heights.
        let bars = bar_rects(&[-5.0, 10.0], 200.0, 100.0);
        assert_eq!(bars[0].height, 0.0);
    }

    #[test]
    fn tick_labels_are_compact() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(880.0), "880");
        assert_eq!(format_tick(13200.0), "13.2k");
        assert_eq!(format_tick(2.5), "2.5");
    }
}
