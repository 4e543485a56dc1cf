//! Fully client-rendered SVG charts (line, bar, pie).
//!
//! The component owns no state beyond the rendering surface: any prop
//! change re-renders the SVG from scratch. All coordinate math lives in
//! [`geometry`].

pub mod geometry;

use contracts::widgets::ChartKind;
use leptos::prelude::*;

const VIEW_WIDTH: f64 = 600.0;
const MARGIN_LEFT: f64 = 44.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_BOTTOM: f64 = 26.0;
const GRID_LINES: usize = 4;

#[component]
pub fn Chart(
    /// Chart type selector.
    #[prop(into)]
    kind: Signal<ChartKind>,
    /// Numeric series, parallel to `labels`. Mismatched lengths are
    /// truncated to the shorter array.
    #[prop(into)]
    data: Signal<Vec<f64>>,
    /// Point labels, parallel to `data`.
    #[prop(into)]
    labels: Signal<Vec<String>>,
    /// Overall height in CSS pixels.
    #[prop(optional)]
    height: Option<u32>,
    #[prop(optional, into)]
    line_color: Option<String>,
    #[prop(optional, into)]
    bar_color: Option<String>,
    #[prop(optional)]
    pie_colors: Option<Vec<String>>,
) -> impl IntoView {
    let height = height.unwrap_or(240) as f64;
    let line_color = line_color.unwrap_or_else(|| geometry::DEFAULT_LINE_COLOR.to_string());
    let bar_color = bar_color.unwrap_or_else(|| geometry::DEFAULT_BAR_COLOR.to_string());
    let pie_colors: Vec<String> = pie_colors.unwrap_or_else(|| {
        geometry::DEFAULT_PIE_PALETTE
            .iter()
            .map(|c| c.to_string())
            .collect()
    });

    let rendered = move || -> AnyView {
        let data = data.get();
        let labels = labels.get();
        let (data, labels) = geometry::truncate_series(&data, &labels);
        if data.is_empty() {
            return view! { <div class="chart chart--empty">"No data to display"</div> }
                .into_any();
        }
        match kind.get() {
            ChartKind::Line => line_chart(data, labels, height, &line_color),
            ChartKind::Bar => bar_chart(data, labels, height, &bar_color),
            ChartKind::Pie => pie_chart(data, labels, height, &pie_colors),
        }
    };

    view! { <div class="chart">{rendered}</div> }
}

fn plot_size(height: f64) -> (f64, f64) {
    (
        VIEW_WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
        height - MARGIN_TOP - MARGIN_BOTTOM,
    )
}

/// Gridlines, y tick labels, and x labels shared by line and bar charts.
fn axes_view(max: f64, xs: &[f64], labels: &[String], plot_w: f64, plot_h: f64) -> AnyView {
    let grid = geometry::y_ticks(max, GRID_LINES)
        .into_iter()
        .map(|tick| {
            let y = geometry::y_position(tick, max, plot_h);
            view! {
                <line class="chart__grid" x1="0" y1=format!("{y:.2}") x2=format!("{plot_w:.2}") y2=format!("{y:.2}")/>
                <text class="chart__tick" x="-8" y=format!("{:.2}", y + 3.0) text-anchor="end">
                    {geometry::format_tick(tick)}
                </text>
            }
        })
        .collect_view();

    let x_labels = xs
        .iter()
        .zip(labels)
        .map(|(&x, label)| {
            view! {
                <text class="chart__label" x=format!("{x:.2}") y=format!("{:.2}", plot_h + 16.0) text-anchor="middle">
                    {label.clone()}
                </text>
            }
        })
        .collect_view();

    view! {
        <g>
            {grid}
            {x_labels}
        </g>
    }
    .into_any()
}

fn line_chart(data: &[f64], labels: &[String], height: f64, color: &str) -> AnyView {
    let (plot_w, plot_h) = plot_size(height);
    let max = geometry::scale_max(data);
    let xs = geometry::x_positions(data.len(), plot_w);
    let points = geometry::line_points(data, plot_w, plot_h);

    let markers = xs
        .iter()
        .zip(data)
        .map(|(&x, &v)| {
            let y = geometry::y_position(v, max, plot_h);
            view! {
                <circle class="chart__marker" cx=format!("{x:.2}") cy=format!("{y:.2}") r="3" fill=color.to_string()/>
            }
        })
        .collect_view();

    view! {
        <svg class="chart__svg" viewBox=format!("0 0 {VIEW_WIDTH} {height}")>
            <g transform=format!("translate({MARGIN_LEFT},{MARGIN_TOP})")>
                {axes_view(max, &xs, labels, plot_w, plot_h)}
                <polyline
                    class="chart__line"
                    points=points
                    fill="none"
                    stroke=color.to_string()
                    stroke-width="2"
                />
                {markers}
            </g>
        </svg>
    }
    .into_any()
}

fn bar_chart(data: &[f64], labels: &[String], height: f64, color: &str) -> AnyView {
    let (plot_w, plot_h) = plot_size(height);
    let max = geometry::scale_max(data);
    let bars = geometry::bar_rects(data, plot_w, plot_h);

    // Center the x label under each bar's slot.
    let centers: Vec<f64> = bars.iter().map(|b| b.x + b.width / 2.0).collect();

    let rects = bars
        .iter()
        .map(|bar| {
            view! {
                <rect
                    class="chart__bar"
                    x=format!("{:.2}", bar.x)
                    y=format!("{:.2}", bar.y)
                    width=format!("{:.2}", bar.width)
                    height=format!("{:.2}", bar.height)
                    fill=color.to_string()
                />
            }
        })
        .collect_view();

    view! {
        <svg class="chart__svg" viewBox=format!("0 0 {VIEW_WIDTH} {height}")>
            <g transform=format!("translate({MARGIN_LEFT},{MARGIN_TOP})")>
                {axes_view(max, &centers, labels, plot_w, plot_h)}
                {rects}
            </g>
        </svg>
    }
    .into_any()
}

fn pie_chart(data: &[f64], labels: &[String], height: f64, palette: &[String]) -> AnyView {
    let slices = geometry::pie_slices(data);
    if slices.is_empty() {
        return view! { <div class="chart chart--empty">"No data to display"</div> }.into_any();
    }

    let cx = VIEW_WIDTH / 2.0;
    let cy = height / 2.0;
    let r = (height / 2.0 - 12.0).max(10.0);

    let paths = slices
        .iter()
        .enumerate()
        .filter(|(_, slice)| slice.sweep > 0.0)
        .map(|(i, slice)| {
            let d = geometry::pie_slice_path(cx, cy, r, slice);
            view! {
                <path class="chart__slice" d=d fill=geometry::palette_color(palette, i).to_string()/>
            }
        })
        .collect_view();

    let legend = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <span class="chart__legend-item">
                    <span
                        class="chart__legend-swatch"
                        style=format!("background: {}", geometry::palette_color(palette, i))
                    ></span>
                    {label.clone()}
                </span>
            }
        })
        .collect_view();

    view! {
        <svg class="chart__svg" viewBox=format!("0 0 {VIEW_WIDTH} {height}")>
            {paths}
        </svg>
        <div class="chart__legend">{legend}</div>
    }
    .into_any()
}
