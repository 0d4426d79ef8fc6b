//! Chart Components
//!
//! Canvas-rendered charts: bar (curve distribution), donut (top curve-A
//! products) and line (monthly evolution). Each component owns one canvas and
//! redraws inside a reactive effect whenever the dataset bound to its slot
//! changes. The drawing itself is immediate-mode 2D canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::charts::{ChartInstance, ChartSlot};
use crate::state::global::GlobalState;

/// Bar/donut palette (curve A orange, B blue, C gray, extras for the donut)
const SERIES_COLORS: [&str; 5] = [
    "#f39c12", // Orange
    "#3498db", // Blue
    "#95a5a6", // Gray
    "#2ecc71", // Green
    "#9b59b6", // Purple
];

const BACKGROUND: &str = "#1f2937";
const GRID: &str = "#374151";
const LABEL: &str = "#9ca3af";

/// Bar chart of product counts per ABC curve
#[component]
pub fn CurveBarChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let bound = state
            .charts
            .with(|c| c.get(ChartSlot::CurveBar).cloned());

        if let (Some(canvas), Some(instance)) = (canvas_ref.get(), bound) {
            draw_bar_chart(&canvas, &instance);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="480"
            height="300"
            class="w-full h-64 rounded-lg"
        />
    }
}

/// Donut of the top curve-A products by sale price, labeled by SKU
#[component]
pub fn TopProductsDonut() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let bound = state
            .charts
            .with(|c| c.get(ChartSlot::TopDonut).cloned());

        if let (Some(canvas), Some(instance)) = (canvas_ref.get(), bound) {
            draw_donut_chart(&canvas, &instance);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="300"
                height="300"
                class="w-full h-64 rounded-lg"
            />
            <DonutLegend />
        </div>
    }
}

/// Legend mapping donut colors to SKUs
#[component]
fn DonutLegend() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="flex justify-center flex-wrap gap-3 mt-3">
            {move || {
                let labels = state
                    .charts
                    .with(|c| c.get(ChartSlot::TopDonut).map(|i| i.labels.clone()))
                    .unwrap_or_default();

                labels
                    .into_iter()
                    .enumerate()
                    .map(|(idx, sku)| {
                        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-300">{sku}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Line chart of the monthly curve evolution (one line per curve)
#[component]
pub fn EvolutionLineChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let bound = state
            .charts
            .with(|c| c.get(ChartSlot::EvolutionLine).cloned());

        if let (Some(canvas), Some(instance)) = (canvas_ref.get(), bound) {
            draw_line_chart(&canvas, &instance);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="360"
                class="w-full h-64 md:h-80 rounded-lg"
            />
            <div class="flex justify-center space-x-4 mt-3">
                <LegendDot color="#f39c12" label="Curva A" />
                <LegendDot color="#3498db" label="Curva B" />
                <LegendDot color="#95a5a6" label="Curva C" />
            </div>
        </div>
    }
}

#[component]
fn LegendDot(color: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", color) />
            <span class="text-sm text-gray-300">{label}</span>
        </div>
    }
}

// ============ Drawing ============

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);
}

fn draw_empty_message(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text("Sem dados", width / 2.0 - 35.0, height / 2.0);
}

fn draw_bar_chart(canvas: &HtmlCanvasElement, instance: &ChartInstance) {
    let Some(ctx) = context_2d(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    clear(&ctx, width, height);

    let values = instance.series.first().cloned().unwrap_or_default();
    if values.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let margin_left = 40.0;
    let margin_bottom = 30.0;
    let margin_top = 20.0;
    let chart_width = width - margin_left - 20.0;
    let chart_height = height - margin_top - margin_bottom;

    let (_, axis_max) = value_bounds(&values);

    // Horizontal grid lines with y-axis labels
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.set_stroke_style(&GRID.into());
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - 20.0, y);
        ctx.stroke();

        let value = axis_max * (1.0 - i as f64 / 5.0);
        ctx.set_fill_style(&LABEL.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // Bars
    let slot = chart_width / values.len() as f64;
    let bar_width = slot * 0.6;

    for (idx, value) in values.iter().enumerate() {
        let bar_height = (value / axis_max) * chart_height;
        let x = margin_left + idx as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&SERIES_COLORS[idx % SERIES_COLORS.len()].into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        // Category label under the bar
        if let Some(label) = instance.labels.get(idx) {
            ctx.set_fill_style(&LABEL.into());
            let _ = ctx.fill_text(label, x, height - 10.0);
        }
    }
}

fn draw_donut_chart(canvas: &HtmlCanvasElement, instance: &ChartInstance) {
    let Some(ctx) = context_2d(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    clear(&ctx, width, height);

    let values = instance.series.first().cloned().unwrap_or_default();
    let segments = donut_segments(&values);
    if segments.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let outer = width.min(height) / 2.0 - 10.0;
    let inner = outer * 0.65;

    for (idx, (start, end)) in segments.iter().enumerate() {
        ctx.set_fill_style(&SERIES_COLORS[idx % SERIES_COLORS.len()].into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, *start, *end);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, *end, *start, true);
        ctx.close_path();
        ctx.fill();
    }
}

fn draw_line_chart(canvas: &HtmlCanvasElement, instance: &ChartInstance) {
    let Some(ctx) = context_2d(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    clear(&ctx, width, height);

    if instance.is_empty() || instance.labels.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let margin_left = 45.0;
    let margin_bottom = 35.0;
    let margin_top = 20.0;
    let chart_width = width - margin_left - 20.0;
    let chart_height = height - margin_top - margin_bottom;

    let all: Vec<f64> = instance.series.iter().flatten().copied().collect();
    let (axis_min, axis_max) = value_bounds(&all);
    let span = axis_max - axis_min;

    // Grid and y labels
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.set_stroke_style(&GRID.into());
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - 20.0, y);
        ctx.stroke();

        let value = axis_max - (i as f64 / 5.0) * span;
        ctx.set_fill_style(&LABEL.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let points = instance.labels.len();
    let step = if points > 1 {
        chart_width / (points - 1) as f64
    } else {
        chart_width
    };

    for (series_idx, series) in instance.series.iter().enumerate() {
        let color = SERIES_COLORS[series_idx % SERIES_COLORS.len()];
        ctx.set_stroke_style(&color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        for (i, value) in series.iter().enumerate() {
            let x = margin_left + i as f64 * step;
            let y = margin_top + ((axis_max - value) / span) * chart_height;
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();

        // Point markers
        ctx.set_fill_style(&color.into());
        for (i, value) in series.iter().enumerate() {
            let x = margin_left + i as f64 * step;
            let y = margin_top + ((axis_max - value) / span) * chart_height;
            ctx.begin_path();
            let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }

    // Month labels along the x axis
    ctx.set_fill_style(&LABEL.into());
    ctx.set_font("12px sans-serif");
    for (i, label) in instance.labels.iter().enumerate() {
        let x = margin_left + i as f64 * step;
        let _ = ctx.fill_text(label, x - 18.0, height - 10.0);
    }
}

// ============ Geometry ============

/// Padded axis bounds for a set of values. Bar charts use only the max (their
/// baseline is zero); line charts use both ends.
fn value_bounds(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(*v);
        max = max.max(*v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

/// Start/end angles (radians from the top of the circle) for donut segments,
/// proportional to each value. Non-positive totals yield no segments.
fn donut_segments(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let top = -std::f64::consts::FRAC_PI_2;
    let mut angle = top;
    values
        .iter()
        .map(|v| {
            let sweep = v.max(0.0) / total * std::f64::consts::PI * 2.0;
            let segment = (angle, angle + sweep);
            angle += sweep;
            segment
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_bounds_pads_the_range() {
        let (min, max) = value_bounds(&[10.0, 20.0]);
        assert!(min < 10.0);
        assert!(max > 20.0);
        assert!((max - 21.0).abs() < 1e-9);
    }

    #[test]
    fn value_bounds_handles_flat_and_empty_input() {
        let (min, max) = value_bounds(&[5.0, 5.0]);
        assert!(min < 5.0 && max > 5.0);

        let (min, max) = value_bounds(&[]);
        assert_eq!((min, max), (0.0, 1.0));
    }

    #[test]
    fn donut_segments_cover_the_full_circle() {
        let segments = donut_segments(&[1.0, 1.0, 2.0]);
        assert_eq!(segments.len(), 3);

        let full = std::f64::consts::PI * 2.0;
        let swept: f64 = segments.iter().map(|(s, e)| e - s).sum();
        assert!((swept - full).abs() < 1e-9);

        // Largest value gets half the circle
        let (s, e) = segments[2];
        assert!(((e - s) - full / 2.0).abs() < 1e-9);

        // Segments are contiguous
        assert!((segments[0].1 - segments[1].0).abs() < 1e-9);
    }

    #[test]
    fn donut_segments_reject_non_positive_totals() {
        assert!(donut_segments(&[]).is_empty());
        assert!(donut_segments(&[0.0, -1.0]).is_empty());
    }
}
