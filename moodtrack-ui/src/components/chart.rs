//! Chart Component
//!
//! Mood charts drawn on HTML5 Canvas: a line chart of the average mood per
//! day and a bar chart of the trailing seven days. The coordinate math
//! lives in `moodtrack::chart`; this component only paints.

use chrono::Utc;
use leptos::*;
use moodtrack::chart::{
    bar_layout, line_points, mood_y, BAR_HEIGHT, BAR_WIDTH, LINE_HEIGHT, LINE_WIDTH, PADDING,
};
use moodtrack::stats::{last7_bars, time_series_points, DayPoint};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::GlobalState;
use crate::state::theme::mood_color;

const LINE_COLOR: &str = "#2563EB"; // blue-600
const GRID_COLOR: &str = "rgba(107, 114, 128, 0.3)";
const MUTED_COLOR: &str = "#6b7280"; // gray-500

/// Mood chart section: line chart over time plus last-7-days bars
#[component]
pub fn MoodCharts() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let line_ref = create_node_ref::<html::Canvas>();
    let bars_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the collection changes
    create_effect(move |_| {
        let entries = state.entries.get();
        let points = time_series_points(&entries);
        let bars = last7_bars(&entries, Utc::now().date_naive());

        if let Some(canvas) = line_ref.get() {
            draw_line_chart(&canvas, &points);
        }
        if let Some(canvas) = bars_ref.get() {
            draw_bar_chart(&canvas, &bars);
        }
    });

    view! {
        <section class="surface card" aria-label="Charts">
            <div class="card-header">
                <h2>"Mood over time"</h2>
            </div>
            <div class="chart-wrapper" role="figure" aria-label="Line chart of mood over time">
                <canvas
                    node_ref=line_ref
                    width="720"
                    height="200"
                    class="chart-canvas"
                />
            </div>

            <div class="card-header">
                <h3>"Last 7 days"</h3>
            </div>
            <div class="chart-wrapper" role="figure" aria-label="Bar chart of last 7 days average mood">
                <canvas
                    node_ref=bars_ref
                    width="720"
                    height="140"
                    class="chart-canvas"
                />
            </div>
        </section>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

/// Draw the sparse time series as a line on the fixed [1,5] mood axis
fn draw_line_chart(canvas: &HtmlCanvasElement, points: &[DayPoint]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = LINE_WIDTH;
    let height = LINE_HEIGHT;
    ctx.clear_rect(0.0, 0.0, width, height);

    // Grid line per mood value
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    for value in 1..=5 {
        let y = mood_y(value as f64, height, PADDING);
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        ctx.stroke();
    }

    let pts = line_points(points, width, height, PADDING);
    if pts.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(2.5);
    ctx.begin_path();
    for (i, (x, y)) in pts.iter().enumerate() {
        if i == 0 {
            ctx.move_to(*x, *y);
        } else {
            ctx.line_to(*x, *y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style(&LINE_COLOR.into());
    for (x, y) in &pts {
        ctx.begin_path();
        let _ = ctx.arc(*x, *y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}

/// Draw the dense last-7-days series as bars on the fixed [0,5] axis
fn draw_bar_chart(canvas: &HtmlCanvasElement, bars: &[DayPoint]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = BAR_WIDTH;
    let height = BAR_HEIGHT;
    ctx.clear_rect(0.0, 0.0, width, height);

    // Baseline
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(0.0, height - PADDING);
    ctx.line_to(width, height - PADDING);
    ctx.stroke();

    let layout = bar_layout(bars, width, height, PADDING);
    if layout.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    ctx.set_font("10px sans-serif");
    for bar in &layout {
        let color = mood_color(bar.value.round() as u8);
        ctx.set_fill_style(&color.into());
        ctx.fill_rect(bar.x, bar.y, bar.w, bar.h);

        // Weekday label under each slot
        ctx.set_fill_style(&MUTED_COLOR.into());
        let label = bar.date.format("%a").to_string();
        let _ = ctx.fill_text(&label, bar.x + bar.w / 2.0 - 9.0, height - 6.0);
    }
}

fn draw_empty_message(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&MUTED_COLOR.into());
    ctx.set_font("14px sans-serif");
    let _ = ctx.fill_text("No data yet", width / 2.0 - 36.0, height / 2.0);
}
