//! Chart geometry
//!
//! Pure coordinate mapping for the two dashboard charts, kept separate from
//! rendering so the math is testable off the browser:
//!
//! - Line chart: linear interpolation of the date axis across the drawable
//!   width, mood axis fixed to [1,5]
//! - Bar chart: one equal-width slot per day, value axis fixed to [0,5]
//!
//! Coordinates are in canvas space (y grows downward).

use chrono::{NaiveDate, NaiveTime};

use crate::stats::DayPoint;

/// Line chart canvas size
pub const LINE_WIDTH: f64 = 720.0;
pub const LINE_HEIGHT: f64 = 200.0;

/// Bar chart canvas size
pub const BAR_WIDTH: f64 = 720.0;
pub const BAR_HEIGHT: f64 = 140.0;

/// Padding on every side of the drawable area
pub const PADDING: f64 = 24.0;

/// Gap between adjacent bars
const BAR_GAP: f64 = 8.0;

/// A positioned bar for the last-7-days chart
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Clamped value the bar represents
    pub value: f64,
    pub date: NaiveDate,
}

/// Map a mood value onto the fixed [1,5] line-chart axis
pub fn mood_y(value: f64, height: f64, pad: f64) -> f64 {
    let drawable = height - 2.0 * pad;
    pad + drawable - ((value - 1.0) / 4.0) * drawable
}

/// Map sparse day points onto line-chart coordinates
///
/// The x axis interpolates linearly between the first and last date; a
/// single point is centered.
pub fn line_points(points: &[DayPoint], width: f64, height: f64, pad: f64) -> Vec<(f64, f64)> {
    if points.is_empty() {
        return Vec::new();
    }

    let xs: Vec<f64> = points.iter().map(|p| day_millis(p.date)).collect();
    let x_min = xs.iter().cloned().fold(f64::INFINITY, f64::min);
    let x_max = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let drawable = width - 2.0 * pad;

    points
        .iter()
        .zip(xs)
        .map(|(point, x)| {
            let sx = if x_max == x_min {
                pad + drawable / 2.0
            } else {
                pad + ((x - x_min) / (x_max - x_min)) * drawable
            };
            (sx, mood_y(point.average_mood, height, pad))
        })
        .collect()
}

/// Lay out the dense last-7-days series as bars on the fixed [0,5] axis
pub fn bar_layout(bars: &[DayPoint], width: f64, height: f64, pad: f64) -> Vec<Bar> {
    if bars.is_empty() {
        return Vec::new();
    }

    let slot = (width - 2.0 * pad) / bars.len() as f64;
    let bar_width = slot - BAR_GAP;
    let drawable = height - 2.0 * pad;

    bars.iter()
        .enumerate()
        .map(|(i, point)| {
            let value = point.average_mood.clamp(0.0, 5.0);
            let h = (value / 5.0) * drawable;
            Bar {
                x: pad + i as f64 * slot,
                y: height - pad - h,
                w: bar_width,
                h,
                value,
                date: point.date,
            }
        })
        .collect()
}

/// Epoch milliseconds at UTC midnight of a calendar day
fn day_millis(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(day: &str, avg: f64) -> DayPoint {
        DayPoint {
            date: day.parse().unwrap(),
            average_mood: avg,
        }
    }

    #[test]
    fn test_mood_axis_endpoints() {
        // Mood 1 sits on the baseline, mood 5 at the top padding
        assert_eq!(mood_y(1.0, LINE_HEIGHT, PADDING), LINE_HEIGHT - PADDING);
        assert_eq!(mood_y(5.0, LINE_HEIGHT, PADDING), PADDING);
        assert_eq!(mood_y(3.0, LINE_HEIGHT, PADDING), LINE_HEIGHT / 2.0);
    }

    #[test]
    fn test_single_point_is_centered() {
        let pts = line_points(&[point("2024-01-01", 3.0)], LINE_WIDTH, LINE_HEIGHT, PADDING);
        assert_eq!(pts.len(), 1);
        assert_eq!(pts[0].0, LINE_WIDTH / 2.0);
    }

    #[test]
    fn test_line_points_span_drawable_width() {
        let pts = line_points(
            &[
                point("2024-01-01", 1.0),
                point("2024-01-03", 3.0),
                point("2024-01-05", 5.0),
            ],
            LINE_WIDTH,
            LINE_HEIGHT,
            PADDING,
        );

        assert_eq!(pts[0].0, PADDING);
        assert_eq!(pts[2].0, LINE_WIDTH - PADDING);
        // Equal day spacing lands the middle point in the middle
        assert_eq!(pts[1].0, LINE_WIDTH / 2.0);
        // y decreases as mood rises
        assert!(pts[2].1 < pts[1].1 && pts[1].1 < pts[0].1);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(line_points(&[], LINE_WIDTH, LINE_HEIGHT, PADDING).is_empty());
        assert!(bar_layout(&[], BAR_WIDTH, BAR_HEIGHT, PADDING).is_empty());
    }

    #[test]
    fn test_bar_heights() {
        let bars = bar_layout(
            &[
                point("2024-01-01", 0.0),
                point("2024-01-02", 5.0),
                point("2024-01-03", 2.5),
            ],
            BAR_WIDTH,
            BAR_HEIGHT,
            PADDING,
        );

        let drawable = BAR_HEIGHT - 2.0 * PADDING;
        assert_eq!(bars[0].h, 0.0);
        assert_eq!(bars[0].y, BAR_HEIGHT - PADDING);
        assert_eq!(bars[1].h, drawable);
        assert_eq!(bars[1].y, PADDING);
        assert_eq!(bars[2].h, drawable / 2.0);
    }

    #[test]
    fn test_bar_slots_are_even() {
        let bars = bar_layout(
            &(1..=7)
                .map(|d| point(&format!("2024-01-0{}", d), 3.0))
                .collect::<Vec<_>>(),
            BAR_WIDTH,
            BAR_HEIGHT,
            PADDING,
        );

        assert_eq!(bars.len(), 7);
        let slot = (BAR_WIDTH - 2.0 * PADDING) / 7.0;
        for (i, bar) in bars.iter().enumerate() {
            assert_eq!(bar.x, PADDING + i as f64 * slot);
            assert_eq!(bar.w, slot - 8.0);
        }
    }

    #[test]
    fn test_bar_value_clamped() {
        let bars = bar_layout(&[point("2024-01-01", 9.0)], BAR_WIDTH, BAR_HEIGHT, PADDING);
        assert_eq!(bars[0].value, 5.0);
    }
}
