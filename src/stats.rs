//! Derived statistics
//!
//! Pure functions over the entry collection: rolling averages, the best
//! streak, the mood histogram, and chart-ready series. No side effects,
//! no I/O.
//!
//! All bucketing is by UTC calendar day. Functions that depend on "today"
//! take it as an explicit parameter; callers pass `Utc::now().date_naive()`.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::store::MoodEntry;

/// Mood threshold a day must reach (per-day max) to count toward a streak
const STREAK_THRESHOLD: u8 = 3;

/// One chart point: a calendar day and its average mood
#[derive(Debug, Clone, PartialEq)]
pub struct DayPoint {
    pub date: NaiveDate,
    pub average_mood: f64,
}

/// Arithmetic mean of mood scores; 0 for an empty collection
pub fn average_of(entries: &[MoodEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let sum: f64 = entries.iter().map(|e| e.mood as f64).sum();
    sum / entries.len() as f64
}

/// Mean mood over the trailing `days` calendar days, inclusive of today
///
/// Rounded to two decimals for display parity with the summary cards.
pub fn rolling_average(entries: &[MoodEntry], today: NaiveDate, days: u64) -> f64 {
    let start = today
        .checked_sub_days(Days::new(days.saturating_sub(1)))
        .unwrap_or(NaiveDate::MIN);

    let window: Vec<f64> = entries
        .iter()
        .filter(|e| e.date >= start && e.date <= today)
        .map(|e| e.mood as f64)
        .collect();

    if window.is_empty() {
        return 0.0;
    }
    let avg = window.iter().sum::<f64>() / window.len() as f64;
    round2(avg)
}

/// Histogram of mood values; every bucket 1-5 is present
///
/// Index 0 holds the count for mood 1. Out-of-range moods (possible only
/// in hand-written data) clamp into the scale.
pub fn distribution(entries: &[MoodEntry]) -> [usize; 5] {
    let mut dist = [0usize; 5];
    for entry in entries {
        let mood = entry.mood.clamp(1, 5);
        dist[(mood - 1) as usize] += 1;
    }
    dist
}

/// Longest run of consecutive calendar days whose per-day maximum mood
/// reaches the streak threshold
///
/// Days with no entries break consecutiveness. A passing day after a gap
/// starts a fresh run of 1; a failing day resets the run to 0.
pub fn best_streak(entries: &[MoodEntry]) -> u32 {
    let day_max = bucket_day_max(entries);

    let mut best = 0u32;
    let mut current = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for (day, max_mood) in day_max {
        let pass = max_mood >= STREAK_THRESHOLD;
        current = match prev {
            Some(p) if pass && (day - p).num_days() == 1 => current + 1,
            _ if pass => 1,
            _ => 0,
        };
        best = best.max(current);
        prev = Some(day);
    }

    best
}

/// One point per distinct day present in the data (sparse), ascending,
/// value = mean mood of that day's entries
pub fn time_series_points(entries: &[MoodEntry]) -> Vec<DayPoint> {
    bucket_day_average(entries)
        .into_iter()
        .map(|(date, average_mood)| DayPoint { date, average_mood })
        .collect()
}

/// Exactly seven points for the trailing seven calendar days ending today,
/// oldest first; days without entries carry 0
pub fn last7_bars(entries: &[MoodEntry], today: NaiveDate) -> Vec<DayPoint> {
    let by_day = bucket_day_average(entries);

    (0..7)
        .rev()
        .map(|back| {
            let date = today
                .checked_sub_days(Days::new(back))
                .unwrap_or(NaiveDate::MIN);
            DayPoint {
                date,
                average_mood: by_day.get(&date).copied().unwrap_or(0.0),
            }
        })
        .collect()
}

/// Summary card values, computed together
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub avg7: f64,
    pub avg30: f64,
    pub best_streak: u32,
    pub distribution: [usize; 5],
}

impl Summary {
    pub fn compute(entries: &[MoodEntry], today: NaiveDate) -> Self {
        Self {
            total: entries.len(),
            avg7: rolling_average(entries, today, 7),
            avg30: rolling_average(entries, today, 30),
            best_streak: best_streak(entries),
            distribution: distribution(entries),
        }
    }
}

/// Per-day maximum mood, ascending by day
fn bucket_day_max(entries: &[MoodEntry]) -> BTreeMap<NaiveDate, u8> {
    let mut day_max = BTreeMap::new();
    for entry in entries {
        let max = day_max.entry(entry.date).or_insert(0u8);
        *max = (*max).max(entry.mood);
    }
    day_max
}

/// Per-day mean mood, ascending by day
fn bucket_day_average(entries: &[MoodEntry]) -> BTreeMap<NaiveDate, f64> {
    let mut sums: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for entry in entries {
        let slot = sums.entry(entry.date).or_insert((0.0, 0));
        slot.0 += entry.mood as f64;
        slot.1 += 1;
    }
    sums.into_iter()
        .map(|(date, (sum, count))| (date, sum / count as f64))
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
