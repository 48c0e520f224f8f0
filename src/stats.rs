use crate::models::{
    BadgeView, DailyTotal, StatsResponse, StudyLog, StudyRecord, SubjectTotal, TodayResponse,
    Window,
};
use chrono::{Duration, Local, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

pub const DAILY_GOAL: f64 = 4.0;

pub struct Badge {
    pub days: u32,
    pub emoji: &'static str,
    pub name: &'static str,
}

pub const BADGES: [Badge; 3] = [
    Badge {
        days: 3,
        emoji: "🌟",
        name: "Rising Star",
    },
    Badge {
        days: 7,
        emoji: "👑",
        name: "Consistency Queen",
    },
    Badge {
        days: 30,
        emoji: "⚡",
        name: "Legend",
    },
];

/// Current and best consecutive-day streaks over the given dates.
///
/// The current streak is the run ending at the latest logged date, even when
/// that date is in the past.
pub fn calculate_streaks(dates: impl IntoIterator<Item = NaiveDate>) -> (u32, u32) {
    let unique: BTreeSet<NaiveDate> = dates.into_iter().collect();
    if unique.is_empty() {
        return (0, 0);
    }

    let mut current = 1u32;
    let mut best = 1u32;
    let mut prev: Option<NaiveDate> = None;
    for date in unique {
        if let Some(previous) = prev {
            if date - previous == Duration::days(1) {
                current += 1;
                best = best.max(current);
            } else {
                current = 1;
            }
        }
        prev = Some(date);
    }

    (current, best)
}

pub fn earned_badges(streak: u32) -> Vec<&'static Badge> {
    BADGES.iter().filter(|badge| streak >= badge.days).collect()
}

pub fn filter_window(records: &[StudyRecord], today: NaiveDate, window: Window) -> Vec<&StudyRecord> {
    let cutoff = match window {
        Window::All => return records.iter().collect(),
        Window::Month => today - Duration::days(30),
        Window::Week => today - Duration::days(7),
    };
    records.iter().filter(|record| record.date >= cutoff).collect()
}

pub fn subject_totals(records: &[&StudyRecord]) -> Vec<SubjectTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.subject.as_str()).or_insert(0.0) += record.hours;
    }
    totals
        .into_iter()
        .map(|(subject, hours)| SubjectTotal {
            subject: subject.to_string(),
            hours,
        })
        .collect()
}

pub fn daily_totals(records: &[&StudyRecord]) -> Vec<DailyTotal> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.date).or_insert(0.0) += record.hours;
    }
    totals
        .into_iter()
        .map(|(date, hours)| DailyTotal {
            date: date.to_string(),
            hours,
        })
        .collect()
}

pub fn today_summary(log: &StudyLog) -> TodayResponse {
    today_summary_at(Local::now().date_naive(), log)
}

pub fn today_summary_at(today: NaiveDate, log: &StudyLog) -> TodayResponse {
    let hours: f64 = log
        .records()
        .iter()
        .filter(|record| record.date == today)
        .map(|record| record.hours)
        .sum();

    TodayResponse {
        date: today.to_string(),
        hours,
        goal: DAILY_GOAL,
        progress: (hours / DAILY_GOAL).min(1.0),
    }
}

pub fn build_stats(log: &StudyLog, window: Window) -> StatsResponse {
    build_stats_at(Local::now().date_naive(), log, window)
}

pub fn build_stats_at(today: NaiveDate, log: &StudyLog, window: Window) -> StatsResponse {
    // Streaks run over every logged date; only the chart series honor the window.
    let (current_streak, best_streak) = calculate_streaks(log.distinct_dates());
    let badges = earned_badges(current_streak)
        .into_iter()
        .map(|badge| BadgeView {
            days: badge.days,
            emoji: badge.emoji,
            name: badge.name,
        })
        .collect();

    let filtered = filter_window(log.records(), today, window);

    StatsResponse {
        window,
        current_streak,
        best_streak,
        badges,
        subject_totals: subject_totals(&filtered),
        daily_totals: daily_totals(&filtered),
    }
}
