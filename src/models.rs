use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "😃 Great")]
    Great,
    #[serde(rename = "🙂 Good")]
    Good,
    #[serde(rename = "😐 Okay")]
    Okay,
    #[serde(rename = "😓 Tired")]
    Tired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyRecord {
    pub date: NaiveDate,
    pub subject: String,
    pub hours: f64,
    pub mood: Mood,
}

/// Append-only collection of study records, mirrored to the CSV file.
#[derive(Debug, Clone, Default)]
pub struct StudyLog {
    records: Vec<StudyRecord>,
}

impl StudyLog {
    pub fn new(records: Vec<StudyRecord>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: StudyRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[StudyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn distinct_dates(&self) -> BTreeSet<NaiveDate> {
        self.records.iter().map(|record| record.date).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Window {
    #[default]
    All,
    Month,
    Week,
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    #[serde(default)]
    pub window: Window,
}

#[derive(Debug, Deserialize)]
pub struct LogRequest {
    pub subject: String,
    pub hours: f64,
    pub mood: Mood,
}

#[derive(Debug, Serialize)]
pub struct TodayResponse {
    pub date: String,
    pub hours: f64,
    pub goal: f64,
    pub progress: f64,
}

#[derive(Debug, Serialize)]
pub struct BadgeView {
    pub days: u32,
    pub emoji: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SubjectTotal {
    pub subject: String,
    pub hours: f64,
}

#[derive(Debug, Serialize)]
pub struct DailyTotal {
    pub date: String,
    pub hours: f64,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub window: Window,
    pub current_streak: u32,
    pub best_streak: u32,
    pub badges: Vec<BadgeView>,
    pub subject_totals: Vec<SubjectTotal>,
    pub daily_totals: Vec<DailyTotal>,
}
