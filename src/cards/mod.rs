//! Task card classification: urgency bucket and due-date countdown.
//!
//! Independent of the dependency graph. The current time is always passed in.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::model::RankedTask;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Score at or above which a task is high urgency.
pub const HIGH_THRESHOLD: f64 = 80.0;
/// Score at or above which a task is at least medium urgency.
pub const MEDIUM_THRESHOLD: f64 = 50.0;

/// Days within which a future due date is called out.
const SOON_DAYS: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    pub fn from_score(priority_score: f64) -> Self {
        if priority_score >= HIGH_THRESHOLD {
            Urgency::High
        } else if priority_score >= MEDIUM_THRESHOLD {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        }
    }
}

/// Countdown shown next to a due date. Dates further out get none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "days", rename_all = "snake_case")]
pub enum DueAnnotation {
    Overdue(i64),
    DueToday,
    DaysLeft(i64),
}

impl DueAnnotation {
    /// Annotation for a whole-day countdown, if one applies.
    pub fn from_days_left(days_left: i64) -> Option<Self> {
        match days_left {
            d if d < 0 => Some(DueAnnotation::Overdue(d.abs())),
            0 => Some(DueAnnotation::DueToday),
            d if d <= SOON_DAYS => Some(DueAnnotation::DaysLeft(d)),
            _ => None,
        }
    }

    /// Text without the surrounding parentheses.
    pub fn label(&self) -> String {
        match self {
            DueAnnotation::Overdue(days) => format!("Overdue by {days} days"),
            DueAnnotation::DueToday => "Due today".to_string(),
            DueAnnotation::DaysLeft(days) => format!("{days} days"),
        }
    }
}

impl fmt::Display for DueAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub urgency: Urgency,
    pub due_annotation: Option<DueAnnotation>,
}

/// Parse a due date: `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp.
pub fn parse_due_date(due: &str) -> Option<DateTime<Utc>> {
    let due = due.trim();
    if let Ok(date) = NaiveDate::parse_from_str(due, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    DateTime::parse_from_rfc3339(due)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Whole days until `due`, rounding any partial day up.
pub fn days_left(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (due - now).num_milliseconds() as f64;
    // `as` maps -0.0 to 0, so a due date earlier today counts as today.
    (millis / MILLIS_PER_DAY).ceil() as i64
}

/// Urgency bucket and due annotation for one ranked task.
///
/// A missing or unparseable due date gives no annotation.
pub fn classify(task: &RankedTask, now: DateTime<Utc>) -> Classification {
    let due_annotation = task
        .due_date
        .as_deref()
        .and_then(parse_due_date)
        .and_then(|due| DueAnnotation::from_days_left(days_left(due, now)));

    Classification {
        urgency: Urgency::from_score(task.priority_score),
        due_annotation,
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_cards.rs"]
mod tests;
