//! Event list filtering and ordering for the events page.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::event::{Event, EventCategory};

/// Search and category filter. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub query: Option<String>,
    pub category: Option<EventCategory>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    pub fn with_category(mut self, category: EventCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Case-insensitive substring match on title, description and location,
    /// plus an exact category match.
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(category) = self.category {
            if event.category != category {
                return false;
            }
        }

        let needle = match self.query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return true,
        };

        [
            Some(event.title.as_str()),
            event.description.as_deref(),
            event.location.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Matching events in input order.
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Ascending by date; stable, with malformed dates last.
pub fn sort_by_date(events: &mut [&Event]) {
    events.sort_by(|a, b| compare_dates(a.date, b.date));
}

fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Events on or after `today`, soonest first, at most `limit` of them.
pub fn upcoming<'a>(events: &[&'a Event], today: NaiveDate, limit: Option<usize>) -> Vec<&'a Event> {
    let mut upcoming: Vec<&Event> = events
        .iter()
        .copied()
        .filter(|e| e.date.is_some_and(|d| d >= today))
        .collect();
    sort_by_date(&mut upcoming);
    if let Some(limit) = limit {
        upcoming.truncate(limit);
    }
    upcoming
}
