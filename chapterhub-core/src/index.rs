//! Day-keyed event index.
//!
//! The index is rebuilt from scratch whenever the source list changes and is
//! never mutated afterwards, so it can be shared read-only between sessions.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::event::Event;

/// Events grouped by calendar day.
#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    buckets: HashMap<NaiveDate, Vec<Event>>,
    /// Ids of events skipped because their date was malformed.
    rejected: Vec<String>,
}

impl EventIndex {
    /// Group `events` by day. Each bucket keeps the input order.
    ///
    /// Events without a valid date are skipped (and remembered in
    /// [`EventIndex::rejected`]); the rest are still indexed.
    pub fn build<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let mut index = EventIndex::default();

        for event in events {
            match event.date {
                Some(date) => index.buckets.entry(date).or_default().push(event.clone()),
                None => {
                    tracing::warn!(event_id = %event.id, title = %event.title, "skipping event with malformed date");
                    index.rejected.push(event.id.clone());
                }
            }
        }

        tracing::debug!(
            days = index.buckets.len(),
            events = index.len(),
            rejected = index.rejected.len(),
            "built event index"
        );
        index
    }

    /// Events on the given day, or an empty slice. Out-of-range components
    /// simply find nothing.
    pub fn lookup(&self, year: i32, month: u32, day: u32) -> &[Event] {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| self.lookup_date(date))
            .unwrap_or(&[])
    }

    pub fn lookup_date(&self, date: NaiveDate) -> &[Event] {
        self.buckets.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of indexed events (rejected ones excluded).
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Days that have at least one event, ascending.
    pub fn busy_days(&self) -> Vec<NaiveDate> {
        let mut days: Vec<NaiveDate> = self.buckets.keys().copied().collect();
        days.sort();
        days
    }

    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventCategory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn june_events() -> Vec<Event> {
        vec![
            Event::new("1", "Leadership Workshop", date(2023, 6, 10), EventCategory::Workshop),
            Event::new("2", "Chapter Meeting", date(2023, 6, 10), EventCategory::Meeting),
            Event::new("3", "Networking Mixer", date(2023, 6, 18), EventCategory::Social),
        ]
    }

    fn malformed(id: &str) -> Event {
        Event {
            date: None,
            ..Event::new(id, "Broken", date(2000, 1, 1), EventCategory::Deadline)
        }
    }

    #[test]
    fn test_lookup_groups_by_day_preserving_order() {
        let events = june_events();
        let index = EventIndex::build(&events);

        let tenth = index.lookup(2023, 6, 10);
        assert_eq!(tenth.len(), 2);
        assert_eq!(tenth[0].id, "1");
        assert_eq!(tenth[1].id, "2");
        assert_eq!(index.lookup(2023, 6, 18).len(), 1);
        assert!(index.lookup(2023, 6, 11).is_empty());
    }

    #[test]
    fn test_every_valid_event_is_found_on_its_own_day() {
        let events = june_events();
        let index = EventIndex::build(&events);

        for event in &events {
            let day = event.date.unwrap();
            assert!(index.lookup_date(day).contains(event));
        }
        assert_eq!(index.len(), events.len());
    }

    #[test]
    fn test_malformed_dates_are_skipped_not_fatal() {
        let mut events = june_events();
        events.insert(1, malformed("bad-1"));
        events.push(malformed("bad-2"));

        let index = EventIndex::build(&events);

        assert_eq!(index.len(), 3);
        assert_eq!(index.rejected(), ["bad-1".to_string(), "bad-2".to_string()]);
        for day in index.busy_days() {
            assert!(index.lookup_date(day).iter().all(|e| !e.id.starts_with("bad")));
        }
    }

    #[test]
    fn test_lookup_never_fails_on_nonsense_components() {
        let events = june_events();
        let index = EventIndex::build(&events);
        assert!(index.lookup(2023, 13, 1).is_empty());
        assert!(index.lookup(2023, 2, 30).is_empty());
        assert!(index.lookup(2023, 6, 0).is_empty());
    }

    #[test]
    fn test_empty_index() {
        let index = EventIndex::build(&Vec::<Event>::new());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.busy_days().is_empty());
    }

    #[test]
    fn test_busy_days_sorted() {
        let events = june_events();
        let index = EventIndex::build(events.iter().rev());
        assert_eq!(index.busy_days(), vec![date(2023, 6, 10), date(2023, 6, 18)]);
    }

    #[test]
    fn test_index_is_shareable() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<EventIndex>();
    }
}
