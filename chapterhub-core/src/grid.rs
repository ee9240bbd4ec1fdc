//! Month grid layout.
//!
//! A [`MonthGrid`] is a pure function of the displayed month, the event
//! index, the injected "today" and the selected date. Day cells borrow their
//! events from the [`EventIndex`], so building a grid never clones events.

use chrono::{Datelike, NaiveDate};

use crate::event::{Event, EventCategory};
use crate::index::EventIndex;
use crate::month::YearMonth;

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Days shown per grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// Most category dots drawn for a single day before switching to the
/// overflow indicator.
pub const MAX_CATEGORY_DOTS: usize = 2;

/// One position in the 7-column layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    /// Placeholder before day 1 or after the last day.
    Empty,
    Day(DayCell<'a>),
}

impl<'a> Cell<'a> {
    pub fn day(&self) -> Option<&DayCell<'a>> {
        match self {
            Cell::Day(day) => Some(day),
            Cell::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub events: &'a [Event],
    pub is_today: bool,
    pub is_selected: bool,
}

/// Element of a day's bounded event indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dot {
    Category(EventCategory),
    /// Neutral dot meaning "more events than fit".
    Overflow,
}

impl DayCell<'_> {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Bounded summary of this day's events.
    ///
    /// Up to [`MAX_CATEGORY_DOTS`] events get one dot each; beyond that the
    /// first event's category is followed by two overflow dots. The full list
    /// is still in [`DayCell::events`].
    pub fn dots(&self) -> Vec<Dot> {
        if self.events.len() <= MAX_CATEGORY_DOTS {
            return self.events.iter().map(|e| Dot::Category(e.category)).collect();
        }
        vec![
            Dot::Category(self.events[0].category),
            Dot::Overflow,
            Dot::Overflow,
        ]
    }
}

/// Padded Sunday-first layout of one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid<'a> {
    month: YearMonth,
    cells: Vec<Cell<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Lay out `month`, attaching each day's events from `index`.
    ///
    /// `today` is injected by the caller; this never reads a clock.
    pub fn build(
        month: YearMonth,
        index: &'a EventIndex,
        today: NaiveDate,
        selected: Option<NaiveDate>,
    ) -> Self {
        let leading = month.first_weekday() as usize;
        let days = month.days_in_month() as usize;
        let trailing = (DAYS_PER_WEEK - (leading + days) % DAYS_PER_WEEK) % DAYS_PER_WEEK;

        let mut cells = Vec::with_capacity(leading + days + trailing);
        cells.extend(std::iter::repeat_n(Cell::Empty, leading));
        cells.extend((1..=days as u32).filter_map(|day| month.date(day)).map(|date| {
            Cell::Day(DayCell {
                date,
                events: index.lookup_date(date),
                is_today: date == today,
                is_selected: selected == Some(date),
            })
        }));
        cells.extend(std::iter::repeat_n(Cell::Empty, trailing));

        tracing::debug!(%month, cells = cells.len(), leading, trailing, "built month grid");
        MonthGrid { month, cells }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn cells(&self) -> &[Cell<'a>] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows of exactly seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[Cell<'a>]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// The non-empty cells, in date order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell<'a>> {
        self.cells.iter().filter_map(Cell::day)
    }

    pub fn day(&self, day: u32) -> Option<&DayCell<'a>> {
        self.days().find(|cell| cell.date.day() == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn event(id: &str, day: NaiveDate, category: EventCategory) -> Event {
        Event::new(id, &format!("Event {id}"), day, category)
    }

    #[test]
    fn test_length_is_multiple_of_seven() {
        let index = EventIndex::default();
        let today = date(2023, 6, 15);
        for year in [1900, 2000, 2015, 2023, 2024] {
            for month in 1..=12 {
                let grid = MonthGrid::build(ym(year, month), &index, today, None);
                assert_eq!(grid.len() % 7, 0, "{}", grid.month());
                assert!(grid.weeks().all(|week| week.len() == 7));
            }
        }
    }

    #[test]
    fn test_days_are_exactly_the_month_in_order() {
        let index = EventIndex::default();
        let today = date(2023, 6, 15);
        for month in 1..=12 {
            let m = ym(2024, month);
            let grid = MonthGrid::build(m, &index, today, None);
            let days: Vec<u32> = grid.days().map(|c| c.date.day()).collect();
            let expected: Vec<u32> = (1..=m.days_in_month()).collect();
            assert_eq!(days, expected);
            assert!(grid.days().all(|c| m.contains(c.date)));
        }
    }

    #[test]
    fn test_empty_cells_only_at_edges() {
        let index = EventIndex::default();
        let grid = MonthGrid::build(ym(2023, 6), &index, date(2023, 6, 1), None);
        let first_day = grid.cells().iter().position(|c| !c.is_empty()).unwrap();
        let last_day = grid.cells().iter().rposition(|c| !c.is_empty()).unwrap();

        // June 1, 2023 is a Thursday.
        assert_eq!(first_day, 4);
        assert!(grid.cells()[first_day..=last_day].iter().all(|c| !c.is_empty()));
        assert!(grid.len() - last_day - 1 < 7);
    }

    #[test]
    fn test_january_2023_has_no_leading_empties() {
        let index = EventIndex::default();
        let grid = MonthGrid::build(ym(2023, 1), &index, date(2023, 1, 1), None);
        assert!(!grid.cells()[0].is_empty());
        assert_eq!(grid.cells()[0].day().unwrap().date, date(2023, 1, 1));
    }

    #[test]
    fn test_february_leap_year_layouts() {
        let index = EventIndex::default();
        let today = date(2024, 1, 1);
        assert_eq!(MonthGrid::build(ym(2024, 2), &index, today, None).days().count(), 29);
        assert_eq!(MonthGrid::build(ym(1900, 2), &index, today, None).days().count(), 28);
        assert_eq!(MonthGrid::build(ym(2000, 2), &index, today, None).days().count(), 29);
        assert_eq!(MonthGrid::build(ym(2023, 2), &index, today, None).days().count(), 28);
    }

    #[test]
    fn test_today_and_selected_marking() {
        let index = EventIndex::default();
        let grid = MonthGrid::build(
            ym(2023, 6),
            &index,
            date(2023, 6, 15),
            Some(date(2023, 6, 20)),
        );

        for cell in grid.days() {
            match cell.date.day() {
                15 => assert!(cell.is_today && !cell.is_selected),
                20 => assert!(cell.is_selected && !cell.is_today),
                _ => assert!(!cell.is_today && !cell.is_selected),
            }
        }
    }

    #[test]
    fn test_today_outside_displayed_month_marks_nothing() {
        let index = EventIndex::default();
        let grid = MonthGrid::build(ym(2023, 7), &index, date(2023, 6, 15), Some(date(2023, 6, 20)));
        assert!(grid.days().all(|c| !c.is_today && !c.is_selected));
    }

    #[test]
    fn test_events_attached_to_their_days() {
        let events = vec![
            event("1", date(2023, 6, 10), EventCategory::Workshop),
            event("2", date(2023, 6, 10), EventCategory::Meeting),
            event("3", date(2023, 6, 18), EventCategory::Social),
        ];
        let index = EventIndex::build(&events);
        let grid = MonthGrid::build(ym(2023, 6), &index, date(2023, 6, 1), None);

        let tenth = grid.day(10).unwrap();
        assert_eq!(tenth.events.len(), 2);
        assert_eq!(tenth.events[0].category, EventCategory::Workshop);
        assert_eq!(tenth.events[1].category, EventCategory::Meeting);
        assert_eq!(grid.day(18).unwrap().events.len(), 1);

        for cell in grid.days() {
            if cell.date.day() != 10 && cell.date.day() != 18 {
                assert!(!cell.has_events(), "day {}", cell.date);
            }
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        let events = vec![event("1", date(2023, 6, 10), EventCategory::Workshop)];
        let index = EventIndex::build(&events);
        let a = MonthGrid::build(ym(2023, 6), &index, date(2023, 6, 15), Some(date(2023, 6, 10)));
        let b = MonthGrid::build(ym(2023, 6), &index, date(2023, 6, 15), Some(date(2023, 6, 10)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_dots_one_per_event_up_to_two() {
        let events = vec![
            event("1", date(2023, 6, 10), EventCategory::Workshop),
            event("2", date(2023, 6, 10), EventCategory::Deadline),
        ];
        let index = EventIndex::build(&events);
        let grid = MonthGrid::build(ym(2023, 6), &index, date(2023, 6, 1), None);

        assert_eq!(
            grid.day(10).unwrap().dots(),
            vec![
                Dot::Category(EventCategory::Workshop),
                Dot::Category(EventCategory::Deadline)
            ]
        );
        assert!(grid.day(11).unwrap().dots().is_empty());
    }

    #[test]
    fn test_dots_overflow_beyond_two() {
        let events = vec![
            event("1", date(2023, 6, 10), EventCategory::Social),
            event("2", date(2023, 6, 10), EventCategory::Meeting),
            event("3", date(2023, 6, 10), EventCategory::Workshop),
            event("4", date(2023, 6, 10), EventCategory::Deadline),
        ];
        let index = EventIndex::build(&events);
        let grid = MonthGrid::build(ym(2023, 6), &index, date(2023, 6, 1), None);
        let tenth = grid.day(10).unwrap();

        assert_eq!(
            tenth.dots(),
            vec![Dot::Category(EventCategory::Social), Dot::Overflow, Dot::Overflow]
        );
        // The full list is still there.
        assert_eq!(tenth.events.len(), 4);
    }
}
