//! Per-session calendar selection state.

use chrono::NaiveDate;

use crate::error::ChapterHubResult;
use crate::event::Event;
use crate::grid::MonthGrid;
use crate::index::EventIndex;
use crate::month::{MonthStep, YearMonth};

/// Which month is displayed and which day (if any) is selected.
///
/// Each UI session owns its own value; it is only changed through
/// [`SelectionState::change_month`] and [`SelectionState::select_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    displayed: YearMonth,
    selected: Option<NaiveDate>,
}

impl SelectionState {
    /// Start on the month containing `today`, nothing selected.
    ///
    /// Fails with [`InvalidYear`](crate::ChapterHubError::InvalidYear) when `today` is outside the
    /// supported year range.
    pub fn new(today: NaiveDate) -> ChapterHubResult<Self> {
        Ok(SelectionState::showing(YearMonth::of(today)?))
    }

    pub fn showing(month: YearMonth) -> Self {
        SelectionState {
            displayed: month,
            selected: None,
        }
    }

    pub fn displayed(&self) -> YearMonth {
        self.displayed
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Move one month back or forward. The selected date is kept.
    pub fn change_month(&mut self, step: MonthStep) {
        self.displayed = self.displayed.step(step);
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Grid for the displayed month.
    pub fn grid<'a>(&self, index: &'a EventIndex, today: NaiveDate) -> MonthGrid<'a> {
        MonthGrid::build(self.displayed, index, today, self.selected)
    }

    /// Events for the day-detail list; empty when nothing is selected.
    pub fn selected_events<'a>(&self, index: &'a EventIndex) -> &'a [Event] {
        match self.selected {
            Some(date) => index.lookup_date(date),
            None => &[],
        }
    }
}
