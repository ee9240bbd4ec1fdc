//! TUI rendering traits for chapterhub types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to chapterhub-core types using owo_colors.

use chapterhub_core::grid::{Cell, DayCell, Dot, MonthGrid, WEEKDAY_LABELS};
use chapterhub_core::{Event, EventCategory};
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

/// Width of one calendar column: two digits, up to three dots, a gap.
const CELL_WIDTH: usize = 6;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Colorize text according to the event category
fn colorize_category(category: EventCategory, text: &str) -> String {
    match category {
        EventCategory::Workshop => text.blue().to_string(),
        EventCategory::Meeting => text.yellow().to_string(),
        EventCategory::Social => text.green().to_string(),
        EventCategory::Deadline => text.red().to_string(),
    }
}

impl Render for EventCategory {
    fn render(&self) -> String {
        colorize_category(*self, &format!("[{}]", self))
    }
}

impl Render for Dot {
    fn render(&self) -> String {
        match self {
            Dot::Category(category) => colorize_category(*category, "•"),
            Dot::Overflow => "•".dimmed().to_string(),
        }
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let mut line = format!(
            "{} {} {}",
            colorize_category(self.category, "●"),
            self.title,
            self.category.render()
        );
        if let Some(location) = &self.location {
            line.push_str(&format!(" {}", location.dimmed()));
        }
        line
    }
}

impl Render for DayCell<'_> {
    fn render(&self) -> String {
        let number = format!("{:>2}", self.date.day());
        let number = if self.is_selected {
            number.reversed().bold().to_string()
        } else if self.is_today {
            number.magenta().bold().to_string()
        } else if self.has_events() {
            number.bold().to_string()
        } else {
            number
        };

        let dots = self.dots();
        let rendered_dots: String = dots.iter().map(Render::render).collect();
        // Pad on the visible width; the ANSI codes don't take up columns.
        let padding = " ".repeat(CELL_WIDTH - 2 - dots.len());
        format!("{}{}{}", number, rendered_dots, padding)
    }
}

impl Render for MonthGrid<'_> {
    fn render(&self) -> String {
        let width = CELL_WIDTH * WEEKDAY_LABELS.len();
        let mut lines = vec![format!("{:^width$}", self.month().to_string()).bold().to_string()];

        lines.push(
            WEEKDAY_LABELS
                .iter()
                .map(|label| format!("{:<CELL_WIDTH$}", label))
                .collect::<String>()
                .dimmed()
                .to_string(),
        );

        for week in self.weeks() {
            let row: String = week
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => " ".repeat(CELL_WIDTH),
                    Cell::Day(day) => day.render(),
                })
                .collect();
            lines.push(row.trim_end().to_string());
        }

        lines.join("\n")
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d, %Y").to_string(),
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
