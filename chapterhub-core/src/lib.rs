//! Calendar core for chapterhub.
//!
//! This crate provides the pieces behind the dashboard's calendar widget and
//! events page:
//! - `EventIndex` for per-day event lookup
//! - `MonthGrid` for the Sunday-first month layout with today/selected marks
//! - `SelectionState` for the displayed month and selected day
//! - `EventFilter` for search and category filtering
//! - `EventCatalog` and `ChapterHubConfig` for loading events from disk

pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod grid;
pub mod index;
pub mod month;
pub mod selection;

pub use catalog::EventCatalog;
pub use crate::config::ChapterHubConfig;
pub use error::{ChapterHubError, ChapterHubResult};
pub use event::{Event, EventCategory};
pub use filter::EventFilter;
pub use grid::{Cell, DayCell, Dot, MonthGrid};
pub use index::EventIndex;
pub use month::{MonthStep, YearMonth};
pub use selection::SelectionState;
