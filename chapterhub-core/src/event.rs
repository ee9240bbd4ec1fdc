//! Chapter event types.
//!
//! Events come from an external catalog (see [`crate::catalog`]). A record
//! whose date is missing or not a real calendar day is still loaded, with
//! `date = None`, so a single bad row cannot blank the whole calendar.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ChapterHubError;
use crate::month::parse_date;

/// A chapter event scheduled on a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Day of the event. `None` when the source record had a malformed date.
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    pub category: EventCategory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Event {
    pub fn new(id: &str, title: &str, date: NaiveDate, category: EventCategory) -> Self {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            date: Some(date),
            category,
            description: None,
            location: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    /// True when the event carries a usable calendar date.
    pub fn has_valid_date(&self) -> bool {
        self.date.is_some()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Closed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Workshop,
    Meeting,
    Social,
    Deadline,
}

impl EventCategory {
    pub const ALL: [EventCategory; 4] = [
        EventCategory::Workshop,
        EventCategory::Meeting,
        EventCategory::Social,
        EventCategory::Deadline,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventCategory::Workshop => "workshop",
            EventCategory::Meeting => "meeting",
            EventCategory::Social => "social",
            EventCategory::Deadline => "deadline",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = ChapterHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        EventCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                ChapterHubError::Catalog(format!(
                    "Unknown event category '{}'. Expected one of: workshop, meeting, social, deadline",
                    s
                ))
            })
    }
}

/// Whatever a catalog put in an event's `date` field.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Toml(toml::value::Datetime),
    Other(IgnoredAny),
}

impl RawDate {
    fn into_date(self) -> Option<NaiveDate> {
        match self {
            RawDate::Text(s) => parse_date(&s).ok(),
            RawDate::Toml(datetime) => {
                let date = datetime.date?;
                NaiveDate::from_ymd_opt(date.year.into(), date.month.into(), date.day.into())
            }
            RawDate::Other(_) => None,
        }
    }
}

/// Accepts a `YYYY-MM-DD` string or a TOML date (a datetime contributes its
/// date part). Any other value becomes `None`.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawDate> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(RawDate::into_date))
}
