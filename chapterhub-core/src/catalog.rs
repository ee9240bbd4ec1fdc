//! Event catalog files.
//!
//! A catalog is a TOML file with `[[events]]` tables or a JSON file with an
//! `events` array. Dates are `YYYY-MM-DD` strings, or native dates in TOML.
//! Event ids must be unique within a catalog.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChapterHubError, ChapterHubResult};
use crate::event::Event;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventCatalog {
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    fn for_path(path: &Path) -> ChapterHubResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(CatalogFormat::Toml),
            Some("json") => Ok(CatalogFormat::Json),
            _ => Err(ChapterHubError::Catalog(format!(
                "Unsupported catalog file '{}'. Expected a .toml or .json file",
                path.display()
            ))),
        }
    }
}

impl EventCatalog {
    pub fn load(path: &Path) -> ChapterHubResult<Self> {
        let format = CatalogFormat::for_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let catalog: EventCatalog = match format {
            CatalogFormat::Toml => toml::from_str(&content).map_err(|e| e.to_string()),
            CatalogFormat::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
        }
        .and_then(|catalog: EventCatalog| catalog.checked())
        .map_err(|e| ChapterHubError::Catalog(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), events = catalog.events.len(), "loaded event catalog");
        Ok(catalog)
    }

    pub fn from_toml(content: &str) -> ChapterHubResult<Self> {
        toml::from_str(content)
            .map_err(|e| e.to_string())
            .and_then(|catalog: EventCatalog| catalog.checked())
            .map_err(ChapterHubError::Catalog)
    }

    pub fn from_json(content: &str) -> ChapterHubResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| e.to_string())
            .and_then(|catalog: EventCatalog| catalog.checked())
            .map_err(ChapterHubError::Catalog)
    }

    pub fn to_toml(&self) -> ChapterHubResult<String> {
        toml::to_string_pretty(self).map_err(|e| ChapterHubError::Catalog(e.to_string()))
    }

    /// Events whose date could not be parsed.
    pub fn malformed(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| !e.has_valid_date())
    }

    /// Reject duplicate ids and warn about events that will be left off the
    /// calendar.
    fn checked(self) -> Result<Self, String> {
        {
            let mut seen = HashSet::new();
            if let Some(dup) = self.events.iter().find(|e| !seen.insert(e.id.as_str())) {
                return Err(format!("Duplicate event id '{}'", dup.id));
            }
        }

        for event in self.malformed() {
            tracing::warn!(event_id = %event.id, title = %event.title, "event has a malformed date");
        }
        Ok(self)
    }
}
