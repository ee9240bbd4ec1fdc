use anyhow::Result;
use chapterhub_core::{EventCatalog, EventIndex};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::render::{Render, format_date_label};

pub fn run(catalog: &EventCatalog, day: NaiveDate, today: NaiveDate) -> Result<()> {
    let index = EventIndex::build(&catalog.events);
    let events = index.lookup_date(day);

    println!("{}", format_date_label(day, today).bold());

    if events.is_empty() {
        println!("  {}", "No events for this date".dimmed());
        return Ok(());
    }

    for event in events {
        println!("  {}", event.render());
        if let Some(description) = &event.description {
            println!("    {}", description.dimmed());
        }
    }

    Ok(())
}
