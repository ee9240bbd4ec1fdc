use anyhow::Result;
use chapterhub_core::filter::{sort_by_date, upcoming};
use chapterhub_core::{Event, EventCatalog, EventCategory, EventFilter};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::render::{Render, format_date_label};

pub struct EventsArgs {
    pub search: Option<String>,
    pub category: Option<EventCategory>,
    pub upcoming: bool,
    pub limit: Option<usize>,
}

pub fn run(catalog: &EventCatalog, args: EventsArgs, today: NaiveDate) -> Result<()> {
    let filter = EventFilter {
        query: args.search,
        category: args.category,
    };
    let matching = filter.apply(&catalog.events);

    let events: Vec<&Event> = if args.upcoming {
        upcoming(&matching, today, args.limit)
    } else {
        let mut sorted = matching;
        sort_by_date(&mut sorted);
        if let Some(limit) = args.limit {
            sorted.truncate(limit);
        }
        sorted
    };

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Group events by day and print
    let mut current_label: Option<String> = None;

    for event in &events {
        let label = match event.date {
            Some(date) => format_date_label(date, today),
            None => "Invalid date".to_string(),
        };

        if current_label.as_ref() != Some(&label) {
            if current_label.is_some() {
                println!();
            }
            println!("{}", label.bold());
            current_label = Some(label);
        }

        println!("  {}", event.render());
    }

    Ok(())
}
