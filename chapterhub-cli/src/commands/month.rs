use anyhow::Result;
use chapterhub_core::{EventCatalog, EventIndex, MonthStep, SelectionState, YearMonth};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::render::{Render, format_date_label, pluralize};

pub struct MonthArgs {
    pub month: Option<YearMonth>,
    pub select: Option<NaiveDate>,
    pub prev: bool,
    pub next: bool,
}

pub fn run(catalog: &EventCatalog, args: MonthArgs, today: NaiveDate) -> Result<()> {
    let index = EventIndex::build(&catalog.events);

    let mut state = match (args.month, args.select) {
        (Some(month), _) => SelectionState::showing(month),
        (None, Some(day)) => SelectionState::showing(YearMonth::of(day)?),
        (None, None) => SelectionState::new(today)?,
    };
    if let Some(day) = args.select {
        state.select_date(day);
    }
    if args.prev {
        state.change_month(MonthStep::Previous);
    }
    if args.next {
        state.change_month(MonthStep::Next);
    }

    println!("{}", state.grid(&index, today).render());
    println!();

    match state.selected() {
        Some(day) => {
            println!("{}", format_date_label(day, today).bold());
            let events = state.selected_events(&index);
            if events.is_empty() {
                println!("  {}", "No events for this date".dimmed());
            }
            for event in events {
                println!("  {}", event.render());
            }
        }
        None => println!("{}", "Select a date with --select YYYY-MM-DD to view events".dimmed()),
    }

    let rejected = index.rejected();
    if !rejected.is_empty() {
        println!();
        println!(
            "{}",
            format!(
                "Skipped {} {} with an invalid date: {}",
                rejected.len(),
                pluralize("event", rejected.len()),
                rejected.join(", ")
            )
            .yellow()
        );
    }

    Ok(())
}
