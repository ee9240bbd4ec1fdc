use std::path::PathBuf;

use anyhow::Result;
use chapterhub_core::ChapterHubConfig;
use owo_colors::OwoColorize;

pub fn run(events_override: Option<PathBuf>) -> Result<()> {
    let config_path = ChapterHubConfig::config_path()?;
    let config = ChapterHubConfig::load()?;

    println!("{} {}", "Config file:".dimmed(), config_path.display());

    match events_override {
        Some(path) => println!(
            "{} {} {}",
            "Events file:".dimmed(),
            path.display(),
            "(from --events)".dimmed()
        ),
        None => {
            let path = config.events_path();
            let status = if path.exists() { "" } else { " (missing)" };
            println!("{} {}{}", "Events file:".dimmed(), path.display(), status.yellow());
        }
    }

    Ok(())
}
