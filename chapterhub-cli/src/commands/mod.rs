pub mod config;
pub mod day;
pub mod events;
pub mod month;
