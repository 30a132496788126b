pub mod calendar;
pub mod entry;
pub mod level;
pub mod owner;
