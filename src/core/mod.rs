pub mod backup;
pub mod calendar;
pub mod dashboard;
pub mod log;
pub mod repository;
pub mod session;
