// Utility functions module
pub mod calendar;
pub mod config;
pub mod formatters;
