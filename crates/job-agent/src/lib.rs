//! Job listing catalog, filter/sort engine, CV analysis, and session plumbing
//! for the AI Job Agent service.

pub mod config;
pub mod cv;
pub mod error;
pub mod listings;
pub mod session;
pub mod telemetry;
