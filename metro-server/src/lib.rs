//! Metro schedule server.
//!
//! Answers "when is the next train at this station?" and "when does the last
//! one leave?" from per-station service hours and headways stored in
//! Postgres, with every time evaluated in the Europe/Paris timezone.

pub mod config;
pub mod directory;
pub mod domain;
pub mod schedule;
pub mod web;
