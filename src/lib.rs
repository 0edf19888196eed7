//! Scores and ranks cities from a master list of raw facts, and lists the
//! published ranking with search and sort.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;
