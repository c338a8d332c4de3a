//! Core force-directed layout library for bibliography cluster diagrams.
//!
//! Main components:
//! - [`diagram`] — arena holding every set and node of one diagram.
//! - [`set`] — bibliographic grouping clusters and their label geometry.
//! - [`node`] — individual bibliography entries.
//! - [`phases`] — per-frame simulation phases.
//! - [`highlight`] — highlight states and their draw-style mappings.
//! - [`config`] — tuning constants for the simulation.
//! - [`types`] — shared index aliases.

pub mod config;
pub mod diagram;
pub mod highlight;
pub mod node;
pub mod phases;
pub mod set;
pub mod types;
