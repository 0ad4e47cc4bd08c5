//! Reusable UI components.

pub mod dark_mode_toggle;
pub mod force_graph;
