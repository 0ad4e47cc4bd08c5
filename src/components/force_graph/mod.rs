//! Career path graph visualization component.
//!
//! Renders roles, skills and internships as a force-directed graph on an HTML
//! canvas with:
//! - Physics-based node positioning via force simulation
//! - Category-coded nodes and directed pathway / dashed similarity edges
//! - Pan, zoom, node dragging and animated navigation controls
//! - Hover tooltips and light/dark theming that follows the page
//!
//! # Example
//!
//! ```ignore
//! use career_gps_graph::CareerGraphCanvas;
//!
//! view! { <CareerGraphCanvas center_node="Data Analyst" /> }
//! ```

mod camera;
mod canvas;
mod component;
pub mod config;
mod dataset;
mod error;
mod paint;
mod render;
mod state;
pub mod style;
pub mod theme;
mod types;

pub use camera::{CameraCommand, CameraController, Point};
pub use component::{CareerGraphCanvas, tooltip_text};
pub use dataset::{CareerGraph, builtin_graph_data};
pub use error::DatasetError;
pub use theme::ColorScheme;
pub use types::{Category, EdgeKind, GraphData, GraphLink, GraphNode, Sector};
