//! Drawing layer for the panel: compiled colors and the ratatui widget that
//! turns the sample ring into a scrolling bar chart.

pub mod graph;
pub mod theme;

pub use graph::CpuGraph;
pub use theme::GraphTheme;
