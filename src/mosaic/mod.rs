/// Tile loading, resizing and per-tile colors
pub mod catalog;
/// End-to-end generation entry point and validated configuration
pub mod pipeline;
/// Grid sampling and candidate lookup
pub mod planner;
/// Parallel frame rendering
pub mod renderer;
