/// Segmeter Core — data model and layout engine.
///
/// This crate contains all bar/legend geometry with zero UI dependencies.
/// It is designed to be reusable across different frontends (GUI, TUI,
/// image export).
///
/// # Modules
///
/// - [`model`] — `Segment`, `RenderConfig`, and colour value types.
/// - [`layout`] — pure proportional-width and legend-packing computation.
/// - [`dataset`] — JSON dataset files for embedding applications.
pub mod dataset;
pub mod layout;
pub mod model;
