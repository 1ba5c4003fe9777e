/// Data model for the Segmeter bar.
///
/// Re-exports the segment and configuration value types.
pub mod config;
pub mod segment;

pub use config::RenderConfig;
pub use segment::{Rgb, Segment};
