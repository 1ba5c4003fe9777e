/// Segmeter GUI — egui widget and demo shell.
///
/// The renderer lives in [`widgets::segmented_bar`]; geometry comes from
/// `segmeter-core`. The rest of this crate is the embedding demo
/// application.
pub mod app;
pub mod icon;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::SegmeterApp;
pub use state::AppState;
