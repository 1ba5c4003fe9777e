//! Segmeter — segmented progress bar widget demo.
//!
//! Thin binary entry point. The widget and layout engine live in the
//! `segmeter-core` and `segmeter-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Segmeter starting");

    let icon = segmeter_gui::icon::generate_icon(64);

    // Build application state before opening the window so the first
    // rendered frame already shows a populated bar.
    let state = segmeter_gui::AppState::new();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Segmeter -- Segmented Progress Bar")
            .with_inner_size([760.0, 420.0])
            .with_min_inner_size([480.0, 280.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "Segmeter",
        options,
        Box::new(|cc| Ok(Box::new(segmeter_gui::SegmeterApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
