/// Main `eframe::App` implementation for the Segmeter demo shell.
///
/// A toolbar of model controls over a central panel that hosts the bar
/// widget. Every control mutates `AppState` directly; the widget repaints
/// from that state each frame, so there is no invalidation machinery.
use crate::state::AppState;
use crate::theme::{SegmeterTheme, ThemeMode};
use crate::widgets;

/// The Segmeter demo application.
pub struct SegmeterApp {
    state: AppState,
}

impl SegmeterApp {
    /// Create the application from pre-built state.
    ///
    /// Build the state *before* `eframe::run_native` so the first rendered
    /// frame already shows a populated bar.
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self { state }
    }
}

impl eframe::App for SegmeterApp {
    /// Match the GPU clear colour to the theme background so there is no
    /// colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mode = if self.state.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };
        let theme = SegmeterTheme::for_mode(mode);
        theme.apply(ctx);

        // Dropped dataset files replace the model wholesale.
        let dropped: Vec<_> = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(path) = file.path {
                self.state.load_dataset_file(&path);
            }
        }

        // ── Toolbar ───────────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    let mut selected = self.state.selected_sample;
                    egui::ComboBox::from_id_salt("sample_picker")
                        .selected_text(self.state.dataset_name.clone())
                        .show_ui(ui, |ui| {
                            for (i, sample) in self.state.samples.iter().enumerate() {
                                let name = sample
                                    .name
                                    .clone()
                                    .unwrap_or_else(|| format!("Sample {}", i + 1));
                                ui.selectable_value(&mut selected, i, name);
                            }
                        });
                    if selected != self.state.selected_sample {
                        self.state.select_sample(selected);
                    }

                    ui.separator();

                    ui.label("Bar height");
                    ui.add(
                        egui::Slider::new(&mut self.state.config.bar_height, 8.0..=48.0)
                            .fixed_decimals(0),
                    );

                    ui.separator();

                    ui.checkbox(&mut self.state.config.draw_legend, "Legend");

                    ui.separator();

                    let auto_changed = ui.checkbox(&mut self.state.auto_max, "Auto max").changed();
                    let mut max_changed = false;
                    if !self.state.auto_max {
                        max_changed = ui
                            .add(
                                egui::DragValue::new(&mut self.state.custom_max)
                                    .speed(1.0)
                                    .range(0.0..=f32::MAX),
                            )
                            .changed();
                    }
                    if auto_changed || max_changed {
                        self.state.apply_max_controls();
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let icon = if self.state.dark_mode { "☀" } else { "🌙" };
                        if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                            self.state.dark_mode = !self.state.dark_mode;
                        }
                    });
                });
                ui.add_space(4.0);
            });

        // ── Central panel ─────────────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(&self.state.dataset_name)
                    .size(14.0)
                    .strong()
                    .color(theme.text_primary),
            );

            if let Some(ref err) = self.state.load_error {
                ui.label(
                    egui::RichText::new(err.as_str())
                        .size(12.0)
                        .color(theme.error),
                );
            }

            ui.add_space(12.0);
            widgets::segmented_bar::segmented_bar(
                ui,
                &theme,
                &self.state.config,
                &self.state.segments,
            );

            ui.add_space(16.0);
            ui.label(
                egui::RichText::new("Drop a dataset JSON file here to load it.")
                    .size(11.0)
                    .color(theme.text_muted),
            );
        });
    }
}
