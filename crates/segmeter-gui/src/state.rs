/// Application state for the demo shell.
///
/// Centralises everything the UI reads and writes: the active config and
/// segment list (the bar's externally-owned model), the built-in sample
/// datasets, and the result of the most recent dataset load. The widget
/// itself keeps no state; replacing the config or segments here is all it
/// takes to change what the next frame paints.
use segmeter_core::dataset::{load_dataset, Dataset};
use segmeter_core::model::{RenderConfig, Rgb, Segment};
use std::path::Path;

/// All demo application state.
pub struct AppState {
    /// The model currently fed to the bar.
    pub config: RenderConfig,
    pub segments: Vec<Segment>,
    /// Name shown in the title row (sample name or loaded file name).
    pub dataset_name: String,

    /// Built-in sample datasets.
    pub samples: Vec<Dataset>,
    pub selected_sample: usize,

    /// Toolbar mirror of `config.max_value`: when false, `custom_max`
    /// becomes the explicit denominator.
    pub auto_max: bool,
    pub custom_max: f32,

    /// Error from the most recent dataset load, shown inline.
    pub load_error: Option<String>,

    pub dark_mode: bool,
}

impl AppState {
    /// Create the demo state with the first sample dataset applied.
    pub fn new() -> Self {
        let samples = built_in_samples();
        let mut state = Self {
            config: RenderConfig::default(),
            segments: Vec::new(),
            dataset_name: String::new(),
            samples,
            selected_sample: 0,
            auto_max: true,
            custom_max: 100.0,
            load_error: None,
            dark_mode: true,
        };
        state.select_sample(0);
        state
    }

    /// Switch to a built-in sample, replacing config and segments wholesale.
    pub fn select_sample(&mut self, index: usize) {
        let Some(sample) = self.samples.get(index) else {
            return;
        };
        self.selected_sample = index;
        self.config = sample.config.clone();
        self.segments = sample.segments.clone();
        self.dataset_name = sample
            .name
            .clone()
            .unwrap_or_else(|| format!("Sample {}", index + 1));
        self.load_error = None;
        self.sync_max_controls();
    }

    /// Load a dataset file, replacing the current model on success.
    ///
    /// On failure the current model is kept and the error is surfaced
    /// inline.
    pub fn load_dataset_file(&mut self, path: &Path) {
        match load_dataset(path) {
            Ok(dataset) => {
                self.config = dataset.config;
                self.segments = dataset.segments;
                self.dataset_name = dataset.name.unwrap_or_else(|| {
                    path.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "dataset".to_owned())
                });
                self.load_error = None;
                self.sync_max_controls();
            }
            Err(e) => {
                tracing::warn!("dataset load failed for {}: {}", path.display(), e);
                self.load_error = Some(e.to_string());
            }
        }
    }

    /// Push the toolbar max-value controls into the config.
    pub fn apply_max_controls(&mut self) {
        self.config.max_value = if self.auto_max {
            None
        } else {
            Some(self.custom_max)
        };
    }

    /// Pull the config's max value into the toolbar controls after a
    /// wholesale model replacement.
    fn sync_max_controls(&mut self) {
        match self.config.max_value {
            Some(max) => {
                self.auto_max = false;
                self.custom_max = max;
            }
            None => {
                self.auto_max = true;
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// The bundled sample datasets shown in the toolbar picker.
fn built_in_samples() -> Vec<Dataset> {
    const BLUE: Rgb = Rgb::new(0x89, 0xb4, 0xfa);
    const GREEN: Rgb = Rgb::new(0xa6, 0xe3, 0xa1);
    const AMBER: Rgb = Rgb::new(0xf9, 0xe2, 0xaf);
    const PINK: Rgb = Rgb::new(0xf3, 0x8b, 0xa8);
    const MAUVE: Rgb = Rgb::new(0xcb, 0xa6, 0xf7);

    vec![
        Dataset {
            name: Some("Mailbox storage".to_owned()),
            config: RenderConfig {
                max_value: Some(15.0),
                ..Default::default()
            },
            segments: vec![
                Segment::new(6.2)
                    .with_label("Mail")
                    .with_value_text("6.2 GB")
                    .with_color(BLUE),
                Segment::new(3.8)
                    .with_label("Attachments")
                    .with_value_text("3.8 GB")
                    .with_color(AMBER),
                Segment::new(1.1)
                    .with_label("Drafts")
                    .with_value_text("1.1 GB")
                    .with_color(MAUVE),
            ],
        },
        Dataset {
            name: Some("Disk usage".to_owned()),
            config: RenderConfig::default(),
            segments: vec![
                Segment::new(120.0).with_label("Documents").with_color(BLUE),
                Segment::new(260.0).with_label("Media").with_color(PINK),
                Segment::new(80.0).with_label("Code").with_color(GREEN),
                Segment::new(40.0).with_label("System").with_color(AMBER),
            ],
        },
        Dataset {
            name: Some("Edge cases".to_owned()),
            config: RenderConfig::default(),
            segments: vec![
                Segment::new(50.0).with_label("Labelled").with_color(GREEN),
                // Drawn in the bar but absent from the legend.
                Segment::new(30.0).with_color(AMBER),
                // Skipped entirely.
                Segment::new(0.0).with_label("Zero"),
                // Tiny: exercises the minimum visible width.
                Segment::new(0.05).with_label("Tiny").with_color(PINK),
                // No colour set: defaults to black.
                Segment::new(20.0).with_label("Default"),
            ],
        },
    ]
}
