/// Colour scheme and visual theme for Segmeter.
///
/// Provides both dark and light themes. All colour constants are defined
/// here so the widget and shell reference semantically-named values rather
/// than raw hex codes.

use egui::{Color32, Stroke, Visuals};
use segmeter_core::model::Rgb;

/// Which theme is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// Toggle between dark and light.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        };
    }
}

/// Semantic colour palette for Segmeter.
pub struct SegmeterTheme {
    pub background: Color32,
    pub surface: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub error: Color32,
    /// Base fill under the segment stripes. White in both modes so
    /// partially-transparent segment colours sit on a clean base.
    pub bar_track: Color32,
    /// 1 px outline separating the bar from its surroundings.
    pub bar_outline: Color32,
    /// Thin border around legend swatches.
    pub swatch_outline: Color32,
    /// Legend caption text (the strong half of the label/value pair).
    pub legend_label: Color32,
    /// Legend value text (the muted half).
    pub legend_value: Color32,
    pub separator: Color32,
}

impl SegmeterTheme {
    /// Dark theme — the default.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            surface: Color32::from_rgb(0x2a, 0x2a, 0x3c),
            text_primary: Color32::from_rgb(0xe4, 0xe4, 0xe8),
            text_muted: Color32::from_rgb(0x6c, 0x70, 0x86),
            accent: Color32::from_rgb(0x89, 0xb4, 0xfa),
            error: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            bar_track: Color32::WHITE,
            bar_outline: Color32::from_rgb(0xb0, 0xb0, 0xb8),
            swatch_outline: Color32::from_rgb(0xb0, 0xb0, 0xb8),
            legend_label: Color32::from_rgb(0xe4, 0xe4, 0xe8),
            legend_value: Color32::from_rgb(0x9a, 0x9e, 0xb2),
            separator: Color32::from_rgb(0x3a, 0x3a, 0x50),
        }
    }

    /// Light theme — optional toggle.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
            surface: Color32::from_rgb(0xff, 0xff, 0xff),
            text_primary: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            text_muted: Color32::from_rgb(0x8a, 0x8a, 0x9a),
            accent: Color32::from_rgb(0x3a, 0x6f, 0xd8),
            error: Color32::from_rgb(0xd0, 0x40, 0x50),
            bar_track: Color32::WHITE,
            bar_outline: Color32::from_rgb(0xc0, 0xc0, 0xc8),
            swatch_outline: Color32::from_rgb(0xc0, 0xc0, 0xc8),
            legend_label: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            legend_value: Color32::from_rgb(0x5a, 0x5a, 0x6a),
            separator: Color32::from_rgb(0xd0, 0xd0, 0xd8),
        }
    }

    /// Get the theme for the given mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.background.r() < 128 {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.surface;
        visuals.hyperlink_color = self.accent;

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.accent);

        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 4.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}

/// Convert a toolkit-agnostic model colour to an egui colour.
pub fn color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}
