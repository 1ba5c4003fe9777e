/// Render configuration for a single draw pass.
use serde::{Deserialize, Serialize};

/// Configuration for one bar render.
///
/// Owned by the embedding application alongside the segment list and
/// replaced wholesale when the display should change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Explicit denominator for proportional widths and percentages.
    /// `None` means auto: the denominator is the sum of all segment values.
    pub max_value: Option<f32>,

    /// Height of the bar region, anchored to the bottom edge of the
    /// drawing region.
    pub bar_height: f32,

    /// Whether the swatch/label/value legend is drawn below the bar.
    pub draw_legend: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_value: None,
            bar_height: 22.0,
            draw_legend: true,
        }
    }
}
