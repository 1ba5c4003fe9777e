/// A single proportional slice of the bar.
///
/// Segments are immutable value types owned by the embedding application
/// and replaced wholesale when the underlying data changes. The renderer
/// never mutates them.
use serde::{Deserialize, Serialize};

/// Plain 8-bit RGB colour, independent of any UI toolkit.
///
/// Frontends convert this to their own colour type at the drawing boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Default fill for segments that carry no colour of their own.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One proportional slice of the progress bar.
///
/// - `value` drives the slice width; values `<= 0` are skipped entirely
///   (not drawn, not legended).
/// - `value_text` overrides the displayed value label; when absent the
///   label is the rounded percentage of the effective maximum.
/// - `label` is the legend caption; without one the segment is still drawn
///   in the bar but never appears in the legend.
/// - `color` defaults to [`Rgb::BLACK`] when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub value: f32,
    #[serde(default)]
    pub value_text: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: Option<Rgb>,
}

impl Segment {
    /// Create an unlabelled, uncoloured segment.
    pub fn new(value: f32) -> Self {
        Self {
            value,
            value_text: None,
            label: None,
            color: None,
        }
    }

    /// Set the legend caption.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the fill colour.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    /// Override the displayed value text.
    pub fn with_value_text(mut self, text: impl Into<String>) -> Self {
        self.value_text = Some(text.into());
        self
    }

    /// The fill colour, substituting black when none is set.
    pub fn fill_color(&self) -> Rgb {
        self.color.unwrap_or(Rgb::BLACK)
    }

    /// The value label shown in the legend: the explicit override if set,
    /// otherwise the rounded percentage of `real_max`.
    ///
    /// Callers must ensure `real_max > 0` when no override is present;
    /// the layout never requests a label for a zero denominator.
    pub fn display_value(&self, real_max: f32) -> String {
        match &self.value_text {
            Some(text) => text.clone(),
            None => format!("{}%", (self.value / real_max * 100.0).round() as i64),
        }
    }
}
