/// Bar and legend layout — the geometry half of the renderer.
///
/// All proportional-width and legend-packing rules live here as pure
/// functions so they can be unit-tested without a window. Frontends feed
/// the resulting rectangles straight to their painter.
///
/// Coordinates are horizontal offsets from the left edge of the drawing
/// region; vertical placement is the frontend's concern (the bar is
/// bottom-anchored, the legend sits below it).
use crate::model::{RenderConfig, Rgb, Segment};

/// Minimum on-screen width for any positive-value slice, so tiny segments
/// stay visible.
pub const MIN_SLICE_WIDTH: f32 = 2.0;

/// Base spacing unit used throughout the legend row.
pub const SPACING: f32 = 4.0;

/// Side length of the square legend colour swatch.
pub const SWATCH_SIZE: f32 = 10.0;

/// Which font a legend string is measured with.
///
/// Labels are drawn in the bold/strong style, values in the regular one;
/// the two can measure differently, so the measurer must know which is
/// being asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontKind {
    Label,
    Value,
}

/// One stripe of the bar, ready to fill.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    /// Index into the input segment list.
    pub segment_index: usize,
    /// Left edge, relative to the region's left edge.
    pub x: f32,
    pub width: f32,
    pub color: Rgb,
}

/// One legend entry: swatch position plus the two text runs.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// Index into the input segment list.
    pub segment_index: usize,
    /// Left edge of the colour swatch.
    pub swatch_x: f32,
    /// Left edge of both text runs (label above, value below).
    pub text_x: f32,
    pub color: Rgb,
    pub label: String,
    pub value_text: String,
    pub label_width: f32,
    pub value_width: f32,
}

impl LegendItem {
    /// Width of the wider of the two text runs.
    pub fn text_width(&self) -> f32 {
        self.label_width.max(self.value_width)
    }

    /// Right edge of this entry's bounding box.
    pub fn right(&self) -> f32 {
        self.text_x + self.text_width()
    }
}

/// The computed geometry for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    /// The effective denominator shared by slice widths and percentages.
    pub real_max: f32,
    pub slices: Vec<Slice>,
    pub legend: Vec<LegendItem>,
}

/// The effective denominator for proportional widths: the explicit
/// `max_value` if set, otherwise the sum of all segment values.
pub fn effective_max(config: &RenderConfig, segments: &[Segment]) -> f32 {
    match config.max_value {
        Some(max) => max,
        None => segments.iter().map(|s| s.value).sum(),
    }
}

impl BarLayout {
    /// Compute the full bar + legend geometry for a region `region_width`
    /// wide.
    ///
    /// `measure` returns the rendered width of a string in the given font;
    /// it is only called for legend text, never for bar slices.
    ///
    /// When the effective denominator is not positive (all values zero or
    /// negative with auto max, or a non-positive explicit `max_value`) no
    /// slices or legend items are produced and the frontend paints just the
    /// empty track.
    pub fn compute(
        region_width: f32,
        config: &RenderConfig,
        segments: &[Segment],
        measure: impl Fn(&str, FontKind) -> f32,
    ) -> Self {
        let real_max = effective_max(config, segments);

        let mut slices = Vec::new();
        let mut legend = Vec::new();

        if real_max <= 0.0 {
            return Self {
                real_max,
                slices,
                legend,
            };
        }

        // Bar slices: left-to-right cursor, non-positive values skipped
        // without advancing.
        let mut cursor = 0.0_f32;
        for (i, segment) in segments.iter().enumerate() {
            if segment.value <= 0.0 {
                continue;
            }
            let width = (segment.value / real_max * region_width).max(MIN_SLICE_WIDTH);
            slices.push(Slice {
                segment_index: i,
                x: cursor,
                width,
                color: segment.fill_color(),
            });
            cursor += width;
        }

        // Legend: its own cursor, entries only for positive-value segments
        // that carry a label.
        if config.draw_legend {
            let mut cursor = SPACING;
            for (i, segment) in segments.iter().enumerate() {
                if segment.value <= 0.0 {
                    continue;
                }
                let Some(label) = segment.label.as_deref() else {
                    continue;
                };

                let value_text = segment.display_value(real_max);
                let label_width = measure(label, FontKind::Label);
                let value_width = measure(&value_text, FontKind::Value);

                legend.push(LegendItem {
                    segment_index: i,
                    swatch_x: cursor,
                    text_x: cursor + SWATCH_SIZE + SPACING * 1.5,
                    color: segment.fill_color(),
                    label: label.to_owned(),
                    value_text,
                    label_width,
                    value_width,
                });

                cursor += SWATCH_SIZE + SPACING + label_width.max(value_width) + SPACING * 4.0;
            }
        }

        Self {
            real_max,
            slices,
            legend,
        }
    }
}
