/// Segmented progress bar widget — a rounded bar of proportional colored
/// stripes with a swatch-and-label legend underneath.
///
/// All geometry comes from `segmeter_core::layout`; this module only turns
/// it into painter calls. Rendering is a single stateless pass: the caller
/// owns the config and segment list and simply repaints whenever they
/// change.
use crate::theme::{color32, SegmeterTheme};
use egui::{Align2, FontId, Painter, Pos2, Rect, Response, Sense, Stroke, StrokeKind, Ui, Vec2};
use segmeter_core::layout::{BarLayout, FontKind, SPACING, SWATCH_SIZE};
use segmeter_core::model::{RenderConfig, Segment};

/// Point size for both legend text runs.
const LEGEND_FONT_SIZE: f32 = 10.0;

/// Draw the segmented bar as a widget, allocating the available width and
/// exactly the height the bar (plus legend band, when enabled) needs.
pub fn segmented_bar(
    ui: &mut Ui,
    theme: &SegmeterTheme,
    config: &RenderConfig,
    segments: &[Segment],
) -> Response {
    let width = ui.available_width();
    let font = FontId::proportional(LEGEND_FONT_SIZE);
    let row_height = ui.fonts(|f| f.row_height(&font));

    let height = if config.draw_legend {
        // Bar, gap, then two stacked text rows (label over value).
        config.bar_height + SPACING * 3.0 + row_height + SPACING * 0.5 + row_height
    } else {
        config.bar_height
    };

    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());
    if ui.is_rect_visible(rect) {
        paint_segmented_bar(ui.painter(), rect, theme, config, segments);
    }
    response
}

/// Paint the bar and legend into `region`.
///
/// Side-effects only the painter; no state is retained between calls.
/// A degenerate region or an empty segment list is a no-op.
pub fn paint_segmented_bar(
    painter: &Painter,
    region: Rect,
    theme: &SegmeterTheme,
    config: &RenderConfig,
    segments: &[Segment],
) {
    if segments.is_empty() || region.width() <= 0.0 || region.height() <= 0.0 {
        return;
    }

    let bar_rect = Rect::from_min_size(region.min, Vec2::new(region.width(), config.bar_height));
    let corner = config.bar_height / 4.0;

    // Track: clean base under partially-transparent segment colours.
    painter.rect_filled(bar_rect, corner, theme.bar_track);

    // egui's default font has no bold variant; the label/value distinction
    // uses the strong/muted colour pair instead.
    let font = FontId::proportional(LEGEND_FONT_SIZE);
    let layout = BarLayout::compute(region.width(), config, segments, |text, _kind: FontKind| {
        painter
            .layout_no_wrap(text.to_owned(), font.clone(), theme.legend_label)
            .size()
            .x
    });

    // Stripes, clipped to the bar so overflow (explicit max below the sum)
    // and the rounded corners stay tidy.
    let clipped = painter.with_clip_rect(bar_rect);
    for slice in &layout.slices {
        let stripe = Rect::from_min_size(
            bar_rect.min + Vec2::new(slice.x, 0.0),
            Vec2::new(slice.width, config.bar_height),
        );
        clipped.rect_filled(stripe, 0.0, color32(slice.color));
    }

    // Outline separating the bar from its background.
    painter.rect_stroke(
        bar_rect,
        corner,
        Stroke::new(1.0, theme.bar_outline),
        StrokeKind::Inside,
    );

    if layout.legend.is_empty() {
        return;
    }

    let swatch_top = bar_rect.bottom() + SPACING * 3.0;
    let swatch_corner = SWATCH_SIZE / 4.0;

    for item in &layout.legend {
        let swatch = Rect::from_min_size(
            Pos2::new(region.left() + item.swatch_x, swatch_top),
            Vec2::splat(SWATCH_SIZE),
        );
        painter.rect_filled(swatch, swatch_corner, color32(item.color));
        painter.rect_stroke(
            swatch,
            swatch_corner,
            Stroke::new(0.5, theme.swatch_outline),
            StrokeKind::Inside,
        );

        let text_x = region.left() + item.text_x;
        let label_rect = painter.text(
            Pos2::new(text_x, swatch_top - 1.0),
            Align2::LEFT_TOP,
            &item.label,
            font.clone(),
            theme.legend_label,
        );
        // Value directly below the label, left-aligned with it.
        painter.text(
            Pos2::new(text_x, label_rect.bottom() + SPACING * 0.5),
            Align2::LEFT_TOP,
            &item.value_text,
            font.clone(),
            theme.legend_value,
        );
    }
}
