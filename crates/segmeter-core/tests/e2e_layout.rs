/// End-to-end layout tests — whole render-pass scenarios.
///
/// These exercise the public layout API the way a frontend does: build a
/// config and segment list, compute a full [`BarLayout`], and check the
/// geometry a painter would receive. Text measurement uses a deterministic
/// fixed-advance fake so results are stable across platforms.
use segmeter_core::layout::{BarLayout, FontKind, MIN_SLICE_WIDTH, SPACING, SWATCH_SIZE};
use segmeter_core::model::{RenderConfig, Rgb, Segment};

const RED: Rgb = Rgb::new(0xf3, 0x8b, 0xa8);
const BLUE: Rgb = Rgb::new(0x89, 0xb4, 0xfa);

/// Fixed-advance fake font: 6 px per character, both styles.
fn measure(text: &str, _font: FontKind) -> f32 {
    text.chars().count() as f32 * 6.0
}

// ── Scenarios ────────────────────────────────────────────────────────────

/// Two equal segments, auto max, width 200: both slices 100 wide with
/// legend values "50%".
#[test]
fn two_equal_segments_split_the_bar() {
    let config = RenderConfig::default();
    let segments = [
        Segment::new(50.0).with_label("A").with_color(RED),
        Segment::new(50.0).with_label("B").with_color(BLUE),
    ];
    let layout = BarLayout::compute(200.0, &config, &segments, measure);

    assert_eq!(layout.real_max, 100.0);
    assert_eq!(layout.slices.len(), 2);
    assert!((layout.slices[0].width - 100.0).abs() < 1e-4);
    assert!((layout.slices[1].width - 100.0).abs() < 1e-4);
    assert_eq!(layout.slices[0].color, RED);
    assert_eq!(layout.slices[1].color, BLUE);

    assert_eq!(layout.legend.len(), 2);
    assert_eq!(layout.legend[0].label, "A");
    assert_eq!(layout.legend[0].value_text, "50%");
    assert_eq!(layout.legend[1].label, "B");
    assert_eq!(layout.legend[1].value_text, "50%");
}

/// A single zero-value segment produces no slices and no legend entries.
#[test]
fn zero_value_segment_renders_nothing() {
    let config = RenderConfig::default();
    let segments = [Segment::new(0.0).with_label("X")];
    let layout = BarLayout::compute(200.0, &config, &segments, measure);

    assert!(layout.slices.is_empty());
    assert!(layout.legend.is_empty());
}

/// A single positive segment fills the whole region when max is auto
/// (denominator sums to its own value).
#[test]
fn single_segment_fills_region() {
    let config = RenderConfig::default();
    let segments = [Segment::new(1.0).with_label("Y")];
    let layout = BarLayout::compute(1000.0, &config, &segments, measure);

    assert_eq!(layout.slices.len(), 1);
    assert!((layout.slices[0].width - 1000.0).abs() < 1e-4);
    assert_eq!(layout.legend.len(), 1);
    assert_eq!(layout.legend[0].value_text, "100%");
}

// ── Properties ────────────────────────────────────────────────────────────────

/// Slice widths match value/real_max proportions within float tolerance,
/// and their sum covers the region (no floor cases involved here).
#[test]
fn slice_widths_are_proportional_and_cover_region() {
    let config = RenderConfig::default();
    let values = [12.5_f32, 37.5, 25.0, 25.0];
    let segments: Vec<Segment> = values.iter().map(|&v| Segment::new(v)).collect();
    let region_width = 640.0;

    let layout = BarLayout::compute(region_width, &config, &segments, measure);
    let total: f32 = values.iter().sum();

    for (slice, &value) in layout.slices.iter().zip(values.iter()) {
        let expected = value / total * region_width;
        assert!(
            (slice.width - expected).abs() < 1e-3,
            "slice width {} != expected {}",
            slice.width,
            expected
        );
    }

    let drawn: f32 = layout.slices.iter().map(|s| s.width).sum();
    assert!((drawn - region_width).abs() < 1e-3);
}

/// Every positive-value slice is at least the minimum visible width.
#[test]
fn slices_never_thinner_than_floor() {
    let config = RenderConfig {
        max_value: Some(1_000_000.0),
        ..Default::default()
    };
    let segments: Vec<Segment> = [0.001_f32, 5.0, 0.5].iter().map(|&v| Segment::new(v)).collect();
    let layout = BarLayout::compute(300.0, &config, &segments, measure);

    assert_eq!(layout.slices.len(), 3);
    for slice in &layout.slices {
        assert!(slice.width >= MIN_SLICE_WIDTH);
    }
}

/// Auto denominator equals the exact sum of values regardless of order.
#[test]
fn auto_max_is_order_independent() {
    let config = RenderConfig::default();
    let forward: Vec<Segment> = [1.0_f32, 2.5, 4.25].iter().map(|&v| Segment::new(v)).collect();
    let reverse: Vec<Segment> = forward.iter().rev().cloned().collect();

    let a = BarLayout::compute(100.0, &config, &forward, measure);
    let b = BarLayout::compute(100.0, &config, &reverse, measure);
    assert_eq!(a.real_max, b.real_max);
    assert_eq!(a.real_max, 7.75);
}

/// Legend entries keep input order and never overlap, and the first entry
/// starts one spacing unit from the left edge.
#[test]
fn legend_packs_left_to_right() {
    let config = RenderConfig::default();
    let segments = [
        Segment::new(5.0).with_label("Mail"),
        Segment::new(3.0).with_label("Attachments"),
        Segment::new(2.0).with_label("Other"),
    ];
    let layout = BarLayout::compute(500.0, &config, &segments, measure);

    assert_eq!(layout.legend.len(), 3);
    assert_eq!(layout.legend[0].swatch_x, SPACING);
    for pair in layout.legend.windows(2) {
        assert!(pair[0].right() < pair[1].swatch_x);
        // Text sits to the right of the swatch.
        assert!(pair[0].text_x > pair[0].swatch_x + SWATCH_SIZE);
    }
}

/// Labelled zero-value segments and unlabelled positive segments are both
/// excluded from the legend; only labelled positive ones appear.
#[test]
fn legend_requires_positive_value_and_label() {
    let config = RenderConfig::default();
    let segments = [
        Segment::new(0.0).with_label("zero"),
        Segment::new(10.0),
        Segment::new(10.0).with_label("kept"),
    ];
    let layout = BarLayout::compute(200.0, &config, &segments, measure);

    assert_eq!(layout.legend.len(), 1);
    assert_eq!(layout.legend[0].label, "kept");
    assert_eq!(layout.legend[0].segment_index, 2);
}

/// An explicit max smaller than the sum simply lets the bar overflow the
/// region; the layout does not clamp (the painter clips).
#[test]
fn explicit_max_below_sum_overflows_region() {
    let config = RenderConfig {
        max_value: Some(50.0),
        ..Default::default()
    };
    let segments = [Segment::new(40.0), Segment::new(40.0)];
    let layout = BarLayout::compute(100.0, &config, &segments, measure);

    let drawn: f32 = layout.slices.iter().map(|s| s.width).sum();
    assert!(drawn > 100.0);
}
