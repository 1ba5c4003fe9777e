//! Segmeter application icon generator.
//!
//! Produces a procedural icon: a rounded segmented bar over a row of
//! legend swatches, rendered at an arbitrary resolution as RGBA pixel
//! data suitable for use as a window icon.

/// Stripe colours and their share of the bar, left to right.
const STRIPES: &[(f32, [u8; 3])] = &[
    (0.38, [0x89, 0xb4, 0xfa]), // blue
    (0.27, [0xa6, 0xe3, 0xa1]), // green
    (0.20, [0xf9, 0xe2, 0xaf]), // amber
    (0.15, [0xf3, 0x8b, 0xa8]), // pink
];

/// Generate a Segmeter icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    // Bar across the upper half, swatches in a row beneath it.
    let bar_left = s * 0.08;
    let bar_right = s * 0.92;
    let bar_top = s * 0.26;
    let bar_bottom = s * 0.56;
    let bar_radius = (bar_bottom - bar_top) / 4.0;

    let swatch_size = s * 0.12;
    let swatch_top = s * 0.68;
    let swatch_gap = s * 0.10;
    let swatch_radius = swatch_size / 4.0;

    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let mut cr: u8 = 0;
            let mut cg: u8 = 0;
            let mut cb: u8 = 0;
            let mut ca: f32 = 0.0;

            // 1. The bar: stripes clipped by the rounded outline. ─
            let bar_dist = rounded_rect_dist(px, py, bar_left, bar_top, bar_right, bar_bottom, bar_radius);
            if bar_dist < 1.5 {
                let aa = smooth_edge(bar_dist);

                // Pick the stripe colour by horizontal position.
                let t = ((px - bar_left) / (bar_right - bar_left)).clamp(0.0, 1.0);
                let mut col = STRIPES[STRIPES.len() - 1].1;
                let mut acc = 0.0;
                for &(share, c) in STRIPES {
                    acc += share;
                    if t < acc {
                        col = c;
                        break;
                    }
                }

                // Subtle vertical shading for a little depth.
                let shade = 1.0 - 0.15 * ((py - bar_top) / (bar_bottom - bar_top)).clamp(0.0, 1.0);
                cr = (col[0] as f32 * shade) as u8;
                cg = (col[1] as f32 * shade) as u8;
                cb = (col[2] as f32 * shade) as u8;
                ca = aa;
            }

            // 2. Legend swatches. ────────────────────────────────
            for (i, &(_, col)) in STRIPES.iter().take(3).enumerate() {
                let left = bar_left + i as f32 * (swatch_size + swatch_gap);
                let dist = rounded_rect_dist(
                    px,
                    py,
                    left,
                    swatch_top,
                    left + swatch_size,
                    swatch_top + swatch_size,
                    swatch_radius,
                );
                if dist < 1.5 {
                    let aa = smooth_edge(dist);
                    cr = lerp_c(cr, col[0], aa);
                    cg = lerp_c(cg, col[1], aa);
                    cb = lerp_c(cb, col[2], aa);
                    ca = ca + (1.0 - ca) * aa;
                }
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = cr;
            pixels[idx + 1] = cg;
            pixels[idx + 2] = cb;
            pixels[idx + 3] = (ca * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Signed distance from a point to a rounded rectangle's boundary
/// (negative inside).
fn rounded_rect_dist(px: f32, py: f32, left: f32, top: f32, right: f32, bottom: f32, radius: f32) -> f32 {
    let cx = (left + right) * 0.5;
    let cy = (top + bottom) * 0.5;
    let qx = (px - cx).abs() - ((right - left) * 0.5 - radius);
    let qy = (py - cy).abs() - ((bottom - top) * 0.5 - radius);
    let dx = qx.max(0.0);
    let dy = qy.max(0.0);
    (dx * dx + dy * dy).sqrt() + qx.max(qy).min(0.0) - radius
}

/// Smooth anti-aliased edge (1 inside → 0 outside as `dist` crosses 0).
fn smooth_edge(dist: f32) -> f32 {
    if dist < -1.0 {
        1.0
    } else if dist > 1.0 {
        0.0
    } else {
        0.5 - dist * 0.5
    }
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}
