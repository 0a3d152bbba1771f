//! Static color key.

use crate::color::Rgba;
use crate::render::{Canvas, RectMode, TextAlign};

use super::{CONSUMPTION_COLOR, PRODUCTION_ACCENT};

const PANEL_FILL: Rgba = Rgba::new(30, 30, 50, 200);
const PANEL_STROKE: Rgba = Rgba::rgb(100, 100, 120);
const PANEL_WIDTH: f32 = 150.0;
const PANEL_HEIGHT: f32 = 80.0;
const PANEL_RADIUS: f32 = 10.0;
/// Panel center distance from the right canvas edge.
const RIGHT_INSET: f32 = 180.0;
const PANEL_CENTER_Y: f32 = 150.0;
const SWATCH_SIZE: f32 = 20.0;
const SWATCH_RADIUS: f32 = 3.0;
const TEXT_SIZE: f32 = 13.0;

/// Entries in display order: swatch color, label, vertical offset from the
/// panel center.
const ENTRIES: [(Rgba, &str, f32); 2] =
    [(PRODUCTION_ACCENT, "Production", -15.0), (CONSUMPTION_COLOR, "Consumption", 15.0)];

/// Draw the legend panel near the top-right corner.
pub fn draw_legend(canvas: &mut Canvas) {
    let cx = canvas.width() as f32 - RIGHT_INSET;
    let cy = PANEL_CENTER_Y;
    let mut c = canvas.scoped(|s| s.rect_mode(RectMode::Center));

    {
        let mut panel = c.scoped(|s| s.fill(PANEL_FILL).stroke(PANEL_STROKE).stroke_weight(1.0));
        panel.rect(cx, cy, PANEL_WIDTH, PANEL_HEIGHT, PANEL_RADIUS);
    }

    for (color, label, dy) in ENTRIES {
        {
            let mut swatch = c.scoped(|s| s.fill(color).no_stroke());
            swatch.rect(cx - 50.0, cy + dy, SWATCH_SIZE, SWATCH_SIZE, SWATCH_RADIUS);
        }
        let mut text = c.scoped(|s| {
            s.fill(Rgba::WHITE).no_stroke().text_size(TEXT_SIZE).align(TextAlign::Left)
        });
        text.text(label, cx - 20.0, cy + dy + 5.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_swatches() {
        let mut canvas = Canvas::new(1000, 700).unwrap();
        canvas.vertical_gradient(Rgba::BLACK, Rgba::BLACK);
        draw_legend(&mut canvas);
        let fb = canvas.framebuffer();
        assert_eq!(fb.get_pixel(770, 135), Some(PRODUCTION_ACCENT));
        assert_eq!(fb.get_pixel(770, 165), Some(CONSUMPTION_COLOR));
    }

    #[test]
    fn test_legend_panel_translucent_over_background() {
        let mut canvas = Canvas::new(1000, 700).unwrap();
        canvas.vertical_gradient(Rgba::BLACK, Rgba::BLACK);
        draw_legend(&mut canvas);
        let px = canvas.framebuffer().get_pixel(880, 180).unwrap();
        assert!(px.b > px.r);
        assert_eq!(px.a, 255);
        // Right of the panel stays background
        assert_eq!(canvas.framebuffer().get_pixel(900, 150), Some(Rgba::BLACK));
    }

    #[test]
    fn test_legend_restores_style() {
        let mut canvas = Canvas::new(1000, 700).unwrap();
        let before = *canvas.style();
        draw_legend(&mut canvas);
        assert_eq!(*canvas.style(), before);
    }
}
