//! Hover tooltip with a slot's exact figures.

use crate::color::Rgba;
use crate::dataset::CountryRecord;
use crate::render::{Canvas, RectMode, TextAlign};

const PANEL_COLOR: Rgba = Rgba::new(255, 255, 255, 240);
const PANEL_WIDTH: f32 = 160.0;
const PANEL_HEIGHT: f32 = 50.0;
const PANEL_RADIUS: f32 = 10.0;
/// Panel center distance above the production bar top.
const PANEL_LIFT: f32 = 60.0;
const TEXT_COLOR: Rgba = Rgba::rgb(50, 50, 50);
const TEXT_SIZE: f32 = 11.0;
const PRODUCTION_LIFT: f32 = 65.0;
const CONSUMPTION_LIFT: f32 = 50.0;

/// Format `value` with `,` between groups of three digits.
///
/// ```
/// use coffee_viz::chart::format_thousands;
///
/// assert_eq!(format_thousands(3558), "3,558");
/// assert_eq!(format_thousands(469), "469");
/// ```
#[must_use]
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The two lines shown for `record`.
#[must_use]
pub fn tooltip_lines(record: &CountryRecord) -> [String; 2] {
    [
        format!("Production: {}", format_thousands(record.production)),
        format!("Consumption: {}", format_thousands(record.consumption)),
    ]
}

/// Draw the tooltip for `record` above a production bar whose unanimated top
/// is at `bar_top`, centered on slot x `x`.
pub fn draw_tooltip(canvas: &mut Canvas, x: f32, bar_top: f32, record: &CountryRecord) {
    {
        let mut panel = canvas
            .scoped(|s| s.fill(PANEL_COLOR).no_stroke().rect_mode(RectMode::Center));
        panel.rect(x, bar_top - PANEL_LIFT, PANEL_WIDTH, PANEL_HEIGHT, PANEL_RADIUS);
    }

    let [production, consumption] = tooltip_lines(record);
    let mut text = canvas.scoped(|s| {
        s.fill(TEXT_COLOR).text_size(TEXT_SIZE).bold(true).align(TextAlign::Center)
    });
    text.text(&production, x, bar_top - PRODUCTION_LIFT);
    text.text(&consumption, x, bar_top - CONSUMPTION_LIFT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::COFFEE_DATA;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1281), "1,281");
        assert_eq!(format_thousands(123_456), "123,456");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(u32::MAX), "4,294,967,295");
    }

    #[test]
    fn test_tooltip_lines_ethiopia() {
        let [p, c] = tooltip_lines(&COFFEE_DATA[4]);
        assert_eq!(p, "Production: 469");
        assert_eq!(c, "Consumption: 387");
    }

    #[test]
    fn test_tooltip_lines_brazil() {
        let [p, c] = tooltip_lines(&COFFEE_DATA[0]);
        assert_eq!(p, "Production: 3,558");
        assert_eq!(c, "Consumption: 1,281");
    }

    #[test]
    fn test_draw_tooltip_panel() {
        let mut canvas = Canvas::new(300, 300).unwrap();
        let before = *canvas.style();
        draw_tooltip(&mut canvas, 150.0, 250.0, &COFFEE_DATA[4]);
        assert_eq!(*canvas.style(), before);

        let fb = canvas.framebuffer();
        // Panel corner region (no text there)
        assert_eq!(fb.get_pixel(75, 190), Some(PANEL_COLOR));
        // Outside the panel
        assert_eq!(fb.get_pixel(60, 190), Some(Rgba::TRANSPARENT));
    }
}
