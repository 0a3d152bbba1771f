//! The paired production/consumption bar chart.
//!
//! Each country occupies one slot: a production bar on the left, a
//! consumption bar on the right, a rotated name label below the baseline
//! and, while hovered, a tooltip with the exact figures.

mod bar;
mod layout;
mod legend;
mod tooltip;

pub use bar::{animated_height, paint_bar, shade_row, BarSpec, GLOW_RADIUS};
pub use layout::{
    ChartLayout, BAR_WIDTH, BASELINE_MARGIN, FIRST_SLOT_X, HOVER_BAND_TOP, HOVER_GROWTH,
    MAX_BAR_HEIGHT, SLOT_SPACING,
};
pub use legend::draw_legend;
pub use tooltip::{draw_tooltip, format_thousands, tooltip_lines};

use std::f32::consts::PI;

use crate::color::Rgba;
use crate::dataset::{max_production, CountryRecord};
use crate::render::{Canvas, TextAlign};

/// Color of every consumption bar.
pub const CONSUMPTION_COLOR: Rgba = Rgba::rgb(100, 150, 255);
/// Production accent used by the legend and particles.
pub const PRODUCTION_ACCENT: Rgba = Rgba::rgb(232, 180, 76);
/// Opacity of bar bodies.
pub const BAR_ALPHA: u8 = 180;

/// Sub-bar width as a divisor of the slot width.
const SUB_BAR_DIVISOR: f32 = 2.2;
const LABEL_DROP: f32 = 20.0;
const LABEL_SIZE: f32 = 12.0;
const LABEL_ANGLE: f32 = -PI / 6.0;

/// Draw every slot of `records`, highlighting `hovered`.
pub fn draw_bars(
    canvas: &mut Canvas,
    layout: &ChartLayout,
    records: &[CountryRecord],
    phase: f32,
    hovered: Option<usize>,
) {
    let max = max_production(records);
    for (i, record) in records.iter().enumerate() {
        let is_hovered = hovered == Some(i);
        draw_slot(canvas, layout, i, record, max, phase, is_hovered);
    }
}

fn draw_slot(
    canvas: &mut Canvas,
    layout: &ChartLayout,
    index: usize,
    record: &CountryRecord,
    max: u32,
    phase: f32,
    hovered: bool,
) {
    let x = layout.slot_x(index);
    let prod_h = layout.bar_height(record.production, max);
    let cons_h = layout.bar_height(record.consumption, max);
    let pair_w = layout.bar_pair_width(hovered);
    let sub_w = pair_w / SUB_BAR_DIVISOR;

    let production = BarSpec {
        x: x - pair_w / 4.0,
        baseline: layout.baseline,
        width: sub_w,
        height: prod_h,
        color: record.color,
        alpha: BAR_ALPHA,
        hovered,
    };
    let consumption =
        BarSpec { x: x + pair_w / 4.0, height: cons_h, color: CONSUMPTION_COLOR, ..production };
    paint_bar(canvas, phase, &production);
    paint_bar(canvas, phase, &consumption);

    {
        let mut label = canvas.scoped(|s| {
            s.fill(Rgba::WHITE).text_size(LABEL_SIZE).bold(false).align(TextAlign::Center)
        });
        label.text_rotated(record.name, x, layout.baseline + LABEL_DROP, LABEL_ANGLE);
    }

    if hovered {
        draw_tooltip(canvas, x, layout.baseline - prod_h, record);
    }
}
