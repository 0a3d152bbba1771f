//! Slot layout, bar scaling and hover hit-testing.

use crate::geometry::{Point, Rect};

/// Width of a slot's bar pair at rest.
pub const BAR_WIDTH: f32 = 80.0;
/// Distance between neighbouring slot centers.
pub const SLOT_SPACING: f32 = 110.0;
/// Center of the first slot.
pub const FIRST_SLOT_X: f32 = 80.0;
/// Distance from the canvas bottom to the bar baseline.
pub const BASELINE_MARGIN: f32 = 100.0;
/// Top of the vertical band in which the pointer can hover a slot.
pub const HOVER_BAND_TOP: f32 = 150.0;
/// Pixel height of the tallest possible bar.
pub const MAX_BAR_HEIGHT: f32 = 350.0;
/// Width multiplier for the hovered slot.
pub const HOVER_GROWTH: f32 = 1.1;

/// Geometry of the bar slots on a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    /// Slot width at rest.
    pub bar_width: f32,
    /// Distance between slot centers.
    pub spacing: f32,
    /// Center of slot 0.
    pub first_x: f32,
    /// Y of the shared baseline.
    pub baseline: f32,
    /// Top of the hover band.
    pub band_top: f32,
    /// Height of a bar at the dataset maximum.
    pub max_bar_height: f32,
}

impl ChartLayout {
    /// Standard layout for a canvas of the given height.
    #[must_use]
    pub fn for_canvas(height: u32) -> Self {
        Self {
            bar_width: BAR_WIDTH,
            spacing: SLOT_SPACING,
            first_x: FIRST_SLOT_X,
            baseline: height as f32 - BASELINE_MARGIN,
            band_top: HOVER_BAND_TOP,
            max_bar_height: MAX_BAR_HEIGHT,
        }
    }

    /// Center x of slot `index`.
    #[must_use]
    pub fn slot_x(&self, index: usize) -> f32 {
        self.first_x + index as f32 * self.spacing
    }

    /// Hover box of slot `index`: the slot's width across the hover band.
    #[must_use]
    pub fn slot_bounds(&self, index: usize) -> Rect {
        let x = self.slot_x(index);
        Rect::new(
            x - self.bar_width / 2.0,
            self.band_top,
            self.bar_width,
            self.baseline - self.band_top,
        )
    }

    /// Slot under `pointer`, testing all `slots` with strict inequalities.
    ///
    /// Every slot is tested; if boxes ever overlapped the last match would
    /// win. See [`ChartLayout::slots_overlap`].
    #[must_use]
    pub fn hit_test(&self, pointer: Option<Point>, slots: usize) -> Option<usize> {
        let pointer = pointer?;
        let mut hovered = None;
        for i in 0..slots {
            if self.slot_bounds(i).contains_strict(pointer) {
                hovered = Some(i);
            }
        }
        hovered
    }

    /// Whether any two of the first `slots` hover boxes overlap.
    #[must_use]
    pub fn slots_overlap(&self, slots: usize) -> bool {
        (1..slots).any(|i| self.slot_bounds(i - 1).overlaps(&self.slot_bounds(i)))
    }

    /// Pixel height of a bar for `value` against the dataset `max`.
    ///
    /// Returns 0 when `max` is 0 so a degenerate dataset draws flat bars
    /// instead of dividing by zero.
    #[must_use]
    pub fn bar_height(&self, value: u32, max: u32) -> f32 {
        if max == 0 {
            return 0.0;
        }
        value as f32 / max as f32 * self.max_bar_height
    }

    /// Width of a slot's bar pair, grown when hovered.
    #[must_use]
    pub fn bar_pair_width(&self, hovered: bool) -> f32 {
        if hovered {
            self.bar_width * HOVER_GROWTH
        } else {
            self.bar_width
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ChartLayout {
        ChartLayout::for_canvas(700)
    }

    #[test]
    fn test_baseline() {
        assert!((layout().baseline - 600.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_slot_positions() {
        let l = layout();
        assert!((l.slot_x(0) - 80.0).abs() < f32::EPSILON);
        assert!((l.slot_x(4) - 520.0).abs() < f32::EPSILON);
        assert_eq!(l.slot_bounds(4), Rect::new(480.0, 150.0, 80.0, 450.0));
    }

    #[test]
    fn test_hit_test_inside_and_outside() {
        let l = layout();
        assert_eq!(l.hit_test(Some(Point::new(520.0, 400.0)), 8), Some(4));
        assert_eq!(l.hit_test(Some(Point::new(80.0, 151.0)), 8), Some(0));
        // Gap between slots 0 and 1
        assert_eq!(l.hit_test(Some(Point::new(130.0, 400.0)), 8), None);
        // Above the band
        assert_eq!(l.hit_test(Some(Point::new(520.0, 100.0)), 8), None);
        // Below the baseline
        assert_eq!(l.hit_test(Some(Point::new(520.0, 650.0)), 8), None);
        assert_eq!(l.hit_test(None, 8), None);
    }

    #[test]
    fn test_hit_test_edges_excluded() {
        let l = layout();
        assert_eq!(l.hit_test(Some(Point::new(480.0, 400.0)), 8), None);
        assert_eq!(l.hit_test(Some(Point::new(520.0, 150.0)), 8), None);
        assert_eq!(l.hit_test(Some(Point::new(520.0, 600.0)), 8), None);
    }

    #[test]
    fn test_hit_test_ignores_slots_beyond_count() {
        let l = layout();
        assert_eq!(l.hit_test(Some(Point::new(520.0, 400.0)), 4), None);
    }

    #[test]
    fn test_standard_slots_do_not_overlap() {
        assert!(!layout().slots_overlap(8));
    }

    #[test]
    fn test_overlapping_layout_last_match_wins() {
        let l = ChartLayout { spacing: 50.0, ..layout() };
        assert!(l.slots_overlap(8));
        // x = 110 lies inside slot 0 (40..120) and slot 1 (90..170)
        assert_eq!(l.hit_test(Some(Point::new(110.0, 300.0)), 8), Some(1));
    }

    #[test]
    fn test_bar_height_scaling() {
        let l = layout();
        assert!((l.bar_height(3558, 3558) - 350.0).abs() < f32::EPSILON);
        assert!(l.bar_height(0, 3558).abs() < f32::EPSILON);
        assert!((l.bar_height(285, 3558).round() - 28.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_bar_height_zero_max() {
        assert!(layout().bar_height(100, 0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_hover_growth() {
        let l = layout();
        assert!((l.bar_pair_width(false) - 80.0).abs() < f32::EPSILON);
        assert!((l.bar_pair_width(true) - 88.0).abs() < 1e-4);
    }
}
