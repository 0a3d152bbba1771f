//! The per-frame render loop.
//!
//! A [`Sketch`] owns everything that survives between frames: the particle
//! field and the [`ViewState`]. Each call to [`Sketch::render_frame`] redraws
//! the whole canvas from scratch in a fixed order:
//!
//! 1. background gradient
//! 2. particles (drawn, then advanced)
//! 3. title and subtitle
//! 4. bars, labels and the hover tooltip
//! 5. legend
//!
//! and finally advances the phase angle.

use tracing::trace;

use crate::chart::{draw_bars, draw_legend, ChartLayout, PRODUCTION_ACCENT};
use crate::color::Rgba;
use crate::dataset::{coffee_data, CountryRecord};
use crate::error::Result;
use crate::geometry::Point;
use crate::particles::ParticleField;
use crate::render::{text, Canvas, RectMode, TextAlign};

/// Default canvas width.
pub const CANVAS_WIDTH: u32 = 1000;
/// Default canvas height.
pub const CANVAS_HEIGHT: u32 = 700;
/// Phase advance per frame.
pub const PHASE_STEP: f32 = 0.01;

/// Background gradient, top color.
pub const BACKGROUND_TOP: Rgba = Rgba::rgb(26, 26, 46);
/// Background gradient, bottom color.
pub const BACKGROUND_BOTTOM: Rgba = Rgba::rgb(22, 33, 62);

/// Title text, drawn after the cup icon.
pub const TITLE: &str = "Global Coffee Production & Consumption";
/// Subtitle text.
pub const SUBTITLE: &str = "Thousand 60kg bags per year";

const TITLE_SIZE: f32 = 48.0;
const TITLE_BASELINE: f32 = 70.0;
const TITLE_GLOW: Rgba = PRODUCTION_ACCENT.with_alpha(30);
const TITLE_GLOW_PASSES: u32 = 3;
const SUBTITLE_SIZE: f32 = 16.0;
const SUBTITLE_BASELINE: f32 = 100.0;
const SUBTITLE_COLOR: Rgba = Rgba::rgb(200, 200, 220);

const CUP_WIDTH: f32 = 34.0;
const CUP_GAP: f32 = 14.0;

/// State that changes frame to frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewState {
    /// Animation phase, advanced by [`PHASE_STEP`] each frame.
    pub phase: f32,
    /// Pointer sampled for the most recent frame.
    pub pointer: Option<Point>,
    /// Slot under the pointer in the most recent frame.
    pub hovered: Option<usize>,
}

/// The animated chart.
#[derive(Debug, Clone)]
pub struct Sketch {
    records: &'static [CountryRecord],
    layout: ChartLayout,
    particles: ParticleField,
    view: ViewState,
    width: u32,
    height: u32,
}

impl Sketch {
    /// Sketch of the coffee dataset on a `width` x `height` canvas.
    ///
    /// `seed` fixes the particle field; `None` seeds from OS entropy.
    #[must_use]
    pub fn new(width: u32, height: u32, seed: Option<u64>) -> Self {
        Self::with_records(coffee_data(), width, height, seed)
    }

    /// Sketch of an arbitrary record list.
    #[must_use]
    pub fn with_records(
        records: &'static [CountryRecord],
        width: u32,
        height: u32,
        seed: Option<u64>,
    ) -> Self {
        Self {
            records,
            layout: ChartLayout::for_canvas(height),
            particles: ParticleField::seeded(width, height, seed),
            view: ViewState::default(),
            width,
            height,
        }
    }

    /// Allocate a canvas matching this sketch.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn new_canvas(&self) -> Result<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// State from the most recent frame.
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Slot geometry.
    #[must_use]
    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }



    /// Redraw the whole frame for `pointer` and advance the animation.
    ///
    /// Returns the slot hovered during this frame.
    pub fn render_frame(&mut self, canvas: &mut Canvas, pointer: Option<Point>) -> Option<usize> {
        canvas.vertical_gradient(BACKGROUND_TOP, BACKGROUND_BOTTOM);
        self.particles.update_and_draw(canvas);
        draw_title(canvas);

        let hovered = self.layout.hit_test(pointer, self.records.len());
        if hovered != self.view.hovered {
            let name = hovered.and_then(|i| self.records.get(i)).map(|r| r.name);
            trace!(?hovered, ?name, "hover changed");
        }
        self.view.pointer = pointer;
        self.view.hovered = hovered;

        draw_bars(canvas, &self.layout, self.records, self.view.phase, hovered);
        draw_legend(canvas);

        self.view.phase += PHASE_STEP;
        hovered
    }
}

/// Title with a cheap glow, then the subtitle.
fn draw_title(canvas: &mut Canvas) {
    let center = canvas.width() as f32 / 2.0;
    let text_w = text::measure(TITLE, TITLE_SIZE);
    let group_w = CUP_WIDTH + CUP_GAP + text_w;
    let cup_x = center - group_w / 2.0;
    let text_x = center + (CUP_WIDTH + CUP_GAP) / 2.0;

    let mut title = canvas.scoped(|s| {
        s.no_stroke().text_size(TITLE_SIZE).bold(true).align(TextAlign::Center)
    });
    for pass in 0..=TITLE_GLOW_PASSES {
        let (color, dy) = if pass < TITLE_GLOW_PASSES {
            (TITLE_GLOW, pass as f32)
        } else {
            (Rgba::WHITE, 0.0)
        };
        let mut layer = title.scoped(|s| s.fill(color));
        draw_cup(&mut layer, cup_x, TITLE_BASELINE + dy, color);
        layer.text(TITLE, text_x, TITLE_BASELINE + dy);
    }
    drop(title);

    let mut subtitle = canvas.scoped(|s| {
        s.fill(SUBTITLE_COLOR).no_stroke().text_size(SUBTITLE_SIZE).align(TextAlign::Center)
    });
    subtitle.text(SUBTITLE, center, SUBTITLE_BASELINE);
}

/// Coffee cup icon sitting on `baseline`, left edge at `x`.
fn draw_cup(canvas: &mut Canvas, x: f32, baseline: f32, color: Rgba) {
    let mut c = canvas.scoped(|s| s.rect_mode(RectMode::Corner).fill(color).no_stroke());
    // saucer
    c.rect(x, baseline - 3.0, CUP_WIDTH - 4.0, 3.0, 1.5);
    // body
    c.rect(x + 3.0, baseline - 24.0, 22.0, 20.0, 4.0);
    // steam
    c.rect(x + 8.0, baseline - 32.0, 3.0, 6.0, 1.5);
    c.rect(x + 16.0, baseline - 34.0, 3.0, 8.0, 1.5);

    let mut handle = c.scoped(|s| s.no_fill().stroke(color).stroke_weight(3.0));
    handle.circle(x + 27.0, baseline - 15.0, 11.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sketch() -> Sketch {
        Sketch::new(CANVAS_WIDTH, CANVAS_HEIGHT, Some(11))
    }

    #[test]
    fn test_phase_advances_per_frame() {
        let mut s = sketch();
        let mut canvas = s.new_canvas().unwrap();
        for _ in 0..5 {
            s.render_frame(&mut canvas, None);
        }
        assert!((s.view().phase - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_hover_recomputed_each_frame() {
        let mut s = sketch();
        let mut canvas = s.new_canvas().unwrap();
        let ethiopia = Point::new(520.0, 400.0);

        assert_eq!(s.render_frame(&mut canvas, Some(ethiopia)), Some(4));
        assert_eq!(s.view().hovered, Some(4));
        assert_eq!(s.view().pointer, Some(ethiopia));

        assert_eq!(s.render_frame(&mut canvas, Some(Point::new(5.0, 5.0))), None);
        assert_eq!(s.view().hovered, None);

        assert_eq!(s.render_frame(&mut canvas, None), None);
    }

    #[test]
    fn test_frame_covers_background() {
        let mut s = sketch();
        let mut canvas = s.new_canvas().unwrap();
        s.render_frame(&mut canvas, None);
        let fb = canvas.framebuffer();
        // Every pixel is opaque after the gradient pass
        assert!(fb.to_compact_pixels().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_title_is_white_at_top_center() {
        let mut s = sketch();
        let mut canvas = s.new_canvas().unwrap();
        s.render_frame(&mut canvas, None);
        let fb = canvas.framebuffer();
        let white = (30..75)
            .flat_map(|y| (100..900).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get_pixel(x, y) == Some(Rgba::WHITE))
            .count();
        assert!(white > 500);
    }

    #[test]
    fn test_render_restores_style() {
        let mut s = sketch();
        let mut canvas = s.new_canvas().unwrap();
        let before = *canvas.style();
        s.render_frame(&mut canvas, Some(Point::new(80.0, 500.0)));
        assert_eq!(*canvas.style(), before);
    }

    #[test]
    fn test_same_seed_same_frames() {
        let mut a = sketch();
        let mut b = sketch();
        let mut ca = a.new_canvas().unwrap();
        let mut cb = b.new_canvas().unwrap();
        for _ in 0..3 {
            a.render_frame(&mut ca, Some(Point::new(300.0, 450.0)));
            b.render_frame(&mut cb, Some(Point::new(300.0, 450.0)));
        }
        assert_eq!(ca.framebuffer().pixels(), cb.framebuffer().pixels());
    }
}
