//! Sketched rendering.
//!
//! Each straight segment is replaced by a cubic curve whose two control
//! points are pushed off the line by a random amount proportional to its
//! length. Rectangles are four such segments joined into one closed path.

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use seqdraw_core::{
    draw::TextDefinition,
    geometry::{Point, Rect},
};

use super::canvas::{SvgCanvas, SvgDrawing};
use crate::render::{DrawingPrimitives, Error, Label, LineStyle, primitives::ensure_finite};

/// Control points stray from the straight line by its length over this.
const WOBBLE_RATIO: f32 = 25.0;

/// Draws every line and box edge as a jittered cubic curve.
///
/// Endpoints are preserved exactly; only the two control points of each
/// segment are displaced. With a seed, the output is reproducible.
#[derive(Debug)]
pub struct HandDrawnTheme {
    canvas: SvgCanvas,
    rng: StdRng,
}

impl HandDrawnTheme {
    /// Creates the theme, seeding the jitter with `seed` or from the OS.
    pub fn new(text: TextDefinition, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                debug!(seed; "Seeding hand-drawn jitter");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        Self {
            canvas: SvgCanvas::new(text),
            rng,
        }
    }

    /// Consumes the theme and returns everything drawn.
    pub fn finish(self) -> SvgDrawing {
        self.canvas.finish()
    }

    /// Cubic curve command from `from` to `to` with jittered control points.
    fn wobble(&mut self, from: Point, to: Point) -> String {
        let amount = from.distance_to(to) / WOBBLE_RATIO;

        let r1: f32 = self.rng.random();
        let r2: f32 = self.rng.random();
        let x_factor = if self.rng.random_bool(0.5) { amount } else { -amount };
        let y_factor = if self.rng.random_bool(0.5) { amount } else { -amount };
        let offset = Point::new(x_factor, y_factor);

        let p1 = from.lerp(to, r1).add_point(offset);
        let p2 = from.lerp(to, r2).sub_point(offset);

        format!(
            "C {},{} {},{} {},{}",
            p1.x(),
            p1.y(),
            p2.x(),
            p2.y(),
            to.x(),
            to.y()
        )
    }
}

impl DrawingPrimitives for HandDrawnTheme {
    fn line(
        &mut self,
        from: Point,
        to: Point,
        style: LineStyle,
        classes: &str,
    ) -> Result<(), Error> {
        ensure_finite("line", &[from.x(), from.y(), to.x(), to.y()])?;
        let data = format!("M {},{} {}", from.x(), from.y(), self.wobble(from, to));
        self.canvas.line_path(data, style, classes);
        Ok(())
    }

    fn rect(&mut self, rect: Rect, classes: &str) -> Result<(), Error> {
        ensure_finite("rect", &[rect.x(), rect.y(), rect.width(), rect.height()])?;

        let corners = [
            Point::new(rect.x(), rect.y()),
            Point::new(rect.max_x(), rect.y()),
            Point::new(rect.max_x(), rect.max_y()),
            Point::new(rect.x(), rect.max_y()),
        ];

        let mut data = format!("M {},{}", rect.x(), rect.y());
        for (i, &corner) in corners.iter().enumerate() {
            let next = corners[(i + 1) % corners.len()];
            data.push(' ');
            data.push_str(&self.wobble(corner, next));
        }

        self.canvas.shape_path(data, classes);
        Ok(())
    }

    fn text(&mut self, label: &Label<'_>, classes: &str) -> Result<Rect, Error> {
        self.canvas.text(label, classes)
    }
}
