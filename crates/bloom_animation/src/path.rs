//! Motion along a cubic Bezier path
//!
//! The curve parameter advances with (eased) time, not arc length, so a
//! linear easing gives the platform "linear keyframe path" behavior: speed
//! varies with the control point spacing.

use bloom_core::{Point, Rect};
use lyon::geom::CubicBezierSegment;
use lyon::math::point;
use lyon::path::{Path, PathEvent};

use crate::easing::Easing;

fn to_lyon(p: Point) -> lyon::math::Point {
    point(p.x, p.y)
}

fn from_lyon(p: lyon::math::Point) -> Point {
    Point::new(p.x, p.y)
}

fn rect_from_box(b: lyon::math::Box2D) -> Rect {
    Rect::new(b.min.x, b.min.y, b.max.x - b.min.x, b.max.y - b.min.y)
}

/// A position track following a single cubic Bezier segment
#[derive(Clone, Debug)]
pub struct PathMotion {
    segment: CubicBezierSegment<f32>,
    /// Duration in milliseconds
    duration_ms: f32,
    easing: Easing,
    elapsed_ms: f32,
    playing: bool,
}

impl PathMotion {
    /// Create a linear-timed motion from `from` to `to`
    pub fn new(from: Point, ctrl1: Point, ctrl2: Point, to: Point, duration_ms: f32) -> Self {
        Self {
            segment: CubicBezierSegment {
                from: to_lyon(from),
                ctrl1: to_lyon(ctrl1),
                ctrl2: to_lyon(ctrl2),
                to: to_lyon(to),
            },
            duration_ms: duration_ms.max(0.0),
            easing: Easing::Linear,
            elapsed_ms: 0.0,
            playing: false,
        }
    }

    /// Set the timing curve (builder pattern)
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Linear time progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Advance by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(self.duration_ms);
        if self.is_finished() {
            self.playing = false;
        }
    }

    /// Current position on the path
    pub fn position(&self) -> Point {
        self.position_at(self.progress())
    }

    /// Position at a given linear time progress
    pub fn position_at(&self, progress: f32) -> Point {
        let t = self.easing.apply(progress.clamp(0.0, 1.0));
        from_lyon(self.segment.sample(t))
    }

    /// `[from, ctrl1, ctrl2, to]`
    pub fn control_points(&self) -> [Point; 4] {
        [
            from_lyon(self.segment.from),
            from_lyon(self.segment.ctrl1),
            from_lyon(self.segment.ctrl2),
            from_lyon(self.segment.to),
        ]
    }

    /// Bounds of the control polygon (includes control points)
    ///
    /// This matches what platform path objects report as their bounds.
    pub fn control_bounds(&self) -> Rect {
        rect_from_box(self.segment.fast_bounding_box())
    }

    /// Bounds of the curve itself (curve extrema only)
    pub fn tight_bounds(&self) -> Rect {
        rect_from_box(self.segment.bounding_box())
    }

    /// Export as a `lyon` path for tessellation or stroking by a renderer
    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();
        builder.begin(self.segment.from);
        builder.cubic_bezier_to(self.segment.ctrl1, self.segment.ctrl2, self.segment.to);
        builder.end(false);
        builder.build()
    }

    /// SVG path data (`M x y C ...`) of the exported path
    pub fn to_svg_path_data(&self) -> String {
        let mut commands = Vec::new();
        for event in self.to_path().iter() {
            match event {
                PathEvent::Begin { at } => commands.push(format!("M{} {}", at.x, at.y)),
                PathEvent::Line { to, .. } => commands.push(format!("L{} {}", to.x, to.y)),
                PathEvent::Quadratic { ctrl, to, .. } => {
                    commands.push(format!("Q{} {} {} {}", ctrl.x, ctrl.y, to.x, to.y))
                }
                PathEvent::Cubic {
                    ctrl1, ctrl2, to, ..
                } => commands.push(format!(
                    "C{} {} {} {} {} {}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                )),
                PathEvent::End { close: true, .. } => commands.push("Z".to_string()),
                PathEvent::End { .. } => {}
            }
        }
        commands.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_motion() -> PathMotion {
        PathMotion::new(
            Point::new(18.0, 550.0),
            Point::new(-14.0, 650.0),
            Point::new(82.0, 150.0),
            Point::new(28.0, 150.0),
            4000.0,
        )
    }

    #[test]
    fn test_endpoints() {
        let motion = sample_motion();
        assert_eq!(motion.position_at(0.0), Point::new(18.0, 550.0));
        assert_eq!(motion.position_at(1.0), Point::new(28.0, 150.0));
    }

    #[test]
    fn test_midpoint_uses_curve_parameter() {
        let motion = sample_motion();
        // B(0.5) = (P0 + 3 P1 + 3 P2 + P3) / 8
        let expected = Point::new(
            (18.0 + 3.0 * -14.0 + 3.0 * 82.0 + 28.0) / 8.0,
            (550.0 + 3.0 * 650.0 + 3.0 * 150.0 + 150.0) / 8.0,
        );
        let mid = motion.position_at(0.5);
        assert!((mid.x - expected.x).abs() < 1e-3);
        assert!((mid.y - expected.y).abs() < 1e-3);
    }

    #[test]
    fn test_tick_reaches_end_and_stops() {
        let mut motion = sample_motion();
        motion.start();
        for _ in 0..100 {
            motion.tick(16.0);
        }
        assert!((motion.progress() - 0.4).abs() < 1e-4);

        motion.tick(10_000.0);
        assert!(motion.is_finished());
        assert!(!motion.is_playing());
        assert_eq!(motion.position(), Point::new(28.0, 150.0));
    }

    #[test]
    fn test_control_bounds_enclose_tight_bounds() {
        let motion = sample_motion();
        let control = motion.control_bounds();
        let tight = motion.tight_bounds();

        assert_eq!(control.origin.y, 150.0);
        assert_eq!(control.height(), 500.0);
        assert!(tight.height() <= control.height());
        assert!(tight.origin.y >= control.origin.y - 1e-3);
        assert!(tight.origin.y + tight.height() <= control.origin.y + control.height() + 1e-3);
    }

    #[test]
    fn test_export_path() {
        let path = sample_motion().to_path();
        // Begin, Cubic, End
        assert_eq!(path.iter().count(), 3);
    }

    #[test]
    fn test_svg_path_data() {
        assert_eq!(
            sample_motion().to_svg_path_data(),
            "M18 550 C-14 650 82 150 28 150"
        );
    }
}
