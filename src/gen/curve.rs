//! Parametric curve evaluators
//!
//! All families implement the same [`Curve`] contract: position, first and
//! second derivative, signed curvature and numeric arc length over
//! t in [0, 1].

use crate::common::Point;
use nalgebra::Vector2;

/// Default Simpson's-rule subdivision count for arc-length integration
pub const DEFAULT_SIMPSON_STEPS: usize = 100;

/// Signed curvature from first and second derivatives.
///
/// A zero denominator (stationary point) is a defined degenerate case and
/// yields 0, not an error.
pub fn signed_curvature(d1: Vector2<f64>, d2: Vector2<f64>) -> f64 {
    let cross = d1.x * d2.y - d1.y * d2.x;
    let denominator = (d1.x * d1.x + d1.y * d1.y).powf(1.5);
    if denominator == 0.0 {
        0.0
    } else {
        cross / denominator
    }
}

/// Mirror `neighbor` through `anchor`, producing the phantom control point
/// used at the open ends of a Catmull-Rom chain
pub fn mirror_phantom(anchor: Point, neighbor: Point) -> Point {
    anchor.scale(2.0).sub(neighbor)
}

/// Common contract for parametric curve segments over t in [0, 1]
pub trait Curve {
    /// Position at parameter t
    fn position(&self, t: f64) -> Point;

    /// First derivative with respect to t
    fn derivative(&self, t: f64) -> Vector2<f64>;

    /// Second derivative with respect to t
    fn second_derivative(&self, t: f64) -> Vector2<f64>;

    /// Signed curvature at parameter t
    fn curvature(&self, t: f64) -> f64 {
        signed_curvature(self.derivative(t), self.second_derivative(t))
    }

    /// Arc length by Simpson's-rule integration of |B'(t)| over [0, 1].
    /// An odd subdivision count is rounded up to the next even one.
    fn arc_length(&self, steps: usize) -> f64 {
        let n = if steps % 2 == 0 {
            steps.max(2)
        } else {
            steps + 1
        };
        let h = 1.0 / n as f64;

        let mut sum = self.derivative(0.0).norm() + self.derivative(1.0).norm();
        for i in 1..n {
            let t = i as f64 * h;
            let coefficient = if i % 2 == 0 { 2.0 } else { 4.0 };
            sum += coefficient * self.derivative(t).norm();
        }

        (h / 3.0) * sum
    }
}

/// A cubic Bezier arc over four control points
#[derive(Debug, Clone, Copy)]
pub struct CubicBezier {
    pub points: [Point; 4],
}

impl CubicBezier {
    /// Create a Bezier arc from a control-point group
    pub fn new(points: [Point; 4]) -> Self {
        CubicBezier { points }
    }
}

impl Curve for CubicBezier {
    fn position(&self, t: f64) -> Point {
        let [p0, p1, p2, p3] = self.points;
        let mt = 1.0 - t;
        let b0 = mt * mt * mt;
        let b1 = 3.0 * mt * mt * t;
        let b2 = 3.0 * mt * t * t;
        let b3 = t * t * t;
        Point::new(
            b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
            b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
        )
    }

    fn derivative(&self, t: f64) -> Vector2<f64> {
        let [p0, p1, p2, p3] = self.points;
        let mt = 1.0 - t;
        let c0 = 3.0 * mt * mt;
        let c1 = 6.0 * mt * t;
        let c2 = 3.0 * t * t;
        Vector2::new(
            c0 * (p1.x - p0.x) + c1 * (p2.x - p1.x) + c2 * (p3.x - p2.x),
            c0 * (p1.y - p0.y) + c1 * (p2.y - p1.y) + c2 * (p3.y - p2.y),
        )
    }

    fn second_derivative(&self, t: f64) -> Vector2<f64> {
        let [p0, p1, p2, p3] = self.points;
        let mt = 1.0 - t;
        Vector2::new(
            6.0 * mt * (p2.x - 2.0 * p1.x + p0.x) + 6.0 * t * (p3.x - 2.0 * p2.x + p1.x),
            6.0 * mt * (p2.y - 2.0 * p1.y + p0.y) + 6.0 * t * (p3.y - 2.0 * p2.y + p1.y),
        )
    }
}

/// A uniform Catmull-Rom segment running from `points[1]` to `points[2]`.
///
/// The outer points shape the tangents; for open chains the caller supplies
/// mirrored phantoms via [`mirror_phantom`].
#[derive(Debug, Clone, Copy)]
pub struct CatmullRom {
    pub points: [Point; 4],
}

impl CatmullRom {
    /// Create a Catmull-Rom segment from four consecutive control points
    pub fn new(points: [Point; 4]) -> Self {
        CatmullRom { points }
    }

    // Polynomial coefficients: B(t) = 0.5 (c0 + c1 t + c2 t^2 + c3 t^3)
    fn coefficients(&self) -> [Point; 4] {
        let [p0, p1, p2, p3] = self.points;
        [
            p1.scale(2.0),
            p2.sub(p0),
            p0.scale(2.0)
                .sub(p1.scale(5.0))
                .add(p2.scale(4.0))
                .sub(p3),
            p1.scale(3.0).sub(p0).sub(p2.scale(3.0)).add(p3),
        ]
    }
}

impl Curve for CatmullRom {
    fn position(&self, t: f64) -> Point {
        let [c0, c1, c2, c3] = self.coefficients();
        let t2 = t * t;
        let t3 = t2 * t;
        c0.add(c1.scale(t))
            .add(c2.scale(t2))
            .add(c3.scale(t3))
            .scale(0.5)
    }

    fn derivative(&self, t: f64) -> Vector2<f64> {
        let [_, c1, c2, c3] = self.coefficients();
        let d = c1
            .add(c2.scale(2.0 * t))
            .add(c3.scale(3.0 * t * t))
            .scale(0.5);
        d.to_vector()
    }

    fn second_derivative(&self, t: f64) -> Vector2<f64> {
        let [_, _, c2, c3] = self.coefficients();
        let d = c2.scale(2.0).add(c3.scale(6.0 * t)).scale(0.5);
        d.to_vector()
    }
}

/// A straight segment between two points
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    /// Create a straight segment
    pub fn new(start: Point, end: Point) -> Self {
        Line { start, end }
    }
}

impl Curve for Line {
    fn position(&self, t: f64) -> Point {
        Point::lerp(self.start, self.end, t)
    }

    fn derivative(&self, _t: f64) -> Vector2<f64> {
        self.end.sub(self.start).to_vector()
    }

    fn second_derivative(&self, _t: f64) -> Vector2<f64> {
        Vector2::zeros()
    }

    fn curvature(&self, _t: f64) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn straight_bezier() -> CubicBezier {
        // Collinear control points along the x axis, total length 10
        CubicBezier::new([
            Point::new(0.0, 0.0),
            Point::new(2.5, 0.0),
            Point::new(7.5, 0.0),
            Point::new(10.0, 0.0),
        ])
    }

    #[test]
    fn bezier_interpolates_endpoints() {
        let curve = CubicBezier::new([
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(3.0, 2.0),
            Point::new(4.0, 0.0),
        ]);
        assert_eq!(curve.position(0.0), Point::new(0.0, 0.0));
        assert_eq!(curve.position(1.0), Point::new(4.0, 0.0));
    }

    #[test]
    fn straight_bezier_has_zero_curvature_and_exact_length() {
        let curve = straight_bezier();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_relative_eq!(curve.curvature(t), 0.0);
        }
        // |B'(t)| is a polynomial here, which Simpson's rule integrates exactly
        assert_relative_eq!(curve.arc_length(DEFAULT_SIMPSON_STEPS), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn odd_simpson_count_rounds_up() {
        let curve = straight_bezier();
        assert_relative_eq!(
            curve.arc_length(99),
            curve.arc_length(100),
            epsilon = 1e-9
        );
    }

    #[test]
    fn degenerate_derivative_gives_zero_curvature() {
        let p = Point::new(1.0, 1.0);
        // All control points coincide: derivative is zero everywhere
        let curve = CubicBezier::new([p, p, p, p]);
        assert_eq!(curve.curvature(0.5), 0.0);
    }

    #[test]
    fn catmull_rom_runs_from_p1_to_p2() {
        let curve = CatmullRom::new([
            Point::new(-1.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 1.0),
        ]);
        assert_relative_eq!(curve.position(0.0).x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(curve.position(0.0).y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(curve.position(1.0).x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(curve.position(1.0).y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_catmull_rom_is_straight() {
        let curve = CatmullRom::new([
            Point::new(-1.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ]);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_relative_eq!(curve.position(t).y, 0.0, epsilon = 1e-12);
            assert_relative_eq!(curve.curvature(t), 0.0, epsilon = 1e-12);
        }
        assert_relative_eq!(curve.arc_length(DEFAULT_SIMPSON_STEPS), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn mirror_phantom_reflects() {
        let phantom = mirror_phantom(Point::new(0.0, 0.0), Point::new(1.0, 2.0));
        assert_eq!(phantom, Point::new(-1.0, -2.0));
    }

    #[test]
    fn line_curvature_is_always_zero() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(line.curvature(0.5), 0.0);
        assert_relative_eq!(line.arc_length(DEFAULT_SIMPSON_STEPS), 5.0, epsilon = 1e-12);
    }
}
