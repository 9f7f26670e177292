//! Ray geometry: circles, emission, and marching
//!
//! A ray is a half-line walked in fixed increments. Each visited position is
//! handed to a plot callback, so the geometry stays test-able without any
//! display surface behind it. Positions and angles are f64: grazing tangents
//! depend on the sign of `sin` near π, which f32 gets wrong.

use glam::DVec2;
use std::f64::consts::TAU;

/// A disk: the light source and every obstacle are one of these
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Squared-distance inclusion test, exact comparison against radius²
    #[inline]
    pub fn contains(&self, point: DVec2) -> bool {
        point.distance_squared(self.center) <= self.radius * self.radius
    }
}

/// Canvas rectangle used as the marching termination test.
///
/// Inclusive on all four edges, so a ray plots on the boundary pixel before
/// it terminates.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[inline]
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

/// Why a march stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The walk left the canvas rectangle
    OutOfBounds,
    /// Absorbed by the obstacle at this index in the field
    Hit { obstacle: usize },
}

/// A half-line: origin plus direction angle in radians, `[0, 2π)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: DVec2,
    pub angle: f64,
}

impl Ray {
    pub fn new(origin: DVec2, angle: f64) -> Self {
        Self { origin, angle }
    }

    #[inline]
    pub fn direction(&self) -> DVec2 {
        DVec2::new(self.angle.cos(), self.angle.sin())
    }

    /// Walk from the origin in `step_size` increments until the position
    /// leaves `bounds` or enters an obstacle.
    ///
    /// Every visited position is plotted before termination is evaluated,
    /// so the boundary or hit pixel is drawn exactly once. Obstacles are
    /// tested in declared order and the first inclusion match wins; on
    /// overlaps this makes declared order the tie-breaker.
    pub fn march(
        &self,
        obstacles: &[Circle],
        bounds: Bounds,
        step_size: f64,
        mut plot: impl FnMut(DVec2),
    ) -> Termination {
        debug_assert!(step_size > 0.0);
        let step = self.direction() * step_size;
        let mut position = self.origin;

        loop {
            position += step;
            plot(position);

            if !bounds.contains(position) {
                return Termination::OutOfBounds;
            }
            if let Some(obstacle) = obstacles.iter().position(|c| c.contains(position)) {
                return Termination::Hit { obstacle };
            }
        }
    }
}

/// Emit `count` rays from `center`, evenly spaced over a full turn.
///
/// Pure and deterministic: angle `i` is `(i / count) · 2π`. `count == 0`
/// yields no rays rather than failing.
pub fn emit_rays(center: DVec2, count: usize) -> Vec<Ray> {
    (0..count)
        .map(|i| Ray::new(center, (i as f64 / count as f64) * TAU))
        .collect()
}
