//! Circular bodies: motion, wall bounces and pairwise elastic collisions
//!
//! Radius doubles as mass everywhere: a body twice as wide behaves as twice as
//! heavy. There is no separate mass attribute.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::circle_contact;
use super::vector::{Vector2, VectorExt};
use crate::config::SpawnRanges;

/// A circular body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vector2,
    pub velocity: Vector2,
    pub radius: f64,
}

impl Body {
    pub fn new(position: Vector2, velocity: Vector2, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// Create a body at `position` with velocity and radius drawn uniformly
    /// from the spawn ranges
    pub fn random<R: Rng>(position: Vector2, ranges: &SpawnRanges, rng: &mut R) -> Self {
        let speed = ranges.max_speed;
        let velocity = Vector2::new(
            rng.random_range(-speed..speed),
            rng.random_range(-speed..speed),
        );
        let radius = rng.random_range(ranges.min_radius..ranges.max_radius);
        Self::new(position, velocity, radius)
    }

    /// Advance one explicit Euler step (one step per frame, no dt)
    #[inline]
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    /// Clamp against each canvas edge and flip the matching velocity component
    ///
    /// All four edges are checked every call, so a body past two walls is
    /// corrected on both axes at once.
    pub fn reflect_off_boundaries(&mut self, width: f64, height: f64) {
        let r = self.radius;

        // Left
        if self.position.x < r {
            self.position.x = r;
            self.velocity.x = -self.velocity.x;
        }
        // Right
        if self.position.x > width - r {
            self.position.x = width - r;
            self.velocity.x = -self.velocity.x;
        }
        // Top
        if self.position.y < r {
            self.position.y = r;
            self.velocity.y = -self.velocity.y;
        }
        // Bottom
        if self.position.y > height - r {
            self.position.y = height - r;
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Resolve an elastic collision with `other` if the two overlap
    ///
    /// Both bodies are pushed apart by half the penetration each along the
    /// line between centers, then exchange momentum along that line.
    /// Returns true when the pair overlapped and was resolved.
    pub fn resolve_collision(&mut self, other: &mut Body) -> bool {
        let Some(contact) =
            circle_contact(self.position, self.radius, other.position, other.radius)
        else {
            return false;
        };

        let radius_sum = self.radius + other.radius;

        // Separate: overlap is negative, so this pushes self away from other
        let mut push = contact.separation;
        push.set_magnitude(contact.overlap * 0.5);
        self.position += push;
        other.position -= push;
        self.settle_apart(other, contact.separation / contact.distance, radius_sum);

        // Collision normal, rescaled to the post-separation distance
        let mut normal = contact.separation;
        let distance = radius_sum;
        normal.set_magnitude(distance);

        let mass_sum = self.radius + other.radius;
        let relative_velocity = other.velocity - self.velocity;
        let num = relative_velocity.dot(normal);
        let den = mass_sum * distance * distance;

        self.velocity += normal * (2.0 * other.radius * num / den);
        other.velocity += normal * (-2.0 * self.radius * num / den);

        true
    }

    /// Nudge `other` outward along `direction` until the pair no longer
    /// registers as a contact
    ///
    /// The half-overlap push lands on `radius_sum` only up to rounding, and
    /// can stop an ulp short. Each nudge doubles, starting at one ulp of the
    /// largest magnitude involved, so this settles within a few iterations.
    fn settle_apart(&self, other: &mut Body, direction: Vector2, radius_sum: f64) {
        if !direction.is_finite() {
            // Coincident centers: no axis to separate along
            return;
        }
        let scale = radius_sum
            .max(other.position.abs().max_element())
            .max(self.position.abs().max_element());
        let mut step = f64::EPSILON * scale;
        for _ in 0..64 {
            if circle_contact(self.position, self.radius, other.position, other.radius).is_none() {
                return;
            }
            other.position += direction * step;
            step *= 2.0;
        }
    }

    /// Per-frame motion: boundary reflection, then integration
    pub fn tick(&mut self, width: f64, height: f64) {
        self.reflect_off_boundaries(width, height);
        self.integrate();
    }

    /// Kinetic energy with radius standing in for mass
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.radius * self.velocity.length_squared()
    }

    /// Momentum with radius standing in for mass
    pub fn momentum(&self) -> Vector2 {
        self.velocity * self.radius
    }
}
