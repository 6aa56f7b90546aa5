//! Circle-circle contact detection
//!
//! Brute-force narrow phase only: every pair is tested directly, there is no
//! broad phase.

use super::vector::{Vector2, VectorExt};

/// Overlap between two circles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Vector from the first circle's center to the second's
    pub separation: Vector2,
    /// Distance between centers
    pub distance: f64,
    /// `distance - radius_sum`; negative while the circles overlap
    pub overlap: f64,
}

/// Check whether two circles overlap
///
/// Returns `None` when the centers are at least `radius_a + radius_b` apart.
/// Touching circles (distance exactly equal to the radius sum) do not count.
pub fn circle_contact(
    center_a: Vector2,
    radius_a: f64,
    center_b: Vector2,
    radius_b: f64,
) -> Option<Contact> {
    let radius_sum = radius_a + radius_b;
    let separation = center_b - center_a;
    let distance = separation.magnitude();

    if distance < radius_sum {
        Some(Contact {
            separation,
            distance,
            overlap: distance - radius_sum,
        })
    } else {
        None
    }
}
