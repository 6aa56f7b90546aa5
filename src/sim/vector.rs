//! 2D vector helpers
//!
//! Positions and velocities are plain `glam::DVec2` values. The arithmetic the
//! physics needs (in-place add/sub, component-wise mult/div, copy) is already
//! covered by glam's operators and `Copy`; this module adds the few operations
//! with behaviour glam does not share, such as the zero-magnitude guard and the
//! "zero counts as negative" direction sign.

use glam::DVec2;

/// 2D vector used for every position and velocity in the simulation
pub type Vector2 = DVec2;

/// Simulation-specific vector operations
pub trait VectorExt {
    /// Negate both components in place
    fn reverse(&mut self);

    /// Euclidean length
    fn magnitude(&self) -> f64;

    /// Rescale in place to the given magnitude, preserving direction.
    ///
    /// Leaves the vector untouched when its magnitude is exactly zero. A
    /// negative `value` points the result the opposite way.
    fn set_magnitude(&mut self, value: f64);

    /// +1 if x is strictly positive, otherwise -1 (zero maps to -1)
    fn direction_x(&self) -> f64;

    /// +1 if y is strictly positive, otherwise -1 (zero maps to -1)
    fn direction_y(&self) -> f64;
}

impl VectorExt for DVec2 {
    #[inline]
    fn reverse(&mut self) {
        *self = -*self;
    }

    #[inline]
    fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    fn set_magnitude(&mut self, value: f64) {
        let mag = self.magnitude();
        if mag == 0.0 {
            return;
        }
        self.x = self.x / mag * value;
        self.y = self.y / mag * value;
    }

    #[inline]
    fn direction_x(&self) -> f64 {
        sign_or_negative(self.x)
    }

    #[inline]
    fn direction_y(&self) -> f64 {
        sign_or_negative(self.y)
    }
}

#[inline]
fn sign_or_negative(component: f64) -> f64 {
    if component > 0.0 { 1.0 } else { -1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_in_place_arithmetic() {
        let mut v = Vector2::new(3.0, -2.0);
        v += Vector2::new(1.0, 1.0);
        assert_eq!(v, Vector2::new(4.0, -1.0));

        v -= Vector2::new(2.0, 2.0);
        assert_eq!(v, Vector2::new(2.0, -3.0));

        // mult/div are component-wise, not scalar
        v *= Vector2::new(2.0, 3.0);
        assert_eq!(v, Vector2::new(4.0, -9.0));

        v /= Vector2::new(4.0, -3.0);
        assert_eq!(v, Vector2::new(1.0, 3.0));
    }

    #[test]
    fn test_div_by_zero_component_propagates_infinity() {
        let mut v = Vector2::new(1.0, -1.0);
        v /= Vector2::new(0.0, 0.0);
        assert!(v.x.is_infinite() && v.x > 0.0);
        assert!(v.y.is_infinite() && v.y < 0.0);
    }

    #[test]
    fn test_reverse() {
        let mut v = Vector2::new(1.5, -2.5);
        v.reverse();
        assert_eq!(v, Vector2::new(-1.5, 2.5));
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Vector2::new(1.0, 2.0);
        let mut copy = original;
        copy += Vector2::new(10.0, 10.0);
        assert_eq!(original, Vector2::new(1.0, 2.0));
        assert_eq!(copy, Vector2::new(11.0, 12.0));
    }

    #[test]
    fn test_magnitude_and_dot() {
        let v = Vector2::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < EPS);
        assert!((v.dot(Vector2::new(2.0, -1.0)) - 2.0).abs() < EPS);
    }

    #[test]
    fn test_set_magnitude_zero_is_noop() {
        let mut v = Vector2::ZERO;
        v.set_magnitude(7.0);
        assert_eq!(v, Vector2::ZERO);
        assert!(!v.x.is_nan() && !v.y.is_nan());
    }

    #[test]
    fn test_set_magnitude_negative_flips() {
        let mut v = Vector2::new(10.0, 0.0);
        v.set_magnitude(-3.0);
        assert!((v.x + 3.0).abs() < EPS);
        assert!(v.y.abs() < EPS);
    }

    #[test]
    fn test_direction_zero_maps_to_negative() {
        let v = Vector2::new(0.0, 0.0);
        assert_eq!(v.direction_x(), -1.0);
        assert_eq!(v.direction_y(), -1.0);

        let v = Vector2::new(0.1, -0.1);
        assert_eq!(v.direction_x(), 1.0);
        assert_eq!(v.direction_y(), -1.0);
    }

    proptest! {
        #[test]
        fn prop_add_then_sub_restores(
            ax in -1e6f64..1e6, ay in -1e6f64..1e6,
            bx in -1e6f64..1e6, by in -1e6f64..1e6,
        ) {
            let a = Vector2::new(ax, ay);
            let b = Vector2::new(bx, by);
            let mut v = a;
            v += b;
            v -= b;
            prop_assert!((v.x - a.x).abs() <= 1e-9 * (1.0 + a.x.abs() + b.x.abs()));
            prop_assert!((v.y - a.y).abs() <= 1e-9 * (1.0 + a.y.abs() + b.y.abs()));
        }

        #[test]
        fn prop_set_magnitude_hits_target(
            x in -1e3f64..1e3, y in -1e3f64..1e3, m in 0.01f64..1e3,
        ) {
            prop_assume!(x != 0.0 || y != 0.0);
            let mut v = Vector2::new(x, y);
            v.set_magnitude(m);
            prop_assert!((v.magnitude() - m).abs() <= 1e-9 * m.max(1.0));
        }

        #[test]
        fn prop_set_magnitude_preserves_direction(
            x in -1e3f64..1e3, y in -1e3f64..1e3, m in 0.01f64..1e3,
        ) {
            prop_assume!(x.abs() > 1e-6 || y.abs() > 1e-6);
            let before = Vector2::new(x, y);
            let mut v = before;
            v.set_magnitude(m);
            // Parallel and same orientation
            let cross = before.x * v.y - before.y * v.x;
            prop_assert!(cross.abs() <= 1e-6 * before.magnitude() * m);
            prop_assert!(before.dot(v) > 0.0);
        }
    }
}
