//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - One step per frame, no timestep scaling
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod vector;
pub mod world;

pub use body::Body;
pub use collision::{Contact, circle_contact};
pub use vector::{Vector2, VectorExt};
pub use world::{Circle, StepStats, World};
