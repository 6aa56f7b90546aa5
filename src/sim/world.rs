//! World state and the per-frame step
//!
//! The world owns every body, the canvas extent and the spawn RNG. A step is
//! two phases and the order matters: every pair is collision-resolved first,
//! then every body bounces off the walls and moves. A body shoved out of
//! bounds by a collision is therefore clamped back in the same frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::Body;
use super::vector::Vector2;
use crate::config::{ConfigError, SimConfig, SpawnRanges};

/// Read-only render view of one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vector2,
    pub radius: f64,
}

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Pairs passed to collision resolution
    pub pairs_checked: usize,
    /// Pairs that overlapped and were resolved
    pub collisions: usize,
}

/// The simulation world
#[derive(Debug, Clone)]
pub struct World {
    /// Bodies in spawn order
    bodies: Vec<Body>,
    width: f64,
    height: f64,
    spawn: SpawnRanges,
    seed: u64,
    rng: Pcg32,
    /// Steps taken so far
    frame: u64,
}

impl World {
    /// Create an empty world from a config
    ///
    /// Uses the configured seed, or `fallback_seed` when none is set.
    pub fn new(config: &SimConfig, fallback_seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or(fallback_seed);
        log::info!(
            "World {}x{} seeded with {}",
            config.width,
            config.height,
            seed
        );
        Ok(Self {
            bodies: Vec::new(),
            width: config.width,
            height: config.height,
            spawn: config.spawn.clone(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
        })
    }

    /// Create an empty world with default spawn ranges
    pub fn with_seed(width: f64, height: f64, seed: u64) -> Self {
        Self {
            bodies: Vec::new(),
            width,
            height,
            spawn: SpawnRanges::default(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
        }
    }

    /// Spawn a body at `position` with random velocity and radius
    ///
    /// No placement checks: a body spawned on a wall or on top of another is
    /// sorted out by the next step.
    pub fn spawn(&mut self, position: Vector2) -> &Body {
        let body = Body::random(position, &self.spawn, &mut self.rng);
        log::debug!(
            "Spawned body #{} at ({:.1}, {:.1}) r={:.1} v=({:.2}, {:.2})",
            self.bodies.len(),
            position.x,
            position.y,
            body.radius,
            body.velocity.x,
            body.velocity.y
        );
        self.insert(body)
    }

    /// Add a fully specified body
    pub fn insert(&mut self, body: Body) -> &Body {
        self.bodies.push(body);
        &self.bodies[self.bodies.len() - 1]
    }

    /// Advance the world by one frame
    pub fn step(&mut self) -> StepStats {
        let mut stats = StepStats::default();

        // Collision phase: every unordered pair (i, j), i < j, in spawn order
        for i in 0..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                stats.pairs_checked += 1;
                if a.resolve_collision(b) {
                    stats.collisions += 1;
                }
            }
        }

        // Motion phase: every body, collided or not
        let (width, height) = (self.width, self.height);
        for body in &mut self.bodies {
            body.tick(width, height);
        }

        self.frame += 1;
        log::trace!(
            "Frame {}: {} bodies, {} pairs, {} collisions",
            self.frame,
            self.bodies.len(),
            stats.pairs_checked,
            stats.collisions
        );
        stats
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of steps taken
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Position and radius of every body, in spawn order
    pub fn snapshot(&self) -> Vec<Circle> {
        self.bodies
            .iter()
            .map(|b| Circle {
                center: b.position,
                radius: b.radius,
            })
            .collect()
    }

    /// Total kinetic energy (radius as mass)
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}
