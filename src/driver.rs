//! Frame driver and input adapter
//!
//! The host (browser loop, headless runner, tests) owns a `FrameDriver` and
//! calls it once per display refresh and once per click. Drawing goes through
//! the `Render` trait so the physics never touches a canvas.

use crate::fps::FpsCounter;
use crate::sim::{Circle, StepStats, Vector2, World};

/// Render collaborator: draws every body as a filled circle
pub trait Render {
    fn render(&mut self, circles: &[Circle]);
}

/// Convert a screen-space pointer position to canvas-local coordinates
///
/// `canvas_origin` is the canvas' top-left corner in the same screen space
/// (its bounding client rect).
#[inline]
pub fn canvas_position(client: Vector2, canvas_origin: Vector2) -> Vector2 {
    client - canvas_origin
}

/// Summary of one driven frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub stats: StepStats,
    /// Instantaneous FPS after this frame
    pub fps: f64,
}

/// Drives a world: step, render, sample FPS
#[derive(Debug, Clone)]
pub struct FrameDriver {
    world: World,
    fps: FpsCounter,
}

impl FrameDriver {
    pub fn new(world: World) -> Self {
        Self {
            world,
            fps: FpsCounter::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn fps(&self) -> &FpsCounter {
        &self.fps
    }

    /// Run one display frame at wall-clock time `now_ms`
    pub fn frame<R: Render + ?Sized>(&mut self, now_ms: f64, renderer: &mut R) -> FrameReport {
        let stats = self.world.step();
        renderer.render(&self.world.snapshot());
        let fps = self.fps.sample(now_ms);
        FrameReport { stats, fps }
    }

    /// Handle a pointer-down: spawn a body under the pointer and redraw
    pub fn click<R: Render + ?Sized>(
        &mut self,
        client: Vector2,
        canvas_origin: Vector2,
        renderer: &mut R,
    ) {
        let position = canvas_position(client, canvas_origin);
        self.world.spawn(position);
        renderer.render(&self.world.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Body;

    /// Keeps every frame it was asked to draw
    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<Circle>>,
    }

    impl Render for Recorder {
        fn render(&mut self, circles: &[Circle]) {
            self.frames.push(circles.to_vec());
        }
    }

    #[test]
    fn test_canvas_position() {
        let p = canvas_position(Vector2::new(250.0, 130.0), Vector2::new(50.0, 30.0));
        assert_eq!(p, Vector2::new(200.0, 100.0));
    }

    #[test]
    fn test_click_spawns_and_redraws() {
        let mut driver = FrameDriver::new(World::with_seed(800.0, 600.0, 1));
        let mut recorder = Recorder::default();

        driver.click(
            Vector2::new(110.0, 220.0),
            Vector2::new(10.0, 20.0),
            &mut recorder,
        );

        assert_eq!(driver.world().len(), 1);
        assert_eq!(driver.world().bodies()[0].position, Vector2::new(100.0, 200.0));
        // Redrawn immediately, without stepping
        assert_eq!(recorder.frames.len(), 1);
        assert_eq!(recorder.frames[0][0].center, Vector2::new(100.0, 200.0));
        assert_eq!(driver.world().frame(), 0);
    }

    #[test]
    fn test_frame_renders_post_step_state() {
        let mut world = World::with_seed(800.0, 600.0, 1);
        world.insert(Body::new(
            Vector2::new(100.0, 100.0),
            Vector2::new(2.0, 3.0),
            10.0,
        ));
        let mut driver = FrameDriver::new(world);
        let mut recorder = Recorder::default();

        let report = driver.frame(0.0, &mut recorder);
        assert_eq!(report.fps, 0.0);
        assert_eq!(recorder.frames[0][0].center, Vector2::new(102.0, 103.0));

        let report = driver.frame(20.0, &mut recorder);
        assert!((report.fps - 50.0).abs() < 1e-9);
        assert_eq!(recorder.frames[1][0].center, Vector2::new(104.0, 106.0));
        assert_eq!(driver.world().frame(), 2);
    }

    #[test]
    fn test_frame_reports_step_stats() {
        let mut driver = FrameDriver::new(World::with_seed(800.0, 600.0, 1));
        let mut recorder = Recorder::default();
        for _ in 0..4 {
            driver.click(Vector2::new(400.0, 300.0), Vector2::ZERO, &mut recorder);
        }

        let report = driver.frame(16.0, &mut recorder);
        assert_eq!(report.stats.pairs_checked, 6);
        // Stacked on one point, so every pair starts out overlapping
        assert!(report.stats.collisions >= 1);
    }
}
