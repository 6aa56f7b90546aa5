//! Bounce Box entry point
//!
//! On the web: wires the canvas, click handler and animation frame loop.
//! Natively: runs a headless simulation and logs what happens.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, MouseEvent};

    use bounce_box::render::CanvasRenderer;
    use bounce_box::sim::{Vector2, World};
    use bounce_box::{FrameDriver, SimConfig};

    struct App {
        driver: FrameDriver,
        renderer: CanvasRenderer,
        fps_label: Option<Element>,
    }

    impl App {
        fn frame(&mut self, time: f64) {
            self.driver.frame(time, &mut self.renderer);
            if let Some(el) = &self.fps_label {
                el.set_text_content(Some(&format!("fps: {}", self.driver.fps().hud_value())));
            }
        }

        fn click(&mut self, client: Vector2, canvas_origin: Vector2) {
            self.driver.click(client, canvas_origin, &mut self.renderer);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Bounce Box starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("Canvas")
            .ok_or("no canvas")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("#Canvas is not a canvas"))?;

        // The canvas element decides the world extent
        let mut config = SimConfig::load();
        config.width = canvas.width() as f64;
        config.height = canvas.height() as f64;

        let seed = js_sys::Date::now() as u64;
        let world = World::new(&config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let renderer = CanvasRenderer::new(&canvas, &config.fill_color)
            .ok_or("could not get a 2d canvas context")?;

        let fps_label = if config.show_fps {
            document.get_element_by_id("fps")
        } else {
            None
        };

        let app = Rc::new(RefCell::new(App {
            driver: FrameDriver::new(world),
            renderer,
            fps_label,
        }));

        setup_click_handler(&canvas, app.clone());
        request_animation_frame(app);

        log::info!("Bounce Box running!");
        Ok(())
    }

    fn setup_click_handler(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let client = Vector2::new(event.client_x() as f64, event.client_y() as f64);
            let origin = Vector2::new(rect.left(), rect.top());
            app.borrow_mut().click(client, origin);
        });
        let _ = canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window went away; stopping frame loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_app::run() {
        log::error!("Bounce Box failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use bounce_box::sim::{Circle, Vector2, World};
    use bounce_box::{ConfigError, FrameDriver, Render, SimConfig};

    /// Frames to simulate (ten seconds at 60 Hz)
    const FRAMES: u32 = 600;
    /// Clicks laid out on a grid before the first frame
    const GRID_COLS: u32 = 6;
    const GRID_ROWS: u32 = 4;
    /// Nominal display refresh for timestamps
    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Render sink that only counts draws
    #[derive(Default)]
    struct CountingRenderer {
        draws: u64,
    }

    impl Render for CountingRenderer {
        fn render(&mut self, circles: &[Circle]) {
            self.draws += 1;
            log::trace!("Draw {}: {} circles", self.draws, circles.len());
        }
    }

    pub fn run() -> Result<(), ConfigError> {
        let config = match std::env::args().nth(1) {
            Some(path) => {
                log::info!("Loading config from {}", path);
                SimConfig::from_path(&path)?
            }
            None => SimConfig::load(),
        };

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let world = World::new(&config, seed)?;
        let mut driver = FrameDriver::new(world);
        let mut renderer = CountingRenderer::default();

        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let click = Vector2::new(
                    config.width * (col as f64 + 0.5) / GRID_COLS as f64,
                    config.height * (row as f64 + 0.5) / GRID_ROWS as f64,
                );
                driver.click(click, Vector2::ZERO, &mut renderer);
            }
        }
        log::info!(
            "Spawned {} bodies, kinetic energy {:.2}",
            driver.world().len(),
            driver.world().kinetic_energy()
        );

        let mut total_collisions = 0;
        for frame in 0..FRAMES {
            let report = driver.frame(frame as f64 * FRAME_MS, &mut renderer);
            total_collisions += report.stats.collisions;
            if frame % 60 == 59 {
                log::info!(
                    "Frame {}: {} collisions so far, kinetic energy {:.2}, {:.0} fps",
                    driver.world().frame(),
                    total_collisions,
                    driver.world().kinetic_energy(),
                    report.fps
                );
            }
        }

        match serde_json::to_string(driver.world().bodies()) {
            Ok(json) => log::debug!("Final bodies: {}", json),
            Err(e) => log::warn!("Could not serialize bodies: {}", e),
        }
        log::info!("Done after {} draws", renderer.draws);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bounce Box (native) starting headless run...");
    log::info!("Build for wasm32 and serve index.html for the interactive version");

    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
