//! Heart Fireworks entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_show {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use heart_fireworks::renderer::CanvasSurface;
    use heart_fireworks::{Settings, ShowState, frame};

    /// Show instance holding all state
    struct Show {
        state: ShowState,
        surface: CanvasSurface,
        /// First animation frame timestamp; show time is measured from it
        start_time: Option<f64>,
    }

    impl Show {
        fn step(&mut self, time: f64) {
            let start = *self.start_time.get_or_insert(time);
            frame(&mut self.state, time - start, &mut self.surface);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Heart Fireworks starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("fireworkCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #fireworkCanvas element");
            return;
        };

        // Size the canvas to the viewport once; later resizes are ignored
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0) as u32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = match canvas.get_context("2d") {
            Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
                Ok(ctx) => ctx,
                Err(_) => {
                    log::error!("Context is not a CanvasRenderingContext2d");
                    return;
                }
            },
            _ => {
                log::error!("Failed to get 2d context");
                return;
            }
        };

        let settings = canvas
            .get_attribute("data-settings")
            .map(|json| Settings::from_json_or_default(&json))
            .unwrap_or_default();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);

        let state = match ShowState::new(width as f32, height as f32, seed, settings) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Cannot start show: {}", e);
                return;
            }
        };

        let show = Rc::new(RefCell::new(Show {
            state,
            surface: CanvasSurface::new(ctx, width, height),
            start_time: None,
        }));

        request_animation_frame(show);

        log::info!("Heart Fireworks running ({}x{}, seed {})", width, height, seed);
    }

    fn request_animation_frame(show: Rc<RefCell<Show>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(show, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(show: Rc<RefCell<Show>>, time: f64) {
        show.borrow_mut().step(time);
        request_animation_frame(show);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_show::run();
}

/// Headless run: simulate through the idle transition and log what a frame draws
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use heart_fireworks::consts::FRAME_MS;
    use heart_fireworks::renderer::RecordingSurface;
    use heart_fireworks::{Settings, ShowState, frame};

    env_logger::init();
    log::info!("Heart Fireworks (native) starting...");
    log::info!("Native mode draws to an in-memory surface - run with `trunk serve` for the web version");

    let (width, height) = (800.0, 600.0);
    let mut state = match ShowState::new(width, height, 2024, Settings::default()) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Cannot start show: {}", e);
            return;
        }
    };
    let mut surface = RecordingSurface::new(width, height);

    // 20 simulated seconds at 60 Hz
    let frames = (20_000.0 / FRAME_MS) as u64;
    for i in 1..=frames {
        surface.clear();
        frame(&mut state, i as f64 * FRAME_MS, &mut surface);
    }

    println!(
        "After {:.1}s: {} launched, outline {} points, {} particles, {} emitters, idle={}",
        state.clock_ms / 1000.0,
        state.launched_count(),
        state.outline.len(),
        state.particles.len(),
        state.emitters.len(),
        state.is_idle()
    );
    println!(
        "Last frame: {} draw calls ({} discs, {} rings, {} text lines)",
        surface.commands().len(),
        surface.disc_count(),
        surface.ring_count(),
        surface.texts().len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
