//! Retro Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use retro_pong::consts::*;
    use retro_pong::renderer::{QuadBatch, RenderState};
    use retro_pong::{Game, GameLoop, LoopControl, Settings};

    /// Everything the animation-frame callback needs
    struct App {
        game_loop: GameLoop<Game>,
        render_state: RenderState,
        batch: QuadBatch,
    }

    impl App {
        /// Update, draw and present one frame
        fn frame(&mut self, time: f64) -> LoopControl {
            let control = self.game_loop.frame(time, &mut self.batch);
            if control == LoopControl::Stop {
                return control;
            }

            match self.render_state.render(&self.batch) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                    self.game_loop.stop();
                    return LoopControl::Stop;
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }

            control
        }
    }

    fn js_error<E: Into<String>>(msg: E) -> JsValue {
        JsValue::from_str(&msg.into())
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(|e| js_error(e.to_string()))?;

        log::info!("Retro Pong starting...");

        let window = web_sys::window().ok_or_else(|| js_error("no window"))?;
        let document = window.document().ok_or_else(|| js_error("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| js_error("no canvas"))?
            .dyn_into()
            .map_err(|_| js_error("#canvas is not a canvas"))?;

        // Size the backing store to the displayed size
        let dpr = window.device_pixel_ratio();
        let client_w = match canvas.client_width() {
            0 => CANVAS_WIDTH as i32,
            w => w,
        };
        let client_h = match canvas.client_height() {
            0 => CANVAS_HEIGHT as i32,
            h => h,
        };
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        // Write defaults back so they can be edited in dev tools
        settings.save();

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(settings, seed);
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| js_error(format!("Failed to create surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| js_error(format!("Failed to get adapter: {}", e)))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let logical = Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        let render_state = RenderState::new(surface, &adapter, width, height, logical)
            .await
            .map_err(|e| js_error(format!("Failed to create device: {}", e)))?;

        let app = Rc::new(RefCell::new(App {
            game_loop: GameLoop::new(game),
            render_state,
            batch: QuadBatch::new(CANVAS_WIDTH, CANVAS_HEIGHT),
        }));

        setup_input_handlers(&window, app.clone())?;

        request_animation_frame(app)?;

        log::info!("Retro Pong running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                // Auto-repeat would re-trigger Enter
                if event.repeat() {
                    return;
                }
                let mut a = app.borrow_mut();
                if a.game_loop.game_mut().keyboard.key_down(&event.key()) {
                    // Arrow keys would otherwise scroll the page
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                if a.game_loop.game_mut().keyboard.key_up(&event.key()) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| js_error("no window"))?;
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let control = app.borrow_mut().frame(time);

        match control {
            LoopControl::Continue => {
                if let Err(e) = request_animation_frame(app) {
                    log::error!("requestAnimationFrame failed: {:?}", e);
                }
            }
            LoopControl::Stop => log::info!("Game loop stopped"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Retro Pong (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");
    log::info!("Playing a headless demo match...");

    headless::run_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: both paddles play themselves through the normal input path
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use retro_pong::consts::*;
    use retro_pong::renderer::QuadBatch;
    use retro_pong::sim::GamePhase;
    use retro_pong::{Game, GameLoop, LoopControl, Settings};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up after ten simulated minutes
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    pub fn run_demo() {
        let settings = Settings::load();
        let mut game_loop = GameLoop::new(Game::new(settings, 0x5eed).stop_after_match());
        let mut batch = QuadBatch::new(CANVAS_WIDTH, CANVAS_HEIGHT);

        let mut now = 0.0;
        let mut confirm_held = false;
        for _ in 0..MAX_FRAMES {
            steer_left_paddle(game_loop.game_mut(), &mut confirm_held);

            now += FRAME_MS;
            if game_loop.frame(now, &mut batch) == LoopControl::Stop {
                break;
            }
        }

        let state = &game_loop.game().state;
        log::info!(
            "Demo finished in {:?}: {} - {} ({} vertices in the last frame)",
            state.phase,
            state.left_score,
            state.right_score,
            batch.vertex_count()
        );
    }

    /// Press the keys a player would: chase the ball and tap Enter to serve
    fn steer_left_paddle(game: &mut Game, confirm_held: &mut bool) {
        let waiting = matches!(game.state.phase, GamePhase::Start | GamePhase::Serve);
        if waiting && !*confirm_held {
            game.keyboard.key_down("Enter");
            *confirm_held = true;
        } else if *confirm_held {
            game.keyboard.key_up("Enter");
            *confirm_held = false;
        }

        let ball_center = game.state.ball.y() + game.state.ball.height() / 2.0;
        let paddle_center = game.state.left.center_y();
        let (up, down) = if ball_center < paddle_center - 20.0 {
            (true, false)
        } else if ball_center > paddle_center + 20.0 {
            (false, true)
        } else {
            (false, false)
        };

        for (key, pressed) in [("w", up), ("s", down)] {
            if pressed {
                game.keyboard.key_down(key);
            } else {
                game.keyboard.key_up(key);
            }
        }
    }
}
