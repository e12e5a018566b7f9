//! Hopper entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, KeyboardEvent, Window};

    use hopper::platform::dom::DomView;
    use hopper::platform::seed_from_query;
    use hopper::sim::{GameLoop, GameState};
    use hopper::{InitError, Tuning};

    /// Game instance holding all state
    struct Game {
        sim: GameLoop,
        view: DomView,
        window: Window,
    }

    impl Game {
        /// Run one frame: sync with the page, step, paint
        fn update(&mut self, time: f64) {
            for id in self.view.removed_collectibles() {
                self.sim.state.despawn(id);
            }
            self.sim.state.set_world(self.view.world(&self.window));

            let frame = self.sim.frame(time);
            // Never score something the player can't see
            for id in self.view.apply(&frame.events, &frame.snapshot) {
                self.sim.state.despawn(id);
            }
        }
    }

    pub fn run() -> Result<(), InitError> {
        log::info!("Hopper starting...");

        let window = web_sys::window().ok_or(InitError::NoWindow)?;
        let document = window.document().ok_or(InitError::NoDocument)?;

        let tuning = Tuning::load(&document)?;
        let view = DomView::attach(&document)?;
        let player = view.initial_player();
        let world = view.world(&window);

        let seed = window
            .location()
            .search()
            .ok()
            .and_then(|s| seed_from_query(&s))
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        let start = window.performance().map(|p| p.now()).unwrap_or(0.0);

        let state = GameState::new(tuning, world, player, seed);
        let game = Rc::new(RefCell::new(Game {
            sim: GameLoop::new(state, start),
            view,
            window: window.clone(),
        }));

        log::info!("Game initialized with seed: {}", game.borrow().sim.state.seed);

        setup_input_handlers(&window, &document, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Hopper running!");
        Ok(())
    }

    fn setup_input_handlers(window: &Window, document: &Document, game: Rc<RefCell<Game>>) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().sim.key_down(&event.key());
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().sim.key_up(&event.key());
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyups for held keys never arrive
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().sim.input.clear();
                log::info!("Input cleared (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping game loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().update(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    if let Err(e) = wasm_game::run() {
        log::error!("Hopper failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Hopper (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    let report = hopper::platform::headless::run_headless(hopper::Tuning::default(), 2024, 60.0);
    match serde_json::to_string_pretty(&report.snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
    println!(
        "\nseed {}: {} frames, {} spawned, {} collected, {} jumps",
        report.seed, report.frames, report.spawned, report.collected, report.jumps
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
