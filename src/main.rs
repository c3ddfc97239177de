//! Tiny Flight entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        AddEventListenerOptions, Document, HtmlCanvasElement, KeyboardEvent, MouseEvent,
        TouchEvent,
    };

    use tiny_flight::Tuning;
    use tiny_flight::platform::{HostEvent, is_activation, start_prompt};
    use tiny_flight::renderer::CanvasRenderer;
    use tiny_flight::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        input: TickInput,
        document: Document,
    }

    impl Game {
        /// Route a raw host event into the simulation
        fn handle(&mut self, event: HostEvent) {
            if is_activation(&event) {
                self.state.activate();
            }
        }

        /// Run one simulation tick
        fn update(&mut self) {
            tick(&mut self.state, &self.input);
            // Clear one-shot inputs after processing
            self.input.restart = false;
        }

        /// Render the current frame
        fn render(&self) {
            self.renderer.render(&self.state.snapshot());
        }

        /// Apply pending notifications to the DOM
        fn update_hud(&mut self) {
            for event in self.state.drain_events() {
                match event {
                    GameEvent::ScoreChanged(score) => {
                        set_text(&self.document, "score", &score.to_string());
                    }
                    GameEvent::PhaseChanged { to, .. } => {
                        set_hidden(&self.document, "start-screen", to != GamePhase::NotStarted);
                        set_hidden(&self.document, "game-over-screen", to != GamePhase::Ended);
                        if to == GamePhase::Ended {
                            set_text(&self.document, "final-score", &self.state.score.to_string());
                        }
                    }
                    GameEvent::ObstacleSpawned { .. } | GameEvent::ObstacleRetired => {}
                }
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", hidden);
        }
    }

    /// Optional balance overrides from `<canvas data-tuning='{...}'>`
    fn load_tuning(canvas: &HtmlCanvasElement) -> Tuning {
        let Some(json) = canvas.get_attribute("data-tuning") else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning overrides: {}", e);
                Tuning::default()
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tiny Flight starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Match the drawing buffer to the laid-out size
        let width = canvas.offset_width().max(1) as u32;
        let height = canvas.offset_height().max(1) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let renderer = CanvasRenderer::new(&canvas).expect("Failed to create canvas renderer");

        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(width as f32, height as f32, load_tuning(&canvas), seed)
            .expect("load_tuning only returns validated tuning");
        log::info!("Game initialized {}x{} with seed: {}", width, height, seed);

        let touch_capable = js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart"))
            .unwrap_or(false);
        if let Some(p) = document.query_selector("#start-screen p").ok().flatten() {
            p.set_text_content(Some(start_prompt(touch_capable)));
        }

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer,
            input: TickInput::default(),
            document,
        }));

        setup_input_handlers(game.clone());
        setup_restart_button(game.clone());

        request_animation_frame(game);

        log::info!("Tiny Flight running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().handle(HostEvent::Click);
            });
            let _ = document
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start - non-passive so scrolling can be suppressed
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().handle(HostEvent::TouchStart);
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "KeyI" => {
                        g.input.autopilot = !g.input.autopilot;
                        log::info!("Autopilot: {}", g.input.autopilot);
                    }
                    code => g.handle(HostEvent::KeyDown(code.to_string())),
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        let Some(btn) = document.get_element_by_id("restart-button") else {
            log::warn!("No restart button found");
            return;
        };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.restart = true;
            });
            let _ =
                btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.restart = true;
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = btn.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use tiny_flight::Tuning;
    use tiny_flight::consts::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};
    use tiny_flight::sim::{GamePhase, GameState, TickInput, tick};

    /// Ten minutes at 60 frames per second
    const DEMO_TICKS: u64 = 60 * 60 * 10;

    env_logger::init();
    log::info!("Tiny Flight (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - serve the wasm build for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            let tuning = Tuning::from_json(&json)?;
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_millis() as u64;
    let mut state = GameState::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT, tuning, seed)?;
    state.start();

    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    while state.phase == GamePhase::Running && state.time_ticks < DEMO_TICKS {
        tick(&mut state, &input);
    }

    println!(
        "Autopilot cleared {} mountains in {} ticks ({})",
        state.score,
        state.time_ticks,
        if state.phase == GamePhase::Ended {
            "crashed"
        } else {
            "still flying"
        }
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}
