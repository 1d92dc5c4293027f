//! Heart Snake entry point
//!
//! Handles platform-specific initialization and wires the DOM to the
//! game controller.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, Element, HtmlButtonElement, HtmlCanvasElement,
        HtmlElement, HtmlImageElement, HtmlInputElement, KeyboardEvent, TouchEvent,
    };

    use heart_snake::persistence::LocalStorageBackend;
    use heart_snake::platform::{ControlButton, InputController, InputEvent, IntervalTicker};
    use heart_snake::renderer::{CanvasSurface, LoadProgress, Sprites};
    use heart_snake::{GameConfig, GameController, canvas_size_for_viewport};

    /// Head texture
    const HEAD_IMAGE_URL: &str = "ela.PNG";
    /// Food texture
    const FOOD_IMAGE_URL: &str = "eu.PNG";

    type WebController = GameController<LocalStorageBackend, IntervalTicker, CanvasSurface>;

    /// Game instance holding all state
    struct Game {
        controller: WebController,
        input: InputController,
        assets: LoadProgress,
        game_over_shown: bool,
    }

    impl Game {
        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            set_text(&document, "score", &self.controller.score().to_string());
            set_text(&document, "highScore", &self.controller.high_score().to_string());

            match self.controller.game_over() {
                Some(over) if !self.game_over_shown => {
                    set_text(&document, "finalScore", &over.final_score.to_string());
                    set_text(&document, "message", over.message);
                    render_ranking(&document, &over.ranking);
                    set_display(&document, "gameOver", "flex");
                    self.game_over_shown = true;
                }
                None if self.game_over_shown => {
                    set_display(&document, "gameOver", "none");
                    self.game_over_shown = false;
                }
                _ => {}
            }
        }

        /// An image settled (loaded or failed); enable Start once all have
        fn asset_settled(&mut self, url: &str, ok: bool) {
            if ok {
                self.assets.mark_loaded();
            } else {
                self.assets.mark_failed(url);
            }
            if !self.assets.is_ready() {
                return;
            }

            log::info!("Assets ready ({} failed)", self.assets.failed());
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(btn) = element::<HtmlButtonElement>(&document, "startGameBtn") {
                btn.set_disabled(false);
            }
            set_display(&document, "loadingText", "none");
        }
    }

    fn element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
        document.get_element_by_id(id)?.dyn_into::<T>().ok()
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_display(document: &Document, id: &str, value: &str) {
        if let Some(el) = element::<HtmlElement>(document, id) {
            let _ = el.style().set_property("display", value);
        }
    }

    fn render_ranking(document: &Document, ranking: &[heart_snake::RankingEntry]) {
        let Some(list) = document.get_element_by_id("rankingList") else {
            return;
        };
        list.set_inner_html("");

        let lines: Vec<String> = if ranking.is_empty() {
            vec!["Be the first to play!".to_string()]
        } else {
            ranking
                .iter()
                .map(|e| format!("{}: {} points", e.name, e.score))
                .collect()
        };
        for line in lines {
            if let Ok(li) = document.create_element("li") {
                li.set_text_content(Some(&line));
                let _ = list.append_child(&li);
            }
        }
    }

    fn is_touch_device(window: &web_sys::Window) -> bool {
        js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
            || window.navigator().max_touch_points() > 0
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Heart Snake starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if is_touch_device(&window) {
            if let Some(body) = document.body() {
                let _ = body.class_list().add_1("is-touch-device");
            }
        }

        let canvas: HtmlCanvasElement = element(&document, "gameCanvas").expect("no canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into().ok())
            .expect("no 2d context");

        let backend = LocalStorageBackend::new();
        let viewport = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
        let config = GameConfig::load(&backend).for_canvas(canvas_size_for_viewport(viewport));
        canvas.set_width(config.board_px());
        canvas.set_height(config.board_px());

        let seed = js_sys::Date::now() as u64;
        let controller = GameController::new(
            config,
            backend,
            IntervalTicker::new(),
            CanvasSurface::new(ctx),
            seed,
        );
        log::info!("Game initialized with seed: {} ({} tiles)", seed, config.tile_count);

        let game = Rc::new(RefCell::new(Game {
            controller,
            input: InputController::new(),
            assets: LoadProgress::new(2),
            game_over_shown: false,
        }));

        if let Some(btn) = element::<HtmlButtonElement>(&document, "startGameBtn") {
            btn.set_disabled(true);
        }

        setup_ticker(game.clone());
        load_sprites(game.clone());
        setup_start_button(&document, game.clone());
        setup_control_buttons(&document, game.clone());
        setup_keyboard(&document, game.clone());
        setup_swipe(&canvas, game.clone());

        game.borrow_mut().update_hud();
        log::info!("Heart Snake running!");
    }

    fn setup_ticker(game: Rc<RefCell<Game>>) {
        let tick_game = game.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut g = tick_game.borrow_mut();
            g.controller.tick();
            g.update_hud();
        });
        game.borrow_mut()
            .controller
            .ticker_mut()
            .set_callback(closure.as_ref().unchecked_ref::<js_sys::Function>().clone());
        closure.forget();
    }

    fn load_sprites(game: Rc<RefCell<Game>>) {
        let (Ok(head), Ok(food)) = (HtmlImageElement::new(), HtmlImageElement::new()) else {
            log::warn!("Cannot create image elements, using glyphs");
            let mut g = game.borrow_mut();
            g.asset_settled(HEAD_IMAGE_URL, false);
            g.asset_settled(FOOD_IMAGE_URL, false);
            return;
        };

        for (image, url) in [(&head, HEAD_IMAGE_URL), (&food, FOOD_IMAGE_URL)] {
            let on_load = {
                let game = game.clone();
                Closure::<dyn FnMut()>::new(move || game.borrow_mut().asset_settled(url, true))
            };
            let on_error = {
                let game = game.clone();
                Closure::<dyn FnMut()>::new(move || game.borrow_mut().asset_settled(url, false))
            };
            image.set_onload(Some(on_load.as_ref().unchecked_ref()));
            image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
            on_load.forget();
            on_error.forget();
        }

        game.borrow_mut()
            .controller
            .set_sprites(Sprites::new(Some(head.clone()), Some(food.clone())));
        head.set_src(HEAD_IMAGE_URL);
        food.set_src(FOOD_IMAGE_URL);
    }

    fn setup_start_button(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(btn) = document.get_element_by_id("startGameBtn") else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let name = element::<HtmlInputElement>(&document, "playerNameInput")
                .map(|input| input.value())
                .unwrap_or_default();
            set_display(&document, "startScreen", "none");

            let mut g = game.borrow_mut();
            g.controller.start(&name);
            g.update_hud();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_control_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        let buttons = [
            ("btnUp", ControlButton::Up),
            ("btnDown", ControlButton::Down),
            ("btnLeft", ControlButton::Left),
            ("btnRight", ControlButton::Right),
        ];
        for (id, button) in buttons {
            let Some(btn) = document.get_element_by_id(id) else {
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                let Game { input, controller, .. } = &mut *g;
                input.handle(InputEvent::Button(button), controller);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("btnRestart") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                g.controller.restart();
                g.update_hud();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(document: &Document, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let in_text_field = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|el| el.tag_name() == "INPUT");
            let key = event.key();

            let mut g = game.borrow_mut();
            let Game { input, controller, .. } = &mut *g;
            let resp = input.handle(InputEvent::Key { key: &key, in_text_field }, controller);
            if resp.prevent_default {
                event.prevent_default();
            }
        });
        let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_swipe(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        fn touch_point(touches: web_sys::TouchList) -> Option<glam::Vec2> {
            let touch = touches.get(0)?;
            Some(glam::Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(pos) = touch_point(event.touches()) {
                    let mut g = game.borrow_mut();
                    let Game { input, controller, .. } = &mut *g;
                    input.handle(InputEvent::TouchStart(pos), controller);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(pos) = touch_point(event.changed_touches()) {
                    let mut g = game.borrow_mut();
                    let Game { input, controller, .. } = &mut *g;
                    input.handle(InputEvent::TouchEnd(pos), controller);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Heart Snake (native) starting...");
    log::info!("Native mode plays a headless autopilot round - run with `trunk serve` for the web version");

    let path = std::env::var("HEART_SNAKE_STORE").unwrap_or_else(|_| "heart-snake.json".to_string());
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    autopilot::play(&path, seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use heart_snake::persistence::FileBackend;
    use heart_snake::platform::ManualTicker;
    use heart_snake::renderer::RecordingSurface;
    use heart_snake::sim::{Direction, GameState};
    use heart_snake::{GameConfig, GameController};

    /// Safety net for a snake circling forever
    const MAX_TICKS: u32 = 20_000;

    /// Greedy move toward the food that does not die next tick
    fn choose(state: &GameState) -> Option<Direction> {
        let head = state.snake.head();
        let food = state.food?;
        [Direction::UP, Direction::DOWN, Direction::LEFT, Direction::RIGHT]
            .into_iter()
            .filter(|&dir| !state.direction.is_reversed_by(dir))
            .filter(|&dir| {
                let next = head.offset(dir);
                next.in_bounds(state.tile_count()) && !state.snake.contains(next)
            })
            .min_by_key(|&dir| {
                let next = head.offset(dir);
                (next.x - food.x).abs() + (next.y - food.y).abs()
            })
    }

    pub fn play(path: &str, seed: u64) {
        let backend = FileBackend::open(path);
        let config = GameConfig::load(&backend);
        let mut game = GameController::new(
            config,
            backend,
            ManualTicker::new(),
            RecordingSurface::new(),
            seed,
        );

        game.start("Autopilot");
        let mut ticks = 0;
        while game.game_over().is_none() && ticks < MAX_TICKS {
            if let Some(dir) = choose(game.state()) {
                game.set_direction(dir);
            }
            game.tick();
            ticks += 1;
        }

        match game.game_over() {
            Some(over) => {
                log::info!(
                    "Autopilot finished after {} ticks: {:?}, score {}",
                    ticks,
                    over.reason,
                    over.final_score
                );
                println!("{} ({} points)", over.message, over.final_score);
            }
            None => log::warn!("Autopilot stopped after {} ticks without ending", ticks),
        }

        println!("Ranking:");
        for (i, entry) in game.ranking().iter().enumerate() {
            println!("{:>2}. {}: {} points", i + 1, entry.name, entry.score);
        }
        log::info!(
            "Drew {} frames, final tick interval {} ms",
            game.surface().frames(),
            game.tick_interval_ms()
        );
    }
}
