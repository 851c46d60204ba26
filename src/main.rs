//! NeuroNest Games entry point
//!
//! In the browser, mounts the game named by the page path (`/games/<id>`),
//! falling back to the root element's `data-game` attribute. Natively, checks the catalogs and plays a scripted demo.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, PointerEvent};

    use neuronest_games::Settings;
    use neuronest_games::audio::AudioManager;
    use neuronest_games::consts::*;
    use neuronest_games::games::{self, GameKind};
    use neuronest_games::platform::{Timeout, dom};
    use neuronest_games::renderer::{canvas2d, frame};
    use neuronest_games::sim::{
        GameEvent, GameVariant, NextAction, QuizGame, SessionPhase, TracingPad, Verdict,
    };

    /// One quiz page: the game plus its view
    struct QuizPage {
        game: QuizGame,
        document: Document,
        root: Element,
        audio: AudioManager,
        settings: Settings,
        /// Last verdict, shown briefly after the lives game auto-advances
        flash: Option<Verdict>,
        flash_timer: Option<Timeout>,
        /// `Date.now()` when the current play-through began
        started_at: f64,
    }

    impl QuizPage {
        /// Play cues for pending events and log a finished play-through
        fn drain_and_play(&mut self) -> Vec<GameEvent> {
            let events = self.game.drain_events();
            self.audio.play_events(&events);
            for event in &events {
                if let GameEvent::Finished { score, out_of_lives } = event {
                    let secs = (js_sys::Date::now() - self.started_at) / 1000.0;
                    log::info!(
                        "{} finished in {secs:.0}s (score {score:?}, out of lives: {out_of_lives})",
                        self.game.variant().slug()
                    );
                }
            }
            events
        }

        fn handle_option(&mut self, index: usize, page: Weak<RefCell<QuizPage>>) {
            let Some(answer) = self.game.current_level().options.get(index).copied() else {
                log::warn!("option index {index} not on the board");
                return;
            };
            if !self.game.select_option(answer) {
                return;
            }
            let events = self.drain_and_play();

            if self.game.session().policy().auto_advances() && self.settings.feedback_flash() {
                self.flash = events.iter().find_map(|e| match e {
                    GameEvent::Answered { verdict, .. } => Some(*verdict),
                    _ => None,
                });
                // Replacing the timer cancels the previous one
                self.flash_timer = Timeout::new(FEEDBACK_FLASH_MS, move || {
                    if let Some(page) = page.upgrade() {
                        let mut p = page.borrow_mut();
                        p.flash = None;
                        p.render_or_log();
                    }
                });
            }
        }

        fn handle_action(&mut self, action: &str) {
            match action {
                "next" => {
                    self.game.advance();
                }
                "restart" => {
                    self.game.reset();
                    self.flash = None;
                    self.flash_timer = None;
                    self.started_at = js_sys::Date::now();
                    log::info!("{} restarted", self.game.variant().slug());
                }
                other => log::warn!("unknown action {other}"),
            }
            self.drain_and_play();
        }

        fn render_or_log(&self) {
            if let Err(e) = self.render() {
                log::error!("render failed: {e:?}");
            }
        }

        fn render(&self) -> Result<(), JsValue> {
            let doc = &self.document;
            let session = self.game.session();
            let variant = self.game.variant();
            dom::clear(&self.root);

            let header = dom::element(doc, "header", "game-header", "")?;
            header.append_child(&dom::back_link(doc)?)?;
            header.append_child(&dom::element(doc, "h1", "game-title", variant.title())?)?;
            header.append_child(&dom::element(doc, "p", "level-label", &self.game.level_label())?)?;
            self.root.append_child(&header)?;

            if session.phase() == SessionPhase::Terminal {
                return self.render_results();
            }

            let progress = dom::element(doc, "div", "progress", "")?;
            let fill = dom::element(doc, "div", "progress-fill", "")?;
            fill.set_attribute("style", &format!("width: {:.0}%", self.game.progress_percent()))?;
            progress.append_child(&fill)?;
            self.root.append_child(&progress)?;

            if let Some(lives) = session.lives() {
                let hearts: String = (0..MAX_LIVES)
                    .map(|i| if i < lives { '\u{2665}' } else { '\u{2661}' })
                    .collect();
                self.root.append_child(&dom::element(doc, "div", "hearts", &hearts)?)?;
            }

            let level = self.game.current_level();
            if matches!(variant, GameVariant::LetterRecognition | GameVariant::NumberMatch) {
                self.root
                    .append_child(&dom::element(doc, "div", "target", &level.target.to_string())?)?;
            }
            self.root.append_child(&dom::element(doc, "p", "prompt", &level.prompt)?)?;

            let board = dom::element(doc, "div", "options", "")?;
            let locked = session.is_locked();
            for (i, option) in level.options.iter().enumerate() {
                let class = if session.selection() == Some(*option) {
                    "option selected"
                } else {
                    "option"
                };
                let button = dom::element(doc, "button", class, &option.to_string())?;
                button.set_attribute("data-option", &i.to_string())?;
                if locked {
                    button.set_attribute("disabled", "")?;
                }
                board.append_child(&button)?;
            }
            self.root.append_child(&board)?;

            if let Some(verdict) = self.flash {
                let (class, text) = match verdict {
                    Verdict::Correct => ("flash correct", "Correct!"),
                    Verdict::Wrong => ("flash wrong", "Oops!"),
                };
                self.root.append_child(&dom::element(doc, "div", class, text)?)?;
            }

            let feedback = session.feedback();
            if feedback.verdict().is_some() {
                let class = match feedback.verdict() {
                    Some(Verdict::Correct) => "feedback correct",
                    _ => "feedback wrong",
                };
                self.root.append_child(&dom::element(doc, "p", class, feedback.message())?)?;
            }

            match session.next_action() {
                NextAction::Next => self.action_button("next", "Next Level")?,
                NextAction::Restart => self.action_button("restart", "Restart Game")?,
                NextAction::None => {}
            }
            Ok(())
        }

        fn render_results(&self) -> Result<(), JsValue> {
            let doc = &self.document;
            let summary = self.game.session().summary();
            let card = dom::element(doc, "section", "results", "")?;
            card.append_child(&dom::element(doc, "h2", "", summary.headline())?)?;
            if let Some(score) = summary.score {
                card.append_child(&dom::element(
                    doc,
                    "p",
                    "",
                    &format!("Score: {score} / {}", summary.total),
                )?)?;
            }
            self.root.append_child(&card)?;
            self.action_button("restart", "Play Again")
        }

        fn action_button(&self, action: &str, label: &str) -> Result<(), JsValue> {
            let button = dom::element(&self.document, "button", "action", label)?;
            button.set_attribute("data-action", action)?;
            self.root.append_child(&button)?;
            Ok(())
        }
    }

    fn mount_quiz(
        document: Document,
        root: Element,
        variant: GameVariant,
        settings: Settings,
    ) -> Result<(), JsValue> {
        let page = Rc::new(RefCell::new(QuizPage {
            game: QuizGame::for_variant(variant),
            document,
            root: root.clone(),
            audio: AudioManager::new(&settings),
            settings,
            flash: None,
            flash_timer: None,
            started_at: js_sys::Date::now(),
        }));
        page.borrow().render()?;
        log::info!("Mounted {}", variant.slug());

        // One delegated listener for every board button
        {
            let page = page.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                let Some(button) = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|t| t.closest("button").ok().flatten())
                else {
                    return;
                };
                let weak = Rc::downgrade(&page);
                let mut p = page.borrow_mut();
                if let Some(index) = button
                    .get_attribute("data-option")
                    .and_then(|s| s.parse::<usize>().ok())
                {
                    p.handle_option(index, weak);
                } else if let Some(action) = button.get_attribute("data-action") {
                    p.handle_action(&action);
                } else {
                    return;
                }
                p.render_or_log();
            });
            root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Drop the pending flash timer when the page goes away
        {
            let page = Rc::downgrade(&page);
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if let Some(page) = page.upgrade() {
                    page.borrow_mut().flash_timer = None;
                }
            });
            if let Some(window) = web_sys::window() {
                window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
            }
            closure.forget();
        }

        Ok(())
    }

    /// Tracing page: pad state plus its canvas
    struct TracingPage {
        pad: TracingPad,
        ctx: web_sys::CanvasRenderingContext2d,
        caption: Element,
        settings: Settings,
    }

    impl TracingPage {
        fn redraw(&self) {
            canvas2d::replay(&self.ctx, &frame(&self.pad, &self.settings));
            self.caption.set_text_content(Some(&format!(
                "Draw along the number \"{}\".",
                self.pad.difficulty().label()
            )));
        }
    }

    fn pointer_pos(event: &PointerEvent) -> Vec2 {
        Vec2::new(event.offset_x() as f32, event.offset_y() as f32)
    }

    fn mount_tracing(document: Document, root: Element, settings: Settings) -> Result<(), JsValue> {
        dom::clear(&root);
        root.append_child(&dom::back_link(&document)?)?;
        root.append_child(&dom::element(&document, "h2", "game-title", "Trace the Number")?)?;
        let caption = dom::element(&document, "p", "prompt", "")?;
        root.append_child(&caption)?;

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_width(PAD_SIZE as u32);
        canvas.set_height(PAD_SIZE as u32);
        canvas.set_class_name("tracing-pad");
        root.append_child(&canvas)?;

        let controls = dom::element(&document, "div", "controls", "")?;
        let previous = dom::element(&document, "button", "action", "Previous")?;
        let next = dom::element(&document, "button", "action", "Next")?;
        let clear = dom::element(&document, "button", "action", "Clear")?;
        controls.append_child(&previous)?;
        controls.append_child(&next)?;
        controls.append_child(&clear)?;
        root.append_child(&controls)?;

        let ctx = canvas2d::context(&canvas).map_err(|e| JsValue::from_str(&e))?;
        let page = Rc::new(RefCell::new(TracingPage {
            pad: TracingPad::default(),
            ctx,
            caption,
            settings,
        }));
        page.borrow().redraw();

        let update_buttons = {
            let previous = previous.clone();
            let next = next.clone();
            move |pad: &TracingPad| {
                let set = |el: &Element, disabled: bool| {
                    let result = if disabled {
                        el.set_attribute("disabled", "")
                    } else {
                        el.remove_attribute("disabled")
                    };
                    if let Err(e) = result {
                        log::error!("toggle disabled failed: {e:?}");
                    }
                };
                set(&previous, pad.difficulty() == neuronest_games::sim::Difficulty::MIN);
                set(&next, pad.difficulty() == neuronest_games::sim::Difficulty::MAX);
            }
        };
        update_buttons(&page.borrow().pad);

        {
            let page = page.clone();
            let update = update_buttons.clone();
            dom::on_click(&previous, move || {
                let mut p = page.borrow_mut();
                if p.pad.previous_difficulty() {
                    p.redraw();
                    update(&p.pad);
                }
            })?;
        }
        {
            let page = page.clone();
            let update = update_buttons.clone();
            dom::on_click(&next, move || {
                let mut p = page.borrow_mut();
                if p.pad.next_difficulty() {
                    p.redraw();
                    update(&p.pad);
                }
            })?;
        }
        {
            let page = page.clone();
            dom::on_click(&clear, move || {
                let mut p = page.borrow_mut();
                p.pad.clear_strokes();
                p.redraw();
            })?;
        }

        // Pointer down
        {
            let page = page.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                let mut p = page.borrow_mut();
                if p.pad.begin_stroke(pointer_pos(&event)) {
                    p.redraw();
                }
            });
            canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Pointer move
        {
            let page = page.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut p = page.borrow_mut();
                if p.pad.extend_stroke(pointer_pos(&event)) {
                    p.redraw();
                }
            });
            canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Pointer up / leave / cancel
        for name in ["pointerup", "pointerleave", "pointercancel"] {
            let page = page.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                page.borrow_mut().pad.end_stroke();
            });
            canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        log::info!("Mounted number-tracing");
        Ok(())
    }

    fn render_games_list(document: &Document, root: &Element) -> Result<(), JsValue> {
        dom::clear(root);
        root.append_child(&dom::element(document, "h1", "game-title", "Learning Games")?)?;
        root.append_child(&dom::element(
            document,
            "p",
            "journey",
            &format!(
                "Level {} - {}% complete to next level",
                games::JOURNEY.level,
                games::JOURNEY.progress
            ),
        )?)?;

        let grid = dom::element(document, "div", "games", "")?;
        for game in games::all() {
            let card = dom::element(document, "article", "game-card", "")?;
            card.append_child(&dom::element(document, "h3", "", game.title)?)?;
            card.append_child(&dom::element(document, "p", "", game.description)?)?;
            let stars: String = (0..3)
                .map(|i| if i < game.stars { '\u{2605}' } else { '\u{2606}' })
                .collect();
            card.append_child(&dom::element(
                document,
                "p",
                "meta",
                &format!(
                    "{stars} {:?} \u{00b7} {:?} \u{00b7} {} \u{00b7} {}%",
                    game.category, game.difficulty, game.time_estimate, game.progress
                ),
            )?)?;
            let link = dom::element(document, "a", "action", game.cta_label())?;
            link.set_attribute("href", &game.route())?;
            card.append_child(&link)?;
            grid.append_child(&card)?;
        }
        root.append_child(&grid)?;
        Ok(())
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("NeuroNest Games starting...");

        let document = dom::document()?;
        let root: Element = document
            .get_element_by_id("app")
            .or_else(|| document.body().map(Element::from))
            .ok_or_else(|| JsValue::from_str("no #app or body"))?;

        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        let slug = games::slug_from_path(&path)
            .map(str::to_owned)
            .or_else(|| root.get_attribute("data-game"))
            .unwrap_or_default();
        let settings = Settings::load();

        match games::find(&slug).map(|g| g.kind) {
            Some(GameKind::Quiz(variant)) => mount_quiz(document, root, variant, settings),
            Some(GameKind::Tracing) => mount_tracing(document, root, settings),
            None => render_games_list(&document, &root),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_app::run() {
        log::error!("Failed to start: {e:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neuronest_games::sim::{Catalog, GameVariant, QuizGame, SessionPhase};

    env_logger::init();
    log::info!("NeuroNest Games (native) starting...");
    log::info!("The games run in the browser - build for wasm32 and serve with `trunk serve`");

    let mut ok = true;
    for variant in GameVariant::ALL {
        let catalog = Catalog::for_variant(variant);
        match catalog.validate() {
            Ok(()) => println!("✓ {:<20} {} levels", variant.slug(), catalog.len()),
            Err(e) => {
                ok = false;
                println!("✗ {:<20} {e}", variant.slug());
            }
        }
    }

    println!("\nScripted play-through (every answer correct):");
    for variant in GameVariant::ALL {
        let mut game = QuizGame::for_variant(variant);
        while !game.session().is_complete() {
            let target = game.current_level().target;
            game.select_option(target);
            if game.session().phase() != SessionPhase::Terminal {
                game.advance();
            }
        }
        let summary = game.session().summary();
        let score = summary
            .score
            .map(|s| format!(" ({s}/{})", summary.total))
            .unwrap_or_default();
        println!("  {:<20} {}{score}", variant.slug(), summary.headline());
    }

    demo_tracing_pad();

    if !ok {
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_tracing_pad() {
    use glam::Vec2;
    use neuronest_games::Settings;
    use neuronest_games::renderer::frame;
    use neuronest_games::sim::{Difficulty, TracingPad};

    println!("\nTracing pad guide paths:");
    let settings = Settings::default();
    for level in 1..=3u8 {
        let Ok(difficulty) = Difficulty::try_from(level) else {
            continue;
        };
        let mut pad = TracingPad::new(difficulty);
        pad.begin_stroke(Vec2::new(50.0, 80.0));
        pad.extend_stroke(Vec2::new(150.0, 80.0));
        pad.end_stroke();
        println!(
            "  level {level}: {:<18} {} piece(s), {} draw commands",
            difficulty.label(),
            pad.guide().segment_count(),
            frame(&pad, &settings).len()
        );
    }
}
