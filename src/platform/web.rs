//! Browser host for the game loop
//!
//! Acquires the canvas, wires keyboard/click listeners and drives
//! `GameLoop::frame` from `requestAnimationFrame`. The pending frame request
//! is cancelled on `stop`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

use super::JUMP_KEY;
use crate::game_loop::GameLoop;
use crate::renderer::CanvasSurface;
use crate::settings::Settings;

type SharedGame = Rc<RefCell<GameLoop<CanvasSurface>>>;

/// Handle to a running game in the page
#[derive(Clone)]
pub struct WebGame {
    game: SharedGame,
    /// Id of the pending animation frame request
    frame_request: Rc<Cell<Option<i32>>>,
}

impl WebGame {
    /// Surface-ready hook: acquire the canvas with id `canvas_id`, wire input
    /// and start the loop.
    pub fn start(canvas_id: &str, settings: &Settings) -> Result<Self, JsValue> {
        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{}", canvas_id)))?
            .dyn_into()?;

        let surface = CanvasSurface::new(&canvas)?;
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!("Game initialized with seed: {}", seed);

        let handle = Self {
            game: Rc::new(RefCell::new(GameLoop::new(surface, settings, seed))),
            frame_request: Rc::new(Cell::new(None)),
        };

        handle.setup_input_handlers(&window, &canvas)?;
        handle.setup_teardown(&window)?;

        handle.game.borrow_mut().start();
        handle.request_animation_frame(&window)?;
        Ok(handle)
    }

    /// View-torn-down hook: stop the loop and cancel the pending frame.
    /// Safe to call more than once.
    pub fn stop(&self) {
        self.game.borrow_mut().stop();
        if let Some(id) = self.frame_request.take() {
            if let Ok(window) = window() {
                if let Err(e) = window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame failed: {:?}", e);
                }
            }
        }
    }

    fn setup_input_handlers(
        &self,
        window: &Window,
        canvas: &HtmlCanvasElement,
    ) -> Result<(), JsValue> {
        // Key down: held keys auto-repeat, only the first event counts
        {
            let game = self.game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == JUMP_KEY {
                    event.prevent_default();
                    if !event.repeat() {
                        game.borrow_mut().press_jump();
                    }
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = self.game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == JUMP_KEY {
                    game.borrow_mut().release_jump();
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Click to restart
        {
            let game = self.game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().request_restart();
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_teardown(&self, window: &Window) -> Result<(), JsValue> {
        let handle = self.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            handle.stop();
        });
        window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(&self, window: &Window) -> Result<(), JsValue> {
        let handle = self.clone();
        let closure = Closure::once(move |time: f64| {
            handle.on_animation_frame(time);
        });
        let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        closure.forget();
        self.frame_request.set(Some(id));
        Ok(())
    }

    fn on_animation_frame(&self, time: f64) {
        self.frame_request.set(None);

        let keep_going = self.game.borrow_mut().frame(time);
        if !keep_going {
            return;
        }

        let scheduled = window().and_then(|w| self.request_animation_frame(&w));
        if let Err(e) = scheduled {
            log::error!("Failed to schedule next frame: {:?}", e);
        }
    }
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}
