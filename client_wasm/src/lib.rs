//! Browser host for the Pong game
//!
//! Draws on a `<canvas>` 2D context, runs one update per animation frame and
//! feeds mouse movement and clicks into the game.

#![cfg(target_arch = "wasm32")]

mod canvas;
mod logger;

use canvas::CanvasSurface;
use game_core::{Config, Game, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCanvasElement, MouseEvent};

/// Game and the surface it draws on, shared by the frame and input callbacks
struct Pong {
    game: Game,
    surface: CanvasSurface,
}

type FrameCallback = Closure<dyn FnMut(f64)>;

fn request_animation_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Start a game on `canvas`. The field takes the canvas' pixel size.
#[wasm_bindgen]
pub fn start_game(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let surface = CanvasSurface::new(canvas.clone())?;
    let (width, height) = surface.size();
    let seed = js_sys::Date::now() as u64;
    let game = Game::new(Config::for_field(width, height), seed)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let pong = Rc::new(RefCell::new(Pong { game, surface }));

    {
        let pong = pong.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let element_height = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .map(|element| element.get_bounding_client_rect().height() as f32)
                .unwrap_or(0.0);
            let result = pong
                .borrow_mut()
                .game
                .on_pointer_move(event.offset_y() as f32, element_height);
            if let Err(e) = result {
                log::error!("Pointer move failed: {e}");
            }
        });
        canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }

    {
        let pong = pong.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            pong.borrow_mut().game.on_click();
        });
        canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    // The frame callback re-schedules itself through this slot
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    *slot.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        {
            let mut pong = pong.borrow_mut();
            let Pong { game, surface } = &mut *pong;
            game.on_animation_frame(now_ms, surface);
        }
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(e) = request_animation_frame(callback) {
                log::error!("Could not schedule frame: {:?}", e);
            }
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        request_animation_frame(callback)?;
    }

    log::info!("Pong started on a {}x{} canvas", width, height);
    Ok(())
}
