//! MatrixBackground — декоративный "цифровой дождь" на canvas во весь экран.
//!
//! Фон не читает и не меняет состояние приложения. Таймер и обработчик
//! `resize` живут, пока смонтирован компонент.

pub mod rain;

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use rain::{RainFrame, RainState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// Период тика анимации, мс
const TICK_MS: u32 = 33;

/// Полупрозрачная заливка, оставляющая затухающий след
const FADE_FILL: &str = "rgba(0, 0, 0, 0.1)";

const GLYPH_COLOR: &str = "#39ff14";

const GLYPH_FONT: &str = "bold 16px monospace";

#[component]
pub fn MatrixBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let runtime = StoredValue::new_local(None::<RainRuntime>);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if runtime.with_value(|r| r.is_some()) {
            return;
        }
        match RainRuntime::start(canvas) {
            Some(started) => runtime.set_value(Some(started)),
            None => log::warn!("MatrixBackground: canvas 2d context is not available"),
        }
    });

    // Drop останавливает таймер и снимает обработчик resize
    on_cleanup(move || {
        runtime.try_update_value(|r| drop(r.take()));
    });

    view! {
        <canvas node_ref=canvas_ref class="matrix-background" aria-hidden="true" />
    }
}

/// Запущенная анимация: таймер тиков и подписка на `resize`
struct RainRuntime {
    window: Window,
    on_resize: Closure<dyn FnMut()>,
    _ticker: Interval,
}

impl RainRuntime {
    fn start(canvas: HtmlCanvasElement) -> Option<Self> {
        let window = web_sys::window()?;
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let (width, height) = viewport_size(&window);
        fit_canvas(&canvas, width, height);
        let state = Rc::new(RefCell::new(RainState::new(width, height, browser_seed())));

        let on_resize = {
            let window = window.clone();
            let canvas = canvas.clone();
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move || {
                let (width, height) = viewport_size(&window);
                fit_canvas(&canvas, width, height);
                let mut state = state.borrow_mut();
                state.resize(width, height);
                log::debug!(
                    "MatrixBackground: resized to {}x{}, {} columns",
                    width,
                    height,
                    state.columns()
                );
            }) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .ok()?;

        let ticker = Interval::new(TICK_MS, move || {
            let frame = state.borrow_mut().tick();
            paint_frame(&ctx, &frame);
        });

        Some(Self {
            window,
            on_resize,
            _ticker: ticker,
        })
    }
}

impl Drop for RainRuntime {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
    }
}

fn paint_frame(ctx: &CanvasRenderingContext2d, frame: &RainFrame) {
    ctx.set_fill_style_str(FADE_FILL);
    ctx.fill_rect(0.0, 0.0, frame.width, frame.height);

    ctx.set_fill_style_str(GLYPH_COLOR);
    ctx.set_font(GLYPH_FONT);
    let mut buf = [0u8; 4];
    for draw in &frame.glyphs {
        let _ = ctx.fill_text(draw.glyph.encode_utf8(&mut buf), draw.x, draw.y);
    }
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

fn browser_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
