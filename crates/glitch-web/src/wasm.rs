//! The wasm-bindgen surface: async start plus an explicit teardown handle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::options::StartOptions;
use crate::runner::AnimationRunner;
use crate::visitors::VisitorCountProvider;

/// Lifecycle handle returned from [`start_glitch_animation`].
///
/// [`stop`](AnimationHandle::stop) cancels both loops and removes the resize
/// listener; an inert handle (after a failed mount) is a no-op.
#[wasm_bindgen]
pub struct AnimationHandle {
    running: Rc<Cell<bool>>,
    teardown: Option<Teardown>,
}

struct Teardown {
    interval_id: i32,
    raf_id: Rc<Cell<i32>>,
    raf_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    /// Kept alive for the browser; dropped (not read) on stop.
    _interval_cb: Closure<dyn FnMut()>,
    resize_cb: Closure<dyn FnMut()>,
}

#[wasm_bindgen]
impl AnimationHandle {
    /// Stop scheduling render and logic ticks and remove the resize listener.
    /// Safe to call more than once.
    pub fn stop(&mut self) {
        self.running.set(false);
        let Some(teardown) = self.teardown.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(teardown.raf_id.get());
            window.clear_interval_with_handle(teardown.interval_id);
            let _ = window.remove_event_listener_with_callback(
                "resize",
                teardown.resize_cb.as_ref().unchecked_ref(),
            );
        }
        // No callback can fire past this point, so the closures drop safely.
        teardown.raf_cb.borrow_mut().take();
        log::info!("glitch animation stopped");
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    fn inert() -> Self {
        Self {
            running: Rc::new(Cell::new(false)),
            teardown: None,
        }
    }
}

/// Mount the banner described by `options_json` and start its loops.
///
/// The dynamic visitor word resolves (or falls back) before the first frame.
/// Every mount failure logs and yields an inert handle — the hosting page
/// never sees an exception.
#[wasm_bindgen(js_name = startGlitchAnimation)]
pub async fn start_glitch_animation(options_json: String) -> AnimationHandle {
    match StartOptions::from_json(&options_json) {
        Ok(options) => start_with_options(options).await,
        Err(err) => {
            init_logging();
            log::error!("invalid start options: {err}");
            AnimationHandle::inert()
        }
    }
}

/// Rust-level entry point for consumer crates that build [`StartOptions`]
/// directly instead of going through JSON.
pub async fn start_with_options(options: StartOptions) -> AnimationHandle {
    init_logging();
    match start(options).await {
        Ok(handle) => handle,
        Err(err) => {
            log::error!("glitch animation not started: {err:?}");
            AnimationHandle::inert()
        }
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

async fn start(options: StartOptions) -> Result<AnimationHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let performance = window
        .performance()
        .ok_or_else(|| JsValue::from_str("performance clock not available"))?;

    let mut runner = AnimationRunner::mount(&options)?;

    // The single async step: the dynamic word must be resolved (or have
    // fallen back) before the first frame renders.
    let mut words = options.words.clone();
    if let Some(endpoint) = &options.count_endpoint {
        let mut provider =
            VisitorCountProvider::new(endpoint.clone(), options.count_throttle_ms);
        words.push(provider.fetch_count().await);
    }
    runner.animation_mut().set_words(words, performance.now());

    let runner = Rc::new(RefCell::new(runner));
    let running = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(0));

    // Render loop: a self-rescheduling animation-frame closure. The closure
    // lives in an Option so it can reference itself for the next request.
    let raf_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let raf_cb_inner = raf_cb.clone();
        let runner = runner.clone();
        let running = running.clone();
        let raf_id = raf_id.clone();
        *raf_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running.get() {
                return;
            }
            runner.borrow_mut().render_frame();
            if let Some(window) = web_sys::window() {
                if let Some(cb) = raf_cb_inner.borrow().as_ref() {
                    if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        raf_id.set(id);
                    }
                }
            }
        }) as Box<dyn FnMut()>));
    }
    if let Some(cb) = raf_cb.borrow().as_ref() {
        raf_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref())?);
    }

    // Logic loop: fixed-interval phase advancement.
    let interval_cb = {
        let runner = runner.clone();
        let running = running.clone();
        let performance = performance.clone();
        Closure::wrap(Box::new(move || {
            if !running.get() {
                return;
            }
            runner.borrow_mut().logic_tick(performance.now());
        }) as Box<dyn FnMut()>)
    };
    let interval_id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        interval_cb.as_ref().unchecked_ref(),
        options.config.logic_interval_ms as i32,
    )?;

    // Resize: reshape grid and word positions in place, any time.
    let resize_cb = {
        let runner = runner.clone();
        Closure::wrap(Box::new(move || {
            runner.borrow_mut().resize_to_container();
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;

    log::info!("glitch animation started on #{}", options.canvas_id);

    Ok(AnimationHandle {
        running,
        teardown: Some(Teardown {
            interval_id,
            raf_id,
            raf_cb,
            _interval_cb: interval_cb,
            resize_cb,
        }),
    })
}
