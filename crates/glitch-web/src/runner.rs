//! Canvas mount and per-tick drawing for one animation instance.

use glitch_engine::{GlitchAnimation, Rgb};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::options::StartOptions;

/// Owns the engine state plus the canvas it paints on.
///
/// Shared between the render and logic closures behind `Rc<RefCell<..>>`;
/// the browser event loop guarantees the ticks never overlap.
pub(crate) struct AnimationRunner {
    animation: GlitchAnimation,
    canvas: HtmlCanvasElement,
    container: Element,
    ctx: CanvasRenderingContext2d,
}

impl AnimationRunner {
    /// Look up the canvas and its container, grab the 2d context, and size
    /// the grid from the container. Any missing piece aborts the mount.
    pub(crate) fn mount(options: &StartOptions) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("document not available"))?;
        let canvas = document
            .get_element_by_id(&options.canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas or container not found"))?
            .dyn_into::<HtmlCanvasElement>()?;
        let container = canvas
            .parent_element()
            .ok_or_else(|| JsValue::from_str("canvas or container not found"))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("failed to get 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let seed = options.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let mut runner = Self {
            animation: GlitchAnimation::new(options.config.clone(), seed),
            canvas,
            container,
            ctx,
        };
        runner.resize_to_container();
        Ok(runner)
    }

    pub(crate) fn animation_mut(&mut self) -> &mut GlitchAnimation {
        &mut self.animation
    }

    /// Match the canvas backing store to the container and rebuild grid and
    /// word positions. Safe to call repeatedly in a resize burst.
    pub(crate) fn resize_to_container(&mut self) {
        let width = self.container.client_width().max(0) as u32;
        let height = self.container.client_height().max(0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.animation.resize(width, height);
    }

    /// One render-loop tick: sparkle, rebuild the frame buffer, paint it.
    pub(crate) fn render_frame(&mut self) {
        self.animation.frame_tick();

        let (font_size, background) = {
            let config = self.animation.config();
            (config.font_size as f64, config.background)
        };

        self.ctx.set_fill_style_str(&css_rgb(background));
        self.ctx
            .fill_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.set_font(&format!("{}px monospace", font_size));
        self.ctx.set_text_align("center");

        let mut utf8 = [0u8; 4];
        for glyph in self.animation.frame().iter() {
            self.ctx
                .set_fill_style_str(&css_rgba(glyph.color, glyph.alpha));
            let x = glyph.col as f64 * font_size + font_size / 2.0;
            let y = (glyph.row as f64 + 1.0) * font_size;
            let _ = self.ctx.fill_text(glyph.ch.encode_utf8(&mut utf8), x, y);
        }
    }

    /// One logic-loop tick at the host's timestamp.
    pub(crate) fn logic_tick(&mut self, now_ms: f64) {
        self.animation.logic_tick(now_ms);
    }
}

fn css_rgb(color: Rgb) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}

fn css_rgba(color: Rgb, alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, alpha)
}
