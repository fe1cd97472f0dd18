use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use super::dom;
use crate::config::selectors::HERO_CANVAS;
use crate::config::ParticleSettings;
use crate::frame::{FrameHost, FrameLoop};
use crate::particles::ParticleField;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Browser side of the particle loop: the frame closure and the window
/// that schedules it.
struct Animator {
    window: Window,
    frame: FrameCallback,
    frames: FrameLoop,
}

impl FrameHost for Animator {
    type Error = JsValue;

    fn request_frame(&self) -> Result<i32, JsValue> {
        let frame = self.frame.borrow();
        let callback = frame.as_ref().ok_or("frame callback not installed")?;
        self.window.request_animation_frame(callback.as_ref().unchecked_ref())
    }

    fn cancel_frame(&self, id: i32) {
        let _ = self.window.cancel_animation_frame(id);
    }
}

/// Sets the backing store to the rendered size and returns it.
fn fit(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let w = canvas.offset_width().max(0) as u32;
    let h = canvas.offset_height().max(0) as u32;
    canvas.set_width(w);
    canvas.set_height(h);
    (f64::from(w), f64::from(h))
}

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), JsValue> {
    let (w, h) = field.size();
    let s = field.settings();
    ctx.clear_rect(0.0, 0.0, w, h);

    ctx.set_fill_style_str(s.fill);
    for p in field.particles() {
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.r, 0.0, TAU)?;
        ctx.fill();
    }

    let particles = field.particles();
    let (r, g, b) = s.stroke_rgb;
    ctx.set_line_width(s.line_width);
    for link in field.links() {
        let (p, q) = (&particles[link.a], &particles[link.b]);
        ctx.begin_path();
        ctx.move_to(p.x, p.y);
        ctx.line_to(q.x, q.y);
        ctx.set_stroke_style_str(&format!("rgba({r},{g},{b},{})", link.opacity));
        ctx.stroke();
    }
    Ok(())
}

/// Starts the hero particle animation. Hides the canvas instead when the
/// user prefers reduced motion.
pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(canvas) = dom::by_id::<HtmlCanvasElement>(document, HERO_CANVAS) else {
        return Ok(());
    };
    if dom::prefers_reduced_motion(window) {
        return canvas.style().set_property("display", "none");
    }
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return Ok(());
    };

    let (w, h) = fit(&canvas);
    let field = Rc::new(RefCell::new(ParticleField::new(
        ParticleSettings::default(),
        w,
        h,
        js_sys::Math::random,
    )));

    let animator = Rc::new(Animator {
        window: window.clone(),
        frame: Rc::new(RefCell::new(None)),
        frames: FrameLoop::default(),
    });

    // The frame closure reschedules itself through `animator.frame`, the same
    // cell it is stored in.
    {
        let animator = animator.clone();
        let field = field.clone();
        let frame = animator.frame.clone();
        *frame.borrow_mut() = Some(Closure::new(move || {
            if !animator.frames.begin_frame() {
                return;
            }
            let mut field = field.borrow_mut();
            field.step();
            let result = draw(&ctx, &field).and_then(|()| animator.frames.reschedule(&*animator));
            if let Err(e) = result {
                animator.frames.pause(&*animator);
                web_sys::console::warn_2(&"particle loop stopped".into(), &e);
            }
        }));
    }

    {
        let canvas = canvas.clone();
        let field = field.clone();
        dom::listen_passive(window, "resize", move |_| {
            let (w, h) = fit(&canvas);
            field.borrow_mut().resize(w, h, js_sys::Math::random);
        })?;
    }

    {
        let animator = animator.clone();
        let doc = document.clone();
        dom::listen(document, "visibilitychange", move |_| {
            if doc.hidden() {
                animator.frames.pause(&*animator);
            } else if let Err(e) = animator.frames.resume(&*animator) {
                web_sys::console::warn_1(&e);
            }
        })?;
    }

    if document.hidden() {
        return Ok(());
    }
    animator.frames.resume(&*animator)
}
