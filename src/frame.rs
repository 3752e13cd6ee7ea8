use crate::dom;
use crate::render::CanvasPainter;
use instant::Instant;
use rand::rngs::StdRng;
use spiderweb_core::{Animator, FrameScheduler, PointerState, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebAnimator = Animator<StdRng, i32>;

pub struct FrameContext {
    pub animator: WebAnimator,
    pub painter: CanvasPainter,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub epoch: Instant,
}

impl FrameContext {
    pub fn frame(&mut self, scheduler: &mut RafScheduler) {
        // Only the latest pointer sample and canvas size matter.
        self.animator.set_pointer(*self.pointer.borrow());
        let surface = self.surface();
        if self.animator.resize_if_needed(surface) {
            log::debug!("[frame] surface now {}x{}", surface.width, surface.height);
        }
        let time = self.epoch.elapsed().as_secs_f32();
        self.animator.on_frame(time, &mut self.painter, scheduler);
    }

    #[inline]
    fn surface(&self) -> Surface {
        Surface::from_pixels(self.canvas.width(), self.canvas.height())
    }
}

/// `requestAnimationFrame` wrapper. Every request re-arms the same tick closure.
#[derive(Clone)]
pub struct RafScheduler {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let window = web::window()?;
        let tick = self.tick.borrow();
        let callback = tick.as_ref()?;
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame error: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle);
        }
    }
}

/// Owns the frame context and the scheduler that drives it.
pub struct WebLoop {
    ctx: Rc<RefCell<FrameContext>>,
    scheduler: RafScheduler,
}

impl WebLoop {
    pub fn new(ctx: FrameContext) -> Self {
        let ctx = Rc::new(RefCell::new(ctx));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let scheduler = RafScheduler { tick: tick.clone() };

        let ctx_tick = ctx.clone();
        let mut scheduler_tick = scheduler.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            ctx_tick.borrow_mut().frame(&mut scheduler_tick);
        }) as Box<dyn FnMut()>));

        Self { ctx, scheduler }
    }

    pub fn start(&mut self) {
        self.ctx.borrow_mut().animator.start(&mut self.scheduler);
    }

    pub fn stop(&mut self) {
        self.ctx.borrow_mut().animator.stop(&mut self.scheduler);
    }

    /// Re-sync the canvas to its CSS box and re-seed immediately.
    pub fn resize(&mut self) {
        let mut ctx = self.ctx.borrow_mut();
        dom::sync_canvas_backing_size(&ctx.canvas);
        let surface = ctx.surface();
        ctx.animator.resize(surface);
    }
}
