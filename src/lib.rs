#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, LOG_LEVEL};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spiderweb_core::{Animator, PointerState, Surface, WebConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

thread_local! {
    // Page-lifetime loop; `None` when the canvas was missing at boot.
    static WEB_LOOP: RefCell<Option<frame::WebLoop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("spiderweb-web starting");

    let Some(document) = dom::window_document() else {
        log::error!("no document; spider web disabled");
        return Ok(());
    };
    let doc_for_boot = document.clone();
    dom::on_ready(&document, move || boot(&doc_for_boot));
    Ok(())
}

// The animation is decoration: any failure leaves the page untouched.
fn boot(document: &web::Document) {
    match init(document) {
        Ok(mut web_loop) => {
            web_loop.start();
            WEB_LOOP.with(|slot| *slot.borrow_mut() = Some(web_loop));
        }
        Err(e) => log::error!("spider web disabled: {:?}", e),
    }
}

fn init(document: &web::Document) -> anyhow::Result<frame::WebLoop> {
    let canvas = dom::canvas_by_id(document, CANVAS_ID)?;
    let ctx2d = dom::context_2d(&canvas)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas);

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        pointer: pointer.clone(),
    });

    let surface = Surface::from_pixels(canvas.width(), canvas.height());
    let animator = Animator::new(WebConfig::default(), surface, StdRng::from_entropy())?;
    log::info!(
        "[web] {} points on {}x{}",
        animator.points().len(),
        surface.width,
        surface.height
    );

    Ok(frame::WebLoop::new(frame::FrameContext {
        animator,
        painter: render::CanvasPainter::new(ctx2d),
        canvas,
        pointer,
        epoch: Instant::now(),
    }))
}

fn with_loop(f: impl FnOnce(&mut frame::WebLoop)) {
    WEB_LOOP.with(|slot| match slot.borrow_mut().as_mut() {
        Some(web_loop) => f(web_loop),
        None => log::debug!("spider web not running; call ignored"),
    });
}

/// Resume the animation after [`spider_web_stop`].
#[wasm_bindgen]
pub fn spider_web_start() {
    with_loop(|l| l.start());
}

/// Cancel the pending frame; nothing is drawn until restarted.
#[wasm_bindgen]
pub fn spider_web_stop() {
    with_loop(|l| l.stop());
}

/// Re-measure the canvas and re-seed all points.
#[wasm_bindgen]
pub fn spider_web_resize() {
    with_loop(|l| l.resize());
}
