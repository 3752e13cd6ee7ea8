//! Frame loop controller.
//!
//! The [`Animator`] owns the point store and runs one physics step plus a full
//! redraw per display frame. Scheduling is delegated to a [`FrameScheduler`]
//! so the loop can be driven by `requestAnimationFrame` in the browser and by
//! a hand-cranked scheduler in tests.

use crate::config::{ConfigError, WebConfig};
use crate::edges;
use crate::nodes;
use crate::paint::Painter;
use crate::physics;
use crate::points::{Point, PointStore, PointerState, Surface};
use rand::Rng;

/// Source of "call me on the next display refresh" callbacks.
pub trait FrameScheduler {
    type Handle: Copy;

    /// Queue the next frame. `None` if the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

pub struct Animator<R: Rng, H: Copy> {
    config: WebConfig,
    store: PointStore,
    surface: Surface,
    pointer: PointerState,
    rng: R,
    state: LoopState,
    pending: Option<H>,
    frames: u64,
}

impl<R: Rng, H: Copy> Animator<R, H> {
    /// Validate `config` and seed the first point set. The loop starts stopped.
    pub fn new(config: WebConfig, surface: Surface, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut store = PointStore::new();
        store.rebuild(surface, &config.layout, &mut rng);
        Ok(Self {
            config,
            store,
            surface,
            pointer: PointerState::default(),
            rng,
            state: LoopState::Stopped,
            pending: None,
            frames: 0,
        })
    }

    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    pub fn points(&self) -> &[Point] {
        self.store.points()
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Number of ticks executed since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn start<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) {
        if self.state == LoopState::Running {
            return;
        }
        self.state = LoopState::Running;
        log::info!("[web] animation started");
        self.schedule(scheduler);
    }

    /// Cancel the pending frame. A tick already in progress is unaffected;
    /// no tick runs after this returns until [`Animator::start`].
    pub fn stop<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
        if self.state == LoopState::Running {
            log::info!("[web] animation stopped after {} frames", self.frames);
        }
        self.state = LoopState::Stopped;
    }

    /// Scheduled frame callback. Runs one tick and queues the next frame.
    /// Returns `false` for a stale callback that arrived while stopped.
    pub fn on_frame<P, S>(&mut self, time: f32, painter: &mut P, scheduler: &mut S) -> bool
    where
        P: Painter + ?Sized,
        S: FrameScheduler<Handle = H>,
    {
        if self.state != LoopState::Running {
            return false;
        }
        self.pending = None;
        self.tick(time, painter);
        self.schedule(scheduler);
        true
    }

    /// One physics step followed by a full redraw, without touching scheduling.
    pub fn tick<P: Painter + ?Sized>(&mut self, time: f32, painter: &mut P) {
        physics::step(
            self.store.points_mut(),
            self.surface,
            &self.pointer,
            &self.config.physics,
        );
        painter.clear(self.surface.width, self.surface.height);
        edges::render(self.store.points(), self.surface, time, &self.config, painter);
        nodes::render(self.store.points(), &self.config.palette, painter);
        self.frames += 1;
    }

    /// Adopt new dimensions and re-seed every point. Positions are not carried over.
    pub fn resize(&mut self, surface: Surface) {
        self.surface = surface;
        self.store.rebuild(surface, &self.config.layout, &mut self.rng);
    }

    /// [`Animator::resize`] only when the dimensions actually changed.
    pub fn resize_if_needed(&mut self, surface: Surface) -> bool {
        if surface == self.surface {
            return false;
        }
        self.resize(surface);
        true
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.moved(x, y);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.left();
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    fn schedule<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) {
        match scheduler.request_frame() {
            Some(handle) => self.pending = Some(handle),
            None => {
                log::warn!("[web] frame request refused; stopping");
                self.pending = None;
                self.state = LoopState::Stopped;
            }
        }
    }
}
