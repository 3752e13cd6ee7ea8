//! Platform-independent core of the spider-web background animation.
//!
//! A handful of particles drift around a fixed hub, get pulled gently toward
//! the pointer, and are joined by rippling wave curves. Nothing in this crate
//! touches the DOM; the web front-end supplies a [`Painter`] and a
//! [`FrameScheduler`].

pub mod animator;
pub mod config;
pub mod constants;
pub mod edges;
pub mod nodes;
pub mod paint;
pub mod physics;
pub mod points;

pub use animator::{Animator, FrameScheduler, LoopState};
pub use config::{
    ArcParams, ConfigError, EdgeParams, LayoutParams, Palette, PhysicsParams, WaveParams,
    WebConfig,
};
pub use paint::{DrawCommand, Fill, Painter, Recorder, Rgb, Stroke};
pub use points::{Point, PointRole, PointStore, PointerState, Surface};
