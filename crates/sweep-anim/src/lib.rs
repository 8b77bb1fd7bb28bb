//! Sweep animation core.
//!
//! A rectangle sweeps left-to-right across the viewport at a constant velocity,
//! independent of how often frames are produced, and wraps back to the left
//! edge once it leaves the right edge. An FPS label is refreshed once per
//! second.
//!
//! This crate has no platform dependencies. Drawing goes through the
//! [`Canvas`] trait and time through the [`TimeSource`] trait, which the
//! engine (or a test) implements.

pub mod config;
pub mod frame_counter;
pub mod frame_loop;
pub mod mover;
pub mod time;

pub use config::{AnimationConfig, Rgb8};
pub use frame_counter::{FpsDisplay, FrameCounter};
pub use frame_loop::{AnimationLoop, BufferState, Canvas, FrameOutcome};
pub use mover::{Bounds, PixelRect, Sprite};
pub use time::{Clock, ManualTime, SystemTime, TimeSource};
