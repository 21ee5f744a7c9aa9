//! Server-side model of the dashboard display pipeline.
//!
//! Mirrors what connected browser clients show: an odometer-style counter
//! that animates toward the newest received value, and a one-shot confetti
//! celebration. The worker feeds values into the pipeline through a `watch`
//! channel; the current displayed value is readable via [`SharedValue`]
//! (exposed at `GET /api/display`).
//!
//! # Overlapping updates
//!
//! Values arriving faster than the animation length are not queued and do not
//! cancel a running animation mid-flight: the pipeline always animates toward
//! the newest value observed when it becomes idle (drop-intermediate,
//! last-write-wins).

pub mod confetti;
pub mod odometer;
pub mod sink;

pub use confetti::{Confetti, ConfettiConfig, EffectSink};
pub use odometer::{AnimationState, Odometer};
pub use sink::{DisplaySink, SharedValue};
