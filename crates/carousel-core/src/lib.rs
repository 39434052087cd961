#![doc = r"Core runtime pieces for the carousel engine: frame callbacks, clocks and freezing."]

pub mod freeze;
pub mod frame_clock;
pub mod platform;
pub mod runtime;

pub use freeze::{FreezeFlag, Freezable};
pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, ManualClock, RuntimeScheduler, SystemClock};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};

/// Identifier handed out for every queued frame callback.
pub type FrameCallbackId = u64;

/// Nanoseconds per millisecond, used when converting frame timestamps.
pub const NANOS_PER_MILLI: u64 = 1_000_000;
