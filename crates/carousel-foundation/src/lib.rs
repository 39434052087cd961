//! Input handling for the carousel
//!
//! Pointer and wheel event types, gesture constants, and [`MomentumDrag`],
//! which turns discrete drag events into a continuously decaying offset.

pub mod gesture_constants;
pub mod input;
pub mod momentum_drag;

pub use input::{PointerEvent, PointerEventKind, PointerId, WheelEvent};
pub use momentum_drag::{Axis, AxisState, DragAxes, DragConfig, MomentumDrag, WheelPolicy};

pub mod prelude {
    pub use crate::input::prelude::*;
    pub use crate::momentum_drag::{Axis, AxisState, DragAxes, DragConfig, MomentumDrag, WheelPolicy};
}
