pub mod types;

pub use types::{PointerEvent, PointerEventKind, PointerId, WheelEvent};

pub mod prelude {
    pub use super::types::{PointerEvent, PointerEventKind, PointerId, WheelEvent};
}
