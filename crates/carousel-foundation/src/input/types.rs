use carousel_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Mouse button or touch pressed.
    Down,
    Move,
    /// Mouse button or touch released.
    Up,
    /// Touch cancelled by the host.
    Cancel,
    /// Pointer left the surface.
    Leave,
}

/// Single-pointer event in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    pub fn leave(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Leave, Point::new(x, y))
    }
}

/// Mouse wheel input. Positive `delta_y` scrolls down.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct WheelEvent {
    pub delta_y: f32,
    pub position: Point,
}

impl WheelEvent {
    pub fn new(delta_y: f32) -> Self {
        Self {
            delta_y,
            position: Point::ZERO,
        }
    }

    pub fn at(mut self, position: Point) -> Self {
        self.position = position;
        self
    }
}
