//! Inertial drag tracking.
//!
//! [`MomentumDrag`] accumulates a 2D offset from pointer motion. While the
//! pointer is down the offset follows the pointer one event at a time; after
//! release each axis keeps moving with its last velocity, which decays once
//! per frame until it falls under the stop threshold.
//!
//! Decay ticks are one-shot frame callbacks that reschedule themselves, so at
//! most one tick per axis is ever queued. Cancelling an axis is dropping its
//! [`FrameCallbackRegistration`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use carousel_animation::{FloatDecayAnimationSpec, GeometricDecaySpec};
use carousel_core::{FrameCallbackRegistration, RuntimeHandle};
use carousel_ui_graphics::Point;

use crate::gesture_constants::{
    DECAY_FRICTION, DECAY_STOP_THRESHOLD, DECAY_VELOCITY_MULTIPLIER,
};
use crate::input::{PointerEvent, PointerEventKind, WheelEvent};

/// One of the two drag axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    pub fn component(self, point: Point) -> f32 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }

    fn component_mut(self, point: &mut Point) -> &mut f32 {
        match self {
            Axis::X => &mut point.x,
            Axis::Y => &mut point.y,
        }
    }
}

/// Per-axis phase of the drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AxisState {
    #[default]
    Idle,
    Dragging,
    Decaying,
}

/// Axes the drag tracks. Untracked axes never move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragAxes {
    #[default]
    Both,
    Horizontal,
    Vertical,
}

impl DragAxes {
    pub fn contains(self, axis: Axis) -> bool {
        matches!(
            (self, axis),
            (DragAxes::Both, _) | (DragAxes::Horizontal, Axis::X) | (DragAxes::Vertical, Axis::Y)
        )
    }
}

/// What a wheel event does to the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WheelPolicy {
    /// Nudges the offset by `-delta_y` and lets it coast from there.
    #[default]
    Flick,
    /// Only stops an in-flight vertical decay.
    CancelOnly,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragConfig {
    pub decay: GeometricDecaySpec,
    pub wheel_policy: WheelPolicy,
    pub axes: DragAxes,
}

impl DragConfig {
    pub fn with_decay(mut self, decay: GeometricDecaySpec) -> Self {
        self.decay = decay;
        self
    }

    pub fn with_wheel_policy(mut self, wheel_policy: WheelPolicy) -> Self {
        self.wheel_policy = wheel_policy;
        self
    }

    pub fn with_axes(mut self, axes: DragAxes) -> Self {
        self.axes = axes;
        self
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            decay: GeometricDecaySpec::new(
                DECAY_FRICTION,
                DECAY_VELOCITY_MULTIPLIER,
                DECAY_STOP_THRESHOLD,
            ),
            wheel_policy: WheelPolicy::default(),
            axes: DragAxes::default(),
        }
    }
}

struct MomentumDragInner {
    runtime: RuntimeHandle,
    config: DragConfig,
    pointer_down: bool,
    drag_start: Point,
    last_position: Point,
    offset: Point,
    velocity: Point,
    decay_tasks: HashMap<Axis, FrameCallbackRegistration>,
}

/// Converts pointer and wheel events into a decaying 2D offset.
///
/// Clones share state: the scene keeps one to read the offset while the
/// input layer feeds events into another.
#[derive(Clone)]
pub struct MomentumDrag {
    inner: Rc<RefCell<MomentumDragInner>>,
}

impl MomentumDrag {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self::with_config(runtime, DragConfig::default())
    }

    pub fn with_config(runtime: RuntimeHandle, config: DragConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MomentumDragInner {
                runtime,
                config,
                pointer_down: false,
                drag_start: Point::ZERO,
                last_position: Point::ZERO,
                offset: Point::ZERO,
                velocity: Point::ZERO,
                decay_tasks: HashMap::new(),
            })),
        }
    }

    /// Routes a pointer event to the matching handler.
    pub fn on_pointer_event(&self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => self.on_pointer_down(event.position),
            PointerEventKind::Move => self.on_pointer_move(event.position),
            PointerEventKind::Up | PointerEventKind::Cancel | PointerEventKind::Leave => {
                self.on_pointer_release()
            }
        }
    }

    /// Starts a drag and stops any coasting on both axes.
    pub fn on_pointer_down(&self, position: Point) {
        let stale = {
            let mut inner = self.inner.borrow_mut();
            inner.pointer_down = true;
            inner.drag_start = position;
            inner.last_position = position;
            std::mem::take(&mut inner.decay_tasks)
        };
        if !stale.is_empty() {
            log::debug!("drag started at {position:?}, cancelled {} decay task(s)", stale.len());
        }
        drop(stale);
    }

    /// Follows the pointer while it is down; ignored otherwise.
    pub fn on_pointer_move(&self, position: Point) {
        let mut inner = self.inner.borrow_mut();
        if !inner.pointer_down {
            return;
        }
        let delta = position - inner.last_position;
        inner.last_position = position;
        let axes = inner.config.axes;
        for axis in Axis::ALL {
            if !axes.contains(axis) {
                continue;
            }
            let step = axis.component(delta);
            *axis.component_mut(&mut inner.offset) += step;
            *axis.component_mut(&mut inner.velocity) = step;
        }
    }

    /// Ends the drag and lets every tracked axis coast.
    ///
    /// A release without a preceding press is ignored.
    pub fn on_pointer_release(&self) {
        let axes = {
            let mut inner = self.inner.borrow_mut();
            if !inner.pointer_down {
                return;
            }
            inner.pointer_down = false;
            log::debug!("drag released with velocity {:?}", inner.velocity);
            inner.config.axes
        };
        for axis in Axis::ALL {
            if axes.contains(axis) {
                Self::schedule_decay(&self.inner, axis);
            }
        }
    }

    /// Applies the configured wheel policy. A flick is ignored while the
    /// pointer is held down, so the offset never coasts under a pressed
    /// pointer.
    pub fn on_wheel(&self, event: &WheelEvent) {
        let policy = self.inner.borrow().config.wheel_policy;
        match policy {
            WheelPolicy::CancelOnly => {
                let stale = self.inner.borrow_mut().decay_tasks.remove(&Axis::Y);
                drop(stale);
            }
            WheelPolicy::Flick => {
                {
                    let mut inner = self.inner.borrow_mut();
                    if inner.pointer_down || !inner.config.axes.contains(Axis::Y) {
                        return;
                    }
                    inner.offset.y -= event.delta_y;
                    inner.velocity.y = -event.delta_y;
                }
                Self::schedule_decay(&self.inner, Axis::Y);
            }
        }
    }

    /// Stops coasting on every axis. The offset stays where it is.
    pub fn cancel_decay(&self) {
        let stale = std::mem::take(&mut self.inner.borrow_mut().decay_tasks);
        if !stale.is_empty() {
            log::debug!("cancelled {} decay task(s)", stale.len());
        }
        drop(stale);
    }

    /// Ends any drag in progress without letting it coast.
    pub fn cancel(&self) {
        self.inner.borrow_mut().pointer_down = false;
        self.cancel_decay();
    }

    /// Cumulative displacement since creation.
    pub fn offset(&self) -> Point {
        self.inner.borrow().offset
    }

    pub fn offset_along(&self, axis: Axis) -> f32 {
        axis.component(self.offset())
    }

    pub fn velocity(&self) -> Point {
        self.inner.borrow().velocity
    }

    pub fn axis_state(&self, axis: Axis) -> AxisState {
        let inner = self.inner.borrow();
        if inner.pointer_down && inner.config.axes.contains(axis) {
            AxisState::Dragging
        } else if inner.decay_tasks.contains_key(&axis) {
            AxisState::Decaying
        } else {
            AxisState::Idle
        }
    }

    pub fn is_pointer_down(&self) -> bool {
        self.inner.borrow().pointer_down
    }

    pub fn drag_start(&self) -> Point {
        self.inner.borrow().drag_start
    }

    pub fn config(&self) -> DragConfig {
        self.inner.borrow().config
    }

    /// Replaces any queued tick for `axis` with a fresh one.
    fn schedule_decay(this: &Rc<RefCell<MomentumDragInner>>, axis: Axis) {
        let (runtime, stale) = {
            let mut inner = this.borrow_mut();
            let stale = inner.decay_tasks.remove(&axis);
            (inner.runtime.clone(), stale)
        };
        drop(stale);
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |_| {
            if let Some(strong) = weak.upgrade() {
                Self::on_decay_frame(&strong, axis);
            }
        });
        if registration.is_active() {
            this.borrow_mut().decay_tasks.insert(axis, registration);
        }
    }

    fn on_decay_frame(this: &Rc<RefCell<MomentumDragInner>>, axis: Axis) {
        let schedule_next = {
            let mut inner = this.borrow_mut();
            inner.decay_tasks.remove(&axis);

            let step = inner.config.decay.step(axis.component(inner.velocity));
            *axis.component_mut(&mut inner.offset) += step.advance;
            *axis.component_mut(&mut inner.velocity) = step.velocity;
            log::trace!(
                "{axis:?} decay tick: offset {}, velocity {}",
                axis.component(inner.offset),
                step.velocity
            );
            if !step.should_continue {
                log::debug!(
                    "{axis:?} decay finished at offset {}",
                    axis.component(inner.offset)
                );
            }
            step.should_continue
        };
        if schedule_next {
            Self::schedule_decay(this, axis);
        }
    }
}

impl std::fmt::Debug for MomentumDrag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MomentumDrag")
            .field("pointer_down", &inner.pointer_down)
            .field("offset", &inner.offset)
            .field("velocity", &inner.velocity)
            .field("decaying", &inner.decay_tasks.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/momentum_drag_tests.rs"]
mod tests;
