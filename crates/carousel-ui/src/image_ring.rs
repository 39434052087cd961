//! A ring of image panels sharing one rotation.
//!
//! Panels are placed evenly around the ring's Y axis inside a group object.
//! The group turns with the drag offset: each update applies the change in
//! `offset / 3` since the previous update, so the ring follows the offset
//! without ever jumping.

use std::rc::Rc;

use carousel_core::{Clock, FreezeFlag, Freezable};
use carousel_foundation::gesture_constants::WHEEL_ROTATION_STEP;
use carousel_foundation::WheelEvent;
use carousel_ui_graphics::Vec3;

use crate::config::RingConfig;
use crate::image_element::ImageElement;
use crate::scene::{MeshRef, RenderBackend};

/// Drag offset units per radian of ring rotation.
pub const OFFSET_DIVISOR: f32 = 3.0;

pub struct ImageRing {
    group: MeshRef,
    elements: Vec<ImageElement>,
    angle_offset: f32,
    y_position: f32,
    depth_offset: f32,
    last_applied_offset: f32,
    frozen: FreezeFlag,
    counter_rotate: bool,
}

impl ImageRing {
    pub fn new(backend: &dyn RenderBackend, config: &RingConfig, clock: Rc<dyn Clock>) -> Self {
        let elements: Vec<ImageElement> = config
            .panel_configs()
            .map(|panel| ImageElement::new(backend, &panel, Rc::clone(&clock)))
            .collect();

        let group = backend.create_group();
        for element in &elements {
            group.add_child(element.mesh());
        }
        group.update_transform(|transform| {
            transform.position = Vec3::new(0.0, config.y_position, 0.0);
            transform.rotation.y = config.angle_offset.to_radians();
        });
        log::debug!(
            "ring of {} panels at y {}, depth {}",
            elements.len(),
            config.y_position,
            config.depth_offset
        );

        Self {
            group,
            elements,
            angle_offset: config.angle_offset,
            y_position: config.y_position,
            depth_offset: config.depth_offset,
            last_applied_offset: 0.0,
            frozen: FreezeFlag::new(),
            counter_rotate: config.counter_rotate,
        }
    }

    /// Advances every panel, then turns the ring by the change in offset.
    pub fn update(&mut self, offset: f32) {
        if self.frozen.get() {
            return;
        }
        for element in &mut self.elements {
            element.update();
        }
        let scaled = offset / OFFSET_DIVISOR;
        let delta = (scaled - self.last_applied_offset) * self.rotation_sign();
        if delta != 0.0 {
            self.group
                .update_transform(|transform| transform.rotation.y += delta);
        }
        self.last_applied_offset = scaled;
    }

    pub fn on_wheel(&mut self, event: &WheelEvent) {
        if self.frozen.get() {
            return;
        }
        let step = if event.delta_y > 0.0 {
            -WHEEL_ROTATION_STEP
        } else {
            WHEEL_ROTATION_STEP
        };
        self.group
            .update_transform(|transform| transform.rotation.y += step);
    }

    pub fn on_mouse_move(&mut self, hit: Option<&MeshRef>) {
        if self.frozen.get() {
            return;
        }
        for element in &mut self.elements {
            element.on_pointer_move(hit);
        }
    }

    /// Clicks the panels that own `hit`.
    pub fn on_click(&mut self, hit: Option<&MeshRef>) {
        if self.frozen.get() {
            return;
        }
        let Some(hit) = hit else {
            return;
        };
        for element in self.elements.iter_mut().filter(|element| element.owns(hit)) {
            element.on_click();
        }
    }

    pub fn group(&self) -> &MeshRef {
        &self.group
    }

    pub fn elements(&self) -> &[ImageElement] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut [ImageElement] {
        &mut self.elements
    }

    pub fn last_applied_offset(&self) -> f32 {
        self.last_applied_offset
    }

    /// Current group rotation about Y, in radians.
    pub fn rotation_y(&self) -> f32 {
        self.group.rotation().y
    }

    /// Initial group rotation about Y, in degrees.
    pub fn angle_offset(&self) -> f32 {
        self.angle_offset
    }

    pub fn y_position(&self) -> f32 {
        self.y_position
    }

    pub fn depth_offset(&self) -> f32 {
        self.depth_offset
    }

    pub fn is_counter_rotating(&self) -> bool {
        self.counter_rotate
    }

    fn rotation_sign(&self) -> f32 {
        if self.counter_rotate {
            -1.0
        } else {
            1.0
        }
    }
}

impl Freezable for ImageRing {
    fn freeze(&mut self) {
        if self.frozen.freeze() {
            log::debug!("ring at y {} frozen", self.y_position);
        }
    }

    fn unfreeze(&mut self) {
        if self.frozen.unfreeze() {
            log::debug!("ring at y {} unfrozen", self.y_position);
        }
    }

    fn is_frozen(&self) -> bool {
        self.frozen.get()
    }
}

impl std::fmt::Debug for ImageRing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageRing")
            .field("group", &self.group)
            .field("elements", &self.elements.len())
            .field("last_applied_offset", &self.last_applied_offset)
            .field("frozen", &self.frozen.get())
            .field("counter_rotate", &self.counter_rotate)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/image_ring_tests.rs"]
mod tests;
