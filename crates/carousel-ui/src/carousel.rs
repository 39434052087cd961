//! Carousel scene: rings driven by a shared momentum drag.
//!
//! The host forwards input events and calls [`CarouselScene::frame`] once per
//! frame. A frame first runs queued decay ticks, then reads the drag offset
//! once and updates every ring with it in creation order.
//!
//! Freezing the scene drops all input and stops the drag from coasting, so
//! nothing accumulates while frozen.

use std::rc::Rc;

use carousel_core::{Clock, Freezable, FreezeFlag, RuntimeHandle, SystemClock};
use carousel_foundation::{MomentumDrag, PointerEvent, PointerEventKind, WheelEvent};
use carousel_ui_graphics::Point;

use crate::config::CarouselConfig;
use crate::image_ring::ImageRing;
use crate::scene::{HitTest, MeshRef, RenderBackend};

pub struct CarouselScene {
    config: CarouselConfig,
    runtime: RuntimeHandle,
    drag: MomentumDrag,
    rings: Vec<ImageRing>,
    hit_test: Option<Rc<dyn HitTest>>,
    frozen: FreezeFlag,
}

impl CarouselScene {
    pub fn new(config: CarouselConfig, backend: &dyn RenderBackend, runtime: RuntimeHandle) -> Self {
        Self::with_clock(config, backend, runtime, Rc::new(SystemClock::new()))
    }

    pub fn with_clock(
        config: CarouselConfig,
        backend: &dyn RenderBackend,
        runtime: RuntimeHandle,
        clock: Rc<dyn Clock>,
    ) -> Self {
        let rings: Vec<ImageRing> = config
            .rings
            .iter()
            .map(|ring| ImageRing::new(backend, ring, Rc::clone(&clock)))
            .collect();
        let drag = MomentumDrag::with_config(runtime.clone(), config.drag);
        log::info!(
            "carousel with {} ring(s), {} panel(s)",
            rings.len(),
            rings.iter().map(|ring| ring.elements().len()).sum::<usize>()
        );
        Self {
            config,
            runtime,
            drag,
            rings,
            hit_test: None,
            frozen: FreezeFlag::new(),
        }
    }

    /// Sets the hit tester used for hover and click.
    pub fn with_hit_test(mut self, hit_test: Rc<dyn HitTest>) -> Self {
        self.hit_test = Some(hit_test);
        self
    }

    /// Runs one frame at `frame_time_nanos`.
    pub fn frame(&mut self, frame_time_nanos: u64) {
        self.runtime.drain_frame_callbacks(frame_time_nanos);
        let offset = self.drag.offset_along(self.config.drive_axis);
        for ring in &mut self.rings {
            ring.update(offset);
        }
    }

    /// Routes a pointer event to the matching handler.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => self.on_pointer_down(event),
            PointerEventKind::Move => self.on_pointer_move(event),
            PointerEventKind::Up | PointerEventKind::Cancel => self.on_pointer_up(event),
            PointerEventKind::Leave => self.on_pointer_leave(event),
        }
    }

    pub fn on_pointer_down(&mut self, event: &PointerEvent) {
        if self.frozen.get() {
            return;
        }
        self.drag.on_pointer_down(event.position);
    }

    /// Feeds the drag and updates hover on every ring.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) {
        if self.frozen.get() {
            return;
        }
        self.drag.on_pointer_move(event.position);
        let hit = self.hit(event.position);
        for ring in &mut self.rings {
            ring.on_mouse_move(hit.as_ref());
        }
    }

    pub fn on_pointer_up(&mut self, _event: &PointerEvent) {
        if self.frozen.get() {
            return;
        }
        self.drag.on_pointer_release();
    }

    pub fn on_pointer_leave(&mut self, _event: &PointerEvent) {
        if self.frozen.get() {
            return;
        }
        self.drag.on_pointer_release();
    }

    pub fn on_wheel(&mut self, event: &WheelEvent) {
        if self.frozen.get() {
            return;
        }
        self.drag.on_wheel(event);
        for ring in &mut self.rings {
            ring.on_wheel(event);
        }
    }

    pub fn on_click(&mut self, event: &PointerEvent) {
        if self.frozen.get() {
            return;
        }
        let Some(hit) = self.hit(event.position) else {
            return;
        };
        for ring in &mut self.rings {
            ring.on_click(Some(&hit));
        }
    }

    pub fn rings(&self) -> &[ImageRing] {
        &self.rings
    }

    pub fn rings_mut(&mut self) -> &mut [ImageRing] {
        &mut self.rings
    }

    pub fn drag(&self) -> &MomentumDrag {
        &self.drag
    }

    pub fn groups(&self) -> Vec<MeshRef> {
        self.rings.iter().map(|ring| ring.group().clone()).collect()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.clone()
    }

    fn hit(&self, position: Point) -> Option<MeshRef> {
        self.hit_test
            .as_ref()
            .and_then(|hit_test| hit_test.hit_test(position))
    }
}

/// Scene-level freeze: drops input, stops the drag and freezes every ring.
impl Freezable for CarouselScene {
    fn freeze(&mut self) {
        if self.frozen.freeze() {
            log::debug!("carousel frozen");
        }
        self.drag.cancel();
        for ring in &mut self.rings {
            ring.freeze();
        }
    }

    fn unfreeze(&mut self) {
        if self.frozen.unfreeze() {
            log::debug!("carousel unfrozen");
        }
        for ring in &mut self.rings {
            ring.unfreeze();
        }
    }

    fn is_frozen(&self) -> bool {
        self.frozen.get()
    }
}

impl std::fmt::Debug for CarouselScene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselScene")
            .field("rings", &self.rings)
            .field("drag", &self.drag)
            .field("drive_axis", &self.config.drive_axis)
            .field("frozen", &self.frozen.get())
            .finish()
    }
}
