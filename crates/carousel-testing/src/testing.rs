use std::rc::Rc;

use carousel_core::{ManualClock, Runtime, RuntimeHandle, NANOS_PER_MILLI};
use carousel_foundation::{PointerEvent, WheelEvent};
use carousel_ui::{CarouselConfig, CarouselScene, HeadlessScene, HitTest, MeshRef};
use carousel_ui_graphics::Point;

/// Length of one simulated frame, in milliseconds.
pub const FRAME_MILLIS: f64 = 16.0;

/// Upper bound on frames [`CarouselTestRule::run_until_idle`] will step.
const MAX_IDLE_FRAMES: usize = 10_000;

/// Headless carousel driven by a manual clock.
///
/// Time only moves through [`CarouselTestRule::advance_frame`], which also
/// delivers pending texture loads before running the frame, so tests see
/// the same ordering a real host produces.
pub struct CarouselTestRule {
    clock: ManualClock,
    runtime: Runtime,
    backend: Rc<HeadlessScene>,
    scene: CarouselScene,
    frame_time_nanos: u64,
}

impl CarouselTestRule {
    pub fn new(config: CarouselConfig) -> Self {
        Self::with_backend(config, HeadlessScene::new())
    }

    /// Uses a pre-configured backend, e.g. one with registered textures.
    pub fn with_backend(config: CarouselConfig, backend: HeadlessScene) -> Self {
        let clock = ManualClock::new();
        let runtime = Runtime::default();
        let backend = Rc::new(backend);
        let hit_test: Rc<dyn HitTest> = backend.clone();
        let scene = CarouselScene::with_clock(
            config,
            &*backend,
            runtime.handle(),
            Rc::new(clock.clone()),
        )
        .with_hit_test(hit_test);
        Self {
            clock,
            runtime,
            backend,
            scene,
            frame_time_nanos: 0,
        }
    }

    /// Advances the clock by `millis` and runs one frame.
    pub fn advance_frame(&mut self, millis: f64) {
        self.clock.advance(millis);
        self.frame_time_nanos += (millis * NANOS_PER_MILLI as f64) as u64;
        self.backend.complete_texture_loads();
        self.scene.frame(self.frame_time_nanos);
    }

    pub fn advance_frames(&mut self, count: usize, millis: f64) {
        for _ in 0..count {
            self.advance_frame(millis);
        }
    }

    /// Steps frames until no frame callbacks are queued. Returns the number
    /// of frames run.
    pub fn run_until_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.runtime.handle().has_frame_callbacks() {
            frames += 1;
            if frames > MAX_IDLE_FRAMES {
                panic!("run_until_idle stepped {MAX_IDLE_FRAMES} frames without settling");
            }
            self.advance_frame(FRAME_MILLIS);
        }
        frames
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.scene.on_pointer_event(&PointerEvent::down(x, y));
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.scene.on_pointer_event(&PointerEvent::moved(x, y));
    }

    pub fn release(&mut self, x: f32, y: f32) {
        self.scene.on_pointer_event(&PointerEvent::up(x, y));
    }

    /// Press at `from`, one move to `to`, release at `to`.
    pub fn drag(&mut self, from: Point, to: Point) {
        self.press(from.x, from.y);
        self.move_to(to.x, to.y);
        self.release(to.x, to.y);
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.scene.on_wheel(&WheelEvent::new(delta_y));
    }

    /// Moves the pointer over `target` (or over nothing).
    pub fn hover(&mut self, target: Option<&MeshRef>) {
        self.backend.set_hit_target(target.cloned());
        self.move_to(0.0, 0.0);
    }

    pub fn click(&mut self, target: &MeshRef) {
        self.backend.set_hit_target(Some(target.clone()));
        self.scene.on_click(&PointerEvent::up(0.0, 0.0));
    }

    pub fn scene(&self) -> &CarouselScene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut CarouselScene {
        &mut self.scene
    }

    pub fn backend(&self) -> &HeadlessScene {
        &self.backend
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_ui::RingConfig;

    #[test]
    fn advance_frame_moves_clock_and_frame_time() {
        let mut rule = CarouselTestRule::new(CarouselConfig::default());
        rule.advance_frame(16.0);
        rule.advance_frame(16.0);
        assert_eq!(rule.frame_time_nanos(), 32 * NANOS_PER_MILLI);
        assert_eq!(carousel_core::Clock::now_millis(rule.clock()), 32.0);
    }

    #[test]
    fn frame_delivers_pending_textures() {
        let mut rule = CarouselTestRule::new(CarouselConfig::new(vec![RingConfig::new([
            "a.jpg", "b.jpg",
        ])]));
        assert_eq!(rule.backend().pending_texture_loads(), 2);
        rule.advance_frame(FRAME_MILLIS);
        assert_eq!(rule.backend().pending_texture_loads(), 0);
    }

    #[test]
    fn run_until_idle_is_zero_without_work() {
        let mut rule = CarouselTestRule::new(CarouselConfig::default());
        assert_eq!(rule.run_until_idle(), 0);
    }
}
