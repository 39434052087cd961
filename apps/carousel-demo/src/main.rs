use std::rc::Rc;

use anyhow::{bail, Context, Result};
use carousel_animation::TweenSpec;
use carousel_core::{ManualClock, Runtime, NANOS_PER_MILLI};
use carousel_foundation::{Axis, PointerEvent, WheelEvent};
use carousel_ui::{
    CarouselConfig, CarouselScene, ClickBehavior, Freezable, HeadlessScene, HitTest, Size,
};

const FRAME_MILLIS: f64 = 16.0;
const DEFAULT_RING_COUNT: usize = 3;
const PANELS_PER_RING: usize = 13;
const RING_SPACING: f32 = 6.0;
const DEFAULT_IMAGES: &[&str] = &["canyon.jpeg", "growhouse.jpeg", "mountains.jpeg"];

struct Options {
    ring_count: usize,
    images: Vec<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<Options> {
    let mut ring_count = DEFAULT_RING_COUNT;
    let mut images = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--rings" {
            let value = args.next().context("--rings needs a value")?;
            ring_count = value
                .parse()
                .with_context(|| format!("invalid ring count {value:?}"))?;
        } else {
            images.push(arg);
        }
    }
    if ring_count == 0 {
        bail!("at least one ring is required");
    }
    if images.is_empty() {
        images = DEFAULT_IMAGES.iter().map(|image| image.to_string()).collect();
    }
    Ok(Options { ring_count, images })
}

struct Demo {
    clock: ManualClock,
    runtime: Runtime,
    backend: Rc<HeadlessScene>,
    scene: CarouselScene,
    frame_time_nanos: u64,
}

impl Demo {
    fn new(options: &Options) -> Self {
        let backend = Rc::new(HeadlessScene::new());
        for image in &options.images {
            if !image.starts_with("missing") {
                backend.register_texture(image.clone(), Size::new(800.0, 800.0));
            }
        }

        let config = CarouselConfig::helix(
            &options.images,
            options.ring_count,
            PANELS_PER_RING,
            RING_SPACING,
        )
        .map_rings(|ring| ring.with_click(ClickBehavior::Spin(TweenSpec::default())));

        let clock = ManualClock::new();
        let runtime = Runtime::default();
        let hit_test: Rc<dyn HitTest> = backend.clone();
        let scene =
            CarouselScene::with_clock(config, &*backend, runtime.handle(), Rc::new(clock.clone()))
                .with_hit_test(hit_test);
        Self {
            clock,
            runtime,
            backend,
            scene,
            frame_time_nanos: 0,
        }
    }

    fn frame(&mut self) {
        self.clock.advance(FRAME_MILLIS);
        self.frame_time_nanos += (FRAME_MILLIS * NANOS_PER_MILLI as f64) as u64;
        let delivered = self.backend.complete_texture_loads();
        if delivered > 0 {
            log::info!("delivered {delivered} texture load(s)");
        }
        self.scene.frame(self.frame_time_nanos);
    }

    fn frames(&mut self, count: usize) {
        for _ in 0..count {
            self.frame();
        }
    }

    fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.runtime.handle().has_frame_callbacks() {
            self.frame();
            frames += 1;
        }
        frames
    }

    fn report(&self, label: &str) {
        let rotations: Vec<String> = self
            .scene
            .rings()
            .iter()
            .map(|ring| format!("{:.3}", ring.rotation_y()))
            .collect();
        println!(
            "{label:<18} offset {:>9.2}  ring rotations [{}]",
            self.scene.drag().offset_along(Axis::Y),
            rotations.join(", ")
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = parse_options(std::env::args().skip(1))?;
    println!("=== Carousel headless demo ===");
    println!(
        "{} ring(s) of {} panels from {} image(s)",
        options.ring_count,
        PANELS_PER_RING,
        options.images.len()
    );
    println!();

    let mut demo = Demo::new(&options);
    demo.frame();
    demo.report("start");

    let target = demo
        .scene
        .rings()
        .first()
        .and_then(|ring| ring.elements().first())
        .map(|element| element.mesh().clone())
        .context("carousel has no panels")?;

    demo.backend.set_hit_target(Some(target.clone()));
    demo.scene.on_pointer_event(&PointerEvent::moved(400.0, 300.0));
    demo.frames(16);
    println!("hover              panel scale {:.3}", target.scale().x);

    demo.scene.on_click(&PointerEvent::up(400.0, 300.0));
    demo.frames(40);
    println!("click              panel rotation z {:.3}", target.rotation().z);

    demo.scene.on_pointer_event(&PointerEvent::down(400.0, 300.0));
    for step in 1..=5 {
        demo.scene
            .on_pointer_event(&PointerEvent::moved(400.0, 300.0 + step as f32 * 8.0));
        demo.frame();
    }
    demo.scene.on_pointer_event(&PointerEvent::up(400.0, 340.0));
    demo.report("drag released");
    let frames = demo.settle();
    demo.report(&format!("settled ({frames}f)"));

    demo.scene.on_wheel(&WheelEvent::new(20.0));
    demo.settle();
    demo.report("wheel");

    demo.scene.freeze();
    demo.scene.on_wheel(&WheelEvent::new(-60.0));
    demo.settle();
    demo.report("wheel while frozen");

    demo.scene.unfreeze();
    demo.frame();
    demo.report("unfrozen");

    Ok(())
}
