//! Carousel scene driven through the test rule.

use carousel_animation::TweenSpec;
use carousel_foundation::{Axis, AxisState};
use carousel_testing::{CarouselTestRule, FRAME_MILLIS};
use carousel_ui::{CarouselConfig, ClickBehavior, HeadlessScene, Point, RingConfig, Size};

fn helix() -> CarouselConfig {
    let images: Vec<String> = (0..8).map(|i| format!("image-{i}.jpg")).collect();
    CarouselConfig::helix(&images, 2, 4, 6.0)
}

fn rotation_from_rest(rule: &CarouselTestRule, ring: usize) -> f32 {
    let ring = &rule.scene().rings()[ring];
    ring.rotation_y() - ring.angle_offset().to_radians()
}

#[test]
fn release_decay_is_applied_before_rings_update() {
    let mut rule = CarouselTestRule::new(helix());
    rule.drag(Point::new(0.0, 0.0), Point::new(0.0, 30.0));
    assert_eq!(rule.scene().drag().offset_along(Axis::Y), 30.0);

    rule.advance_frame(FRAME_MILLIS);
    // One decay tick: 30 + 30 * 2.
    assert_eq!(rule.scene().drag().offset_along(Axis::Y), 90.0);
    assert_eq!(rule.scene().rings()[0].last_applied_offset(), 30.0);
    assert!((rotation_from_rest(&rule, 0) - 30.0).abs() < 1e-4);
    assert!((rotation_from_rest(&rule, 1) + 30.0).abs() < 1e-4);
}

#[test]
fn rings_settle_at_one_third_of_final_offset() {
    let mut rule = CarouselTestRule::new(helix());
    rule.drag(Point::new(0.0, 0.0), Point::new(0.0, 12.0));
    let frames = rule.run_until_idle();
    assert!(frames > 1);
    assert_eq!(rule.scene().drag().axis_state(Axis::Y), AxisState::Idle);

    let settled = rule.scene().drag().offset_along(Axis::Y) / 3.0;
    assert!((rotation_from_rest(&rule, 0) - settled).abs() < 1e-2);
    assert!((rotation_from_rest(&rule, 1) + settled).abs() < 1e-2);
}

#[test]
fn wheel_flicks_offset_and_nudges_rings() {
    let mut rule = CarouselTestRule::new(helix());
    rule.wheel(-9.0);
    assert_eq!(rule.scene().drag().offset_along(Axis::Y), 9.0);
    assert!((rotation_from_rest(&rule, 0) - 0.01).abs() < 1e-6);
    assert!((rotation_from_rest(&rule, 1) - 0.01).abs() < 1e-6);
}

#[test]
fn horizontal_drive_axis_ignores_vertical_drag() {
    let mut rule = CarouselTestRule::new(helix().with_drive_axis(Axis::X));
    rule.drag(Point::new(0.0, 0.0), Point::new(0.0, 30.0));
    rule.advance_frame(FRAME_MILLIS);
    assert_eq!(rotation_from_rest(&rule, 0), 0.0);
}

#[test]
fn hover_and_click_reach_the_hit_panel() {
    let config = helix().map_rings(|ring| ring.with_click(ClickBehavior::Spin(TweenSpec::default())));
    let mut rule = CarouselTestRule::new(config);
    let target = rule.scene().rings()[1].elements()[2].mesh().clone();

    rule.hover(Some(&target));
    rule.advance_frame(250.0);
    let element = &rule.scene().rings()[1].elements()[2];
    assert!(element.is_hovered());
    assert!((element.mesh().scale().x - 1.1).abs() < 1e-4);

    rule.click(&target);
    let spinning: usize = rule
        .scene()
        .rings()
        .iter()
        .flat_map(|ring| ring.elements())
        .filter(|element| element.is_spinning())
        .count();
    assert_eq!(spinning, 1);

    rule.hover(None);
    assert!(rule.scene().rings()[1].elements()[2].is_hovered());
}

#[test]
fn textures_arrive_on_the_first_frame() {
    let backend = HeadlessScene::new();
    backend.register_texture("a.jpg", Size::new(800.0, 600.0));
    let config = CarouselConfig::new(vec![RingConfig::new(["a.jpg", "missing.jpg"])]);
    let mut rule = CarouselTestRule::with_backend(config, backend);

    let elements = rule.scene().rings()[0].elements();
    assert!(elements.iter().all(|e| !e.mesh().material().is_some_and(|m| m.is_textured())));

    rule.advance_frame(FRAME_MILLIS);
    let textured: Vec<bool> = rule.scene().rings()[0]
        .elements()
        .iter()
        .map(|e| e.mesh().material().is_some_and(|m| m.is_textured()))
        .collect();
    assert_eq!(textured, vec![true, false]);
}
