//! Freezing the scene, its rings and individual panels.

use carousel_testing::{CarouselTestRule, FRAME_MILLIS};
use carousel_ui::{Axis, CarouselConfig, Freezable, Point, RingConfig};

fn two_rings() -> CarouselConfig {
    CarouselConfig::new(vec![
        RingConfig::new(["a", "b", "c"]),
        RingConfig::new(["d", "e", "f"]).with_y_position(6.0),
    ])
}

#[test]
fn frozen_scene_ignores_drag_wheel_and_hover() {
    let mut rule = CarouselTestRule::new(two_rings());
    let target = rule.scene().rings()[0].elements()[0].mesh().clone();

    rule.scene_mut().freeze();
    assert!(rule.scene().is_frozen());

    rule.drag(Point::new(0.0, 0.0), Point::new(0.0, 30.0));
    rule.wheel(5.0);
    rule.hover(Some(&target));
    rule.advance_frame(FRAME_MILLIS);

    for ring in rule.scene().rings() {
        assert_eq!(ring.rotation_y(), 0.0);
        assert_eq!(ring.last_applied_offset(), 0.0);
        assert!(ring.elements().iter().all(|e| !e.is_hovered() && !e.is_frozen()));
    }
}

#[test]
fn input_while_frozen_leaves_nothing_to_catch_up() {
    let mut rule = CarouselTestRule::new(two_rings());
    rule.scene_mut().freeze();
    rule.drag(Point::new(0.0, 0.0), Point::new(0.0, 30.0));
    rule.wheel(-20.0);
    assert!(!rule.runtime_handle().has_frame_callbacks());
    assert_eq!(rule.run_until_idle(), 0);

    rule.scene_mut().unfreeze();
    assert!(!rule.scene().is_frozen());
    rule.advance_frame(FRAME_MILLIS);

    assert_eq!(rule.scene().drag().offset(), Point::ZERO);
    for ring in rule.scene().rings() {
        assert_eq!(ring.rotation_y(), 0.0);
        assert_eq!(ring.last_applied_offset(), 0.0);
    }
}

#[test]
fn freezing_mid_fling_stops_the_coast() {
    let mut rule = CarouselTestRule::new(two_rings());
    rule.drag(Point::new(0.0, 0.0), Point::new(0.0, 30.0));
    rule.advance_frame(FRAME_MILLIS);
    let offset = rule.scene().drag().offset_along(Axis::Y);
    let rotation = rule.scene().rings()[0].rotation_y();

    rule.scene_mut().freeze();
    assert!(!rule.runtime_handle().has_frame_callbacks());
    rule.scene_mut().unfreeze();
    rule.advance_frames(5, FRAME_MILLIS);

    assert_eq!(rule.scene().drag().offset_along(Axis::Y), offset);
    assert_eq!(rule.scene().rings()[0].rotation_y(), rotation);
}

#[test]
fn unfrozen_scene_responds_to_input_again() {
    let mut rule = CarouselTestRule::new(two_rings());
    rule.scene_mut().freeze();
    rule.scene_mut().unfreeze();

    rule.drag(Point::new(0.0, 0.0), Point::new(0.0, 30.0));
    rule.run_until_idle();

    let offset = rule.scene().drag().offset_along(Axis::Y);
    assert!(offset > 30.0);
    assert_eq!(rule.scene().rings()[0].last_applied_offset(), offset / 3.0);
}

#[test]
fn freezing_one_ring_leaves_the_other_running() {
    let mut rule = CarouselTestRule::new(two_rings());
    rule.scene_mut().rings_mut()[1].freeze();
    assert!(!rule.scene().is_frozen());

    rule.wheel(-30.0);
    rule.advance_frame(FRAME_MILLIS);

    let rings = rule.scene().rings();
    assert!(rings[0].rotation_y() > 0.0);
    assert_eq!(rings[1].rotation_y(), 0.0);
}

#[test]
fn frozen_panel_ignores_hover_inside_a_live_ring() {
    let mut rule = CarouselTestRule::new(two_rings());
    let target = rule.scene().rings()[0].elements()[1].mesh().clone();
    rule.scene_mut().rings_mut()[0].elements_mut()[1].freeze();

    rule.hover(Some(&target));
    assert!(!rule.scene().rings()[0].elements()[1].is_hovered());

    rule.scene_mut().rings_mut()[0].elements_mut()[1].unfreeze();
    rule.hover(Some(&target));
    assert!(rule.scene().rings()[0].elements()[1].is_hovered());
}
