use super::*;

use carousel_animation::TweenSpec;
use carousel_core::ManualClock;
use carousel_ui_graphics::Size;

use crate::config::HoverSpec;
use crate::headless::HeadlessScene;
use crate::scene::TextureError;

fn element(scene: &HeadlessScene, clock: &ManualClock, config: PanelConfig) -> ImageElement {
    ImageElement::new(scene, &config, Rc::new(clock.clone()))
}

#[test]
fn construction_places_panel_with_placeholder() {
    let scene = HeadlessScene::new();
    let clock = ManualClock::new();
    let panel = element(
        &scene,
        &clock,
        PanelConfig::new("a.jpg")
            .with_base_angle(180.0)
            .with_depth_offset(10.0),
    );

    assert_eq!(panel.mesh().material(), Some(Material::PLACEHOLDER));
    assert!(panel
        .mesh()
        .position()
        .approx_eq(Vec3::new(0.0, 0.0, -20.0), 1e-4));
    assert_eq!(panel.base_angle(), 180.0);
    assert_eq!(panel.anchor(), Vec3::new(0.0, 0.0, 10.0));
    assert_eq!(scene.pending_texture_loads(), 1);
}

#[test]
fn loaded_texture_replaces_placeholder() {
    let scene = HeadlessScene::new();
    scene.register_texture("a.jpg", Size::new(800.0, 800.0));
    let clock = ManualClock::new();
    let panel = element(&scene, &clock, PanelConfig::new("a.jpg"));

    scene.complete_texture_loads();
    let material = panel.mesh().material().expect("mesh alive");
    assert!(material.is_textured());
}

#[test]
fn failed_texture_keeps_placeholder() {
    let scene = HeadlessScene::new();
    scene.register_failure(
        "broken.jpg",
        TextureError::Decode {
            path: "broken.jpg".into(),
            reason: "truncated".into(),
        },
    );
    let clock = ManualClock::new();
    let panel = element(&scene, &clock, PanelConfig::new("broken.jpg"));

    scene.complete_texture_loads();
    assert_eq!(panel.mesh().material(), Some(Material::PLACEHOLDER));
}

#[test]
fn hover_scales_panel_up() {
    let scene = HeadlessScene::new();
    let clock = ManualClock::new();
    let mut panel = element(&scene, &clock, PanelConfig::new("a.jpg"));
    let own = panel.mesh().clone();

    panel.on_pointer_move(Some(&own));
    assert!(panel.is_hovered());

    clock.advance(250.0);
    panel.update();
    let scale = panel.mesh().scale();
    assert!((scale.x - 1.1).abs() < 1e-5);
    assert_eq!(scale.x, scale.y);
    assert_eq!(scale.z, 1.0);
}

#[test]
fn miss_keeps_hover_and_other_hit_exits() {
    let scene = HeadlessScene::new();
    let clock = ManualClock::new();
    let mut panel = element(&scene, &clock, PanelConfig::new("a.jpg"));
    let other = scene.create_group();
    let own = panel.mesh().clone();

    panel.on_pointer_move(Some(&own));
    clock.advance(250.0);
    panel.update();

    panel.on_pointer_move(None);
    assert!(panel.is_hovered());

    panel.on_pointer_move(Some(&other));
    assert!(!panel.is_hovered());
    assert_eq!(
        panel.scale_animation().direction(),
        carousel_animation::Direction::Backward
    );

    clock.advance(250.0);
    panel.update();
    assert!((panel.mesh().scale().x - 1.05).abs() < 1e-5);
}

#[test]
fn frozen_panel_ignores_input_and_updates() {
    let scene = HeadlessScene::new();
    let clock = ManualClock::new();
    let config = PanelConfig {
        click: ClickBehavior::Spin(TweenSpec::default()),
        ..PanelConfig::new("a.jpg")
    };
    let mut panel = element(&scene, &clock, config);
    let own = panel.mesh().clone();

    panel.freeze();
    assert!(panel.is_frozen());
    panel.on_pointer_move(Some(&own));
    panel.on_click();
    assert!(!panel.is_hovered());
    assert!(!panel.is_spinning());

    panel.unfreeze();
    panel.on_pointer_move(Some(&own));
    assert!(panel.is_hovered());

    panel.freeze();
    clock.advance(250.0);
    panel.update();
    assert_eq!(panel.mesh().scale(), Vec3::ONE);

    panel.unfreeze();
    panel.update();
    assert!(panel.mesh().scale().x > 1.0);
}

#[test]
fn click_is_ignored_by_default() {
    let scene = HeadlessScene::new();
    let clock = ManualClock::new();
    let mut panel = element(&scene, &clock, PanelConfig::new("a.jpg"));

    panel.on_click();
    assert!(!panel.is_spinning());
}

#[test]
fn spin_turns_once_and_returns_to_rest() {
    let scene = HeadlessScene::new();
    let clock = ManualClock::new();
    let config = PanelConfig {
        click: ClickBehavior::Spin(TweenSpec::default()),
        ..PanelConfig::new("a.jpg")
    };
    let mut panel = element(&scene, &clock, config);

    panel.on_click();
    assert!(panel.is_spinning());

    clock.advance(250.0);
    panel.update();
    assert!((panel.mesh().rotation().z - std::f32::consts::PI).abs() < 1e-4);

    clock.advance(300.0);
    panel.update();
    assert!(!panel.is_spinning());
    assert_eq!(panel.mesh().rotation().z, 0.0);
}

#[test]
fn dead_mesh_updates_are_skipped() {
    let scene = HeadlessScene::new();
    let clock = ManualClock::new();
    let mut panel = element(&scene, &clock, PanelConfig::new("a.jpg"));
    let own = panel.mesh().clone();

    scene.remove(&own);
    panel.on_pointer_move(Some(&own));
    clock.advance(250.0);
    panel.update();
    assert_eq!(panel.mesh().scale(), Vec3::ONE);
    assert_eq!(panel.mesh().material(), None);
}

#[test]
fn emphasized_hover_front_loads_toward_one_and_a_half() {
    let scene = HeadlessScene::new();
    let clock = ManualClock::new();
    let config = PanelConfig {
        hover: HoverSpec::emphasized(),
        ..PanelConfig::new("a.jpg")
    };
    let mut panel = element(&scene, &clock, config);
    let own = panel.mesh().clone();
    panel.on_pointer_move(Some(&own));

    clock.advance(1_000.0);
    panel.update();
    let halfway = panel.mesh().scale().x;
    assert!(halfway > 1.48 && halfway < 1.5, "got {halfway}");

    clock.advance(1_000.0);
    panel.update();
    assert!((panel.mesh().scale().x - 1.5).abs() < 1e-4);

    clock.advance(100.0);
    panel.update();
    assert!(!panel.scale_animation().is_running());
    assert!((panel.mesh().scale().x - 1.5).abs() < 1e-4);
}
