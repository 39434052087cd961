//! End-to-end ring behaviour against the headless backend.

use std::rc::Rc;

use carousel_core::ManualClock;
use carousel_ui::{HeadlessScene, ImageRing, RingConfig};

fn thirteen_panel_ring(scene: &HeadlessScene, clock: &ManualClock) -> ImageRing {
    let config = RingConfig::new((0..13).map(|i| format!("panel-{i}.jpg"))).with_depth_offset(39.0);
    ImageRing::new(scene, &config, Rc::new(clock.clone()))
}

#[test]
fn offset_sequence_turns_ring_once() {
    let scene = HeadlessScene::new();
    let clock = ManualClock::new();
    let mut ring = thirteen_panel_ring(&scene, &clock);
    assert_eq!(ring.elements().len(), 13);

    let mut rotations = vec![ring.rotation_y()];
    for offset in [0.0, 300.0, 300.0] {
        ring.update(offset);
        rotations.push(ring.rotation_y());
    }

    assert_eq!(ring.last_applied_offset(), 100.0);
    let deltas: Vec<f32> = rotations.windows(2).map(|pair| pair[1] - pair[0]).collect();
    assert_eq!(deltas, vec![0.0, 100.0, 0.0]);
}

#[test]
fn panels_keep_their_placement_while_the_group_turns() {
    let scene = HeadlessScene::new();
    let clock = ManualClock::new();
    let mut ring = thirteen_panel_ring(&scene, &clock);
    let before: Vec<_> = ring.elements().iter().map(|e| e.mesh().position()).collect();

    ring.update(90.0);
    clock.advance(16.0);
    ring.update(180.0);

    let after: Vec<_> = ring.elements().iter().map(|e| e.mesh().position()).collect();
    assert_eq!(before, after);
}
