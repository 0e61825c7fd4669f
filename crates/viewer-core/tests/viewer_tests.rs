// Host-side tests for the viewer controller against a recording scene host.

use glam::{Vec2, Vec3};
use viewer_core::*;

#[derive(Default)]
struct RecordingHost {
    cleared: usize,
    loads: Vec<String>,
    visibility: Vec<(String, bool)>,
    frames: Vec<Frame>,
}

impl SceneHost for RecordingHost {
    fn clear_content(&mut self) {
        self.cleared += 1;
    }
    fn begin_load(&mut self, path: &str) {
        self.loads.push(path.to_string());
    }
    fn set_part_visible(&mut self, name: &str, visible: bool) {
        self.visibility.push((name.to_string(), visible));
    }
    fn present(&mut self, frame: &Frame) {
        self.frames.push(*frame);
    }
}

const SUBMARINE: &str = r#"{
  "kind": "group",
  "children": [
    { "kind": "mesh", "name": "hull", "bounds": { "min": [-1, -2, -1], "max": [1, 2, 1] } },
    { "kind": "mesh", "name": "periscope", "visible": false,
      "bounds": { "min": [0, 1, 0], "max": [0.2, 2, 0.2] } }
  ]
}"#;

fn loaded_viewer(host: &mut RecordingHost) -> Viewer {
    let mut viewer = Viewer::default();
    viewer.load_model("sub.gltf", host);
    viewer
        .on_content_loaded("sub.gltf", ContentNode::from_json(SUBMARINE).unwrap())
        .unwrap();
    viewer
}

fn settle(viewer: &mut Viewer, host: &mut RecordingHost) -> usize {
    let mut ticks = 0;
    while viewer.is_framing() {
        viewer.tick(host);
        ticks += 1;
        assert!(ticks < 10_000, "framing never settled");
    }
    ticks
}

#[test]
fn load_frames_whole_content() {
    let mut host = RecordingHost::default();
    let mut viewer = loaded_viewer(&mut host);
    assert_eq!(host.loads, vec!["sub.gltf"]);
    assert_eq!(host.cleared, 0);
    assert!(viewer.is_framing());
    assert_eq!(viewer.orbit().target(), Vec3::ZERO);
    let target = viewer.state().framing.target();
    assert!((target - Vec3::new(0.0, 4.0 / 0.9, 6.0)).length() < 1e-4);

    settle(&mut viewer, &mut host);
    assert!((viewer.camera().eye - target).length() < FRAMING_TOLERANCE);
}

#[test]
fn load_rearms_idle_cooldown() {
    let mut host = RecordingHost::default();
    let viewer = loaded_viewer(&mut host);
    assert_eq!(viewer.state().idle.cooldown(), Some(IDLE_LOAD_COOLDOWN));
}

#[test]
fn idle_rotation_accumulates_until_first_interaction() {
    let mut host = RecordingHost::default();
    let mut viewer = loaded_viewer(&mut host);
    for _ in 0..10 {
        viewer.tick(&mut host);
    }
    let rotation = viewer.state().content_rotation.y;
    assert!((rotation - 10.0 * IDLE_BASE_SPEED).abs() < 1e-6);

    assert!(viewer.on_pointer_down(Vec2::ZERO));
    assert!(!viewer.on_pointer_down(Vec2::ZERO));
    for _ in 0..2000 {
        let frame = viewer.tick(&mut host);
        assert!(!frame.hint.visible);
    }
    assert_eq!(viewer.state().content_rotation.y, rotation);
    assert!(viewer.has_interacted());
}

#[test]
fn first_pointer_down_mid_burst_freezes_rotation() {
    let mut host = RecordingHost::default();
    let mut viewer = Viewer::new(ViewerConfig {
        idle: IdleConfig {
            initial_cooldown: 0,
            ..IdleConfig::default()
        },
        ..ViewerConfig::default()
    });
    for _ in 0..50 {
        viewer.tick(&mut host);
    }
    assert!(matches!(
        viewer.state().idle.phase(),
        IdleRotationPhase::Bursting { .. }
    ));
    assert!(viewer.state().hint.visible);
    let rotation = viewer.state().content_rotation.y;
    assert!(rotation > 0.0);

    assert!(viewer.on_pointer_down(Vec2::ZERO));
    viewer.on_pointer_up();
    let frame = viewer.tick(&mut host);
    assert!(!frame.hint.visible);
    assert_eq!(frame.content_rotation.y, rotation);
    for _ in 0..400 {
        viewer.tick(&mut host);
    }
    assert_eq!(viewer.state().content_rotation.y, rotation);
}

#[test]
fn hint_shows_only_during_burst() {
    let mut host = RecordingHost::default();
    let mut viewer = Viewer::new(ViewerConfig {
        idle: IdleConfig {
            initial_cooldown: 2,
            burst_frames: 6,
            ..IdleConfig::default()
        },
        ..ViewerConfig::default()
    });
    let visible: Vec<bool> = (0..10).map(|_| viewer.tick(&mut host).hint.visible).collect();
    assert_eq!(
        visible,
        vec![false, false, true, true, true, true, true, true, false, false]
    );
    assert_eq!(host.frames.len(), 10);
}

#[test]
fn changing_to_same_model_is_noop() {
    let mut host = RecordingHost::default();
    let mut viewer = loaded_viewer(&mut host);
    settle(&mut viewer, &mut host);

    assert!(!viewer.change_model("sub.gltf", &mut host));
    assert_eq!(host.cleared, 0);
    assert_eq!(host.loads.len(), 1);
    assert!(!viewer.is_framing());
    assert!(viewer.content().is_some());
}

#[test]
fn changing_model_clears_and_ignores_stale_results() {
    let mut host = RecordingHost::default();
    let mut viewer = loaded_viewer(&mut host);
    settle(&mut viewer, &mut host);
    viewer.on_pointer_down(Vec2::ZERO);

    assert!(viewer.change_model("plane.gltf", &mut host));
    assert!(viewer.change_model("boat.gltf", &mut host));
    assert_eq!(host.cleared, 2);
    assert_eq!(host.loads, vec!["sub.gltf", "plane.gltf", "boat.gltf"]);
    assert!(viewer.content().is_none());
    // the gate never resets
    assert!(viewer.has_interacted());

    let late = ContentNode::from_json(SUBMARINE).unwrap();
    viewer.on_content_loaded("plane.gltf", late).unwrap();
    assert!(viewer.content().is_none());
    assert!(!viewer.is_framing());
}

#[test]
fn toggling_part_reframes_part_then_whole() {
    let mut host = RecordingHost::default();
    let mut viewer = loaded_viewer(&mut host);
    settle(&mut viewer, &mut host);

    assert!(viewer.toggle_part("periscope", &mut host).unwrap());
    let part = FramingRequest::from(BoundingVolume::new(
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.2, 2.0, 0.2),
    ))
    .target_camera_position(&FramingConfig::default());
    assert!((viewer.state().framing.target() - part).length() < 1e-5);
    settle(&mut viewer, &mut host);

    assert!(!viewer.toggle_part("periscope", &mut host).unwrap());
    let whole = Vec3::new(0.0, 4.0 / 0.9, 6.0);
    assert!((viewer.state().framing.target() - whole).length() < 1e-4);
    assert_eq!(
        host.visibility,
        vec![("periscope".to_string(), true), ("periscope".to_string(), false)]
    );
}

#[test]
fn framing_resets_content_rotation() {
    let mut host = RecordingHost::default();
    let mut viewer = loaded_viewer(&mut host);
    for _ in 0..50 {
        viewer.tick(&mut host);
    }
    assert!(viewer.state().content_rotation.y > 0.0);
    viewer.toggle_part("hull", &mut host).unwrap();
    assert_eq!(viewer.state().content_rotation, Vec3::ZERO);
}

#[test]
fn toggling_without_content_fails() {
    let mut host = RecordingHost::default();
    let mut viewer = Viewer::default();
    assert!(matches!(
        viewer.toggle_part("hull", &mut host),
        Err(ViewerError::NoContent)
    ));
    assert!(host.visibility.is_empty());
}

#[test]
fn content_without_meshes_is_not_framed() {
    let mut host = RecordingHost::default();
    let mut viewer = Viewer::default();
    viewer.load_model("empty.gltf", &mut host);
    let empty = ContentNode::from_json(r#"{"kind":"group","children":[{"kind":"light"}]}"#).unwrap();
    assert!(matches!(
        viewer.on_content_loaded("empty.gltf", empty),
        Err(ViewerError::EmptyContent)
    ));
    assert!(!viewer.is_framing());
}

#[test]
fn orbit_drives_camera_after_interaction() {
    let mut host = RecordingHost::default();
    let mut viewer = loaded_viewer(&mut host);
    settle(&mut viewer, &mut host);

    viewer.on_pointer_down(Vec2::new(10.0, 10.0));
    viewer.on_pointer_move(Vec2::new(70.0, 10.0), 600.0);
    viewer.on_pointer_up();
    let before = viewer.camera().eye;
    viewer.tick(&mut host);
    let after = viewer.camera().eye;
    assert!(after.distance(before) > 1e-3);
    // orbit keeps the distance to its target
    let r0 = before.distance(viewer.orbit().target());
    let r1 = after.distance(viewer.orbit().target());
    assert!((r0 - r1).abs() < 1e-3);
}

#[test]
fn resize_updates_aspect() {
    let mut viewer = Viewer::default();
    viewer.resize(800.0, 400.0);
    assert_eq!(viewer.camera().aspect, 2.0);
}
