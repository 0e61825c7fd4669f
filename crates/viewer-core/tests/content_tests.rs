// Host-side tests for content descriptions, bounds and part toggling.

use glam::Vec3;
use viewer_core::*;

const EXPLORER: &str = r#"{
  "kind": "group",
  "name": "Scene",
  "children": [
    { "kind": "light", "name": "Sun" },
    { "kind": "mesh", "name": "hull", "bounds": { "min": [-2, 0, -1], "max": [2, 2, 1] } },
    {
      "kind": "group",
      "name": "Propulsion",
      "children": [
        { "kind": "mesh", "name": "propeller", "visible": false,
          "bounds": { "min": [2, 0.5, -0.5], "max": [3, 1.5, 0.5] } },
        { "kind": "other", "name": "Armature" }
      ]
    },
    { "kind": "mesh", "name": "lamp", "bounds": { "min": [-1, 2, -0.2], "max": [-0.6, 2.4, 0.2] } },
    { "kind": "mesh", "name": "lamp", "bounds": { "min": [0.6, 2, -0.2], "max": [1, 2.4, 0.2] } }
  ]
}"#;

fn explorer() -> ContentNode {
    ContentNode::from_json(EXPLORER).expect("valid description")
}

#[derive(Default)]
struct KindCounter {
    groups: usize,
    meshes: usize,
    lights: usize,
    others: usize,
}

impl ContentVisitor for KindCounter {
    fn visit_group(&mut self, _: &Group) {
        self.groups += 1;
    }
    fn visit_mesh(&mut self, _: &Mesh) {
        self.meshes += 1;
    }
    fn visit_light(&mut self, _: &Light) {
        self.lights += 1;
    }
    fn visit_other(&mut self, _: &Other) {
        self.others += 1;
    }
}

#[test]
fn visitor_sees_every_node_kind() {
    let mut counter = KindCounter::default();
    explorer().accept(&mut counter);
    assert_eq!(counter.groups, 2);
    assert_eq!(counter.meshes, 4);
    assert_eq!(counter.lights, 1);
    assert_eq!(counter.others, 1);
}

#[test]
fn whole_bounds_include_hidden_meshes() {
    let volume = explorer().bounding_volume().unwrap();
    assert_eq!(volume.min, Vec3::new(-2.0, 0.0, -1.0));
    assert_eq!(volume.max, Vec3::new(3.0, 2.4, 1.0));
}

#[test]
fn node_names_by_kind() {
    let root = explorer();
    assert_eq!(root.name(), Some("Scene"));
    let other = ContentNode::from_json(r#"{"kind":"other"}"#).unwrap();
    assert_eq!(other.name(), None);
    assert!(other.bounding_volume().is_none());
}

#[test]
fn part_index_lists_mesh_names_once() {
    let content = LoadedContent::new("explorer.gltf", explorer());
    assert_eq!(content.parts().names(), vec!["hull", "lamp", "propeller"]);
    assert_eq!(content.parts().paths("lamp").len(), 2);
    assert!(content.parts().paths("Sun").is_empty());
}

#[test]
fn showing_hidden_part_frames_that_part() {
    let mut content = LoadedContent::new("explorer.gltf", explorer());
    assert_eq!(content.is_part_visible("propeller"), Some(false));

    let toggle = content.toggle_part("propeller").unwrap();
    assert!(toggle.visible);
    assert_eq!(toggle.framing_volume.min, Vec3::new(2.0, 0.5, -0.5));
    assert_eq!(toggle.framing_volume.max, Vec3::new(3.0, 1.5, 0.5));

    let toggle = content.toggle_part("propeller").unwrap();
    assert!(!toggle.visible);
    assert_eq!(Some(toggle.framing_volume), content.bounding_volume());
    assert_eq!(content.is_part_visible("propeller"), Some(false));
}

#[test]
fn duplicate_names_toggle_together() {
    let mut content = LoadedContent::new("explorer.gltf", explorer());
    let toggle = content.toggle_part("lamp").unwrap();
    assert!(!toggle.visible);
    let toggle = content.toggle_part("lamp").unwrap();
    assert!(toggle.visible);
    assert_eq!(toggle.framing_volume.min, Vec3::new(-1.0, 2.0, -0.2));
    assert_eq!(toggle.framing_volume.max, Vec3::new(1.0, 2.4, 0.2));
}

#[test]
fn unknown_part_is_an_error() {
    let mut content = LoadedContent::new("explorer.gltf", explorer());
    match content.toggle_part("rudder") {
        Err(ViewerError::UnknownPart(name)) => assert_eq!(name, "rudder"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn malformed_description_is_rejected() {
    assert!(matches!(
        ContentNode::from_json(r#"{"kind":"mesh","name":"x"}"#),
        Err(ViewerError::InvalidContent(_))
    ));
}

#[test]
fn enclosing_unions_volumes() {
    let a = BoundingVolume::new(Vec3::ZERO, Vec3::ONE);
    let b = BoundingVolume::new(Vec3::splat(3.0), Vec3::splat(2.0));
    let all = BoundingVolume::enclosing([&a, &b]).unwrap();
    assert_eq!(all.min, Vec3::ZERO);
    assert_eq!(all.max, Vec3::splat(3.0));
    assert_eq!(all.center(), Vec3::splat(1.5));
    assert!(BoundingVolume::enclosing(std::iter::empty()).is_none());
}

#[test]
fn mixed_visibility_under_one_name_converges() {
    let root = ContentNode::from_json(
        r#"{"kind":"group","name":"Scene","children":[
            {"kind":"mesh","name":"lamp","visible":true,
             "bounds":{"min":[-1,2,-0.2],"max":[-0.6,2.4,0.2]}},
            {"kind":"mesh","name":"lamp","visible":false,
             "bounds":{"min":[0.6,2,-0.2],"max":[1,2.4,0.2]}}
        ]}"#,
    )
    .unwrap();
    let mut content = LoadedContent::new("lamps.gltf", root);

    let toggle = content.toggle_part("lamp").unwrap();
    assert!(!toggle.visible);
    let per_mesh: Vec<bool> = content
        .root()
        .children()
        .iter()
        .map(|c| matches!(c, ContentNode::Mesh(m) if m.visible))
        .collect();
    assert_eq!(per_mesh, vec![false, false]);

    let toggle = content.toggle_part("lamp").unwrap();
    assert!(toggle.visible);
    assert_eq!(toggle.framing_volume.min, Vec3::new(-1.0, 2.0, -0.2));
    assert_eq!(toggle.framing_volume.max, Vec3::new(1.0, 2.4, 0.2));
}

#[test]
fn wide_groups_address_the_right_mesh() {
    let count = u16::MAX as usize + 2;
    let children = (0..count)
        .map(|i| {
            ContentNode::Mesh(Mesh {
                name: format!("m{i}"),
                visible: true,
                bounds: BoundingVolume::new(Vec3::ZERO, Vec3::ONE),
            })
        })
        .collect();
    let root = ContentNode::Group(Group {
        name: "Wide".to_string(),
        children,
    });
    let mut content = LoadedContent::new("wide.gltf", root);
    let last = format!("m{}", count - 1);

    assert!(!content.toggle_part(&last).unwrap().visible);
    assert_eq!(content.is_part_visible(&last), Some(false));
    assert_eq!(content.is_part_visible("m0"), Some(true));
}

#[test]
fn swapped_corners_are_normalised() {
    let root = ContentNode::from_json(
        r#"{"kind":"mesh","name":"box","bounds":{"min":[1,2,3],"max":[-1,-2,-3]}}"#,
    )
    .unwrap();
    let volume = root.bounding_volume().unwrap();
    assert_eq!(volume.min, Vec3::new(-1.0, -2.0, -3.0));
    assert_eq!(volume.max, Vec3::new(1.0, 2.0, 3.0));
    assert!(volume.extents().cmpge(Vec3::ZERO).all());
}
