//! Loaded content as reported by the render host.
//!
//! The host describes the subtree it loaded as a closed set of node kinds.
//! Only meshes carry a visibility flag and a bounding volume; groups derive
//! their volume from the meshes beneath them.

use crate::bounds::BoundingVolume;
use crate::error::ViewerError;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentNode {
    Group(Group),
    Mesh(Mesh),
    Light(Light),
    Other(Other),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub children: Vec<ContentNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub name: String,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    /// Content-space bounds, before any idle rotation is applied.
    pub bounds: BoundingVolume,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Light {
    #[serde(default)]
    pub name: String,
}

/// Cameras, bones and anything else the host does not classify.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Other {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub children: Vec<ContentNode>,
}

fn visible_by_default() -> bool {
    true
}

/// Depth-first, pre-order visitor over a content tree.
pub trait ContentVisitor {
    fn visit_group(&mut self, _group: &Group) {}
    fn visit_mesh(&mut self, _mesh: &Mesh) {}
    fn visit_light(&mut self, _light: &Light) {}
    fn visit_other(&mut self, _other: &Other) {}
}

impl ContentNode {
    pub fn from_json(json: &str) -> Result<Self, ViewerError> {
        serde_json::from_str(json).map_err(ViewerError::InvalidContent)
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ContentNode::Group(g) => Some(g.name.as_str()),
            ContentNode::Mesh(m) => Some(m.name.as_str()),
            ContentNode::Light(l) => Some(l.name.as_str()),
            ContentNode::Other(o) => o.name.as_deref(),
        }
    }

    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Group(g) => &g.children,
            ContentNode::Other(o) => &o.children,
            ContentNode::Mesh(_) | ContentNode::Light(_) => &[],
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<ContentNode>> {
        match self {
            ContentNode::Group(g) => Some(&mut g.children),
            ContentNode::Other(o) => Some(&mut o.children),
            ContentNode::Mesh(_) | ContentNode::Light(_) => None,
        }
    }

    pub fn accept<V: ContentVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            ContentNode::Group(g) => visitor.visit_group(g),
            ContentNode::Mesh(m) => visitor.visit_mesh(m),
            ContentNode::Light(l) => visitor.visit_light(l),
            ContentNode::Other(o) => visitor.visit_other(o),
        }
        for child in self.children() {
            child.accept(visitor);
        }
    }

    /// Union of every mesh volume in this subtree, hidden meshes included.
    pub fn bounding_volume(&self) -> Option<BoundingVolume> {
        let mut collector = BoundsCollector::default();
        self.accept(&mut collector);
        collector.volume
    }

    fn node_at(&self, path: &[usize]) -> Option<&ContentNode> {
        let mut node = self;
        for &i in path {
            node = node.children().get(i)?;
        }
        Some(node)
    }

    fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut ContentNode> {
        let mut node = self;
        for &i in path {
            node = node.children_mut()?.get_mut(i)?;
        }
        Some(node)
    }
}

#[derive(Default)]
struct BoundsCollector {
    volume: Option<BoundingVolume>,
}

impl ContentVisitor for BoundsCollector {
    fn visit_mesh(&mut self, mesh: &Mesh) {
        self.volume = Some(match self.volume {
            Some(v) => v.union(&mesh.bounds),
            None => mesh.bounds,
        });
    }
}

/// Child indices from the root down to a node.
pub type NodePath = SmallVec<[usize; 8]>;

/// Mesh name -> every mesh carrying that name.
#[derive(Clone, Debug, Default)]
pub struct PartIndex {
    by_name: FnvHashMap<String, SmallVec<[NodePath; 1]>>,
}

impl PartIndex {
    pub fn build(root: &ContentNode) -> Self {
        let mut index = Self::default();
        let mut path = NodePath::new();
        index.collect(root, &mut path);
        index
    }

    fn collect(&mut self, node: &ContentNode, path: &mut NodePath) {
        if let ContentNode::Mesh(m) = node {
            self.by_name
                .entry(m.name.clone())
                .or_default()
                .push(path.clone());
        }
        for (i, child) in node.children().iter().enumerate() {
            path.push(i);
            self.collect(child, path);
            path.pop();
        }
    }

    pub fn paths(&self, name: &str) -> &[NodePath] {
        self.by_name.get(name).map(|p| p.as_slice()).unwrap_or(&[])
    }

    /// Sorted, de-duplicated part names.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Result of toggling a part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartToggle {
    /// Visibility of the part after the toggle.
    pub visible: bool,
    /// Volume to frame next: the part itself when shown, the whole content
    /// when hidden.
    pub framing_volume: BoundingVolume,
}

/// Content subtree currently in the scene, with its part index.
#[derive(Clone, Debug)]
pub struct LoadedContent {
    path: String,
    root: ContentNode,
    parts: PartIndex,
}

impl LoadedContent {
    pub fn new(path: impl Into<String>, root: ContentNode) -> Self {
        let parts = PartIndex::build(&root);
        Self {
            path: path.into(),
            root,
            parts,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn root(&self) -> &ContentNode {
        &self.root
    }

    pub fn parts(&self) -> &PartIndex {
        &self.parts
    }

    pub fn bounding_volume(&self) -> Option<BoundingVolume> {
        self.root.bounding_volume()
    }

    pub fn is_part_visible(&self, name: &str) -> Option<bool> {
        let path = self.parts.paths(name).first()?;
        match self.root.node_at(path)? {
            ContentNode::Mesh(m) => Some(m.visible),
            _ => None,
        }
    }

    /// Flip visibility of every mesh named `name`.
    ///
    /// The new visibility is the inverse of the first mesh's and is applied
    /// to all of them, so meshes sharing a name always agree.
    pub fn toggle_part(&mut self, name: &str) -> Result<PartToggle, ViewerError> {
        let unknown = || ViewerError::UnknownPart(name.to_string());
        let visible = !self.is_part_visible(name).ok_or_else(unknown)?;

        let mut volumes: SmallVec<[BoundingVolume; 4]> = SmallVec::new();
        for path in self.parts.paths(name) {
            if let Some(ContentNode::Mesh(mesh)) = self.root.node_at_mut(path) {
                mesh.visible = visible;
                volumes.push(mesh.bounds);
            }
        }
        let part_volume = BoundingVolume::enclosing(&volumes).ok_or_else(unknown)?;

        let framing_volume = if visible {
            part_volume
        } else {
            self.root.bounding_volume().unwrap_or(part_volume)
        };
        Ok(PartToggle {
            visible,
            framing_volume,
        })
    }
}
