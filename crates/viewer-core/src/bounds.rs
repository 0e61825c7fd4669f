use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding volume, `min <= max` on every axis.
///
/// Deserialized corners are normalised, so a host reporting them swapped
/// still yields non-negative extents.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Corners")]
pub struct BoundingVolume {
    pub min: Vec3,
    pub max: Vec3,
}

#[derive(Deserialize)]
struct Corners {
    min: Vec3,
    max: Vec3,
}

impl From<Corners> for BoundingVolume {
    fn from(c: Corners) -> Self {
        Self::new(c.min, c.max)
    }
}

impl BoundingVolume {
    /// Build from two corners in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        let half = extents.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Per-axis size.
    #[inline]
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Smallest volume enclosing all of `volumes`, or `None` when empty.
    pub fn enclosing<'a>(volumes: impl IntoIterator<Item = &'a BoundingVolume>) -> Option<Self> {
        volumes
            .into_iter()
            .fold(None, |acc: Option<Self>, v| match acc {
                Some(a) => Some(a.union(v)),
                None => Some(*v),
            })
    }
}
