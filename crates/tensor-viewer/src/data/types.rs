//! Core data types for the tensor viewer, focused on what the renderer consumes.

use glam::{DVec3, Vec3};
use serde::Serialize;
use tns::Extent3;

/// Defines the per-point data uploaded to the renderer's position buffer.
/// Three consecutive `f32`s, no padding, so a slice of these is also a flat
/// `x y z x y z ...` float buffer.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq, Serialize)]
pub struct PointVertex {
    pub position: [f32; 3],
}

/// Corner pairs of a box whose corner `i` takes max on x if bit 0 is set,
/// max on y if bit 1 is set, max on z if bit 2 is set.
const BOX_EDGES: [(usize, usize); 12] = [
    // along x
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    // along y
    (0, 2),
    (1, 3),
    (4, 6),
    (5, 7),
    // along z
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Axis-aligned bounds of a non-empty dataset, in data coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl BoundingBox {
    /// `None` while the extent still holds its sentinels.
    pub fn from_extent(extent: Extent3) -> Option<Self> {
        if extent.is_empty() {
            return None;
        }

        Some(Self {
            min: extent.min,
            max: extent.max,
        })
    }

    #[inline]
    pub fn center(&self) -> DVec3 {
        (DVec3::from(self.min) + DVec3::from(self.max)) * 0.5
    }

    #[inline]
    pub fn size(&self) -> DVec3 {
        DVec3::from(self.max) - DVec3::from(self.min)
    }

    /// The eight corners in renderer precision.
    pub fn corners(&self) -> [Vec3; 8] {
        let lo = DVec3::from(self.min).as_vec3();
        let hi = DVec3::from(self.max).as_vec3();

        std::array::from_fn(|i| {
            Vec3::new(
                if i & 1 != 0 { hi.x } else { lo.x },
                if i & 2 != 0 { hi.y } else { lo.y },
                if i & 4 != 0 { hi.z } else { lo.z },
            )
        })
    }

    /// The twelve wireframe segments of the box, for a line-segment overlay.
    pub fn edges(&self) -> [[[f32; 3]; 2]; 12] {
        let c = self.corners();
        BOX_EDGES.map(|(a, b)| [c[a].to_array(), c[b].to_array()])
    }
}

/// Everything the external renderer needs for one loaded tensor.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPrimitives {
    /// One entry per dataset vertex, in file order.
    pub points: Vec<PointVertex>,
    /// `None` for a dataset with no records; nothing should be drawn for it.
    pub bounds: Option<BoundingBox>,
}

impl RenderPrimitives {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Flat position buffer, three floats per point.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }

    /// Raw bytes of the position buffer, ready for upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }
}
