use crate::data::types::{BoundingBox, PointVertex, RenderPrimitives};
use rayon::prelude::*;
use tns::TensorDataset;

/// Flatten a dataset into the renderer's point buffer and bounding box.
///
/// Pure data-shape transform: point `i` is vertex `i` narrowed to `f32`,
/// extents pass through unchanged. Values are not mapped to colour or size.
pub fn present(dataset: &TensorDataset) -> RenderPrimitives {
    // Indexed parallel collect keeps file order.
    let points: Vec<PointVertex> = dataset
        .vertices()
        .par_iter()
        .map(|v| PointVertex {
            position: [v[0] as f32, v[1] as f32, v[2] as f32],
        })
        .collect();

    let bounds = BoundingBox::from_extent(dataset.extent());

    // Dataset-level summary is confined to debug builds.
    #[cfg(debug_assertions)]
    {
        match &bounds {
            Some(b) => {
                let size = b.size();
                log::debug!(
                    "Presenting tensor: pts={}, modes={}, AABB=min({:.2},{:.2},{:.2}) max({:.2},{:.2},{:.2}), size=({:.2},{:.2},{:.2})",
                    points.len(),
                    dataset.mode_count(),
                    b.min[0], b.min[1], b.min[2],
                    b.max[0], b.max[1], b.max[2],
                    size.x, size.y, size.z
                );
            }
            None => log::debug!("Presenting empty tensor: no bounding box"),
        }
    }

    RenderPrimitives { points, bounds }
}
