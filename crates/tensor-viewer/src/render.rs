//! Hand-off seam to the external 3D scene.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::data::types::{BoundingBox, RenderPrimitives};

/// Anything that can show a point cloud and an optional bounding-box overlay.
pub trait SceneSink {
    fn show_points(&mut self, primitives: &RenderPrimitives) -> Result<()>;

    fn show_bounds(&mut self, bounds: &BoundingBox) -> Result<()>;

    /// Show the points, then the box when there is one.
    fn submit(&mut self, primitives: &RenderPrimitives) -> Result<()> {
        self.show_points(primitives)?;

        match &primitives.bounds {
            Some(bounds) => self.show_bounds(bounds),
            None => {
                log::warn!("Dataset has no records; skipping bounding box");
                Ok(())
            }
        }
    }
}

/// Logs what would be drawn; used when no scene output is requested.
#[derive(Debug, Default)]
pub struct LogSceneSink {
    frames: u64,
}

impl LogSceneSink {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl SceneSink for LogSceneSink {
    fn show_points(&mut self, primitives: &RenderPrimitives) -> Result<()> {
        self.frames += 1;
        log::info!(
            "Scene update {}: {} points ({} bytes)",
            self.frames,
            primitives.len(),
            primitives.as_bytes().len()
        );
        Ok(())
    }

    fn show_bounds(&mut self, bounds: &BoundingBox) -> Result<()> {
        let c = bounds.center();
        let s = bounds.size();
        log::info!(
            "Bounding box: center=({:.3},{:.3},{:.3}) size=({:.3},{:.3},{:.3})",
            c.x, c.y, c.z,
            s.x, s.y, s.z
        );
        Ok(())
    }
}

#[derive(Serialize)]
struct SceneDocument<'a> {
    point_count: usize,
    points: &'a [[f32; 3]],
    bounds: Option<BoundingBox>,
    edges: Vec<[[f32; 3]; 2]>,
}

/// Captures the last submitted scene so it can be written out as JSON.
#[derive(Debug, Default)]
pub struct JsonScene {
    points: Vec<[f32; 3]>,
    bounds: Option<BoundingBox>,
}

impl JsonScene {
    pub fn write<W: Write>(&self, mut w: W, pretty: bool) -> Result<()> {
        let doc = SceneDocument {
            point_count: self.points.len(),
            points: &self.points,
            bounds: self.bounds,
            edges: self
                .bounds
                .map(|b| b.edges().to_vec())
                .unwrap_or_default(),
        };

        if pretty {
            serde_json::to_writer_pretty(&mut w, &doc)?;
        } else {
            serde_json::to_writer(&mut w, &doc)?;
        }
        w.flush()?;

        Ok(())
    }
}

impl SceneSink for JsonScene {
    fn show_points(&mut self, primitives: &RenderPrimitives) -> Result<()> {
        self.points = primitives.points.iter().map(|p| p.position).collect();
        // A new point set invalidates any previous overlay.
        self.bounds = None;
        Ok(())
    }

    fn show_bounds(&mut self, bounds: &BoundingBox) -> Result<()> {
        self.bounds = Some(*bounds);
        Ok(())
    }
}
