//! JSON frame exporter: writes per-frame surface data for visual inspection.
//!
//! Implements the `Renderer` trait. Captures vertex positions and press
//! amounts at each frame, then serializes the entire run to a JSON file
//! on `finalize()`.

use std::path::PathBuf;

use serde::Serialize;
use squish_mesh::VertexData;
use squish_types::{SquishError, SquishResult};

use crate::renderer::{RenderFrame, Renderer};

/// A single frame of captured surface data.
#[derive(Serialize)]
struct FrameData {
    frame: u64,
    positions: Vec<f32>, // Interleaved [x0,y0,z0, x1,y1,z1, ...]
    press: Vec<f32>,
}

/// One grid build and the frames rendered with it.
#[derive(Serialize)]
struct TopologyData {
    vertex_count: usize,
    triangle_count: usize,
    indices: Vec<u32>,
    frames: Vec<FrameData>,
}

/// Exports surface frames to a JSON file.
///
/// Usage:
/// ```text
/// let mut exporter = JsonFrameExporter::new("output.json");
/// exporter.upload_topology(surface.vertices(), surface.indices())?;
/// // ... tick the surface, calling submit_frame() each step ...
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonFrameExporter {
    output_path: PathBuf,
    builds: Vec<TopologyData>,
    frame_count: u32,
}

impl JsonFrameExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            builds: Vec::new(),
            frame_count: 0,
        }
    }
}

impl Renderer for JsonFrameExporter {
    fn upload_topology(&mut self, vertices: &[VertexData], indices: &[u32]) -> SquishResult<()> {
        if indices.iter().any(|&i| i as usize >= vertices.len()) {
            return Err(SquishError::InvalidMesh(
                "Index buffer references a missing vertex".into(),
            ));
        }
        self.builds.push(TopologyData {
            vertex_count: vertices.len(),
            triangle_count: indices.len() / 3,
            indices: indices.to_vec(),
            frames: Vec::new(),
        });
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame<'_>) -> SquishResult<()> {
        let build = self.builds.last_mut().ok_or_else(|| {
            SquishError::InvariantViolation("Frame submitted before any topology upload".into())
        })?;
        if frame.vertices.len() != build.vertex_count {
            return Err(SquishError::InvariantViolation(format!(
                "Frame has {} vertices, topology has {}",
                frame.vertices.len(),
                build.vertex_count
            )));
        }
        build.frames.push(FrameData {
            frame: frame.frame,
            positions: frame.vertices.iter().flat_map(|v| v.position).collect(),
            press: frame.vertices.iter().map(|v| v.press_amount()).collect(),
        });
        self.frame_count += 1;
        Ok(())
    }

    fn finalize(&mut self) -> SquishResult<()> {
        let builds = std::mem::take(&mut self.builds);
        let json = serde_json::to_string(&builds).map_err(|e| {
            SquishError::Serialization(format!("JSON serialization failed: {e}"))
        })?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frame_count
    }
}
