//! Renderer trait and HeadlessRenderer stub.
//!
//! The renderer receives the index buffer once per topology build and the
//! vertex buffer once per frame. The headless renderer discards all
//! frames, serving as a no-op for benchmarks and CI.

use squish_mesh::VertexData;
use squish_types::SquishResult;

/// A single render frame, borrowed from the surface between ticks.
pub struct RenderFrame<'a> {
    /// Frames run on the surface when this frame was captured.
    pub frame: u64,
    /// Vertex records in render layout.
    pub vertices: &'a [VertexData],
}

impl<'a> RenderFrame<'a> {
    pub fn new(frame: u64, vertices: &'a [VertexData]) -> Self {
        Self { frame, vertices }
    }

    /// Vertex buffer bytes, `VertexData::STRIDE` per vertex.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices)
    }
}

/// Trait for consuming surface output.
///
/// # Implementations
/// - [`HeadlessRenderer`]: Discards frames (benchmarks, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter): Writes frames to JSON
pub trait Renderer: Send {
    /// Receives the topology of a new grid build.
    fn upload_topology(&mut self, vertices: &[VertexData], indices: &[u32]) -> SquishResult<()>;

    /// Submit a frame for rendering.
    fn submit_frame(&mut self, frame: &RenderFrame<'_>) -> SquishResult<()>;

    /// Finalize rendering (flush buffers, close files, etc.).
    fn finalize(&mut self) -> SquishResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Headless renderer: discards all frames.
///
/// Used for benchmarks and CI where no visual output is needed.
pub struct HeadlessRenderer {
    frames: u32,
    uploads: u32,
}

impl HeadlessRenderer {
    /// Creates a new headless renderer.
    pub fn new() -> Self {
        Self { frames: 0, uploads: 0 }
    }

    /// Number of topology uploads received.
    pub fn upload_count(&self) -> u32 {
        self.uploads
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HeadlessRenderer {
    fn upload_topology(&mut self, _vertices: &[VertexData], _indices: &[u32]) -> SquishResult<()> {
        self.uploads += 1;
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &RenderFrame<'_>) -> SquishResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> SquishResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
