//! # squish-mesh
//!
//! Triangulated surface representation for the Squish engine.
//!
//! ## Key Types
//!
//! - [`VertexData`]: The 40-byte vertex record handed to the renderer
//!   (position, normal, auxiliary UV/press channel).
//! - [`SurfaceMesh`]: Vertex records, 32-bit index buffer and lock mask
//!   of one generated grid.
//! - [`GridParams`]: Inputs of the equilateral grid generator.
//! - [`Adjacency`]: Fixed-width vertex-to-triangle table used by the
//!   normal recomputation passes.
//! - [`SurfaceView`]: Read-only per-vertex access for surface consumers.

pub mod generators;
pub mod mesh;
pub mod normals;
pub mod topology;
pub mod vertex;
pub mod view;

pub use generators::{build_grid, GridDims, GridParams};
pub use mesh::SurfaceMesh;
pub use topology::Adjacency;
pub use vertex::VertexData;
pub use view::SurfaceView;
