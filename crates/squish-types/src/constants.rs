//! Engine limits and simulation defaults.

/// Default frame timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Number of adjacency slots stored per vertex.
///
/// A vertex of the brick-pattern grid touches at most six triangles.
pub const ADJACENCY_WIDTH: usize = 6;

/// Largest grid dimension (quads per axis) a rebuild will accept.
pub const MAX_GRID_SIZE: usize = 1000;

/// Minimum number of elements handed to one worker in a parallel stage.
pub const PARALLEL_CHUNK: usize = 100;

/// Row height of the equilateral grid relative to the vertex spacing (√3 / 2).
pub const ROW_HEIGHT_FACTOR: f32 = 0.866_025_4;
