//! # squish-solver
//!
//! Per-frame simulation of the Squish slime surface.
//!
//! ## Pipeline
//!
//! Every [`SlimeSurface::tick`] runs four stages in order, each one a
//! parallel pass over the vertices that finishes before the next starts:
//!
//! 1. **Pointer forces** ([`input_force`]): drag and press move the
//!    per-vertex targets and drain elasticity.
//! 2. **Relaxation** ([`relax`]): targets regenerate toward rest,
//!    positions chase targets, press amounts are published.
//! 3. **Triangle normals** and
//! 4. **Vertex normals**: see `squish_mesh::normals`.
//!
//! Grid topology changes only through [`SlimeSurface::rebuild`].

pub mod config;
pub mod input_force;
pub mod relax;
pub mod state;
pub mod surface;

pub use config::{ForceParams, RelaxParams, SlimeConfig};
pub use state::SimulationState;
pub use surface::{FrameStats, SlimeSurface};
