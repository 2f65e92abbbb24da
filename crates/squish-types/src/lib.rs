//! # squish-types
//!
//! Shared types, identifiers, error types, and tuning constants
//! for the Squish deformable surface engine.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other Squish crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{SquishError, SquishResult};
pub use ids::{PointerId, TriangleId, VertexId};
