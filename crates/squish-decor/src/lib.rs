//! # squish-decor
//!
//! Scatters decorations (sprinkles, bubbles, glitter) over a slime
//! surface. Each decoration is pinned to a vertex, follows it as the
//! surface deforms, sinks in with the press amount and is oriented along
//! the vertex normal.
//!
//! Meshes and materials stay with the caller; this crate only produces
//! [`DecorationInstance`] transforms.

pub mod info;
pub mod spawner;

pub use info::{DecorationInfo, DecorationInstance};
pub use spawner::DecorationSpawner;
