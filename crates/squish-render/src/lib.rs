//! # squish-render
//!
//! Pluggable render consumer for the Squish surface.
//!
//! Provides a `Renderer` trait with a `HeadlessRenderer` stub and a
//! `JsonFrameExporter` that writes every frame to a JSON file for
//! offline inspection.

pub mod json_exporter;
pub mod renderer;
pub use json_exporter::JsonFrameExporter;
pub use renderer::{HeadlessRenderer, RenderFrame, Renderer};
