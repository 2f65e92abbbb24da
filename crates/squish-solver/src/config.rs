//! Surface configuration.
//!
//! Tunables of the slime surface: grid resolution, pointer influence and
//! relaxation speeds. Distances are given at scale 1 and multiplied by
//! [`SlimeConfig::scale`] before they reach the pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};
use squish_types::{SquishError, SquishResult};

/// Configuration for the slime surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlimeConfig {
    // ─── Grid ───
    /// Distance between vertices (scaled).
    pub vertex_spacing: f32,
    /// Margin generated outside the visible rectangle (scaled).
    pub border: f32,
    /// Master scale for every distance below.
    pub scale: f32,
    /// Regenerate the grid whenever viewport or grid tunables change.
    pub auto_rebuild: bool,

    // ─── Press ───
    /// How quickly vertices sink toward the press ceiling.
    pub press_force: f32,
    /// Maximum press depth (scaled).
    pub press_depth: f32,
    /// Radius of the firm inner press zone (scaled).
    pub press_radius_min: f32,
    /// Outer press radius (scaled).
    pub press_radius_max: f32,

    // ─── Drag ───
    /// Multiplier on pointer movement applied to nearby targets.
    pub drag_force: f32,
    /// Drag influence radius (scaled).
    pub drag_radius: f32,
    /// Drag travel that fully drains elasticity (scaled).
    pub drag_elasticity_distance: f32,

    // ─── Relaxation ───
    /// How quickly positions chase their targets.
    pub update_speed: f32,
    /// Whether targets and elasticity recover over time.
    pub regenerate: bool,
    /// Recovery rate of targets and elasticity.
    pub regenerate_speed: f32,
}

impl Default for SlimeConfig {
    fn default() -> Self {
        Self {
            vertex_spacing: 0.19,
            border: 0.4,
            scale: 1.0,
            auto_rebuild: true,
            press_force: 3.0,
            press_depth: 1.9,
            press_radius_min: 0.66,
            press_radius_max: 0.99,
            drag_force: 1.0,
            drag_radius: 2.46,
            drag_elasticity_distance: 1.89,
            update_speed: 10.0,
            regenerate: true,
            regenerate_speed: 0.3,
        }
    }
}

/// Scaled inputs of the pointer force model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceParams {
    pub drag_radius: f32,
    pub drag_force: f32,
    pub drag_elasticity_distance: f32,
    pub press_radius_min: f32,
    pub press_radius_max: f32,
    pub press_depth: f32,
    pub press_force: f32,
}

/// Scaled inputs of the relaxation stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelaxParams {
    /// Effective regeneration rate; zero when regeneration is off.
    pub regenerate_speed: f32,
    pub update_speed: f32,
    pub press_depth: f32,
}

impl SlimeConfig {
    /// A firm surface: shallow presses, quick recovery.
    pub fn stiff() -> Self {
        Self {
            press_depth: 0.8,
            drag_force: 0.5,
            drag_elasticity_distance: 0.9,
            update_speed: 16.0,
            regenerate_speed: 1.2,
            ..Default::default()
        }
    }

    /// A runny surface: deep presses, wide drags, slow recovery.
    pub fn gooey() -> Self {
        Self {
            press_force: 1.5,
            press_depth: 2.6,
            drag_radius: 3.2,
            drag_elasticity_distance: 3.5,
            update_speed: 6.0,
            regenerate_speed: 0.1,
            ..Default::default()
        }
    }

    /// Parses a TOML document. Missing keys take their default values.
    pub fn from_toml_str(source: &str) -> SquishResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| SquishError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SquishResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Serializes to a TOML document.
    pub fn to_toml_string(&self) -> SquishResult<String> {
        toml::to_string_pretty(self).map_err(|e| SquishError::Serialization(e.to_string()))
    }

    /// Rejects non-finite or negative tunables, a non-positive scale or
    /// spacing, and a press inner radius larger than the outer one.
    pub fn validate(&self) -> SquishResult<()> {
        let fields = [
            ("vertex_spacing", self.vertex_spacing),
            ("border", self.border),
            ("scale", self.scale),
            ("press_force", self.press_force),
            ("press_depth", self.press_depth),
            ("press_radius_min", self.press_radius_min),
            ("press_radius_max", self.press_radius_max),
            ("drag_force", self.drag_force),
            ("drag_radius", self.drag_radius),
            ("drag_elasticity_distance", self.drag_elasticity_distance),
            ("update_speed", self.update_speed),
            ("regenerate_speed", self.regenerate_speed),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(SquishError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.scale <= 0.0 {
            return Err(SquishError::InvalidConfig(
                "scale must be greater than zero".into(),
            ));
        }
        if self.vertex_spacing <= 0.0 {
            return Err(SquishError::InvalidConfig(
                "vertex_spacing must be greater than zero".into(),
            ));
        }
        if self.press_radius_min > self.press_radius_max {
            return Err(SquishError::InvalidConfig(format!(
                "press_radius_min ({}) exceeds press_radius_max ({})",
                self.press_radius_min, self.press_radius_max
            )));
        }
        Ok(())
    }

    /// Scaled force parameters.
    pub fn force_params(&self) -> ForceParams {
        ForceParams {
            drag_radius: self.drag_radius * self.scale,
            drag_force: self.drag_force,
            drag_elasticity_distance: self.drag_elasticity_distance * self.scale,
            press_radius_min: self.press_radius_min * self.scale,
            press_radius_max: self.press_radius_max * self.scale,
            press_depth: self.press_depth * self.scale,
            press_force: self.press_force,
        }
    }

    /// Scaled relaxation parameters.
    pub fn relax_params(&self) -> RelaxParams {
        RelaxParams {
            regenerate_speed: if self.regenerate { self.regenerate_speed } else { 0.0 },
            update_speed: self.update_speed,
            press_depth: self.press_depth * self.scale,
        }
    }

    /// True when switching from `self` to `other` changes the grid layout inputs.
    pub fn grid_changed(&self, other: &SlimeConfig) -> bool {
        self.vertex_spacing != other.vertex_spacing
            || self.border != other.border
            || self.scale != other.scale
    }
}
