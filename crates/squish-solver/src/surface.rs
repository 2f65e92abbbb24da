//! The slime surface: owner of geometry, simulation state and pointers.

use std::time::Instant;

use squish_input::{PointerEvent, PointerSet};
use squish_math::{Vec2, Vec3};
use squish_mesh::normals::recompute_normals;
use squish_mesh::{build_grid, Adjacency, GridDims, GridParams, SurfaceView, VertexData};
use squish_telemetry::{EventBus, EventKind, SimulationEvent};
use squish_types::{PointerId, SquishError, SquishResult};

use crate::config::SlimeConfig;
use crate::input_force::apply_pointer_forces;
use crate::relax::relax_and_integrate;
use crate::state::SimulationState;

/// Summary of one completed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Index of the frame that just ran (0-indexed).
    pub frame: u64,
    /// Simulation time after the frame (seconds).
    pub sim_time: f64,
    /// Wall-clock time spent in the pipeline (seconds).
    pub wall_time: f64,
    /// Pointers that were active during the frame.
    pub active_pointers: usize,
}

/// Everything that changes together on a topology rebuild.
struct Geometry {
    params: GridParams,
    dims: GridDims,
    state: SimulationState,
    indices: Vec<u32>,
    adjacency: Adjacency,
}

impl Geometry {
    fn build(params: GridParams) -> SquishResult<Self> {
        let mesh = build_grid(&params)?;
        let adjacency = Adjacency::build(&mesh.indices, mesh.vertex_count())?;
        Ok(Self {
            params,
            dims: mesh.dims,
            state: SimulationState::from_mesh(&mesh),
            indices: mesh.indices,
            adjacency,
        })
    }
}

/// A deformable slime surface.
///
/// Owns the grid, the per-vertex simulation buffers and the active
/// pointers. [`tick`](Self::tick) advances one frame;
/// [`rebuild`](Self::rebuild) regenerates the grid. Both take `&mut self`,
/// so readers holding `&self` never observe a half-updated frame.
///
/// # Example
/// ```
/// use squish_math::Vec2;
/// use squish_solver::{SlimeConfig, SlimeSurface};
/// use squish_types::PointerId;
///
/// let mut surface = SlimeSurface::new(SlimeConfig::default(), 4.0, 3.0).unwrap();
/// surface.pointer_down(PointerId(0), Vec2::ZERO);
/// let stats = surface.tick(1.0 / 60.0);
/// assert_eq!(stats.active_pointers, 1);
/// assert!(surface.state().max_press() > 0.0);
/// ```
pub struct SlimeSurface {
    config: SlimeConfig,
    width: f32,
    height: f32,
    geometry: Geometry,
    triangle_normals: Vec<Vec3>,
    pointers: PointerSet,
    frame: u64,
    sim_time: f64,
    topology_version: u64,
    bus: Option<EventBus>,
}

impl SlimeSurface {
    /// Creates a surface covering a `width × height` world rectangle
    /// centred on the origin.
    pub fn new(config: SlimeConfig, width: f32, height: f32) -> SquishResult<Self> {
        let geometry = config
            .validate()
            .and_then(|()| Geometry::build(grid_params(&config, width, height)))
            .inspect_err(|error| tracing::error!(%error, "surface creation rejected"))?;
        tracing::debug!(
            x_size = geometry.dims.x_size,
            y_size = geometry.dims.y_size,
            vertices = geometry.state.vertex_count,
            "surface created"
        );
        Ok(Self {
            config,
            width,
            height,
            geometry,
            triangle_normals: Vec::new(),
            pointers: PointerSet::new(),
            frame: 0,
            sim_time: 0.0,
            topology_version: 0,
            bus: None,
        })
    }

    // ─── Frame pipeline ───────────────────────────────────────

    /// Advances the simulation by `dt` seconds.
    ///
    /// A negative or non-finite `dt` is treated as zero.
    pub fn tick(&mut self, dt: f32) -> FrameStats {
        let started = Instant::now();
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let frame = self.frame;

        self.emit(EventKind::FrameBegin { sim_time: self.sim_time });

        self.pointers.advance_frame();
        let active_pointers = self.pointers.len();

        let geometry = &mut self.geometry;
        apply_pointer_forces(
            &mut geometry.state,
            self.pointers.as_slice(),
            &self.config.force_params(),
            dt,
        );
        relax_and_integrate(&mut geometry.state, &self.config.relax_params(), dt);
        recompute_normals(
            &mut geometry.state.vertices,
            &geometry.indices,
            &geometry.adjacency,
            &mut self.triangle_normals,
        );

        self.frame += 1;
        self.sim_time += f64::from(dt);
        let wall_time = started.elapsed().as_secs_f64();

        if let Some(bus) = &mut self.bus {
            bus.emit(SimulationEvent::new(
                frame,
                EventKind::FrameEnd {
                    wall_time,
                    active_pointers: active_pointers as u32,
                },
            ));
            bus.flush();
        }

        FrameStats {
            frame,
            sim_time: self.sim_time,
            wall_time,
            active_pointers,
        }
    }

    // ─── Topology ─────────────────────────────────────────────

    /// Regenerates the grid from the current configuration and viewport.
    ///
    /// Without `force`, nothing happens unless the grid dimensions or the
    /// scale differ from the current build. Returns whether a rebuild took
    /// place. On failure the previous geometry stays in place.
    pub fn rebuild(&mut self, force: bool) -> SquishResult<bool> {
        let params = grid_params(&self.config, self.width, self.height);
        let dims = params.dimensions().map_err(|e| self.reject(e))?;

        if !force && dims == self.geometry.dims && params.scale == self.geometry.params.scale {
            return Ok(false);
        }

        let geometry = Geometry::build(params).map_err(|e| self.reject(e))?;
        self.geometry = geometry;
        self.triangle_normals.clear();
        self.topology_version += 1;

        let dims = self.geometry.dims;
        tracing::debug!(
            x_size = dims.x_size,
            y_size = dims.y_size,
            vertices = dims.vertex_count(),
            triangles = dims.triangle_count(),
            "surface rebuilt"
        );
        self.emit(EventKind::Rebuild {
            x_size: dims.x_size as u32,
            y_size: dims.y_size as u32,
            vertex_count: dims.vertex_count() as u32,
            triangle_count: dims.triangle_count() as u32,
        });
        Ok(true)
    }

    fn reject(&self, error: SquishError) -> SquishError {
        tracing::error!(%error, "surface change rejected, keeping previous geometry");
        self.emit(EventKind::RebuildRejected {
            reason: error.to_string(),
        });
        error
    }

    /// Resizes the world rectangle.
    ///
    /// With `auto_rebuild` the grid is regenerated when its dimensions
    /// change; a failed rebuild restores the previous viewport.
    pub fn set_viewport(&mut self, width: f32, height: f32) -> SquishResult<bool> {
        let previous = (self.width, self.height);
        self.width = width;
        self.height = height;
        if !self.config.auto_rebuild {
            return Ok(false);
        }
        self.rebuild(false).inspect_err(|_| {
            (self.width, self.height) = previous;
        })
    }

    /// Replaces the configuration.
    ///
    /// Force and relaxation tunables take effect on the next tick. Changes to
    /// spacing, border or scale rebuild the grid when `auto_rebuild` is set;
    /// if that rebuild fails the previous configuration is restored.
    pub fn set_config(&mut self, config: SlimeConfig) -> SquishResult<bool> {
        config.validate().map_err(|e| self.reject(e))?;
        let grid_changed = self.config.grid_changed(&config);
        let previous = std::mem::replace(&mut self.config, config);
        if !(grid_changed && self.config.auto_rebuild) {
            return Ok(false);
        }
        self.rebuild(false).inspect_err(|_| {
            self.config = previous;
        })
    }

    /// Turns target and elasticity regeneration on or off.
    pub fn set_regenerate(&mut self, regenerate: bool) {
        self.config.regenerate = regenerate;
    }

    /// Flips regeneration and returns the new setting.
    pub fn toggle_regenerate(&mut self) -> bool {
        self.config.regenerate = !self.config.regenerate;
        self.config.regenerate
    }

    // ─── Pointers ─────────────────────────────────────────────

    /// Applies a pointer event. Returns whether the pointer set changed.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        let changed = self.pointers.apply(event);
        match event {
            PointerEvent::Down { id, .. } if changed => {
                self.emit(EventKind::PointerDown { id: id.0 })
            }
            PointerEvent::Up { id } if changed => self.emit(EventKind::PointerUp { id: id.0 }),
            _ => {}
        }
        changed
    }

    pub fn pointer_down(&mut self, id: PointerId, position: Vec2) -> bool {
        self.handle_event(PointerEvent::Down { id, position })
    }

    pub fn pointer_drag(&mut self, id: PointerId, position: Vec2) -> bool {
        self.handle_event(PointerEvent::Drag { id, position })
    }

    pub fn pointer_up(&mut self, id: PointerId) -> bool {
        self.handle_event(PointerEvent::Up { id })
    }

    // ─── Telemetry ────────────────────────────────────────────

    /// Attaches an event bus. Events are flushed at the end of every tick.
    pub fn attach_event_bus(&mut self, bus: EventBus) {
        self.bus = Some(bus);
    }

    /// Detaches the event bus, flushing whatever is still queued.
    pub fn take_event_bus(&mut self) -> Option<EventBus> {
        let mut bus = self.bus.take()?;
        bus.flush();
        Some(bus)
    }

    fn emit(&self, kind: EventKind) {
        if let Some(bus) = &self.bus {
            bus.emit(SimulationEvent::new(self.frame, kind));
        }
    }

    // ─── Accessors ────────────────────────────────────────────

    /// Vertex records in render layout.
    pub fn vertices(&self) -> &[VertexData] {
        &self.geometry.state.vertices
    }

    /// 32-bit triangle index buffer.
    pub fn indices(&self) -> &[u32] {
        &self.geometry.indices
    }

    pub fn state(&self) -> &SimulationState {
        &self.geometry.state
    }

    pub fn dims(&self) -> GridDims {
        self.geometry.dims
    }

    /// Grid inputs of the current build.
    pub fn grid_params(&self) -> GridParams {
        self.geometry.params
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.geometry.adjacency
    }

    /// Per-triangle normals from the last tick (empty before the first tick).
    pub fn triangle_normals(&self) -> &[Vec3] {
        &self.triangle_normals
    }

    pub fn pointers(&self) -> &PointerSet {
        &self.pointers
    }

    pub fn config(&self) -> &SlimeConfig {
        &self.config
    }

    /// Current world rectangle `(width, height)`.
    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Visible rectangle in scale-normalized units, for shaders.
    pub fn local_bounds(&self) -> [f32; 4] {
        self.geometry.params.local_bounds()
    }

    /// Number of frames run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Incremented on every successful rebuild.
    pub fn topology_version(&self) -> u64 {
        self.topology_version
    }
}

impl SurfaceView for SlimeSurface {
    fn vertex_count(&self) -> usize {
        self.geometry.state.vertex_count
    }

    fn position(&self, i: usize) -> Vec3 {
        self.geometry.state.vertices[i].position()
    }

    fn normal(&self, i: usize) -> Vec3 {
        self.geometry.state.vertices[i].normal()
    }

    fn press_amount(&self, i: usize) -> f32 {
        self.geometry.state.vertices[i].press_amount()
    }
}

impl std::fmt::Debug for SlimeSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlimeSurface")
            .field("dims", &self.geometry.dims)
            .field("viewport", &(self.width, self.height))
            .field("pointers", &self.pointers.len())
            .field("frame", &self.frame)
            .finish()
    }
}

fn grid_params(config: &SlimeConfig, width: f32, height: f32) -> GridParams {
    GridParams {
        width,
        height,
        scale: config.scale,
        border: config.border,
        spacing: config.vertex_spacing,
    }
}
