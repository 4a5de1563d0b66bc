use std::time::Duration;

use crate::config::AppConfig;
use crate::domain::{CellCoord, GridSize, Point, Universe, line_to_cells};
use crate::error::SessionError;
use crate::rendering::{Renderer, Surface};

use super::{Controls, FramePlan, PlaybackState, Scheduler, SeedAccumulator};

/// Session owns everything the playback and editing handlers share.
///
/// Each user event has exactly one entry point here; behaviour switches on
/// the current [`PlaybackState`] and edit flag instead of rewiring handlers.
/// Editing is only possible while stopped: entering edit mode resets a
/// running session and starting playback leaves edit mode.
pub struct Session<U: Universe> {
    renderer: Renderer,
    slow_motion_step: Duration,
    max_dimension: i32,
    state: PlaybackState,
    universe: Option<U>,
    /// Grid the surface is currently laid out for
    grid: Option<GridSize>,
    seeds: SeedAccumulator,
    editing: bool,
    /// Last pointer position of an in-progress drag
    drag: Option<Point>,
    scheduler: Scheduler,
}

impl<U: Universe> Session<U> {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            renderer: Renderer::new(config.cell_size, config.palette.to_palette()),
            slow_motion_step: Duration::from_millis(config.slow_motion_step_ms),
            max_dimension: config.max_dimension,
            state: PlaybackState::Stopped,
            universe: None,
            grid: None,
            seeds: SeedAccumulator::default(),
            editing: false,
            drag: None,
            scheduler: Scheduler::default(),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn seeds(&self) -> &[u32] {
        self.seeds.indices()
    }

    pub fn universe(&self) -> Option<&U> {
        self.universe.as_ref()
    }

    pub fn grid(&self) -> Option<GridSize> {
        self.grid
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Whether a render loop iteration is pending
    pub fn is_loop_armed(&self) -> bool {
        self.scheduler.is_armed()
    }

    pub fn play_label(&self) -> &'static str {
        match self.state {
            PlaybackState::Playing => "pause",
            PlaybackState::Stopped | PlaybackState::Paused => "play",
        }
    }

    pub fn edit_label(&self) -> &'static str {
        if self.editing { "done" } else { "draw" }
    }

    fn grid_from(&self, controls: &Controls) -> Result<GridSize, SessionError> {
        let (width, height) = (controls.width, controls.height);
        let grid = GridSize::try_new(width, height)
            .ok_or(SessionError::InvalidDimensions { width, height })?;
        if width > self.max_dimension || height > self.max_dimension {
            return Err(SessionError::DimensionsTooLarge {
                width,
                height,
                max: self.max_dimension,
            });
        }
        Ok(grid)
    }

    fn layout(&mut self, grid: GridSize, surface: &mut impl Surface) {
        let (width, height) = self.renderer.canvas_size(grid);
        surface.resize(width, height);
        self.grid = Some(grid);
    }

    /// The play/pause button.
    pub fn toggle_play(
        &mut self,
        controls: &Controls,
        surface: &mut impl Surface,
        now: Duration,
    ) -> Result<(), SessionError> {
        match self.state {
            PlaybackState::Stopped => self.start(controls, surface, now)?,
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.resume(controls, surface, now),
        }
        Ok(())
    }

    fn start(
        &mut self,
        controls: &Controls,
        surface: &mut impl Surface,
        now: Duration,
    ) -> Result<(), SessionError> {
        let grid = self.grid_from(controls).inspect_err(|e| {
            log::warn!("Refusing to start playback: {}", e);
        })?;
        if self.grid != Some(grid) && !self.seeds.is_empty() {
            log::info!(
                "Grid changed to {}x{} since drawing, discarding {} seed cells",
                grid.width(),
                grid.height(),
                self.seeds.len()
            );
            self.seeds.reset();
        }
        self.layout(grid, surface);

        let universe = if self.seeds.is_empty() {
            U::new(grid.width(), grid.height())
        } else {
            U::new_with_state(grid.width(), grid.height(), self.seeds.indices())
        };
        log::info!(
            "Starting {}x{} universe from {}",
            grid.width(),
            grid.height(),
            if self.seeds.is_empty() { "random state".to_string() } else { format!("{} seed cells", self.seeds.len()) }
        );
        self.universe = Some(universe);
        self.editing = false;
        self.drag = None;
        self.state = PlaybackState::Playing;
        self.render_step(controls, surface, now);
        Ok(())
    }

    /// Stop advancing. The pending loop iteration notices and does not re-arm.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
            log::info!("Paused");
        }
    }

    fn resume(&mut self, controls: &Controls, surface: &mut impl Surface, now: Duration) {
        self.state = PlaybackState::Playing;
        log::info!("Resumed");
        self.render_step(controls, surface, now);
    }

    /// Drop the universe and all edits and blank the surface. Safe to repeat.
    pub fn reset(&mut self, surface: &mut impl Surface) {
        self.state = PlaybackState::Stopped;
        self.universe = None;
        self.grid = None;
        self.seeds.reset();
        self.editing = false;
        self.drag = None;
        self.scheduler.cancel();
        self.renderer.clear(surface);
        log::info!("Reset");
    }

    /// The draw/done button.
    pub fn toggle_edit(
        &mut self,
        controls: &Controls,
        surface: &mut impl Surface,
    ) -> Result<(), SessionError> {
        if self.editing {
            self.editing = false;
            self.drag = None;
            log::info!("Leaving edit mode with {} seed cells", self.seeds.len());
            return Ok(());
        }

        if self.state != PlaybackState::Stopped {
            self.reset(surface);
        }
        let grid = self.grid_from(controls)?;
        if self.grid != Some(grid) && !self.seeds.is_empty() {
            log::info!("Grid changed to {}x{}, discarding seed cells", grid.width(), grid.height());
            self.seeds.reset();
        }

        self.layout(grid, surface);
        self.renderer.clear(surface);
        self.renderer.draw_grid(surface, grid);
        let painted: Vec<CellCoord> = self.seeds.indices().iter().map(|&idx| grid.coord(idx)).collect();
        self.renderer.draw_cells(surface, &painted);

        self.editing = true;
        log::info!("Editing {}x{} grid", grid.width(), grid.height());
        Ok(())
    }

    pub fn pointer_down(&mut self, point: Point) {
        if self.editing {
            self.drag = Some(point);
        }
    }

    pub fn pointer_move(&mut self, point: Point, surface: &mut impl Surface) {
        if let Some(start) = self.drag {
            self.paint_segment(start, point, surface);
            self.drag = Some(point);
        }
    }

    pub fn pointer_up(&mut self, point: Point, surface: &mut impl Surface) {
        if let Some(start) = self.drag.take() {
            self.paint_segment(start, point, surface);
        }
    }

    fn paint_segment(&mut self, start: Point, end: Point, surface: &mut impl Surface) {
        let Some(grid) = self.grid else {
            return;
        };
        let sampled = line_to_cells(start, end, self.renderer.cell_size());
        let total = sampled.len();
        let cells: Vec<CellCoord> = sampled
            .into_iter()
            .filter(|&cell| self.seeds.record(grid, cell).is_some())
            .collect();
        self.renderer.draw_cells(surface, &cells);
        log::debug!(
            "Stroke {:?} -> {:?}: {} cells, {} outside the grid",
            start,
            end,
            cells.len(),
            total - cells.len()
        );
    }

    /// Called by the host at the start of each frame, before input is
    /// dispatched; runs the render loop when due. An iteration armed by a
    /// handler later in the same frame waits for the next call.
    pub fn frame(&mut self, controls: &Controls, surface: &mut impl Surface, now: Duration) {
        if self.scheduler.poll(now) {
            self.render_step(controls, surface, now);
        }
    }

    /// One render loop iteration. Does nothing, and does not re-arm, unless
    /// playing.
    fn render_step(&mut self, controls: &Controls, surface: &mut impl Surface, now: Duration) {
        if self.state != PlaybackState::Playing {
            log::trace!("Render loop exits in state {}", self.state.name());
            return;
        }
        let Some(universe) = self.universe.as_mut() else {
            return;
        };

        let plan = FramePlan::for_speed(controls.speed, self.slow_motion_step);
        for _ in 0..plan.generations {
            universe.tick();
        }

        let Some(grid) = GridSize::try_new(universe.width() as i32, universe.height() as i32) else {
            return;
        };
        // Re-read the buffer after ticking; the previous view is stale
        self.renderer.draw_grid(surface, grid);
        self.renderer.draw_universe(surface, grid, universe.cells());

        self.scheduler.arm(now, plan.wake);
        log::trace!("Advanced {} generations, next wake {:?}", plan.generations, plan.wake);
    }
}
