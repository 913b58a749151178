use crate::core::render::{Frame, Renderer};
use crate::core::scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
use crate::core::{InitialConditions, OutcomePreview, SimulationConfig, TrackWorld};
use crate::Result;
use tracing::{info, trace};

/// Whether the loop has a frame scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No stepping is scheduled
    Idle,

    /// A step runs on the next refresh
    Running,
}

/// Drives a run one step per display refresh
///
/// At most one frame is pending at any time. Every callback other than the
/// pending one is ignored, so a restarted run can never be stepped by the
/// chain of a previous run.
pub struct SimulationLoop<S: FrameScheduler> {
    scheduler: S,
    config: SimulationConfig,
    world: Option<TrackWorld>,
    preview: Option<OutcomePreview>,
    pending: Option<FrameHandle>,
}

impl<S: FrameScheduler> SimulationLoop<S> {
    /// Creates an idle loop
    pub fn new(scheduler: S, config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            scheduler,
            config,
            world: None,
            preview: None,
            pending: None,
        })
    }

    /// Starts a new run, replacing any current one
    ///
    /// The pending frame of the previous run is cancelled before the new
    /// bodies are created. Returns the one-collision outcome preview.
    /// Conditions whose velocities overflow in track units are rejected
    /// before anything changes, leaving the current run untouched.
    pub fn start(&mut self, conditions: InitialConditions) -> Result<&OutcomePreview> {
        self.config.check_conditions(&conditions)?;
        self.cancel_pending();

        // The config was validated in `new` and is never mutated afterwards.
        let world = TrackWorld::with_validated_config(&conditions, self.config.clone());

        info!(
            v1 = conditions.v1(),
            v2 = conditions.v2(),
            m1 = conditions.m1(),
            m2 = conditions.m2(),
            "starting run"
        );

        self.world = Some(world);
        self.pending = Some(self.scheduler.request_frame());
        Ok(self.preview.insert(OutcomePreview::compute(&conditions)))
    }

    /// Stops stepping, keeping the last state for display
    pub fn stop(&mut self) {
        if self.pending.is_some() {
            info!("stopping run");
        }
        self.cancel_pending();
    }

    /// Stops stepping and discards the run
    pub fn reset(&mut self) {
        self.cancel_pending();
        if self.world.take().is_some() {
            info!("run reset");
        }
        self.preview = None;
    }

    /// Handles a refresh callback
    ///
    /// When `handle` is the pending frame, steps the world once, renders the
    /// result and schedules the next frame, returning `Ok(true)`. Any other
    /// handle is stale and returns `Ok(false)` without touching the world.
    /// A failed render leaves the loop idle.
    pub fn on_frame<R: Renderer>(&mut self, handle: FrameHandle, renderer: &mut R) -> std::result::Result<bool, R::Error> {
        if self.pending != Some(handle) {
            trace!(?handle, "ignoring stale frame");
            return Ok(false);
        }
        self.pending = None;

        let Some(world) = self.world.as_mut() else {
            return Ok(false);
        };

        let flags = world.step();
        renderer.render(&Frame::new(world, flags))?;

        self.pending = Some(self.scheduler.request_frame());
        Ok(true)
    }

    /// Returns whether a frame is scheduled
    pub fn state(&self) -> LoopState {
        if self.pending.is_some() {
            LoopState::Running
        } else {
            LoopState::Idle
        }
    }

    /// Returns whether a frame is scheduled
    pub fn is_running(&self) -> bool {
        self.state() == LoopState::Running
    }

    /// The current or last run, if any
    pub fn world(&self) -> Option<&TrackWorld> {
        self.world.as_ref()
    }

    /// The outcome preview of the current or last run, if any
    pub fn preview(&self) -> Option<&OutcomePreview> {
        self.preview.as_ref()
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the scheduler
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Returns a mutable reference to the scheduler, for hosts that fire frames
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}

impl SimulationLoop<ManualScheduler> {
    /// Fires the next queued frame
    ///
    /// Returns `Ok(false)` when nothing was queued or the frame was stale.
    pub fn pump<R: Renderer>(&mut self, renderer: &mut R) -> std::result::Result<bool, R::Error> {
        match self.scheduler.next_frame() {
            Some(handle) => self.on_frame(handle, renderer),
            None => Ok(false),
        }
    }
}
