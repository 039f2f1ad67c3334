//! Frame-loop state machine tying the sampler, an element store and a
//! presentation surface together.
//!
//! The driver is host-agnostic: scheduling and event subscription go through
//! [`FrameHost`], presentation through [`Surface`]. Event handlers may only
//! call [`Animator::record_pointer`], [`Animator::pointer_left`] and
//! [`Animator::request_rebuild`]; none of them touch element state, so a
//! rebuild always happens at the start of a tick and never in the middle.

use crate::config::{ConfigChange, FieldConfig, PartialConfig};
use crate::error::{HostError, SurfaceError};
use crate::sampler::FieldSampler;
use crate::surface::{Surface, SurfaceMetrics, SurfaceStatus};
use glam::Vec2;

/// An element store driven by the animator.
pub trait Effect<S: ?Sized> {
    type Element;

    /// Discard all elements and recreate them at rest for `metrics`.
    fn rebuild(&mut self, metrics: &SurfaceMetrics, config: &FieldConfig, surface: &S);

    /// Update every element for the surface-local `pointer`.
    fn tick(&mut self, pointer: Vec2, config: &FieldConfig, surface: &S);

    fn elements(&self) -> &[Self::Element];
}

/// Scheduling and event plumbing supplied by the host environment.
pub trait FrameHost {
    /// Schedule exactly one future `Animator::on_frame(token)` call.
    fn request_frame(&mut self, token: FrameToken) -> Result<(), HostError>;
    /// Drop the pending frame, if any.
    fn cancel_frame(&mut self);
    /// Attach pointer and resize/content listeners.
    fn subscribe(&mut self) -> Result<(), HostError>;
    /// Detach everything `subscribe` attached. Must be safe to call when
    /// nothing (or only part) is attached.
    fn unsubscribe(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

/// Identifies the run a scheduled frame belongs to. Each `start` issues a new
/// token, so a callback left over from an earlier run is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Committed,
    /// Surface unavailable or commit failed; the loop continues.
    Skipped,
    /// Idle driver or stale token; nothing ran.
    Ignored,
    /// The driver stopped during this frame.
    Stopped,
}

pub struct Animator<E, S, H: FrameHost> {
    effect: E,
    surface: S,
    host: H,
    sampler: FieldSampler,
    config: FieldConfig,
    state: DriverState,
    generation: u64,
    pending_rebuild: bool,
    built_size: Option<Vec2>,
    unavailable_frames: u32,
    frames_committed: u64,
    rebuilds: u64,
}

impl<E, S, H> Animator<E, S, H>
where
    E: Effect<S>,
    S: Surface<<E as Effect<S>>::Element>,
    H: FrameHost,
{
    pub fn new(effect: E, surface: S, host: H, config: FieldConfig) -> Self {
        let config = config.sanitized();
        Self {
            effect,
            surface,
            host,
            sampler: FieldSampler::new(config.smoothing_factor),
            config,
            state: DriverState::Idle,
            generation: 0,
            pending_rebuild: true,
            built_size: None,
            unavailable_frames: 0,
            frames_committed: 0,
            rebuilds: 0,
        }
    }

    /// Idle → Running. Returns `Ok(false)` when already running.
    ///
    /// On failure every listener acquired so far is released and the driver
    /// stays Idle.
    pub fn start(&mut self) -> Result<bool, HostError> {
        if self.state == DriverState::Running {
            log::debug!("[driver] start ignored; already running");
            return Ok(false);
        }
        if let Err(e) = self.host.subscribe() {
            self.host.unsubscribe();
            return Err(e);
        }
        self.generation += 1;
        if let Err(e) = self.host.request_frame(self.token()) {
            self.host.unsubscribe();
            return Err(e);
        }
        self.state = DriverState::Running;
        self.unavailable_frames = 0;
        log::info!("[driver] started (run {})", self.generation);
        Ok(true)
    }

    /// Running → Idle. Returns `false` when already idle.
    pub fn stop(&mut self) -> bool {
        if self.state == DriverState::Idle {
            return false;
        }
        self.state = DriverState::Idle;
        self.host.cancel_frame();
        self.host.unsubscribe();
        log::info!(
            "[driver] stopped after {} committed frames",
            self.frames_committed
        );
        true
    }

    /// Run one frame: probe, rebuild if needed, advance, tick, commit, reschedule.
    pub fn on_frame(&mut self, token: FrameToken) -> FrameOutcome {
        if self.state != DriverState::Running || token != self.token() {
            return FrameOutcome::Ignored;
        }

        let metrics = match self.surface.probe() {
            SurfaceStatus::Ready(m) if m.size.x > 0.0 && m.size.y > 0.0 => m,
            SurfaceStatus::Ready(_) | SurfaceStatus::Unavailable => return self.skip_frame(),
            SurfaceStatus::Detached => {
                log::warn!("[driver] surface detached; stopping");
                self.stop();
                return FrameOutcome::Stopped;
            }
        };
        self.unavailable_frames = 0;

        if self.pending_rebuild || self.built_size != Some(metrics.size) {
            self.effect.rebuild(&metrics, &self.config, &self.surface);
            self.pending_rebuild = false;
            self.built_size = Some(metrics.size);
            self.rebuilds += 1;
        }

        let cursor = self.sampler.advance_relative(metrics.origin);
        self.effect.tick(cursor, &self.config, &self.surface);

        let outcome = match self.surface.commit(self.effect.elements(), &self.config) {
            Ok(()) => {
                self.frames_committed += 1;
                FrameOutcome::Committed
            }
            Err(SurfaceError::Detached) => {
                log::warn!("[driver] surface detached during commit; stopping");
                self.stop();
                return FrameOutcome::Stopped;
            }
            Err(e @ SurfaceError::Commit(_)) => {
                log::warn!("[driver] {e}");
                FrameOutcome::Skipped
            }
        };
        self.reschedule(outcome)
    }

    /// Record a pointer sample in viewport space.
    pub fn record_pointer(&mut self, x: f32, y: f32) {
        self.sampler.record_pointer(x, y);
    }

    /// Pointer left the tracked area.
    pub fn pointer_left(&mut self) {
        self.sampler.reset();
    }

    /// Coalesced: any number of requests before the next tick cause one rebuild.
    pub fn request_rebuild(&mut self) {
        self.pending_rebuild = true;
    }

    /// Adjust parameters in place. Elements are rebuilt only when the change
    /// affects their layout.
    pub fn configure(&mut self, partial: &PartialConfig) -> ConfigChange {
        let change = self.config.apply(partial);
        if change.layout {
            self.pending_rebuild = true;
        }
        if change.smoothing {
            self.sampler.set_smoothing(self.config.smoothing_factor);
        }
        change
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn token(&self) -> FrameToken {
        FrameToken(self.generation)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn sampler(&self) -> &FieldSampler {
        &self.sampler
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn frames_committed(&self) -> u64 {
        self.frames_committed
    }

    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    fn skip_frame(&mut self) -> FrameOutcome {
        self.unavailable_frames = self.unavailable_frames.saturating_add(1);
        if let Some(max) = self.config.max_unavailable_frames {
            if self.unavailable_frames >= max {
                log::warn!(
                    "[driver] surface unavailable for {} frames; stopping",
                    self.unavailable_frames
                );
                self.stop();
                return FrameOutcome::Stopped;
            }
        }
        self.reschedule(FrameOutcome::Skipped)
    }

    fn reschedule(&mut self, outcome: FrameOutcome) -> FrameOutcome {
        if self.state != DriverState::Running {
            return FrameOutcome::Stopped;
        }
        if let Err(e) = self.host.request_frame(self.token()) {
            log::error!("[driver] {e}; stopping");
            self.stop();
            return FrameOutcome::Stopped;
        }
        outcome
    }
}

impl<E, S, H: FrameHost> Drop for Animator<E, S, H> {
    fn drop(&mut self) {
        if self.state == DriverState::Running {
            self.state = DriverState::Idle;
            self.host.cancel_frame();
            self.host.unsubscribe();
        }
    }
}
