//! Tween playback engine
//!
//! A tick-driven state machine that interpolates between numeric vectors.
//! The engine owns no clock: the host pushes monotonic millisecond
//! timestamps through [`Animetric::tick`] once per frame, and the engine
//! derives every delta from timestamps it has recorded on earlier calls.

use crate::easing::Ease;
use animetric_core::{round, AnimetricError, Result, SignalStack, MAX_DECIMAL};
use std::fmt;

/// Lifecycle events published by the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineEvent {
    Initialize,
    Update,
    Play,
    Pause,
    Resume,
    Stop,
    Complete,
    Loop,
}

/// Playback state.
///
/// `Idle` is the never-played initial state; `Stopped` follows `stop()` or a
/// finite cycle's completion. Both re-enter `Playing` through `play()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayState {
    #[default]
    Idle,
    Playing,
    Paused,
    Stopped,
}

/// Snapshot emitted with every event
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimetricPayload {
    /// Eased progress, rounded to the configured precision. Stays in `[0, 1]`
    /// for standard curves; back/elastic overshoot.
    pub percent: f64,
    /// Interpolated vector, same length and order as `from`/`to`
    pub frames: Vec<f64>,
}

/// Engine configuration, mutated only through the setter operations
#[derive(Debug)]
pub struct AnimetricOptions {
    /// Loop forever when `true`
    pub infinite: bool,
    /// Start vector
    pub from: Vec<f64>,
    /// Target vector, paired element-wise with `from`
    pub to: Vec<f64>,
    /// Active playback time in milliseconds, excluding delay
    pub duration: f64,
    /// Digits kept after the decimal point in percent and frame values
    pub decimal: u32,
    /// Milliseconds to wait after `play()` before time starts advancing
    pub delay: f64,
    /// Curve remapping linear progress to eased progress
    pub ease: Ease,
}

impl Default for AnimetricOptions {
    fn default() -> Self {
        Self {
            infinite: false,
            from: Vec::new(),
            to: Vec::new(),
            duration: 0.0,
            decimal: 3,
            delay: 0.0,
            ease: Ease::linear(),
        }
    }
}

/// The tween playback engine.
///
/// Configure with the chainable setters, subscribe through
/// [`callable`](Self::callable) or the [`signal`](Self::signal_mut) surface,
/// then drive with `play()` and one `tick(timestamp)` per frame from the host
/// scheduler. All methods are synchronous; events dispatch inline before the
/// call returns.
pub struct Animetric {
    options: AnimetricOptions,
    /// Per-axis decreasing-direction flags, derived from `from`/`to`
    waves: Vec<bool>,
    /// Per-axis absolute distances, derived from `from`/`to`
    gaps: Vec<f64>,
    payload: AnimetricPayload,
    status: PlayState,
    ready: bool,
    completed: bool,
    /// Timestamp the delay countdown is measured from. `None` until a tick
    /// anchors it: a fresh engine with no observed tick, or a replay after
    /// stop/completion.
    anchor: Option<f64>,
    /// Last observed timestamp at the moment `pause()` was called
    pause_mark: Option<f64>,
    /// Latest accepted tick timestamp, recorded in every state
    last_timestamp: Option<f64>,
    signal: SignalStack<EngineEvent, AnimetricPayload>,
}

impl Animetric {
    pub fn new() -> Self {
        Self {
            options: AnimetricOptions::default(),
            waves: Vec::new(),
            gaps: Vec::new(),
            payload: AnimetricPayload::default(),
            status: PlayState::Idle,
            ready: false,
            completed: false,
            anchor: None,
            pause_mark: None,
            last_timestamp: None,
            signal: SignalStack::new(),
        }
    }

    /// Validate the vectors, derive waves/gaps, and reset the payload to
    /// zero progress.
    ///
    /// Called implicitly by [`play`](Self::play) when not yet ready. Fails
    /// fast when `from` and `to` differ in length.
    pub fn initialize(&mut self) -> Result<&mut Self> {
        if self.options.from.len() != self.options.to.len() {
            return Err(AnimetricError::VectorMismatch {
                from: self.options.from.len(),
                to: self.options.to.len(),
            });
        }
        self.derive();
        self.payload = AnimetricPayload {
            percent: 0.0,
            frames: self.options.from.clone(),
        };
        self.ready = true;
        self.signal.dispatch(EngineEvent::Initialize, &self.payload);
        Ok(self)
    }

    /// Replace the start vector.
    ///
    /// When already initialized, waves/gaps are re-derived immediately and
    /// the next tick interpolates against the new vector without resetting
    /// elapsed time.
    pub fn from(&mut self, values: &[f64]) -> Result<&mut Self> {
        if self.ready && values.len() != self.options.to.len() {
            return Err(AnimetricError::VectorMismatch {
                from: values.len(),
                to: self.options.to.len(),
            });
        }
        self.options.from = values.to_vec();
        self.retarget();
        Ok(self)
    }

    /// Replace the target vector. Same mid-flight semantics as
    /// [`from`](Self::from).
    pub fn to(&mut self, values: &[f64]) -> Result<&mut Self> {
        if self.ready && self.options.from.len() != values.len() {
            return Err(AnimetricError::VectorMismatch {
                from: self.options.from.len(),
                to: values.len(),
            });
        }
        self.options.to = values.to_vec();
        self.retarget();
        Ok(self)
    }

    /// Set the active playback time in milliseconds
    pub fn duration(&mut self, milliseconds: f64) -> Result<&mut Self> {
        if !milliseconds.is_finite() || milliseconds < 0.0 {
            return Err(AnimetricError::InvalidDuration(milliseconds));
        }
        self.options.duration = milliseconds;
        Ok(self)
    }

    /// Set the wait applied after `play()` before time advances
    pub fn delay(&mut self, milliseconds: f64) -> Result<&mut Self> {
        if !milliseconds.is_finite() || milliseconds < 0.0 {
            return Err(AnimetricError::InvalidDelay(milliseconds));
        }
        self.options.delay = milliseconds;
        Ok(self)
    }

    /// Set the rounding precision for percent and frame values
    pub fn decimal(&mut self, decimal: u32) -> Result<&mut Self> {
        if decimal == 0 {
            return Err(AnimetricError::ZeroDecimal);
        }
        if decimal > MAX_DECIMAL {
            return Err(AnimetricError::ExcessiveDecimal(decimal));
        }
        self.options.decimal = decimal;
        Ok(self)
    }

    /// Loop forever when `true`
    pub fn infinite(&mut self, infinite: bool) -> &mut Self {
        self.options.infinite = infinite;
        self
    }

    /// Set the easing curve
    pub fn ease(&mut self, ease: Ease) -> &mut Self {
        self.options.ease = ease;
        self
    }

    /// Register a per-frame payload consumer.
    ///
    /// Shorthand for subscribing to [`EngineEvent::Update`].
    pub fn callable<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(&AnimetricPayload) + Send + Sync + 'static,
    {
        self.signal.listen(EngineEvent::Update, callback);
        self
    }

    /// Transition to `Playing`.
    ///
    /// Initializes implicitly when not yet ready. From `Idle`/`Stopped` a
    /// fresh cycle starts: the delay anchor is the last observed timestamp,
    /// or the first tick after this call when none has been seen yet. From
    /// `Paused` this continues the interrupted cycle, like
    /// [`resume`](Self::resume).
    pub fn play(&mut self) -> Result<&mut Self> {
        if !self.ready {
            self.initialize()?;
        }
        match self.status {
            PlayState::Playing => return Ok(self),
            PlayState::Paused => self.rebase_after_pause(),
            PlayState::Idle | PlayState::Stopped => {
                // A fresh run anchors at the last observed time. A replay
                // after stop/completion may come long after the pump last
                // ticked, so it re-anchors lazily at the next tick instead.
                self.anchor = match self.status {
                    PlayState::Idle => self.last_timestamp,
                    _ => None,
                };
                self.completed = false;
                self.payload = AnimetricPayload {
                    percent: 0.0,
                    frames: self.options.from.clone(),
                };
            }
        }
        self.status = PlayState::Playing;
        tracing::debug!(anchor = ?self.anchor, "animetric playing");
        self.signal.dispatch(EngineEvent::Play, &self.payload);
        Ok(self)
    }

    /// Advance the animation against a host-supplied timestamp.
    ///
    /// Intended to be called once per animation-frame tick. The timestamp is
    /// recorded in every state, so no-op ticks while paused or stopped still
    /// teach the engine what time it is. Non-finite or decreasing timestamps
    /// are ignored. Per tick at most one `Update` dispatches, followed by
    /// `Complete` and then `Loop` when the cycle ends.
    pub fn tick(&mut self, timestamp: f64) -> &mut Self {
        if !timestamp.is_finite() {
            tracing::warn!(timestamp, "ignoring non-finite tick timestamp");
            return self;
        }
        if let Some(last) = self.last_timestamp {
            if timestamp < last {
                tracing::warn!(timestamp, last, "ignoring decreasing tick timestamp");
                return self;
            }
        }
        self.last_timestamp = Some(timestamp);

        if self.status != PlayState::Playing {
            return self;
        }

        let anchor = *self.anchor.get_or_insert(timestamp);
        let elapsed = timestamp - anchor - self.options.delay;
        if elapsed < 0.0 {
            // Still inside the delay window: a pure wait, no frame, no event
            return self;
        }

        let t = if self.options.duration <= 0.0 {
            1.0
        } else {
            (elapsed / self.options.duration).clamp(0.0, 1.0)
        };
        let percent = round(self.options.ease.compute(t), self.options.decimal);
        self.payload = AnimetricPayload {
            percent,
            frames: self.resolve_frames(percent),
        };
        self.signal.dispatch(EngineEvent::Update, &self.payload);

        if t >= 1.0 {
            self.signal.dispatch(EngineEvent::Complete, &self.payload);
            if self.options.infinite {
                tracing::trace!(timestamp, "cycle complete, looping");
                self.signal.dispatch(EngineEvent::Loop, &self.payload);
                // Restart as if play() were called now: delay applies again
                self.anchor = Some(timestamp);
            } else {
                tracing::debug!(timestamp, "animetric completed");
                self.status = PlayState::Stopped;
                self.completed = true;
            }
        }
        self
    }

    /// Freeze playback. Only valid while `Playing`; otherwise a no-op.
    pub fn pause(&mut self) -> &mut Self {
        if self.status != PlayState::Playing {
            tracing::trace!(status = ?self.status, "pause ignored");
            return self;
        }
        self.pause_mark = self.last_timestamp;
        self.status = PlayState::Paused;
        tracing::debug!("animetric paused");
        self.signal.dispatch(EngineEvent::Pause, &self.payload);
        self
    }

    /// Continue a paused run. Only valid while `Paused`; otherwise a no-op.
    ///
    /// The time base shifts forward by the paused span, so elapsed time
    /// continues seamlessly and paused wall time is excluded from progress.
    pub fn resume(&mut self) -> &mut Self {
        if self.status != PlayState::Paused {
            tracing::trace!(status = ?self.status, "resume ignored");
            return self;
        }
        self.rebase_after_pause();
        self.status = PlayState::Playing;
        tracing::debug!("animetric resumed");
        self.signal.dispatch(EngineEvent::Resume, &self.payload);
        self
    }

    /// Halt playback and reset to zero progress, from any state.
    ///
    /// Idempotent aside from re-dispatching `Stop`. A later `play()` starts
    /// a fresh cycle.
    pub fn stop(&mut self) -> &mut Self {
        self.payload = AnimetricPayload {
            percent: 0.0,
            frames: self.options.from.clone(),
        };
        self.status = PlayState::Stopped;
        self.anchor = None;
        self.pause_mark = None;
        self.completed = false;
        tracing::debug!("animetric stopped");
        self.signal.dispatch(EngineEvent::Stop, &self.payload);
        self
    }

    /// Current playback state
    pub fn status(&self) -> PlayState {
        self.status
    }

    /// Eased progress of the last computed frame
    pub fn percent(&self) -> f64 {
        self.payload.percent
    }

    /// True once `initialize()` has validated the vectors
    pub fn ready(&self) -> bool {
        self.ready
    }

    /// True once a finite cycle reached completion and has not replayed
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Last computed payload snapshot
    pub fn state(&self) -> &AnimetricPayload {
        &self.payload
    }

    /// Current configuration
    pub fn options(&self) -> &AnimetricOptions {
        &self.options
    }

    /// Per-axis decreasing-direction flags
    pub fn waves(&self) -> &[bool] {
        &self.waves
    }

    /// Per-axis absolute distances between `from` and `to`
    pub fn gaps(&self) -> &[f64] {
        &self.gaps
    }

    /// Lifecycle signal surface, for subscribing beyond `callable`
    pub fn signal(&self) -> &SignalStack<EngineEvent, AnimetricPayload> {
        &self.signal
    }

    pub fn signal_mut(&mut self) -> &mut SignalStack<EngineEvent, AnimetricPayload> {
        &mut self.signal
    }

    fn derive(&mut self) {
        self.waves = self
            .options
            .from
            .iter()
            .zip(&self.options.to)
            .map(|(from, to)| to - from < 0.0)
            .collect();
        self.gaps = self
            .options
            .from
            .iter()
            .zip(&self.options.to)
            .map(|(from, to)| (to - from).abs())
            .collect();
    }

    /// Re-derive after a vector setter. Before initialization this is
    /// deferred to `initialize()`; afterwards the invariants must hold
    /// immediately, including the frame snapshot, without resetting the
    /// elapsed-time bookkeeping.
    fn retarget(&mut self) {
        if self.ready {
            self.derive();
            self.payload.frames = self.resolve_frames(self.payload.percent);
        }
    }

    fn resolve_frames(&self, percent: f64) -> Vec<f64> {
        self.options
            .from
            .iter()
            .zip(self.waves.iter().zip(&self.gaps))
            .map(|(from, (wave, gap))| {
                let direction = if *wave { -1.0 } else { 1.0 };
                round(from + direction * gap * percent, self.options.decimal)
            })
            .collect()
    }

    fn rebase_after_pause(&mut self) {
        if let (Some(mark), Some(last)) = (self.pause_mark, self.last_timestamp) {
            if let Some(anchor) = self.anchor {
                self.anchor = Some(anchor + (last - mark));
            }
        }
        self.pause_mark = None;
    }
}

impl Default for Animetric {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Animetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animetric")
            .field("status", &self.status)
            .field("ready", &self.ready)
            .field("completed", &self.completed)
            .field("options", &self.options)
            .field("payload", &self.payload)
            .finish()
    }
}
