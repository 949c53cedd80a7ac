//! Simulation clock.
//!
//! A universal source of truth for time-related values inside an engine.
//! Unlike a wall-clock timer, the clock is advanced by the host's `dt` each
//! frame, so two runs fed the same deltas produce identical histories,
//! required for replay and testing.
//!
//! # Example
//!
//! ```
//! use edusim::clock::SimClock;
//!
//! let mut clock = SimClock::new();
//! let (elapsed, delta) = clock.advance(1.0 / 60.0);
//! assert_eq!(delta, 1.0 / 60.0);
//! assert_eq!(clock.frame(), 1);
//! assert!(elapsed > 0.0);
//! ```

/// Largest frame delta the clock will accept, in seconds.
///
/// Tab-backgrounding can hand the engine multi-second deltas; integrating
/// those in one step blows up stiff systems, so anything larger is clamped.
pub const MAX_FRAME_DELTA: f32 = 0.05;

/// Deterministic time tracking for a simulation engine.
///
/// Tracks elapsed simulation time, the current frame's delta, a frame
/// counter, pause state, an optional fixed delta, and a time-scale
/// multiplier for slow-motion / fast-forward sliders.
#[derive(Debug, Clone)]
pub struct SimClock {
    /// Total simulated seconds.
    elapsed_secs: f32,
    /// Delta applied on the most recent frame.
    delta_secs: f32,
    /// Frames advanced since creation or reset.
    frame_count: u64,
    /// Whether time is paused.
    paused: bool,
    /// Fixed delta override for deterministic stepping (optional).
    fixed_delta: Option<f32>,
    /// Time scale multiplier (1.0 = normal speed).
    time_scale: f32,
}

impl SimClock {
    /// Create a clock at t = 0.
    pub fn new() -> Self {
        Self {
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            paused: false,
            fixed_delta: None,
            time_scale: 1.0,
        }
    }

    /// Advance by one frame of host time.
    ///
    /// The raw delta is clamped into `[0, MAX_FRAME_DELTA]`, replaced by the
    /// fixed delta when one is set, and scaled by the time-scale multiplier.
    /// Returns `(elapsed, delta)` for convenience.
    pub fn advance(&mut self, raw_dt: f32) -> (f32, f32) {
        if self.paused {
            self.delta_secs = 0.0;
            return (self.elapsed_secs, 0.0);
        }

        let clamped = if raw_dt.is_finite() {
            raw_dt.clamp(0.0, MAX_FRAME_DELTA)
        } else {
            0.0
        };
        self.delta_secs = self.fixed_delta.unwrap_or(clamped) * self.time_scale;
        self.elapsed_secs += self.delta_secs;
        self.frame_count += 1;

        (self.elapsed_secs, self.delta_secs)
    }

    /// Total simulated seconds.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Delta applied on the most recent frame.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Frames advanced since creation or reset.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Whether time is currently paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current time scale multiplier.
    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Pause time progression. While paused, `advance` applies zero delta.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume time progression.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle pause state.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Set a fixed delta for deterministic updates, or `None` to use host
    /// frame timing again.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta.filter(|d| d.is_finite() && *d >= 0.0);
    }

    /// Set the time scale multiplier.
    ///
    /// - `1.0` = normal speed
    /// - `0.5` = half speed (slow motion)
    /// - `2.0` = double speed
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = if scale.is_finite() { scale.max(0.0) } else { 1.0 };
    }

    /// Reset to t = 0, keeping time scale and fixed-delta settings.
    pub fn reset(&mut self) {
        self.elapsed_secs = 0.0;
        self.delta_secs = 0.0;
        self.frame_count = 0;
        self.paused = false;
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}
