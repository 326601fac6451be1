//! Simulated data refresh: a short spin, then the counters replay.

use std::time::{Duration, Instant};

/// How long the refresh indicator spins
pub const SPIN_DURATION: Duration = Duration::from_millis(1000);

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const SPINNER_FRAME_TIME: Duration = Duration::from_millis(125);

#[derive(Debug, Default)]
pub struct RefreshState {
    spin: Option<(Instant, Instant)>, // (started, deadline)
}

impl RefreshState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin spinning. A refresh already in progress has its deadline pushed out.
    pub fn start(&mut self, now: Instant) {
        let started = self.spin.map(|(s, _)| s).unwrap_or(now);
        self.spin = Some((started, now + SPIN_DURATION));
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    /// Returns true exactly once, when the spin completes
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.spin {
            Some((_, deadline)) if now >= deadline => {
                self.spin = None;
                true
            }
            _ => false,
        }
    }

    /// Spinner glyph for the current frame, if spinning
    pub fn frame(&self, now: Instant) -> Option<char> {
        let (started, _) = self.spin?;
        let elapsed = now.saturating_duration_since(started).as_millis();
        let idx = (elapsed / SPINNER_FRAME_TIME.as_millis()) as usize % SPINNER_FRAMES.len();
        Some(SPINNER_FRAMES[idx])
    }
}
