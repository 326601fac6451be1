//! KPI counter animation.
//!
//! Each counter climbs from zero to its target in 100 equal steps, one step
//! per tick. Ticks are wall-clock deadlines checked by the event loop, so a
//! slow frame catches up instead of stretching the animation.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::data::{CounterId, CounterSpec};
use crate::format::counter_value;

/// Interval between animation steps
pub const TICK_INTERVAL: Duration = Duration::from_millis(20);

/// Number of steps from zero to target
const STEPS: f64 = 100.0;

/// Cancellation flag shared between a run and whoever started it
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Display slots for the counters currently laid out on screen.
///
/// A counter without a slot has nowhere to be drawn and is skipped.
#[derive(Debug, Clone, Default)]
pub struct CounterBoard {
    slots: BTreeMap<CounterId, String>,
}

impl CounterBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board with an empty slot for every given counter
    pub fn with_slots(ids: impl IntoIterator<Item = CounterId>) -> Self {
        let mut board = Self::new();
        for id in ids {
            board.attach(id);
        }
        board
    }

    /// Add a slot, keeping its text if it already exists
    pub fn attach(&mut self, id: CounterId) {
        self.slots.entry(id).or_insert_with(|| "—".to_string());
    }

    pub fn detach(&mut self, id: CounterId) {
        self.slots.remove(&id);
    }

    pub fn contains(&self, id: CounterId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn text(&self, id: CounterId) -> Option<&str> {
        self.slots.get(&id).map(String::as_str)
    }

    pub fn ids(&self) -> impl Iterator<Item = CounterId> + '_ {
        self.slots.keys().copied()
    }

    /// Write into a slot. Returns false if the slot is absent.
    fn write(&mut self, id: CounterId, text: String) -> bool {
        match self.slots.get_mut(&id) {
            Some(slot) => {
                *slot = text;
                true
            }
            None => false,
        }
    }
}

/// One in-flight counter animation
#[derive(Debug)]
struct CounterRun {
    spec: CounterSpec,
    current: f64,
    step: f64,
    next_tick: Instant,
    token: CancelToken,
}

impl CounterRun {
    fn display(&self) -> String {
        counter_value(self.current, self.spec.format, self.spec.prefix, self.spec.suffix)
    }

    /// Apply one step. Returns true once the target has been reached.
    fn step(&mut self) -> bool {
        self.current += self.step;
        if self.current >= self.spec.target {
            self.current = self.spec.target;
            return true;
        }
        false
    }
}

/// Drives counters from zero to their targets
#[derive(Debug)]
pub struct CounterAnimator {
    runs: HashMap<CounterId, CounterRun>,
    interval: Duration,
}

impl Default for CounterAnimator {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl CounterAnimator {
    pub fn new(interval: Duration) -> Self {
        CounterAnimator {
            runs: HashMap::new(),
            // A zero interval would never advance the deadline
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    /// Start (or restart) the animation of every counter that has a slot.
    ///
    /// Any run already in flight for the same counter is cancelled first.
    /// Returns the tokens of the runs started, in spec order.
    pub fn animate(
        &mut self,
        specs: &[CounterSpec],
        board: &mut CounterBoard,
        now: Instant,
    ) -> Vec<(CounterId, CancelToken)> {
        let mut started = Vec::new();

        for spec in specs {
            if !board.contains(spec.id) {
                continue;
            }

            if let Some(previous) = self.runs.remove(&spec.id) {
                previous.token.cancel();
                debug!(counter = ?spec.id, "cancelled in-flight counter run");
            }

            let run = CounterRun {
                spec: *spec,
                current: 0.0,
                step: spec.target / STEPS,
                next_tick: now + self.interval,
                token: CancelToken::new(),
            };
            board.write(spec.id, run.display());
            started.push((spec.id, run.token.clone()));
            self.runs.insert(spec.id, run);
        }

        started
    }

    /// Apply every tick whose deadline is at or before `now`
    pub fn advance(&mut self, board: &mut CounterBoard, now: Instant) {
        let interval = self.interval;

        self.runs.retain(|id, run| {
            if run.token.is_cancelled() {
                return false;
            }

            while run.next_tick <= now {
                let finished = run.step();
                if !board.write(*id, run.display()) {
                    // Slot went away mid-run
                    run.token.cancel();
                    return false;
                }
                if finished {
                    return false;
                }
                run.next_tick += interval;
            }
            true
        });
    }

    /// True while any counter is still animating
    pub fn is_animating(&self) -> bool {
        !self.runs.is_empty()
    }

    #[allow(dead_code)] // Used in tests
    pub fn is_running(&self, id: CounterId) -> bool {
        self.runs.contains_key(&id)
    }
}
