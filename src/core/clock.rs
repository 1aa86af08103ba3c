use instant::Instant;
use std::cell::Cell;
use std::ops::ControlFlow;
use std::rc::Rc;

/// Millisecond time source shared by input stamping and frame ticks.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Monotonic milliseconds since construction.
#[derive(Clone, Copy, Debug)]
pub struct InstantClock {
    origin: Instant,
}

impl Default for InstantClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for InstantClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock. Clones share the same time cell.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

pub type TickFn = Box<dyn FnMut() -> ControlFlow<()>>;

/// Runs a tick callback repeatedly until it returns `Break`.
pub trait Scheduler {
    fn schedule(&mut self, tick: TickFn);
}

/// Deterministic scheduler: runs at most `ticks` callbacks synchronously and
/// advances `clock` by `step_ms` after each one.
pub struct FixedStepScheduler {
    clock: ManualClock,
    step_ms: f64,
    ticks: usize,
    ran: usize,
}

impl FixedStepScheduler {
    pub fn new(clock: ManualClock, step_ms: f64, ticks: usize) -> Self {
        Self {
            clock,
            step_ms,
            ticks,
            ran: 0,
        }
    }

    /// Number of callbacks executed so far.
    pub fn ran(&self) -> usize {
        self.ran
    }
}

impl Scheduler for FixedStepScheduler {
    fn schedule(&mut self, mut tick: TickFn) {
        for _ in 0..self.ticks {
            self.ran += 1;
            let flow = tick();
            self.clock.advance(self.step_ms);
            if flow.is_break() {
                break;
            }
        }
    }
}
