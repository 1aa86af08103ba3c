// Host-side tests for the clock and scheduler abstractions.

use plasma_web::core::{Clock, FixedStepScheduler, InstantClock, ManualClock, Scheduler};
use std::cell::Cell;
use std::ops::ControlFlow;
use std::rc::Rc;

#[test]
fn manual_clock_clones_share_time() {
    let a = ManualClock::new(100.0);
    let b = a.clone();
    a.advance(16.5);
    assert_eq!(b.now_ms(), 116.5);
    b.set(0.0);
    assert_eq!(a.now_ms(), 0.0);
}

#[test]
fn instant_clock_is_monotonic() {
    let c = InstantClock::default();
    let mut prev = c.now_ms();
    assert!(prev >= 0.0);
    for _ in 0..1000 {
        let now = c.now_ms();
        assert!(now >= prev);
        prev = now;
    }
}

#[test]
fn fixed_step_runs_requested_ticks_and_advances_clock() {
    let clock = ManualClock::new(0.0);
    let seen = Rc::new(Cell::new(Vec::new()));
    let seen_tick = seen.clone();
    let clock_tick = clock.clone();
    let mut sched = FixedStepScheduler::new(clock.clone(), 20.0, 4);
    sched.schedule(Box::new(move || {
        let mut v = seen_tick.take();
        v.push(clock_tick.now_ms());
        seen_tick.set(v);
        ControlFlow::Continue(())
    }));
    assert_eq!(sched.ran(), 4);
    assert_eq!(seen.take(), vec![0.0, 20.0, 40.0, 60.0]);
    assert_eq!(clock.now_ms(), 80.0);
}

#[test]
fn fixed_step_stops_when_tick_breaks() {
    let clock = ManualClock::new(0.0);
    let count = Rc::new(Cell::new(0));
    let count_tick = count.clone();
    let mut sched = FixedStepScheduler::new(clock, 10.0, 100);
    sched.schedule(Box::new(move || {
        count_tick.set(count_tick.get() + 1);
        if count_tick.get() == 3 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }));
    assert_eq!(count.get(), 3);
    assert_eq!(sched.ran(), 3);
}
