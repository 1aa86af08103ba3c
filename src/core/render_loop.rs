use super::app::PlasmaApp;
use super::audio::AudioCue;
use super::clock::{Clock, Scheduler};
use super::color::Rgba;
use super::constants::TRAIL_ALPHA;
use super::field::TendrilField;
use super::prefs::PreferenceStore;
use super::session::SessionState;
use super::surface::DrawingSurface;
use glam::DVec2;
use rand::Rng;
use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

/// Mirrors the power flag: a paused loop keeps being scheduled but draws nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Paused,
}

impl LoopState {
    #[inline]
    pub fn from_power(on: bool) -> Self {
        if on {
            LoopState::Running
        } else {
            LoopState::Paused
        }
    }
}

/// One scheduler tick. The translucent black fill goes down before any
/// stroke so earlier frames fade into trails instead of being erased.
pub fn render_frame<S, R>(
    session: &SessionState,
    field: &mut TendrilField,
    rng: &mut R,
    surface: &mut S,
    extent: DVec2,
    now_ms: f64,
) -> LoopState
where
    S: DrawingSurface + ?Sized,
    R: Rng + ?Sized,
{
    let state = LoopState::from_power(session.power.is_on());
    if state == LoopState::Paused {
        return state;
    }

    surface.fill_rect(DVec2::ZERO, extent, Rgba::black(TRAIL_ALPHA));
    let target = session.interaction.current_target(now_ms, field.center());
    field.update_and_draw(target, session.mode(), rng, surface);
    state
}

/// Hand the app's frame callback to `scheduler`. The callback never breaks;
/// pausing is a flag check inside `render_frame`.
pub fn drive<Sch, D, A, P, C>(scheduler: &mut Sch, app: Rc<RefCell<PlasmaApp<D, A, P, C>>>)
where
    Sch: Scheduler + ?Sized,
    D: DrawingSurface + 'static,
    A: AudioCue + 'static,
    P: PreferenceStore + 'static,
    C: Clock + 'static,
{
    scheduler.schedule(Box::new(move || {
        app.borrow_mut().frame();
        ControlFlow::Continue(())
    }));
}
