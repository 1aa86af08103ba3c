//! The assembled effect: session state, tendril field and capabilities under
//! one owner.
//!
//! Event handlers and frame ticks both go through `&mut PlasmaApp`, so the
//! browser front-end only needs a single `Rc<RefCell<PlasmaApp<..>>>`.

use super::audio::AudioCue;
use super::clock::Clock;
use super::color::ColorMode;
use super::constants::AMBIENT_VOLUME;
use super::field::TendrilField;
use super::prefs::{load_color_mode, PreferenceStore};
use super::render_loop::{render_frame, LoopState};
use super::session::SessionState;
use super::surface::DrawingSurface;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct PlasmaApp<D, A, P, C> {
    session: SessionState,
    field: TendrilField,
    rng: StdRng,
    extent: DVec2,
    surface: D,
    audio: A,
    prefs: P,
    clock: C,
    frames: u64,
}

impl<D, A, P, C> PlasmaApp<D, A, P, C>
where
    D: DrawingSurface,
    A: AudioCue,
    P: PreferenceStore,
    C: Clock,
{
    /// Read the surface size once, restore the saved mode, seed the tendrils
    /// and start the ambient hum. Powered on from the first frame.
    pub fn start(surface: D, mut audio: A, prefs: P, clock: C, seed: u64) -> Self {
        let extent = surface.size();
        let center = extent * 0.5;
        let mode = load_color_mode(&prefs);
        let mut rng = StdRng::seed_from_u64(seed);
        let field = TendrilField::new(center, &mut rng);
        let session = SessionState::new(center, mode, clock.now_ms());

        audio.set_hum_volume(AMBIENT_VOLUME);
        audio.play_hum();

        log::info!(
            "[plasma] extent={:.0}x{:.0} center=({:.1},{:.1}) mode={} tendrils={}",
            extent.x,
            extent.y,
            center.x,
            center.y,
            mode.name(),
            field.tendrils().len()
        );

        Self {
            session,
            field,
            rng,
            extent,
            surface,
            audio,
            prefs,
            clock,
            frames: 0,
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        let now = self.clock.now_ms();
        self.session
            .pointer_moved(DVec2::new(x, y), now, &mut self.audio);
    }

    /// Selector value from the UI. Unknown values select rainbow.
    pub fn select_mode(&mut self, name: &str) -> ColorMode {
        let mode = ColorMode::from_name(name);
        self.set_mode(mode);
        mode
    }

    pub fn set_mode(&mut self, mode: ColorMode) {
        self.session.set_mode(mode, &mut self.prefs);
    }

    pub fn toggle_power(&mut self) -> bool {
        self.session
            .power
            .toggle(&mut self.audio, &mut self.surface)
    }

    pub fn power_label(&self) -> &'static str {
        self.session.power.label()
    }

    pub fn frame(&mut self) -> LoopState {
        let now = self.clock.now_ms();
        let state = render_frame(
            &self.session,
            &mut self.field,
            &mut self.rng,
            &mut self.surface,
            self.extent,
            now,
        );
        if state == LoopState::Running {
            self.frames += 1;
            if self.frames == 1 {
                log::debug!("[plasma] first frame at {:.1}ms", now);
            }
        }
        state
    }

    pub fn mode(&self) -> ColorMode {
        self.session.mode()
    }
    pub fn is_powered_on(&self) -> bool {
        self.session.power.is_on()
    }
    pub fn center(&self) -> DVec2 {
        self.field.center()
    }
    /// Frames that actually drew something.
    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }
    pub fn session(&self) -> &SessionState {
        &self.session
    }
    pub fn field(&self) -> &TendrilField {
        &self.field
    }
    pub fn surface(&self) -> &D {
        &self.surface
    }
    pub fn audio(&self) -> &A {
        &self.audio
    }
    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    /// Hand back the preference store, e.g. to reload it in a fresh session.
    pub fn into_prefs(self) -> P {
        self.prefs
    }
}
