//! Platform-free engine for the plasma effect. Everything here builds and
//! tests on the host; the wasm front-end only supplies capabilities.

pub mod app;
pub mod audio;
pub mod clock;
pub mod color;
pub mod constants;
pub mod field;
pub mod interaction;
pub mod power;
pub mod prefs;
pub mod render_loop;
pub mod session;
pub mod surface;
pub mod tendril;

pub use app::PlasmaApp;
pub use audio::{AudioCue, Mute};
pub use clock::{Clock, FixedStepScheduler, InstantClock, ManualClock, Scheduler, TickFn};
pub use color::{color_for, mode_for_key, ColorMode, Hsl, Rgba};
pub use field::TendrilField;
pub use interaction::{idle_orbit, InteractionState};
pub use power::PowerController;
pub use prefs::{load_color_mode, save_color_mode, MemoryStore, PreferenceStore};
pub use render_loop::{drive, render_frame, LoopState};
pub use session::SessionState;
pub use surface::{DrawingSurface, Stroke};
pub use tendril::Tendril;
