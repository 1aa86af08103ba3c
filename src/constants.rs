/// Element ids the page must provide, plus browser-only tuning.
///
/// Engine tunables live in `core::constants`; these only matter to the DOM glue.
pub const CANVAS_ID: &str = "plasmaCanvas";
pub const MODE_SWITCH_ID: &str = "modeSwitch";
pub const POWER_TOGGLE_ID: &str = "powerToggle";
pub const ZAP_SOUND_ID: &str = "zapSound";
pub const IDLE_HUM_ID: &str = "idleHum";

// Keyboard shortcut for the power toggle (digits 1-4 pick color modes)
pub const POWER_KEYS: [&str; 2] = ["p", "P"];
