pub mod controls;
pub mod keyboard;
pub mod pointer;

pub use controls::{sync_controls, wire_mode_switch, wire_power_toggle};
pub use keyboard::wire_global_keydown;
pub use pointer::wire_pointer_handlers;
