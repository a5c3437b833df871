pub mod hotkey;
pub mod layout;
pub mod tooltip;
