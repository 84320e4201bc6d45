//! Picks a random activity from a weighted list defined in a JSON config file
pub mod config;
pub mod pick_tester;
pub mod picker;

pub use config::{Activity, ConfigError, Configuration, LoadError};
pub use picker::{Picker, PickerError};
