//! Configuration: settings file and key bindings

pub mod keybinds;
pub mod settings;

pub use keybinds::KeyBindings;
pub use settings::Settings;
