use godot::prelude::*;

mod conversions;
mod input;
mod logger;
mod player;

pub use player::PlayerMovementController;

/// GDExtension entry point
struct FantasyExtension;

#[gdextension]
unsafe impl ExtensionLibrary for FantasyExtension {}
