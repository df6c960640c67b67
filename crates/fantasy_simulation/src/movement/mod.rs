//! Movement domain — управление движением игрока
//!
//! Содержит:
//! - `actions` — MoveAction, InputQuery, сборка направления
//! - `orientation` — look-at basis для pivot'а
//! - `controller` — MovementController (per-tick логика) + CharacterBodyHost
//! - `components` / `systems` — headless ECS хост (FixedUpdate)

pub mod actions;
pub mod components;
pub mod controller;
pub mod orientation;
pub mod systems;

// Re-export всего публичного API
pub use actions::*;
pub use components::*;
pub use controller::*;
pub use orientation::{forward, looking_at, DEFAULT_UP};
pub use systems::*;
