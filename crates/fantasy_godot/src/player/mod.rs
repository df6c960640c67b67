//! Player movement (Godot сторона)
//!
//! # Архитектура
//!
//! ```text
//! Godot _physics_process(delta)
//!     ↓
//! PlayerMovementController (CharacterBody3D) - controller.rs
//!     ↓ GodotInputActions (Input singleton) + GodotCharacterBody (body + Pivot) - body.rs
//! MovementController::physics_tick (fantasy_simulation)
//!     ↓
//! set_velocity / move_and_slide / Pivot.basis
//! ```

mod body;
mod controller;

pub use controller::PlayerMovementController;
