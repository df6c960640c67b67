//! GodotInputActions — InputQuery поверх Godot `Input` singleton
//!
//! Action names (strafe_right, strafe_left, move_forward, move_backward)
//! настраиваются в InputMap проекта. Не назначенный action = "не нажато".

use fantasy_simulation::{InputQuery, MoveAction};
use godot::classes::Input;
use godot::prelude::*;

/// Читает InputMap actions через Input::singleton()
pub struct GodotInputActions {
    input: Gd<Input>,
}

impl GodotInputActions {
    pub fn new() -> Self {
        Self {
            input: Input::singleton(),
        }
    }
}

impl InputQuery for GodotInputActions {
    fn is_action_pressed(&self, action: MoveAction) -> bool {
        self.input
            .is_action_pressed(&StringName::from(action.as_str()))
    }
}
