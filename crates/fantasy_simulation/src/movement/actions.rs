//! Move actions и сборка направления из input
//!
//! # Coordinate System
//! Оси мира хоста (Godot-style, Y up):
//! - `strafe_right`: +X, `strafe_left`: -X
//! - `move_forward`: +Z, `move_backward`: -Z
//!
//! Вклады аддитивны и по осям независимы, поэтому порядок опроса не важен,
//! а противоположные действия гасят друг друга.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Одно из четырёх направленных действий (имена = action names в InputMap хоста)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveAction {
    StrafeRight,
    StrafeLeft,
    MoveForward,
    MoveBackward,
}

impl MoveAction {
    pub const ALL: [MoveAction; 4] = [
        MoveAction::StrafeRight,
        MoveAction::StrafeLeft,
        MoveAction::MoveForward,
        MoveAction::MoveBackward,
    ];

    /// Имя action в InputMap хоста
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveAction::StrafeRight => "strafe_right",
            MoveAction::StrafeLeft => "strafe_left",
            MoveAction::MoveForward => "move_forward",
            MoveAction::MoveBackward => "move_backward",
        }
    }

    /// Единичный вклад действия в направление
    pub fn axis(&self) -> Vec3 {
        match self {
            MoveAction::StrafeRight => Vec3::X,
            MoveAction::StrafeLeft => Vec3::NEG_X,
            MoveAction::MoveForward => Vec3::Z,
            MoveAction::MoveBackward => Vec3::NEG_Z,
        }
    }
}

/// Read-only доступ к состоянию input хоста.
///
/// Неизвестные/не назначенные действия = "не нажато".
pub trait InputQuery {
    fn is_action_pressed(&self, action: MoveAction) -> bool;
}

/// Snapshot четырёх кнопок (тесты, ECS, scripted input)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveActionState {
    pub strafe_right: bool,
    pub strafe_left: bool,
    pub move_forward: bool,
    pub move_backward: bool,
}

impl MoveActionState {
    /// Только одно действие нажато
    pub fn only(action: MoveAction) -> Self {
        let mut state = Self::default();
        state.set(action, true);
        state
    }

    pub fn set(&mut self, action: MoveAction, pressed: bool) {
        match action {
            MoveAction::StrafeRight => self.strafe_right = pressed,
            MoveAction::StrafeLeft => self.strafe_left = pressed,
            MoveAction::MoveForward => self.move_forward = pressed,
            MoveAction::MoveBackward => self.move_backward = pressed,
        }
    }

    /// Копия состояния любого InputQuery (например, для ECS компонента)
    pub fn capture<I: InputQuery + ?Sized>(input: &I) -> Self {
        let mut state = Self::default();
        for action in MoveAction::ALL {
            state.set(action, input.is_action_pressed(action));
        }
        state
    }
}

impl InputQuery for MoveActionState {
    fn is_action_pressed(&self, action: MoveAction) -> bool {
        match action {
            MoveAction::StrafeRight => self.strafe_right,
            MoveAction::StrafeLeft => self.strafe_left,
            MoveAction::MoveForward => self.move_forward,
            MoveAction::MoveBackward => self.move_backward,
        }
    }
}

/// Сырое (ненормализованное) направление из нажатых действий
pub fn accumulate_direction<I: InputQuery + ?Sized>(input: &I) -> Vec3 {
    MoveAction::ALL
        .iter()
        .filter(|action| input.is_action_pressed(**action))
        .fold(Vec3::ZERO, |direction, action| direction + action.axis())
}

/// Направление движения: нормализованное или `Vec3::ZERO`
pub fn movement_direction<I: InputQuery + ?Sized>(input: &I) -> Vec3 {
    let direction = accumulate_direction(input);
    if direction != Vec3::ZERO {
        direction.normalize()
    } else {
        direction
    }
}
