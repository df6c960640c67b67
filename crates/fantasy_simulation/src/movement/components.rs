//! Movement компоненты для ECS (headless хост)

use bevy::prelude::*;

use super::actions::MoveActionState;
use super::controller::{MovementController, TickReport};

/// Игрок, управляемый MovementController
#[derive(Component, Debug, Clone, Default)]
pub struct PlayerMovement {
    pub controller: MovementController,
    /// Результат последнего тика (None до первого FixedUpdate)
    pub last_tick: Option<TickReport>,
}

/// Текущее состояние move actions (пишет input source: Godot bridge, scripted bot, тест)
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ActionInput(pub MoveActionState);

/// Состояние тела на стороне хоста
///
/// `velocity` — фактическая velocity после move_and_slide (floor snap может
/// обнулить Y), не путать с target velocity контроллера.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct HeadlessBody {
    pub velocity: Vec3,
    pub on_floor: bool,
}

/// Визуальный pivot (child-нода в Godot): только ориентация
#[derive(Component, Debug, Clone, Copy)]
pub struct Pivot {
    pub basis: Mat3,
}

impl Default for Pivot {
    fn default() -> Self {
        Self {
            basis: Mat3::IDENTITY,
        }
    }
}

/// Плоский пол для headless хоста (Y уровень)
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct HeadlessFloor {
    pub height: f32,
}
