//! PlayerMovementController - CharacterBody3D игрока (GDExtension класс)
//!
//! Setup в сцене:
//! - Корень: PlayerMovementController (вместо CharacterBody3D)
//! - Child: `Pivot` (Node3D) с визуалом, поворачивается по направлению движения
//! - InputMap: strafe_right, strafe_left, move_forward, move_backward

use fantasy_simulation::{MovementConfig, MovementController};
use godot::classes::{CharacterBody3D, ICharacterBody3D, Node3D};
use godot::prelude::*;

use super::body::GodotCharacterBody;
use crate::input::GodotInputActions;
use crate::logger::GodotLogger;

/// Игрок: WASD-style движение + гравитация через MovementController
#[derive(GodotClass)]
#[class(base=CharacterBody3D)]
pub struct PlayerMovementController {
    /// How fast the player moves in meters per second
    #[export]
    walking_speed: f32,

    /// The downward acceleration when in the air, in meters per second squared
    #[export]
    fall_acceleration: f32,

    /// Обнулять vertical velocity на земле (по умолчанию выключено)
    #[export]
    reset_vertical_on_floor: bool,

    /// Путь к визуальному pivot'у (относительно этой ноды)
    #[export]
    pivot_path: NodePath,

    // Кэш pivot ноды (резолвится в ready)
    pivot: Option<Gd<Node3D>>,

    controller: MovementController,

    base: Base<CharacterBody3D>,
}

#[godot_api]
impl ICharacterBody3D for PlayerMovementController {
    fn init(base: Base<CharacterBody3D>) -> Self {
        let config = MovementConfig::default();

        Self {
            walking_speed: config.walking_speed,
            fall_acceleration: config.fall_acceleration,
            reset_vertical_on_floor: config.reset_vertical_on_floor,
            pivot_path: NodePath::from("Pivot"),
            pivot: None,
            controller: MovementController::new(config),
            base,
        }
    }

    fn ready(&mut self) {
        fantasy_simulation::set_logger_if_needed(Box::new(GodotLogger));

        let pivot = self.base().try_get_node_as::<Node3D>(&self.pivot_path);
        if pivot.is_none() {
            fantasy_simulation::log_error(&format!(
                "PlayerMovementController: pivot node not found at path: {} (orientation disabled)",
                self.pivot_path
            ));
        }
        self.pivot = pivot;

        fantasy_simulation::log(&format!(
            "PlayerMovementController ready (walking_speed: {}, fall_acceleration: {})",
            self.walking_speed, self.fall_acceleration
        ));
    }

    fn physics_process(&mut self, delta: f64) {
        // Editor/inspector могли поменять значения — синкаем каждый тик
        self.controller.config = self.sync_config();

        let input = GodotInputActions::new();
        let mut host = GodotCharacterBody {
            body: self.base().clone(),
            pivot: self.pivot.clone(),
        };

        self.controller.physics_tick(delta, &input, &mut host);
    }
}

impl PlayerMovementController {
    /// Собрать MovementConfig из exported properties.
    ///
    /// Невалидные значения (NaN, < 0) зажимаются и записываются обратно,
    /// предупреждение логируется один раз на изменение.
    fn sync_config(&mut self) -> MovementConfig {
        let raw = MovementConfig {
            walking_speed: self.walking_speed,
            fall_acceleration: self.fall_acceleration,
            reset_vertical_on_floor: self.reset_vertical_on_floor,
        };

        if let Err(reason) = raw.validate() {
            let sanitized = raw.sanitized();
            fantasy_simulation::log_warning(&format!(
                "PlayerMovementController: {} (clamped to walking_speed: {}, fall_acceleration: {})",
                reason, sanitized.walking_speed, sanitized.fall_acceleration
            ));
            self.walking_speed = sanitized.walking_speed;
            self.fall_acceleration = sanitized.fall_acceleration;
            return sanitized;
        }

        raw
    }
}
