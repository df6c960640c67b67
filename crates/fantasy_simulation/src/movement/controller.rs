//! MovementController — per-tick логика движения игрока
//!
//! Архитектура (inversion of control):
//! - Хост (Godot `_physics_process` / ECS FixedUpdate) вызывает `physics_tick` раз в тик
//! - Input и состояние тела приходят через трейты (`InputQuery`, `CharacterBodyHost`)
//! - Коллизии, slide и интеграция позиции — ответственность хоста (`move_and_slide`)
//!
//! Flow одного тика:
//! 1. Направление из четырёх actions (normalized или ZERO)
//! 2. Pivot смотрит вдоль направления (только если оно не ZERO)
//! 3. Горизонтальная velocity = direction × walking_speed
//! 4. В воздухе: velocity.y -= fall_acceleration × delta
//! 5. set_velocity + move_and_slide

use bevy::prelude::*;

use super::actions::{movement_direction, InputQuery};
use super::orientation::{looking_at, DEFAULT_UP};
use crate::config::MovementConfig;

/// Возможности character body хоста, нужные контроллеру.
///
/// Godot: `CharacterBody3D` + child `Pivot` (Node3D).
/// Headless: `HeadlessHost` поверх ECS компонентов.
pub trait CharacterBodyHost {
    /// Тело стоит на walkable поверхности (по результату прошлого move_and_slide)
    fn is_on_floor(&self) -> bool;

    /// Целевая velocity для следующего move_and_slide
    fn set_velocity(&mut self, velocity: Vec3);

    /// Движение с учётом коллизий (slide вдоль препятствий)
    fn move_and_slide(&mut self);

    /// Записать basis в визуальный pivot
    fn set_pivot_basis(&mut self, basis: Mat3);
}

/// Результат одного тика (для логов и тестов)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Нормализованное направление (или ZERO)
    pub direction: Vec3,
    /// Velocity, переданная хосту
    pub velocity: Vec3,
    /// is_on_floor() на момент тика
    pub grounded: bool,
    /// Basis, записанный в pivot (None = pivot не трогали)
    pub pivot_basis: Option<Mat3>,
}

/// Контроллер движения: конфиг + накопленная target velocity
///
/// Живёт столько же, сколько нода/entity. Vertical компонента
/// переживает тики (накопление падения), горизонтальная пересчитывается.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovementController {
    pub config: MovementConfig,
    target_velocity: Vec3,
}

impl MovementController {
    pub fn new(config: MovementConfig) -> Self {
        Self {
            config,
            target_velocity: Vec3::ZERO,
        }
    }

    /// Последняя velocity, отданная хосту
    pub fn target_velocity(&self) -> Vec3 {
        self.target_velocity
    }

    /// Один physics tick.
    ///
    /// `delta` — длительность тика в секундах (как её отдаёт хост).
    pub fn physics_tick<I, H>(&mut self, delta: f64, input: &I, host: &mut H) -> TickReport
    where
        I: InputQuery + ?Sized,
        H: CharacterBodyHost + ?Sized,
    {
        let direction = movement_direction(input);

        let mut pivot_basis = None;
        if direction != Vec3::ZERO {
            match looking_at(direction, DEFAULT_UP) {
                Some(basis) => {
                    host.set_pivot_basis(basis);
                    pivot_basis = Some(basis);
                }
                None => crate::log_warning(&format!(
                    "MovementController: degenerate look-at for direction {:?}, pivot unchanged",
                    direction
                )),
            }
        }

        // Ground velocity
        self.target_velocity.x = direction.x * self.config.walking_speed;
        self.target_velocity.z = direction.z * self.config.walking_speed;

        // Vertical velocity: на земле НЕ сбрасываем (если не включён reset_vertical_on_floor)
        let grounded = host.is_on_floor();
        if !grounded {
            self.target_velocity.y -= self.config.fall_acceleration * delta as f32;
        } else if self.config.reset_vertical_on_floor {
            self.target_velocity.y = 0.0;
        }

        host.set_velocity(self.target_velocity);
        host.move_and_slide();

        TickReport {
            direction,
            velocity: self.target_velocity,
            grounded,
            pivot_basis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::actions::{MoveAction, MoveActionState};
    use crate::movement::orientation::forward;

    /// Mock хоста: пишет всё, что контроллер ему отдал
    #[derive(Default)]
    struct RecordingHost {
        on_floor: bool,
        velocity: Vec3,
        pivot: Option<Mat3>,
        pivot_writes: usize,
        slides: usize,
    }

    impl CharacterBodyHost for RecordingHost {
        fn is_on_floor(&self) -> bool {
            self.on_floor
        }

        fn set_velocity(&mut self, velocity: Vec3) {
            self.velocity = velocity;
        }

        fn move_and_slide(&mut self) {
            self.slides += 1;
        }

        fn set_pivot_basis(&mut self, basis: Mat3) {
            self.pivot = Some(basis);
            self.pivot_writes += 1;
        }
    }

    const TICK: f64 = 1.0 / 60.0;

    #[test]
    fn test_forward_grounded_scenario() {
        let mut controller = MovementController::default();
        let mut host = RecordingHost {
            on_floor: true,
            ..default()
        };

        let report = controller.physics_tick(
            TICK,
            &MoveActionState::only(MoveAction::MoveForward),
            &mut host,
        );

        assert_eq!(report.velocity, Vec3::new(0.0, 0.0, 14.0));
        assert_eq!(host.velocity, report.velocity);
        assert_eq!(host.slides, 1);
        assert!(report.grounded);

        let pivot = host.pivot.expect("pivot oriented");
        assert!((forward(&pivot) - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_airborne_one_second_reaches_fall_acceleration() {
        let mut controller = MovementController::default();
        let mut host = RecordingHost::default();
        let idle = MoveActionState::default();

        let mut previous_y = controller.target_velocity().y;
        for _ in 0..60 {
            let report = controller.physics_tick(TICK, &idle, &mut host);
            let step = previous_y - report.velocity.y;
            assert!((step - 75.0 / 60.0).abs() < 1e-4, "step = {}", step);
            previous_y = report.velocity.y;
        }

        assert!((controller.target_velocity().y + 75.0).abs() < 1e-3);
        assert_eq!(host.slides, 60);
    }

    #[test]
    fn test_grounded_keeps_accumulated_vertical_velocity() {
        let mut controller = MovementController::default();
        let mut host = RecordingHost::default();
        let idle = MoveActionState::default();

        for _ in 0..10 {
            controller.physics_tick(TICK, &idle, &mut host);
        }
        let falling_y = controller.target_velocity().y;
        assert!(falling_y < 0.0);

        // Приземлились: vertical не сбрасывается и не растёт
        host.on_floor = true;
        let report = controller.physics_tick(TICK, &MoveActionState::only(MoveAction::StrafeLeft), &mut host);

        assert_eq!(report.velocity.y, falling_y);
        assert_eq!(report.velocity.x, -14.0);
    }

    #[test]
    fn test_reset_vertical_on_floor_option() {
        let mut controller = MovementController::new(MovementConfig {
            reset_vertical_on_floor: true,
            ..default()
        });
        let mut host = RecordingHost::default();
        let idle = MoveActionState::default();

        controller.physics_tick(TICK, &idle, &mut host);
        assert!(controller.target_velocity().y < 0.0);

        host.on_floor = true;
        let report = controller.physics_tick(TICK, &idle, &mut host);
        assert_eq!(report.velocity.y, 0.0);
    }

    #[test]
    fn test_zero_direction_leaves_pivot_untouched() {
        let mut controller = MovementController::default();
        let mut host = RecordingHost {
            on_floor: true,
            ..default()
        };

        controller.physics_tick(TICK, &MoveActionState::only(MoveAction::StrafeRight), &mut host);
        let oriented = host.pivot;
        assert_eq!(host.pivot_writes, 1);

        let cancelled = MoveActionState {
            move_forward: true,
            move_backward: true,
            ..default()
        };
        let report = controller.physics_tick(TICK, &cancelled, &mut host);

        assert!(report.pivot_basis.is_none());
        assert_eq!(host.pivot_writes, 1);
        assert_eq!(host.pivot, oriented);
        assert_eq!(report.velocity.x, 0.0);
        assert_eq!(report.velocity.z, 0.0);
    }

    #[test]
    fn test_horizontal_speed_never_exceeds_walking_speed() {
        let mut controller = MovementController::new(MovementConfig {
            walking_speed: 9.0,
            ..default()
        });
        let mut host = RecordingHost {
            on_floor: true,
            ..default()
        };

        for bits in 0u8..16 {
            let state = MoveActionState {
                strafe_right: bits & 1 != 0,
                strafe_left: bits & 2 != 0,
                move_forward: bits & 4 != 0,
                move_backward: bits & 8 != 0,
            };
            let report = controller.physics_tick(TICK, &state, &mut host);
            let horizontal = Vec2::new(report.velocity.x, report.velocity.z).length();
            assert!(horizontal <= 9.0 + 1e-4, "{:?} → {}", state, horizontal);
        }
    }
}
